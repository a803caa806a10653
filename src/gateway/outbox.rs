//! Append-only JSON Lines outbox.
//!
//! Each submission becomes one line in the outbox file, to be picked up by
//! whatever forwards orders to the adoption team. The file is never read back.

use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::order::OrderSubmission;
use crate::gateway::OrderGateway;
use crate::gateway::errors::GatewayResult;

#[derive(Clone, Debug)]
pub struct JsonlOutbox {
    path: PathBuf,
}

impl JsonlOutbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderGateway for JsonlOutbox {
    fn submit(&self, submission: &OrderSubmission) -> GatewayResult<()> {
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        log::info!(
            "Queued order {} for {} in {}",
            submission.reference,
            submission.puppy_id,
            self.path.display()
        );
        Ok(())
    }
}
