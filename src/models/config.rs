//! Configuration model loaded from external sources.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the storefront session and the binary.
pub struct AppConfig {
    pub site_name: String,
    /// Glob handed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    pub items_per_page: usize,
    pub debounce_ms: u64,
    pub outbox_path: PathBuf,
    pub currency_symbol: String,
}

impl AppConfig {
    /// Layers `{dir}/default.yaml`, optional `{dir}/{app_env}.yaml` and `APP_*` variables.
    pub fn load(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("site_name", "Puppy Shop")?
            .set_default("templates_dir", "templates/**/*")?
            .set_default("items_per_page", 10)?
            .set_default("debounce_ms", 300)?
            .set_default("outbox_path", "var/outbox.jsonl")?
            .set_default("currency_symbol", "$")?
            .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
            .add_source(File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
