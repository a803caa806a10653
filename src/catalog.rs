//! Read-only puppy catalog loaded once at start-up.
//!
//! The bundled listing lives in `data/puppies.json` and is compiled into the
//! binary. It is validated on load: ids must be unique and every price must be
//! positive (the latter is enforced by [`Price`](crate::domain::types::Price)).

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::filter::{FilterCriteria, filter_puppies};
use crate::domain::puppy::PuppyRecord;

const BUNDLED_CATALOG: &str = include_str!("../data/puppies.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate puppy id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    version: u32,
    puppies: Vec<PuppyRecord>,
}

/// Ordered, immutable collection of puppy records.
#[derive(Clone, Debug)]
pub struct Catalog {
    version: u32,
    puppies: Vec<PuppyRecord>,
}

impl Catalog {
    /// Parses the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parses and validates a catalog document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.version, file.puppies)
    }

    pub fn new(version: u32, puppies: Vec<PuppyRecord>) -> Result<Self, CatalogError> {
        {
            let mut seen = HashSet::new();
            for puppy in &puppies {
                if !seen.insert(puppy.id.as_str()) {
                    return Err(CatalogError::DuplicateId(puppy.id.to_string()));
                }
            }
        }
        Ok(Self { version, puppies })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn puppies(&self) -> &[PuppyRecord] {
        &self.puppies
    }

    pub fn len(&self) -> usize {
        self.puppies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puppies.is_empty()
    }

    /// Finds a record by id; a miss is the "no selection" state.
    pub fn find(&self, id: &str) -> Option<&PuppyRecord> {
        let id = id.trim();
        self.puppies.iter().find(|puppy| puppy.id.as_str() == id)
    }

    /// Records matching `criteria`, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&PuppyRecord> {
        filter_puppies(&self.puppies, criteria)
    }

    /// Distinct breeds in order of first appearance.
    pub fn breeds(&self) -> Vec<&str> {
        distinct(self.puppies.iter().map(|puppy| puppy.breed.as_str()))
    }

    /// Distinct genders in order of first appearance.
    pub fn genders(&self) -> Vec<&str> {
        distinct(self.puppies.iter().map(|puppy| puppy.gender.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}
