use serde::{Deserialize, Serialize};

use crate::domain::age::parse_age_weeks;
use crate::domain::types::{Price, PuppyId};

/// A single adoptable puppy as listed in the catalog.
///
/// Records are loaded once at start-up and never mutated afterwards. `breed`
/// and `gender` double as filter dimensions; their vocabulary is not enforced.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuppyRecord {
    pub id: PuppyId,
    pub name: String,
    pub breed: String,
    pub gender: String,
    /// Free text such as `"10 weeks"` or `"4 months"`.
    pub age: String,
    pub price: Price,
    pub description: String,
    pub vaccinations: String,
    pub image: String,
}

impl PuppyRecord {
    /// Age normalized to whole weeks, `0` when the text cannot be parsed.
    pub fn age_in_weeks(&self) -> u32 {
        parse_age_weeks(Some(&self.age))
    }
}
