//! Filter bar and page navigation inputs.

use serde::Deserialize;

use crate::domain::filter::{Criterion, FilterCriteria};
use crate::forms::{FormError, decode};

/// Raw filter selections as submitted by the filter bar.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
}

impl FilterForm {
    /// Parses `breed=…&gender=…&age=…`; missing keys mean "all".
    pub fn parse(payload: &str) -> Result<Self, FormError> {
        decode(payload)
    }
}

impl From<&FilterForm> for FilterCriteria {
    fn from(form: &FilterForm) -> Self {
        FilterCriteria::new(
            Criterion::from_input(form.breed.as_deref()),
            Criterion::from_input(form.gender.as_deref()),
            Criterion::from_input(form.age.as_deref()),
        )
    }
}

/// Puppy selection passed along with the order link (`?id=…`).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SelectionQuery {
    pub id: Option<String>,
}

impl SelectionQuery {
    pub fn parse(payload: &str) -> Result<Self, FormError> {
        decode(payload)
    }

    /// The trimmed id, `None` when absent or blank.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}
