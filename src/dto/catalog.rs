//! DTOs shaped for the catalog template.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::filter::{AgeBucket, FilterCriteria};
use crate::domain::puppy::PuppyRecord;
use crate::pagination::Paginated;

/// Everything a puppy card shows.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PuppyCard {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub age_weeks: u32,
    pub price: Decimal,
    pub description: String,
    pub vaccinations: String,
    pub image: String,
    /// Relative link to the order page for this puppy.
    pub order_link: String,
}

impl From<&PuppyRecord> for PuppyCard {
    fn from(puppy: &PuppyRecord) -> Self {
        Self {
            id: puppy.id.to_string(),
            name: puppy.name.clone(),
            breed: puppy.breed.clone(),
            gender: puppy.gender.clone(),
            age: puppy.age.clone(),
            age_weeks: puppy.age_in_weeks(),
            price: puppy.price.amount(),
            description: puppy.description.clone(),
            vaccinations: puppy.vaccinations.clone(),
            image: puppy.image.clone(),
            order_link: format!("order.html?id={}", puppy.id),
        }
    }
}

/// Choices offered by the filter bar.
#[derive(Clone, Debug, Serialize)]
pub struct FilterOptions {
    pub breeds: Vec<String>,
    pub genders: Vec<String>,
    pub age_buckets: Vec<AgeBucket>,
}

/// Currently selected filter values, `None` meaning "all".
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct SelectedFilters {
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
}

impl From<&FilterCriteria> for SelectedFilters {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            breed: criteria.breed.selected().map(str::to_string),
            gender: criteria.gender.selected().map(str::to_string),
            age: criteria.age_bucket().map(|bucket| bucket.name.to_string()),
        }
    }
}

/// Data required to render the catalog page.
#[derive(Debug, Serialize)]
pub struct CatalogPageData {
    pub puppies: Paginated<PuppyCard>,
    pub filters: FilterOptions,
    pub selected: SelectedFilters,
    /// Set when the filters exclude every puppy.
    pub no_results: bool,
}
