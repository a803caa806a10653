//! Catalog filtering by breed, gender and age bucket.
//!
//! All predicates are combined with logical AND and the catalog order is kept.
//! Filtering never fails: an empty result is the "no results" state.

use serde::Serialize;

use crate::domain::age::parse_age_weeks;
use crate::domain::puppy::PuppyRecord;

/// Single filter dimension: either a wildcard or an exact value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Criterion {
    #[default]
    Any,
    Exactly(String),
}

impl Criterion {
    /// Builds a criterion from raw selection input; empty and `all` mean wildcard.
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Any,
            Some(v) if v.eq_ignore_ascii_case("all") => Self::Any,
            Some(v) => Self::Exactly(v.to_string()),
        }
    }

    /// Case-sensitive equality, wildcard matches everything.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => expected == value,
        }
    }

    /// The selected value, `None` for the wildcard.
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::Exactly(value) => Some(value),
        }
    }
}

/// Named age range, bounds in weeks, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub name: &'static str,
    pub label: &'static str,
    pub min_weeks: u32,
    pub max_weeks: u32,
}

impl AgeBucket {
    pub fn contains(&self, weeks: u32) -> bool {
        (self.min_weeks..=self.max_weeks).contains(&weeks)
    }
}

/// Buckets offered in the age filter, in display order.
pub const AGE_BUCKETS: &[AgeBucket] = &[
    AgeBucket {
        name: "8-12 weeks",
        label: "8–12 weeks",
        min_weeks: 8,
        max_weeks: 12,
    },
    AgeBucket {
        name: "12-16 weeks",
        label: "12–16 weeks",
        min_weeks: 12,
        max_weeks: 16,
    },
    AgeBucket {
        name: "3-6 months",
        label: "3–6 months",
        min_weeks: 12,
        max_weeks: 24,
    },
    AgeBucket {
        name: "6-12 months",
        label: "6–12 months",
        min_weeks: 24,
        max_weeks: 48,
    },
];

/// Looks up a bucket by name, accepting en dash and hyphen spellings.
pub fn find_age_bucket(name: &str) -> Option<&'static AgeBucket> {
    let normalized = name.trim().replace('–', "-").to_lowercase();
    AGE_BUCKETS.iter().find(|bucket| bucket.name == normalized)
}

/// Independent predicates applied to the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub breed: Criterion,
    pub gender: Criterion,
    /// Canonical bucket name; `new` turns unknown names into the wildcard.
    pub age: Criterion,
}

impl FilterCriteria {
    /// Builds criteria, resolving the age selection to a canonical bucket name.
    ///
    /// An unknown bucket name is reported once here and then behaves like the
    /// wildcard.
    pub fn new(breed: Criterion, gender: Criterion, age: Criterion) -> Self {
        let age = match age.selected() {
            None => Criterion::Any,
            Some(name) => match find_age_bucket(name) {
                Some(bucket) => Criterion::Exactly(bucket.name.to_string()),
                None => {
                    log::warn!("Unknown age bucket {name:?}, matching all ages");
                    Criterion::Any
                }
            },
        };
        Self { breed, gender, age }
    }

    /// Resolves the age criterion to a bucket, `None` meaning "match all ages".
    pub fn age_bucket(&self) -> Option<&'static AgeBucket> {
        self.age.selected().and_then(find_age_bucket)
    }

    pub fn is_wildcard(&self) -> bool {
        self.breed == Criterion::Any && self.gender == Criterion::Any && self.age == Criterion::Any
    }

    pub fn matches(&self, puppy: &PuppyRecord) -> bool {
        self.matches_with_bucket(puppy, self.age_bucket())
    }

    fn matches_with_bucket(&self, puppy: &PuppyRecord, bucket: Option<&AgeBucket>) -> bool {
        self.breed.matches(&puppy.breed)
            && self.gender.matches(&puppy.gender)
            && bucket.is_none_or(|bucket| bucket.contains(parse_age_weeks(Some(&puppy.age))))
    }
}

/// Returns the records satisfying every active predicate, in their original order.
pub fn filter_puppies<'a, I>(puppies: I, criteria: &FilterCriteria) -> Vec<&'a PuppyRecord>
where
    I: IntoIterator<Item = &'a PuppyRecord>,
{
    let bucket = criteria.age_bucket();
    puppies
        .into_iter()
        .filter(|puppy| criteria.matches_with_bucket(puppy, bucket))
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::types::{Price, PuppyId};

    fn puppy(id: &str, breed: &str, gender: &str, age: &str) -> PuppyRecord {
        PuppyRecord {
            id: PuppyId::new(id).unwrap(),
            name: id.to_string(),
            breed: breed.to_string(),
            gender: gender.to_string(),
            age: age.to_string(),
            price: Price::new(Decimal::new(1000, 0)).unwrap(),
            description: String::new(),
            vaccinations: String::new(),
            image: String::new(),
        }
    }

    fn sample() -> Vec<PuppyRecord> {
        vec![
            puppy("a", "Cane Corso", "Female", "10 weeks"),
            puppy("b", "Cane Corso", "Male", "3 months"),
            puppy("c", "Boxer", "Female", "6 months"),
            puppy("d", "Cane Corso", "Female", "12 weeks"),
            puppy("e", "Boxer", "Male", "unknown"),
        ]
    }

    fn ids(puppies: &[&PuppyRecord]) -> Vec<String> {
        puppies.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn wildcard_returns_everything_in_order() {
        let catalog = sample();
        let result = filter_puppies(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&result), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn predicates_are_combined_with_and() {
        let catalog = sample();
        let criteria = FilterCriteria::new(
            Criterion::from_input(Some("Cane Corso")),
            Criterion::from_input(Some("Female")),
            Criterion::Any,
        );
        assert_eq!(ids(&filter_puppies(&catalog, &criteria)), vec!["a", "d"]);
    }

    #[test]
    fn equality_is_case_sensitive() {
        let catalog = sample();
        let criteria = FilterCriteria::new(
            Criterion::from_input(Some("cane corso")),
            Criterion::Any,
            Criterion::Any,
        );
        assert!(filter_puppies(&catalog, &criteria).is_empty());
    }

    #[test]
    fn age_bucket_bounds_are_inclusive() {
        let catalog = sample();
        let criteria = FilterCriteria::new(
            Criterion::Any,
            Criterion::Any,
            Criterion::from_input(Some("8–12 weeks")),
        );
        assert_eq!(ids(&filter_puppies(&catalog, &criteria)), vec!["a", "b", "d"]);

        let criteria = FilterCriteria::new(
            Criterion::Any,
            Criterion::Any,
            Criterion::from_input(Some("3-6 months")),
        );
        assert_eq!(ids(&filter_puppies(&catalog, &criteria)), vec!["b", "c", "d"]);
    }

    #[test]
    fn unknown_age_bucket_fails_open() {
        let catalog = sample();
        let unknown = FilterCriteria::new(
            Criterion::Any,
            Criterion::Any,
            Criterion::from_input(Some("teenagers")),
        );
        assert_eq!(unknown.age, Criterion::Any);
        assert_eq!(
            filter_puppies(&catalog, &unknown),
            filter_puppies(&catalog, &FilterCriteria::default())
        );
    }

    #[test]
    fn age_selection_is_stored_under_its_canonical_name() {
        let criteria = FilterCriteria::new(
            Criterion::Any,
            Criterion::Any,
            Criterion::from_input(Some(" 3–6 Months ")),
        );
        assert_eq!(criteria.age, Criterion::Exactly("3-6 months".to_string()));
        assert_eq!(criteria.age_bucket().map(|b| b.max_weeks), Some(24));
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample();
        let criteria = FilterCriteria::new(
            Criterion::Any,
            Criterion::from_input(Some("Male")),
            Criterion::from_input(Some("3-6 months")),
        );
        let once = filter_puppies(&catalog, &criteria);
        let twice = filter_puppies(once.iter().copied(), &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn all_and_blank_inputs_are_wildcards() {
        assert_eq!(Criterion::from_input(None), Criterion::Any);
        assert_eq!(Criterion::from_input(Some("  ")), Criterion::Any);
        assert_eq!(Criterion::from_input(Some("All")), Criterion::Any);
        assert!(
            FilterCriteria::new(
                Criterion::from_input(Some("all")),
                Criterion::Any,
                Criterion::Any
            )
            .is_wildcard()
        );
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let catalog = sample();
        let criteria = FilterCriteria::new(
            Criterion::from_input(Some("Poodle")),
            Criterion::Any,
            Criterion::Any,
        );
        assert!(filter_puppies(&catalog, &criteria).is_empty());
    }
}
