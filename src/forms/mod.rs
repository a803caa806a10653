//! Form and query-string definitions backing the storefront events.

use serde::Serialize;
use thiserror::Error;

pub mod filter;
pub mod order;

/// A single invalid form field with the message shown next to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid fields: {}", field_names(.0))]
    InvalidFields(Vec<FieldError>),

    #[error("malformed form payload: {0}")]
    Malformed(String),
}

impl FormError {
    /// Invalid fields in form order; empty for malformed payloads.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidFields(fields) => fields,
            Self::Malformed(_) => &[],
        }
    }

    /// The field that should receive focus.
    pub fn first_invalid(&self) -> Option<&'static str> {
        self.field_errors().first().map(|error| error.field)
    }
}

fn field_names(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|error| error.field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decodes an `application/x-www-form-urlencoded` payload.
pub(crate) fn decode<'de, T: serde::Deserialize<'de>>(payload: &'de str) -> Result<T, FormError> {
    let payload = payload.trim().trim_start_matches('?');
    serde_html_form::from_str(payload).map_err(|err| FormError::Malformed(err.to_string()))
}
