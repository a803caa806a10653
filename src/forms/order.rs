//! Adoption order form.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::order::{CustomerDetails, DeliveryOption};
use crate::domain::types::{
    City, CustomerEmail, CustomerName, OrderNotes, PhoneNumber, PostalCode, PuppyId, Region,
    StreetAddress,
};
use crate::forms::{FieldError, FormError, decode};

/// Fields in the order they appear on the page, with their error messages.
const ORDER_FIELDS: &[(&str, &str)] = &[
    ("puppy_id", "Please choose a puppy to adopt"),
    ("delivery", "Please choose a delivery option"),
    ("name", "Please enter your full name"),
    ("email", "Please enter a valid email address"),
    ("phone", "Please enter a valid phone number, including country code"),
    ("address", "Please enter your street address"),
    ("city", "Please enter your city"),
    ("state", "Please enter your state"),
    ("zip", "Please enter your zip code"),
    ("terms", "Please accept the adoption terms"),
];

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    PhoneNumber::new(phone)
        .map(|_| ())
        .map_err(|_| ValidationError::new("phone"))
}

fn validate_delivery(delivery: &str) -> Result<(), ValidationError> {
    DeliveryOption::parse_lenient(delivery)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("delivery"))
}

fn validate_terms(terms: &str) -> Result<(), ValidationError> {
    if terms.trim().is_empty() {
        return Err(ValidationError::new("terms"));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
/// Form data submitted to place an adoption order.
pub struct OrderForm {
    /// Identifier of the selected puppy.
    #[validate(length(min = 1))]
    pub puppy_id: String,
    /// Wire name of the chosen delivery option.
    #[validate(custom(function = "validate_delivery"))]
    pub delivery: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 3, max = 10))]
    pub zip: String,
    pub notes: String,
    /// Checkbox; present (usually as `on`) only when ticked.
    #[validate(required, custom(function = "validate_terms"))]
    pub terms: Option<String>,
}

/// Delivery selector change, `option=<wire name>`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeliveryForm {
    pub option: Option<String>,
}

impl DeliveryForm {
    pub fn parse(payload: &str) -> Result<Self, FormError> {
        decode(payload)
    }

    /// The chosen option; blank or unknown input means no delivery is selected.
    pub fn option(&self) -> Option<DeliveryOption> {
        DeliveryOption::from_selection(self.option.as_deref().unwrap_or_default())
    }
}

/// Order form contents after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidOrder {
    pub puppy_id: PuppyId,
    pub delivery: DeliveryOption,
    pub customer: CustomerDetails,
}

impl OrderForm {
    pub fn parse(payload: &str) -> Result<Self, FormError> {
        decode(payload)
    }

    /// Checks every required field, reporting invalid ones in page order.
    pub fn validate_order(&self) -> Result<ValidOrder, FormError> {
        let mut invalid: HashSet<String> = match self.validate() {
            Ok(()) => HashSet::new(),
            Err(errors) => errors.field_errors().keys().map(|k| k.to_string()).collect(),
        };

        let puppy_id = PuppyId::new(self.puppy_id.as_str()).ok();
        let delivery = DeliveryOption::parse_lenient(&self.delivery);
        let name = CustomerName::new(self.name.as_str()).ok();
        let email = CustomerEmail::new(self.email.as_str()).ok();
        let phone = PhoneNumber::new(self.phone.as_str()).ok();
        let address = StreetAddress::new(self.address.as_str()).ok();
        let city = City::new(self.city.as_str()).ok();
        let region = Region::new(self.state.as_str()).ok();
        let postal_code = PostalCode::new(self.zip.as_str()).ok();

        for (field, missing) in [
            ("puppy_id", puppy_id.is_none()),
            ("delivery", delivery.is_none()),
            ("name", name.is_none()),
            ("email", email.is_none()),
            ("phone", phone.is_none()),
            ("address", address.is_none()),
            ("city", city.is_none()),
            ("state", region.is_none()),
            ("zip", postal_code.is_none()),
        ] {
            if missing {
                invalid.insert(field.to_string());
            }
        }

        let (
            Some(puppy_id),
            Some(delivery),
            Some(name),
            Some(email),
            Some(phone),
            Some(address),
            Some(city),
            Some(region),
            Some(postal_code),
        ) = (
            puppy_id,
            delivery,
            name,
            email,
            phone,
            address,
            city,
            region,
            postal_code,
        )
        else {
            return Err(invalid_fields(&invalid));
        };

        if !invalid.is_empty() {
            return Err(invalid_fields(&invalid));
        }

        Ok(ValidOrder {
            puppy_id,
            delivery,
            customer: CustomerDetails {
                name,
                email,
                phone,
                address,
                city,
                region,
                postal_code,
                notes: OrderNotes::new(self.notes.as_str()),
            },
        })
    }
}

fn invalid_fields(invalid: &HashSet<String>) -> FormError {
    let fields = ORDER_FIELDS
        .iter()
        .filter(|(field, _)| invalid.contains(*field))
        .map(|&(field, message)| FieldError { field, message })
        .collect();
    FormError::InvalidFields(fields)
}
