//! Delivery options, price totals and the order hand-off payload.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::puppy::PuppyRecord;
use crate::domain::types::{
    City, CustomerEmail, CustomerName, OrderNotes, OrderReference, PhoneNumber, PostalCode,
    PuppyId, Region, StreetAddress,
};

/// How the puppy reaches the adopter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryOption {
    Pickup,
    Standard,
    HandDelivery,
}

impl DeliveryOption {
    /// Every option in display order.
    pub const ALL: [Self; 3] = [Self::Pickup, Self::Standard, Self::HandDelivery];

    /// Fixed surcharge added to the base price.
    pub fn surcharge(self) -> Decimal {
        match self {
            Self::Pickup => Decimal::ZERO,
            Self::Standard => Decimal::new(150, 0),
            Self::HandDelivery => Decimal::new(350, 0),
        }
    }

    /// Wire name used in forms and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Standard => "standard",
            Self::HandDelivery => "handDelivery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Standard => "Standard delivery",
            Self::HandDelivery => "Hand delivery",
        }
    }

    /// Parses a wire name; unknown or empty input yields `None`.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(value))
    }

    /// Like [`Self::parse_lenient`], but reports a non-empty unknown selection.
    ///
    /// Used wherever the price shown to the visitor falls back to no surcharge.
    pub fn from_selection(value: &str) -> Option<Self> {
        let option = Self::parse_lenient(value);
        if option.is_none() && !value.trim().is_empty() {
            log::warn!("Unknown delivery option {value:?}, no surcharge applied");
        }
        option
    }
}

impl Display for DeliveryOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selected puppy together with the chosen delivery option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderContext<'a> {
    pub puppy: &'a PuppyRecord,
    /// `None` when nothing (or something unrecognized) is selected.
    pub delivery: Option<DeliveryOption>,
}

impl<'a> OrderContext<'a> {
    pub fn new(puppy: &'a PuppyRecord, delivery: Option<DeliveryOption>) -> Self {
        Self { puppy, delivery }
    }

    /// Builds a context from a raw option name, falling back to no delivery.
    pub fn from_input(puppy: &'a PuppyRecord, delivery: &str) -> Self {
        Self::new(puppy, DeliveryOption::from_selection(delivery))
    }

    pub fn surcharge(&self) -> Decimal {
        self.delivery
            .map(DeliveryOption::surcharge)
            .unwrap_or(Decimal::ZERO)
    }

    /// Base price plus delivery surcharge.
    pub fn total(&self) -> Decimal {
        self.puppy.price.amount() + self.surcharge()
    }
}

/// Validated adopter details captured by the order form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomerDetails {
    pub name: CustomerName,
    pub email: CustomerEmail,
    pub phone: PhoneNumber,
    pub address: StreetAddress,
    pub city: City,
    pub region: Region,
    pub postal_code: PostalCode,
    pub notes: Option<OrderNotes>,
}

/// Payload handed to the external submission endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OrderSubmission {
    pub reference: OrderReference,
    pub submitted_at: NaiveDateTime,
    pub puppy_id: PuppyId,
    pub puppy_name: String,
    pub breed: String,
    pub price: Decimal,
    pub delivery: DeliveryOption,
    pub surcharge: Decimal,
    pub total: Decimal,
    pub customer: CustomerDetails,
}

impl OrderSubmission {
    pub fn new(
        puppy: &PuppyRecord,
        delivery: DeliveryOption,
        customer: CustomerDetails,
        submitted_at: NaiveDateTime,
    ) -> Self {
        let context = OrderContext::new(puppy, Some(delivery));
        Self {
            reference: OrderReference::new(),
            submitted_at,
            puppy_id: puppy.id.clone(),
            puppy_name: puppy.name.clone(),
            breed: puppy.breed.clone(),
            price: puppy.price.amount(),
            delivery,
            surcharge: context.surcharge(),
            total: context.total(),
            customer,
        }
    }
}
