//! DTOs shaped for the order and receipt templates.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::order::DeliveryOption;
use crate::domain::types::OrderReference;
use crate::dto::catalog::PuppyCard;
use crate::forms::FieldError;

/// One entry of the delivery selector.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DeliveryChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub surcharge: Decimal,
    pub selected: bool,
}

impl DeliveryChoice {
    /// All options with `selected` marking the current one.
    pub fn list(selected: Option<DeliveryOption>) -> Vec<Self> {
        DeliveryOption::ALL
            .into_iter()
            .map(|option| Self {
                value: option.as_str(),
                label: option.label(),
                surcharge: option.surcharge(),
                selected: selected == Some(option),
            })
            .collect()
    }
}

/// Selected puppy with the price breakdown for the chosen delivery.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub puppy: PuppyCard,
    pub delivery: Option<DeliveryOption>,
    pub price: Decimal,
    pub surcharge: Decimal,
    pub total: Decimal,
}

/// Data required to render the order page.
#[derive(Debug, Serialize)]
pub struct OrderPageData {
    /// `None` is the "no selection" state.
    pub order: Option<OrderSummary>,
    pub delivery_options: Vec<DeliveryChoice>,
    pub errors: Vec<FieldError>,
    /// Field that should receive focus after a failed submission.
    pub focus: Option<&'static str>,
    /// Set when a valid order could not be handed off.
    pub submission_error: Option<&'static str>,
}

/// Confirmation shown once an order has been handed off.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct OrderReceipt {
    pub reference: OrderReference,
    pub puppy_name: String,
    pub delivery: DeliveryOption,
    pub delivery_label: &'static str,
    pub total: Decimal,
    pub email: String,
}
