use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::domain::order::{DeliveryOption, OrderContext, OrderSubmission};
use crate::dto::catalog::PuppyCard;
use crate::dto::order::{DeliveryChoice, OrderPageData, OrderReceipt, OrderSummary};
use crate::forms::FormError;
use crate::forms::order::OrderForm;
use crate::gateway::OrderGateway;
use crate::services::{ServiceError, ServiceResult};

fn summarize(context: &OrderContext<'_>) -> OrderSummary {
    OrderSummary {
        puppy: PuppyCard::from(context.puppy),
        delivery: context.delivery,
        price: context.puppy.price.amount(),
        surcharge: context.surcharge(),
        total: context.total(),
    }
}

/// Loads the order page for the selected puppy; an unknown id is the "no selection" state.
pub fn load_order_page(
    catalog: &Catalog,
    puppy_id: Option<&str>,
    delivery: Option<DeliveryOption>,
) -> OrderPageData {
    let order = puppy_id
        .and_then(|id| catalog.find(id))
        .map(|puppy| summarize(&OrderContext::new(puppy, delivery)));

    if order.is_none() {
        log::info!("No puppy selected for id {puppy_id:?}");
    }

    OrderPageData {
        order,
        delivery_options: DeliveryChoice::list(delivery),
        errors: Vec::new(),
        focus: None,
        submission_error: None,
    }
}

/// Re-renders the order page after a rejected submission, keeping the user's choices.
pub fn load_order_page_with_errors(
    catalog: &Catalog,
    puppy_id: Option<&str>,
    delivery: Option<DeliveryOption>,
    error: &FormError,
) -> OrderPageData {
    OrderPageData {
        errors: error.field_errors().to_vec(),
        focus: error.first_invalid(),
        ..load_order_page(catalog, puppy_id, delivery)
    }
}

/// Message shown when the order could not be handed off.
pub const SUBMISSION_FAILED: &str =
    "We could not send your order. Nothing was submitted, please try again in a few minutes.";

/// Re-renders the order page after a failed hand-off so the visitor can retry.
pub fn load_order_page_after_failure(
    catalog: &Catalog,
    puppy_id: Option<&str>,
    delivery: Option<DeliveryOption>,
) -> OrderPageData {
    OrderPageData {
        submission_error: Some(SUBMISSION_FAILED),
        ..load_order_page(catalog, puppy_id, delivery)
    }
}

/// Total for `puppy_id` with the raw delivery option, `None` when the id is unknown.
pub fn quote_total(catalog: &Catalog, puppy_id: &str, delivery: &str) -> Option<Decimal> {
    catalog
        .find(puppy_id)
        .map(|puppy| OrderContext::from_input(puppy, delivery).total())
}

/// Validates the order form and hands the order to `gateway`.
pub fn submit_order<G>(
    catalog: &Catalog,
    gateway: &G,
    form: &OrderForm,
    submitted_at: NaiveDateTime,
) -> ServiceResult<OrderReceipt>
where
    G: OrderGateway + ?Sized,
{
    let order = form.validate_order().map_err(|err| {
        log::error!("Failed to validate order form: {err}");
        ServiceError::from(err)
    })?;

    let puppy = catalog
        .find(order.puppy_id.as_str())
        .ok_or_else(|| ServiceError::NotFound(order.puppy_id.to_string()))?;

    let email = order.customer.email.to_string();
    let submission = OrderSubmission::new(puppy, order.delivery, order.customer, submitted_at);

    gateway.submit(&submission).map_err(|err| {
        log::error!("Failed to submit order {}: {err}", submission.reference);
        err
    })?;

    log::info!(
        "Order {} submitted for {} ({}), total {}",
        submission.reference,
        puppy.name,
        submission.delivery,
        submission.total
    );

    Ok(OrderReceipt {
        reference: submission.reference,
        puppy_name: submission.puppy_name,
        delivery: submission.delivery,
        delivery_label: submission.delivery.label(),
        total: submission.total,
        email,
    })
}
