//! Hand-off of validated orders to the external submission endpoint.

use crate::domain::order::OrderSubmission;
use crate::gateway::errors::GatewayResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod outbox;

pub use outbox::JsonlOutbox;

/// Receives orders once the form has been validated and the total computed.
pub trait OrderGateway {
    fn submit(&self, submission: &OrderSubmission) -> GatewayResult<()>;
}

impl<G: OrderGateway + ?Sized> OrderGateway for &G {
    fn submit(&self, submission: &OrderSubmission) -> GatewayResult<()> {
        (**self).submit(submission)
    }
}
