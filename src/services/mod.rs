use thiserror::Error;

use crate::forms::FormError;
use crate::gateway::errors::GatewayError;

pub mod catalog;
pub mod order;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("puppy not found: {0}")]
    NotFound(String),

    #[error("order hand-off failed: {0}")]
    Gateway(#[from] GatewayError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
