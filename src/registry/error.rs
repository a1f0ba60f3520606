//! Error types for the tracking registry.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackingError {
    /// The requested order was never created in this registry.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// A status name could not be parsed.
    #[error("Unknown shipping status: {0}")]
    UnknownStatus(String),
}
