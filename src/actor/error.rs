//! Errors surfaced by [`TrackingClient`](crate::actor::TrackingClient).

use crate::registry::TrackingError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The registry rejected the request.
    #[error(transparent)]
    Tracking(#[from] TrackingError),

    #[error("Tracking actor closed")]
    ActorClosed,

    #[error("Tracking actor dropped response channel")]
    ActorDropped,
}
