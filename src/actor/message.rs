//! # Tracking Messages
//!
//! Requests sent from [`TrackingClient`](crate::actor::TrackingClient) to
//! [`TrackingActor`](crate::actor::TrackingActor). Each carries a oneshot sender for the reply.

use crate::model::{OrderCreate, OrderId, OrderRecord, ShippingStatus, StatusReport};
use crate::registry::TrackingError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, TrackingError>>;

#[derive(Debug)]
pub enum TrackingRequest {
    Create {
        params: OrderCreate,
        respond_to: Response<OrderId>,
    },
    UpdateStatus {
        id: OrderId,
        status: ShippingStatus,
        location: Option<String>,
        respond_to: Response<OrderRecord>,
    },
    Get {
        id: OrderId,
        respond_to: Response<OrderRecord>,
    },
    Report {
        id: OrderId,
        respond_to: Response<StatusReport>,
    },
    /// Questions never fail, so the reply is plain text.
    Answer {
        question: String,
        id: OrderId,
        respond_to: oneshot::Sender<String>,
    },
}
