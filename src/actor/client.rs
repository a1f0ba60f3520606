//! # Tracking Client
//!
//! The async, cloneable handle for a running [`TrackingActor`](crate::actor::TrackingActor).

use crate::actor::{ClientError, TrackingRequest};
use crate::model::{OrderCreate, OrderId, OrderRecord, ShippingStatus, StatusReport};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Holds only a sender, so cloning is cheap. The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct TrackingClient {
    sender: mpsc::Sender<TrackingRequest>,
}

impl TrackingClient {
    pub fn new(sender: mpsc::Sender<TrackingRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self, params), fields(customer_id = %params.customer_id))]
    pub async fn create(&self, params: OrderCreate) -> Result<OrderId, ClientError> {
        debug!(?params, "create called");
        let (respond_to, response) = oneshot::channel();
        self.send(TrackingRequest::Create { params, respond_to }).await?;
        Ok(response.await.map_err(|_| ClientError::ActorDropped)??)
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: ShippingStatus,
        location: Option<String>,
    ) -> Result<OrderRecord, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TrackingRequest::UpdateStatus {
            id,
            status,
            location,
            respond_to,
        })
        .await?;
        Ok(response.await.map_err(|_| ClientError::ActorDropped)??)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<OrderRecord, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TrackingRequest::Get { id, respond_to }).await?;
        Ok(response.await.map_err(|_| ClientError::ActorDropped)??)
    }

    #[instrument(skip(self))]
    pub async fn report(&self, id: OrderId) -> Result<StatusReport, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TrackingRequest::Report { id, respond_to }).await?;
        Ok(response.await.map_err(|_| ClientError::ActorDropped)??)
    }

    /// Only fails if the actor is gone; unknown orders get the apology text.
    #[instrument(skip(self, question))]
    pub async fn answer(
        &self,
        question: impl Into<String>,
        id: OrderId,
    ) -> Result<String, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.send(TrackingRequest::Answer {
            question: question.into(),
            id,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| ClientError::ActorDropped)
    }

    async fn send(&self, request: TrackingRequest) -> Result<(), ClientError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| ClientError::ActorClosed)
    }
}
