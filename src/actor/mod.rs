//! # Tracking Actor
//!
//! Hosts a [`TrackingRegistry`] inside a single Tokio task so it can be shared by many
//! concurrent callers.
//!
//! ## Structure
//!
//! - [`message`] - [`TrackingRequest`] enum, one variant per registry operation
//! - [`client`] - [`TrackingClient`], the cloneable async handle callers use
//! - [`error`] - [`ClientError`] type for transport and registry failures
//!
//! ## Concurrency Model
//!
//! The actor owns the registry outright and handles one request at a time. An
//! `update_status` is a read-modify-append on one record; because no other request can
//! interleave with it, the history invariants hold without a `Mutex` around the map.
//!
//! ```rust
//! use shipping_tracker::actor::TrackingActor;
//! use shipping_tracker::model::{OrderCreate, ShippingStatus};
//! use shipping_tracker::registry::TrackingRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = TrackingActor::new(TrackingRegistry::new(), 10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.create(OrderCreate::new("C1", ["book"])).await.unwrap();
//!     client
//!         .update_status(id.clone(), ShippingStatus::Shipped, Some("Warehouse A".into()))
//!         .await
//!         .unwrap();
//!     let reply = client.answer("where?", id).await.unwrap();
//!     assert_eq!(reply, "Your order is currently Warehouse A");
//! }
//! ```

pub mod client;
pub mod error;
pub mod message;

pub use client::*;
pub use error::*;
pub use message::*;

use crate::query::QueryInterpreter;
use crate::registry::TrackingRegistry;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The server half: owns the registry and the receiving end of the channel.
pub struct TrackingActor {
    receiver: mpsc::Receiver<TrackingRequest>,
    registry: TrackingRegistry,
}

impl TrackingActor {
    /// Creates the actor and its client.
    ///
    /// # Arguments
    ///
    /// * `registry` - The registry to host; its clock and id generator come along with it.
    /// * `buffer_size` - Capacity of the request channel. When full, client calls wait.
    pub fn new(registry: TrackingRegistry, buffer_size: usize) -> (Self, TrackingClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, registry };
        (actor, TrackingClient::new(sender))
    }

    /// Processes requests until every client has been dropped, then returns the registry
    /// so callers can inspect the final state.
    pub async fn run(mut self) -> TrackingRegistry {
        info!(size = self.registry.len(), "Tracking actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(size = self.registry.len(), "Tracking actor shutdown");
        self.registry
    }

    fn handle(&mut self, msg: TrackingRequest) {
        match msg {
            TrackingRequest::Create { params, respond_to } => {
                let id = self.registry.create_order(params);
                let _ = respond_to.send(Ok(id));
            }
            TrackingRequest::UpdateStatus {
                id,
                status,
                location,
                respond_to,
            } => {
                let result = self
                    .registry
                    .update_status(id.as_str(), status, location)
                    .cloned();
                let _ = respond_to.send(result);
            }
            TrackingRequest::Get { id, respond_to } => {
                let _ = respond_to.send(self.registry.get(id.as_str()).cloned());
            }
            TrackingRequest::Report { id, respond_to } => {
                let _ = respond_to.send(self.registry.report(id.as_str()));
            }
            TrackingRequest::Answer {
                question,
                id,
                respond_to,
            } => {
                debug!(order_id = %id, question = %question, "Answer");
                let answer = QueryInterpreter::new(&self.registry).answer(&question, id.as_str());
                let _ = respond_to.send(answer);
            }
        }
    }
}
