use crate::actor::{TrackingActor, TrackingClient};
use crate::config::TrackerConfig;
use crate::registry::TrackingRegistry;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Tracking actor task failed: {0}")]
    ActorFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the tracking service.
///
/// `ShippingSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the tracking actor
/// - **Wiring**: Building the registry from configuration before handing it to the actor
///
/// # Example
///
/// ```ignore
/// let system = ShippingSystem::new(&TrackerConfig::default());
///
/// let id = system.client.create(OrderCreate::new("C1", ["book"])).await?;
/// let reply = system.client.answer("where is it?", id).await?;
///
/// // Gracefully shut down when done
/// let registry = system.shutdown().await?;
/// ```
pub struct ShippingSystem {
    /// Client for interacting with the tracking actor
    pub client: TrackingClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<TrackingRegistry>,
}

impl ShippingSystem {
    /// Starts a tracking actor over a fresh registry built from `config`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &TrackerConfig) -> Self {
        Self::with_registry(TrackingRegistry::from_config(config), config.channel_capacity)
    }

    /// Starts a tracking actor over a caller-supplied registry, e.g. one with a manual clock.
    pub fn with_registry(registry: TrackingRegistry, buffer_size: usize) -> Self {
        let (actor, client) = TrackingActor::new(registry, buffer_size);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the system and hands back the final registry.
    ///
    /// Dropping the client closes the channel; the actor drains what is queued and exits.
    /// Clones of the client held elsewhere keep the actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<TrackingRegistry, SystemError> {
        info!("Shutting down system...");
        drop(self.client);

        match self.handle.await {
            Ok(registry) => {
                info!(size = registry.len(), "System shutdown complete.");
                Ok(registry)
            }
            Err(e) => {
                error!(error = %e, "Actor task failed");
                Err(e.into())
            }
        }
    }
}
