//! # System Lifecycle
//!
//! Starting, wiring and shutting down the tracking service.
//!
//! [`ShippingSystem`] builds a [`TrackingRegistry`](crate::registry::TrackingRegistry) from
//! [`TrackerConfig`](crate::config::TrackerConfig), spawns the
//! [`TrackingActor`](crate::actor::TrackingActor) that owns it, and exposes the client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - the task returns the final registry
//!
//! No queued request is lost: everything sent before the last client was dropped gets a reply.

pub mod shipping_system;
pub mod tracing;

pub use shipping_system::*;
pub use self::tracing::*;
