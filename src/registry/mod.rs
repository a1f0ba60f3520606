//! # Tracking Registry
//!
//! The single source of truth mapping order ids to [`OrderRecord`]s.
//!
//! ## Structure
//!
//! - [`clock`] - [`Clock`] trait and the real [`SystemClock`]
//! - [`ids`] - [`IdGenerator`] trait and the default [`SequentialIds`]
//! - [`error`] - [`TrackingError`] type for type-safe error handling
//!
//! The registry is a plain synchronous value owned by its caller. For concurrent use,
//! hand it to a [`TrackingActor`](crate::actor::TrackingActor), which serializes every
//! request through one task.
//!
//! ## Usage
//!
//! ```rust
//! use shipping_tracker::model::ShippingStatus;
//! use shipping_tracker::registry::TrackingRegistry;
//!
//! let mut registry = TrackingRegistry::new();
//! let id = registry.create("C1", ["book"]);
//! registry
//!     .update_status(id.as_str(), ShippingStatus::Shipped, Some("Warehouse A".into()))
//!     .unwrap();
//! assert_eq!(registry.get(id.as_str()).unwrap().current_location(), Some("Warehouse A"));
//! ```

pub mod clock;
pub mod error;
pub mod ids;

pub use clock::*;
pub use error::*;
pub use ids::*;

use crate::config::TrackerConfig;
use crate::model::{OrderCreate, OrderId, OrderRecord, ShippingStatus, StatusReport};
use chrono::Duration;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Candidates drawn from the generator before falling back to suffixed ids.
pub const MAX_ID_ATTEMPTS: usize = 16;

pub struct TrackingRegistry {
    orders: HashMap<OrderId, OrderRecord>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    delivery_window: Duration,
}

impl Default for TrackingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackingRegistry {
    /// Empty registry with the system clock and default settings.
    pub fn new() -> Self {
        Self::from_config(&TrackerConfig::default())
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            orders: HashMap::new(),
            clock: Box::new(SystemClock),
            ids: Box::new(SequentialIds::new(config.id_prefix.clone(), config.id_start)),
            delivery_window: config.delivery_window(),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the id generator.
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Places a new order and returns its id. Never fails; `items` may be empty.
    pub fn create(
        &mut self,
        customer_id: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> OrderId {
        self.create_order(OrderCreate::new(customer_id, items))
    }

    pub fn create_order(&mut self, params: OrderCreate) -> OrderId {
        debug!(?params, "Create");
        let id = self.allocate_id();
        let order = OrderRecord::new(id.clone(), params, self.clock.now(), self.delivery_window);
        self.orders.insert(id.clone(), order);
        info!(order_id = %id, size = self.orders.len(), "Created");
        id
    }

    /// Records a shipping event: sets the status, moves the location when one is given,
    /// and appends a history entry. Any status may follow any other.
    pub fn update_status(
        &mut self,
        id: &str,
        status: ShippingStatus,
        location: Option<String>,
    ) -> Result<&OrderRecord, TrackingError> {
        let now = self.clock.now();
        let Some(order) = self.orders.get_mut(id) else {
            warn!(order_id = id, "Not found");
            return Err(TrackingError::NotFound(OrderId::from(id)));
        };

        order.apply_update(status, location, now);
        info!(order_id = id, %status, location = ?order.current_location(), "Updated");
        Ok(&*order)
    }

    pub fn get(&self, id: &str) -> Result<&OrderRecord, TrackingError> {
        let order = self.orders.get(id);
        debug!(order_id = id, found = order.is_some(), "Get");
        order.ok_or_else(|| TrackingError::NotFound(OrderId::from(id)))
    }

    pub fn report(&self, id: &str) -> Result<StatusReport, TrackingError> {
        self.get(id).map(OrderRecord::report)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn allocate_id(&mut self) -> OrderId {
        let mut candidate = self.ids.next_id();
        let mut attempts = 1;

        while self.orders.contains_key(candidate.as_str()) {
            warn!(order_id = %candidate, attempts, "Id collision, regenerating");
            if attempts >= MAX_ID_ATTEMPTS {
                return self.disambiguate(candidate);
            }
            candidate = self.ids.next_id();
            attempts += 1;
        }

        candidate
    }

    // The map is finite, so some suffix is always free.
    fn disambiguate(&self, base: OrderId) -> OrderId {
        (1u64..)
            .map(|n| OrderId::from(format!("{base}-{n}")))
            .find(|id| !self.orders.contains_key(id.as_str()))
            .unwrap_or(base)
    }
}
