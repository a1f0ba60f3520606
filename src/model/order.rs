use crate::model::{ShippingStatus, TIMESTAMP_FORMAT};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;

/// Type-safe identifier for orders, e.g. `ORD-10001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets the registry map be queried with a plain `&str`.
impl Borrow<str> for OrderId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in an order's tracking history.
///
/// `location` is exactly what the caller passed to the update, so an update without a
/// location is recorded as `None` even when the order already has a known location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingUpdate {
    pub timestamp: DateTime<Utc>,
    pub status: ShippingStatus,
    pub location: Option<String>,
}

/// Represents one shipped order and its tracking trail.
///
/// Records are created by [`TrackingRegistry`](crate::registry::TrackingRegistry) and can
/// only be changed through
/// [`TrackingRegistry::update_status`](crate::registry::TrackingRegistry::update_status).
/// Everything here is read through accessors so the history stays append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    id: OrderId,
    customer_id: String,
    items: Vec<String>,
    order_date: DateTime<Utc>,
    estimated_delivery: DateTime<Utc>,
    status: ShippingStatus,
    current_location: Option<String>,
    history: Vec<TrackingUpdate>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreate {
    pub customer_id: String,
    pub items: Vec<String>,
}

impl OrderCreate {
    pub fn new(
        customer_id: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl OrderRecord {
    /// Creates a freshly placed order in the `Processing` state.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the registry)
    /// * `params` - Customer and items
    /// * `order_date` - When the order was placed
    /// * `delivery_window` - Offset from `order_date` to the estimated delivery; saturates at
    ///   the latest representable date
    pub(crate) fn new(
        id: OrderId,
        params: OrderCreate,
        order_date: DateTime<Utc>,
        delivery_window: Duration,
    ) -> Self {
        Self {
            id,
            customer_id: params.customer_id,
            items: params.items,
            order_date,
            estimated_delivery: order_date
                .checked_add_signed(delivery_window)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            status: ShippingStatus::Processing,
            current_location: None,
            history: Vec::new(),
        }
    }

    /// Moves the order to `status` and appends one history entry.
    ///
    /// A non-empty `location` replaces the current location; an absent or empty one
    /// leaves it untouched.
    pub(crate) fn apply_update(
        &mut self,
        status: ShippingStatus,
        location: Option<String>,
        at: DateTime<Utc>,
    ) {
        self.status = status;
        if let Some(loc) = location.as_deref().filter(|loc| !loc.is_empty()) {
            self.current_location = Some(loc.to_string());
        }
        self.history.push(TrackingUpdate {
            timestamp: at,
            status,
            location,
        });
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn estimated_delivery(&self) -> DateTime<Utc> {
        self.estimated_delivery
    }

    pub fn status(&self) -> ShippingStatus {
        self.status
    }

    pub fn current_location(&self) -> Option<&str> {
        self.current_location.as_deref()
    }

    /// Oldest entry first.
    pub fn history(&self) -> &[TrackingUpdate] {
        &self.history
    }

    /// Snapshot of the order with timestamps rendered for display.
    pub fn report(&self) -> StatusReport {
        StatusReport {
            order_id: self.id.clone(),
            customer_id: self.customer_id.clone(),
            items: self.items.clone(),
            current_status: self.status.label().to_string(),
            order_date: self.order_date.format(TIMESTAMP_FORMAT).to_string(),
            estimated_delivery: self.estimated_delivery.format(TIMESTAMP_FORMAT).to_string(),
            current_location: self.current_location.clone().unwrap_or_default(),
            tracking_history: self
                .history
                .iter()
                .map(|update| HistoryReport {
                    timestamp: update.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    status: update.status.label().to_string(),
                    location: update.location.clone(),
                })
                .collect(),
        }
    }
}

/// Serializable view of an order, as shown by the CLI's full report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub order_id: OrderId,
    pub customer_id: String,
    pub items: Vec<String>,
    pub current_status: String,
    pub order_date: String,
    pub estimated_delivery: String,
    pub current_location: String,
    pub tracking_history: Vec<HistoryReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryReport {
    pub timestamp: String,
    pub status: String,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn record() -> OrderRecord {
        OrderRecord::new(
            OrderId::from("ORD-1"),
            OrderCreate::new("C1", ["book"]),
            placed_at(),
            Duration::days(5),
        )
    }

    #[test]
    fn new_order_starts_processing_without_history() {
        let order = record();
        assert_eq!(order.status(), ShippingStatus::Processing);
        assert!(order.history().is_empty());
        assert_eq!(order.current_location(), None);
        assert_eq!(order.estimated_delivery() - order.order_date(), Duration::days(5));
    }

    #[test]
    fn estimated_delivery_saturates_instead_of_overflowing() {
        let order = OrderRecord::new(
            OrderId::from("ORD-2"),
            OrderCreate::new("C1", ["book"]),
            DateTime::<Utc>::MAX_UTC - Duration::days(1),
            Duration::days(5),
        );
        assert_eq!(order.estimated_delivery(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn empty_location_keeps_previous_location_but_is_recorded_as_given() {
        let mut order = record();
        order.apply_update(ShippingStatus::Shipped, Some("Warehouse A".into()), placed_at());
        order.apply_update(ShippingStatus::Delayed, Some(String::new()), placed_at());
        order.apply_update(ShippingStatus::InTransit, None, placed_at());

        assert_eq!(order.current_location(), Some("Warehouse A"));
        assert_eq!(order.status(), ShippingStatus::InTransit);
        let locations: Vec<_> = order.history().iter().map(|u| u.location.clone()).collect();
        assert_eq!(
            locations,
            vec![Some("Warehouse A".to_string()), Some(String::new()), None]
        );
    }

    #[test]
    fn report_formats_timestamps() {
        let mut order = record();
        order.apply_update(ShippingStatus::Shipped, Some("Warehouse A".into()), placed_at());

        let report = order.report();
        assert_eq!(report.order_date, "2024-03-01 09:30");
        assert_eq!(report.estimated_delivery, "2024-03-06 09:30");
        assert_eq!(report.current_status, "Shipped");
        assert_eq!(report.current_location, "Warehouse A");
        assert_eq!(report.tracking_history.len(), 1);
        assert_eq!(report.tracking_history[0].status, "Shipped");
    }
}
