//! # Query Interpreter
//!
//! Answers free-text questions about one order. A question is lower-cased, matched against
//! an ordered keyword table ([`RULES`]) and the winning [`Intent`] renders its reply from
//! the order's current fields. Nothing here mutates an order.
//!
//! ```rust
//! use shipping_tracker::model::ShippingStatus;
//! use shipping_tracker::query::QueryInterpreter;
//! use shipping_tracker::registry::TrackingRegistry;
//!
//! let mut registry = TrackingRegistry::new();
//! let id = registry.create("C1", ["book"]);
//! registry.update_status(id.as_str(), ShippingStatus::InTransit, Some("Hub B".into())).unwrap();
//!
//! let interpreter = QueryInterpreter::new(&registry);
//! assert_eq!(interpreter.answer("where is it", id.as_str()), "Your order is currently Hub B");
//! ```

pub mod intent;

pub use intent::*;

use crate::model::OrderRecord;
use crate::registry::{TrackingError, TrackingRegistry};
use tracing::debug;

/// Reply for ids the lookup does not know.
pub const ORDER_NOT_FOUND_REPLY: &str =
    "I'm sorry, but I couldn't find an order with that ID. Please verify your order number and try again.";

/// Read-only access to orders by id.
pub trait OrderLookup {
    fn lookup(&self, id: &str) -> Result<&OrderRecord, TrackingError>;
}

impl OrderLookup for TrackingRegistry {
    fn lookup(&self, id: &str) -> Result<&OrderRecord, TrackingError> {
        self.get(id)
    }
}

/// Stateless interpreter over a borrowed lookup; every call resolves and classifies afresh.
pub struct QueryInterpreter<'a, L: OrderLookup + ?Sized = TrackingRegistry> {
    orders: &'a L,
}

impl<'a, L: OrderLookup + ?Sized> QueryInterpreter<'a, L> {
    pub fn new(orders: &'a L) -> Self {
        Self { orders }
    }

    /// Always produces text: an unknown id yields [`ORDER_NOT_FOUND_REPLY`].
    pub fn answer(&self, question: &str, id: &str) -> String {
        let order = match self.orders.lookup(id) {
            Ok(order) => order,
            Err(e) => {
                debug!(order_id = id, error = %e, "Answering for unknown order");
                return ORDER_NOT_FOUND_REPLY.to_string();
            }
        };

        let intent = classify(question);
        debug!(order_id = id, %intent, "Classified question");
        intent.render(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ManualClock;
    use crate::model::ShippingStatus;
    use chrono::{Duration, TimeZone, Utc};

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn unknown_order_gets_apology() {
        let registry = TrackingRegistry::new();
        let interpreter = QueryInterpreter::new(&registry);
        assert_eq!(interpreter.answer("where is it", "ORD-0"), ORDER_NOT_FOUND_REPLY);
    }

    #[test]
    fn shipped_order_scenario() {
        let clock = clock();
        let mut registry = TrackingRegistry::new().with_clock(clock.clone());
        let id = registry.create("C1", ["book"]);
        clock.advance(Duration::hours(1));
        registry
            .update_status(id.as_str(), ShippingStatus::Shipped, Some("Warehouse A".into()))
            .unwrap();
        clock.advance(Duration::hours(5));
        registry
            .update_status(id.as_str(), ShippingStatus::InTransit, Some("Hub B".into()))
            .unwrap();

        let interpreter = QueryInterpreter::new(&registry);
        let id = id.as_str();

        assert_eq!(interpreter.answer("where is it", id), "Your order is currently Hub B");
        assert_eq!(
            interpreter.answer("when will it arrive", id),
            "Your order is estimated to be delivered by March 06, 2024"
        );
        assert_eq!(
            interpreter.answer("What is the status?", id),
            "Your order is currently In Transit"
        );
        assert_eq!(
            interpreter.answer("tell me the history", id),
            "Tracking history for your order:\n\
             - 2024-03-01 10:00: Shipped Warehouse A\n\
             - 2024-03-01 15:00: In Transit Hub B"
        );
        assert_eq!(
            interpreter.answer("hi", id),
            "Current status: In Transit. Estimated delivery: March 06, 2024"
        );
    }

    #[test]
    fn fresh_order_has_no_location_or_history() {
        let mut registry = TrackingRegistry::new().with_clock(clock());
        let id = registry.create("C1", ["book"]);
        let interpreter = QueryInterpreter::new(&registry);

        assert_eq!(interpreter.answer("where", id.as_str()), LOCATION_UNAVAILABLE);
        assert_eq!(
            interpreter.answer("history", id.as_str()),
            format!("{HISTORY_HEADER}\n{NO_HISTORY_LINE}")
        );
    }

    #[test]
    fn history_line_without_location_has_no_trailing_space() {
        let mut registry = TrackingRegistry::new().with_clock(clock());
        let id = registry.create("C1", ["book"]);
        registry.update_status(id.as_str(), ShippingStatus::Processing, None).unwrap();

        let answer = QueryInterpreter::new(&registry).answer("updates?", id.as_str());
        assert_eq!(answer, "Tracking history for your order:\n- 2024-03-01 09:00: Processing");
    }

    #[test]
    fn answering_does_not_touch_the_order() {
        let mut registry = TrackingRegistry::new().with_clock(clock());
        let id = registry.create("C1", ["book"]);
        let before = registry.get(id.as_str()).unwrap().clone();

        let interpreter = QueryInterpreter::new(&registry);
        for question in ["where", "when", "status", "history", "?"] {
            interpreter.answer(question, id.as_str());
        }

        assert_eq!(registry.get(id.as_str()).unwrap(), &before);
    }
}
