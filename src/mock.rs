//! # Test Doubles
//!
//! Deterministic stand-ins for the registry's two environmental inputs, time and id
//! generation. Both are usable from unit tests, integration tests and doc tests.
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use shipping_tracker::mock::{ManualClock, ScriptedIds};
//! use shipping_tracker::registry::TrackingRegistry;
//!
//! let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
//! let mut registry = TrackingRegistry::new()
//!     .with_clock(clock.clone())
//!     .with_ids(ScriptedIds::new(["ORD-12345"]));
//!
//! let id = registry.create("C1", ["book"]);
//! assert_eq!(id.as_str(), "ORD-12345");
//!
//! // Later updates are stamped with the advanced time.
//! clock.advance(Duration::hours(2));
//! ```

use crate::model::OrderId;
use crate::registry::{Clock, IdGenerator, SequentialIds};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = to;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Hands out a fixed script of ids.
///
/// Once the script runs out, [`ScriptedIds::new`] continues with [`SequentialIds`] while
/// [`ScriptedIds::repeating`] keeps returning the same id (a generator that is always wrong).
#[derive(Debug, Clone)]
pub struct ScriptedIds {
    script: VecDeque<OrderId>,
    after: AfterScript,
}

#[derive(Debug, Clone)]
enum AfterScript {
    Sequential(SequentialIds),
    Repeat(OrderId),
}

impl ScriptedIds {
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            script: ids.into_iter().map(|id| OrderId::from(id.into())).collect(),
            after: AfterScript::Sequential(SequentialIds::default()),
        }
    }

    pub fn repeating(id: impl Into<String>) -> Self {
        Self {
            script: VecDeque::new(),
            after: AfterScript::Repeat(OrderId::from(id.into())),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn next_id(&mut self) -> OrderId {
        if let Some(id) = self.script.pop_front() {
            return id;
        }
        match &mut self.after {
            AfterScript::Sequential(ids) => ids.next_id(),
            AfterScript::Repeat(id) => id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clones_share_time() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let other = clock.clone();

        clock.advance(Duration::days(1));
        assert_eq!(other.now(), Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());

        other.set(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn script_then_sequence() {
        let mut ids = ScriptedIds::new(["A", "B"]);
        assert_eq!(ids.next_id().as_str(), "A");
        assert_eq!(ids.next_id().as_str(), "B");
        assert_eq!(ids.next_id().as_str(), "ORD-10001");

        let mut stuck = ScriptedIds::repeating("X");
        assert_eq!(stuck.next_id(), stuck.next_id());
    }
}
