//! Order id generation.
//!
//! The registry asks an [`IdGenerator`] for candidates and rejects any that are already
//! taken, so generators only need to be "usually unique".

use crate::model::OrderId;
use tracing::warn;

/// Produces candidate order ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> OrderId;
}

/// Counter-based ids: `ORD-10001`, `ORD-10002`, ...
///
/// Once the counter reaches `u64::MAX` it keeps yielding that last id; the registry then
/// treats every further candidate as a collision and suffixes it.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: start,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("ORD-", 10001)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> OrderId {
        let id = format!("{}{}", self.prefix, self.next);
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => warn!(order_id = %id, "Id counter exhausted"),
        }
        OrderId::from(id)
    }
}
