//! Pure data structures: the order record, its history entries and the shipping status enum.

pub mod order;
pub mod status;

pub use order::*;
pub use status::*;

/// Format used for history lines and report timestamps, e.g. `2024-03-01 09:30`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used for delivery dates in answers, e.g. `March 06, 2024`.
pub const LONG_DATE_FORMAT: &str = "%B %d, %Y";
