//! Question classification and answer rendering.

use crate::model::{OrderRecord, LONG_DATE_FORMAT, TIMESTAMP_FORMAT};
use std::fmt::Display;

/// What a customer's question is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Location,
    Eta,
    Status,
    History,
    Fallback,
}

/// Keyword rules, checked top to bottom. The first rule with any keyword contained in the
/// lower-cased question wins, so "delivery status" is an `Eta` question.
pub const RULES: &[(Intent, &[&str])] = &[
    (Intent::Location, &["where", "location"]),
    (Intent::Eta, &["when", "delivery", "arrive"]),
    (Intent::Status, &["status", "tracking"]),
    (Intent::History, &["history", "updates"]),
];

pub const HISTORY_HEADER: &str = "Tracking history for your order:";
pub const NO_HISTORY_LINE: &str = "No tracking updates yet.";
pub const LOCATION_UNAVAILABLE: &str = "Location information is not available yet.";

/// Maps a free-text question onto an [`Intent`] by substring matching.
pub fn classify(question: &str) -> Intent {
    let question = question.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| question.contains(kw)))
        .map_or(Intent::Fallback, |(intent, _)| *intent)
}

impl Intent {
    /// Builds the customer-facing answer from the order's current fields.
    pub fn render(self, order: &OrderRecord) -> String {
        let delivery_date = order.estimated_delivery().format(LONG_DATE_FORMAT);
        match self {
            Intent::Location => match order.current_location() {
                Some(location) => format!("Your order is currently {location}"),
                None => LOCATION_UNAVAILABLE.to_string(),
            },
            Intent::Eta => format!("Your order is estimated to be delivered by {delivery_date}"),
            Intent::Status => format!("Your order is currently {}", order.status()),
            Intent::History => render_history(order),
            Intent::Fallback => format!(
                "Current status: {}. Estimated delivery: {delivery_date}",
                order.status()
            ),
        }
    }
}

fn render_history(order: &OrderRecord) -> String {
    if order.history().is_empty() {
        return format!("{HISTORY_HEADER}\n{NO_HISTORY_LINE}");
    }

    let lines = order.history().iter().map(|update| {
        let line = format!(
            "- {}: {} {}",
            update.timestamp.format(TIMESTAMP_FORMAT),
            update.status,
            update.location.as_deref().unwrap_or_default()
        );
        line.trim_end().to_string()
    });

    std::iter::once(HISTORY_HEADER.to_string())
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::Location => "location",
            Intent::Eta => "eta",
            Intent::Status => "status",
            Intent::History => "history",
            Intent::Fallback => "fallback",
        };
        f.write_str(name)
    }
}
