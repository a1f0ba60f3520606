//! The closed set of shipping states an order can be in.

use crate::registry::TrackingError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Where an order currently sits in the shipping lifecycle.
///
/// The usual progression is `Processing -> Shipped -> InTransit -> OutForDelivery -> Delivered`,
/// with `Delayed` reachable at any point. The registry records transitions, it does not
/// validate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingStatus {
    Processing,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
    Delayed,
}

impl ShippingStatus {
    /// Every variant, in lifecycle order with `Delayed` last.
    pub const ALL: [ShippingStatus; 6] = [
        ShippingStatus::Processing,
        ShippingStatus::Shipped,
        ShippingStatus::InTransit,
        ShippingStatus::OutForDelivery,
        ShippingStatus::Delivered,
        ShippingStatus::Delayed,
    ];

    /// Human-readable label used in every customer-facing message.
    pub fn label(self) -> &'static str {
        match self {
            ShippingStatus::Processing => "Processing",
            ShippingStatus::Shipped => "Shipped",
            ShippingStatus::InTransit => "In Transit",
            ShippingStatus::OutForDelivery => "Out for Delivery",
            ShippingStatus::Delivered => "Delivered",
            ShippingStatus::Delayed => "Delayed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ShippingStatus::Delivered)
    }
}

impl Display for ShippingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the label ("Out for Delivery") or the variant name ("OutForDelivery"),
/// ignoring case, spaces, dashes and underscores.
impl FromStr for ShippingStatus {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        ShippingStatus::ALL
            .into_iter()
            .find(|status| {
                let name = format!("{status:?}").to_lowercase();
                name == wanted
            })
            .ok_or_else(|| TrackingError::UnknownStatus(s.to_string()))
    }
}
