//! Order status enum and its fixed fulfilment stage list.

use serde::{Deserialize, Serialize};

/// Order fulfilment status.
///
/// Orders are created as [`Processing`](Self::Processing) and never
/// transition afterwards; the stage list still drives the tracking
/// timeline. Statuses outside the stage list (from foreign documents)
/// deserialize to [`Unknown`](Self::Unknown), which renders with its own
/// label and no timeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    OutForDelivery,
    Delivered,
    /// Catch-all for unrecognized status values.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// The fixed ordered stage list used to compute timeline progress.
    pub const STAGES: [Self; 4] = [
        Self::Processing,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Position of this status in the stage list, if it is a stage.
    #[must_use]
    pub fn stage_index(&self) -> Option<usize> {
        Self::STAGES.iter().position(|stage| stage == self)
    }

    /// Human-readable label (underscores spelled out).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::OutForDelivery => "out for delivery",
            Self::Delivered => "delivered",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
