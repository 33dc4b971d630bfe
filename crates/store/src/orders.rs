//! Order id generation and the tracking timeline view.

use chrono::{DateTime, Utc};

use monsoon_core::{OrderId, OrderStatus};

/// Generate an order id from the creation timestamp.
///
/// `ord_` plus the millisecond timestamp in base 36: unique enough for a
/// single cooperative session, and sortable by creation time.
#[must_use]
pub fn next_order_id(created_at: DateTime<Utc>) -> OrderId {
    let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
    OrderId::new(format!("ord_{}", base36(millis)))
}

fn base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }

    let mut digits = Vec::new();
    while value > 0 {
        let digit = u32::try_from(value % 36).unwrap_or(0);
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= 36;
    }
    digits.iter().rev().collect()
}

/// One step of the tracking timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub status: OrderStatus,
    /// Reached (this stage or an earlier one is the order's status).
    pub completed: bool,
    /// Exactly the order's current status.
    pub active: bool,
}

/// The tracking timeline for one order status.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// One step per stage, in stage order.
    pub steps: Vec<TimelineStep>,
    /// Fill percentage for the progress bar, 0–100.
    pub progress_percent: f64,
}

/// Compute the timeline for a status.
///
/// A status outside the stage list gets 0% progress and no completed or
/// active steps; its label still renders on the order card.
#[must_use]
pub fn timeline(status: OrderStatus) -> Timeline {
    let stage_index = status.stage_index();

    let steps = OrderStatus::STAGES
        .iter()
        .enumerate()
        .map(|(index, stage)| TimelineStep {
            status: *stage,
            completed: stage_index.is_some_and(|current| index <= current),
            active: stage_index == Some(index),
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let progress_percent = match stage_index {
        None | Some(0) => 0.0,
        Some(index) => index as f64 / (OrderStatus::STAGES.len() - 1) as f64 * 100.0,
    };

    Timeline {
        steps,
        progress_percent,
    }
}

/// Badge style for a status chip on the order card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Green,
    Yellow,
    Blue,
    Gray,
    Red,
}

/// Classify a status for its badge chip.
#[must_use]
pub const fn badge_style(status: OrderStatus) -> BadgeStyle {
    match status {
        OrderStatus::Delivered => BadgeStyle::Green,
        OrderStatus::OutForDelivery => BadgeStyle::Yellow,
        OrderStatus::Shipped => BadgeStyle::Blue,
        OrderStatus::Processing => BadgeStyle::Gray,
        OrderStatus::Unknown => BadgeStyle::Red,
    }
}
