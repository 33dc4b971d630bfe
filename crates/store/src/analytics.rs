//! Dashboard aggregates over order history.
//!
//! Pure functions over the order slice. Calendar-relative views take
//! `now` as a parameter so callers control the clock and tests stay
//! deterministic. Monetary results that leave minor units (averages,
//! growth percentages) use [`Decimal`] for exact arithmetic.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use monsoon_core::{Money, Order};

use crate::format::month_label;

/// Headline dashboard metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSummary {
    /// Sum of all order totals, in minor units.
    pub total_revenue: Money,
    /// Number of orders placed.
    pub total_orders: usize,
    /// Revenue divided by order count, in major units (0 if no orders).
    pub average_order_value: Decimal,
    /// Month-over-month revenue growth, percent.
    pub revenue_growth_percent: Decimal,
}

/// One month's bucket in the chronological series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    /// Display label, e.g. `"Jan 2026"`.
    pub label: String,
    /// Orders placed in this month.
    pub orders: u32,
    /// Revenue in this month, minor units.
    pub revenue: Money,
}

/// One category's share of order revenue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRevenue {
    pub category: String,
    /// Sum of line totals for the category, minor units.
    pub revenue: Money,
}

/// Compute the headline metrics.
///
/// Growth compares the calendar month containing `now` with the month
/// before it. With zero previous-month revenue, growth is 100% when the
/// current month has revenue and 0% otherwise.
#[must_use]
pub fn summary(orders: &[Order], now: DateTime<Utc>) -> AnalyticsSummary {
    let total_revenue: Money = orders.iter().map(|order| order.total).sum();
    let total_orders = orders.len();

    let average_order_value = if total_orders == 0 {
        Decimal::ZERO
    } else {
        total_revenue.to_major() / Decimal::from(total_orders)
    };

    let current = month_revenue(orders, now.year(), now.month());
    let (previous_year, previous_month) = previous_calendar_month(now.year(), now.month());
    let previous = month_revenue(orders, previous_year, previous_month);

    let revenue_growth_percent = if previous.is_zero() {
        if current.is_zero() {
            Decimal::ZERO
        } else {
            Decimal::ONE_HUNDRED
        }
    } else {
        (current.to_major() - previous.to_major()) / previous.to_major() * Decimal::ONE_HUNDRED
    };

    AnalyticsSummary {
        total_revenue,
        total_orders,
        average_order_value,
        revenue_growth_percent,
    }
}

/// Group orders by calendar month, chronologically.
#[must_use]
pub fn monthly_series(orders: &[Order]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<(i32, u32), (u32, Money)> = BTreeMap::new();

    for order in orders {
        let key = (order.created_at.year(), order.created_at.month());
        let entry = buckets.entry(key).or_insert((0, Money::ZERO));
        entry.0 += 1;
        entry.1 += order.total;
    }

    buckets
        .into_iter()
        .map(|((year, month), (count, revenue))| MonthlyBucket {
            year,
            month,
            label: month_label(year, month),
            orders: count,
            revenue,
        })
        .collect()
}

/// Group order line items by category, highest revenue first.
///
/// Lines with a blank category fall into `"Other"`. Ties break
/// alphabetically so output is deterministic.
#[must_use]
pub fn category_breakdown(orders: &[Order]) -> Vec<CategoryRevenue> {
    let mut totals: HashMap<&str, Money> = HashMap::new();

    for order in orders {
        for item in &order.items {
            let category = if item.category.is_empty() {
                "Other"
            } else {
                item.category.as_str()
            };
            *totals.entry(category).or_insert(Money::ZERO) += item.total_amount;
        }
    }

    let mut breakdown: Vec<CategoryRevenue> = totals
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_owned(),
            revenue,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}

fn month_revenue(orders: &[Order], year: i32, month: u32) -> Money {
    orders
        .iter()
        .filter(|order| order.created_at.year() == year && order.created_at.month() == month)
        .map(|order| order.total)
        .sum()
}

const fn previous_calendar_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}
