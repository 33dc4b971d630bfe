//! Currency and date display helpers.

use chrono::NaiveDate;

use monsoon_core::Money;

/// Format an amount as Indian rupees: `₹` symbol, Indian-system digit
/// grouping, two decimal places (`₹1,50,000.00`).
#[must_use]
pub fn format_inr(amount: Money) -> String {
    let minor = amount.as_minor();
    let sign = if minor < 0 { "-" } else { "" };
    let magnitude = minor.unsigned_abs();
    let rupees = group_indian(&(magnitude / 100).to_string());
    let paise = magnitude % 100;
    format!("{sign}₹{rupees}.{paise:02}")
}

/// Display label for a calendar month, e.g. `"Jan 2026"`.
#[must_use]
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1).map_or_else(
        || format!("{month} {year}"),
        |date| date.format("%b %Y").to_string(),
    )
}

/// Indian-system grouping: last three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (mut rest, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail];
    while rest.len() > 2 {
        let (head, group) = rest.split_at(rest.len() - 2);
        groups.push(group);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(",")
}
