use crate::amount::format_amount;
use serde::Serialize;
use std::cmp::Ordering;

/// One itemized expense category, produced fresh per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseItem {
    pub name: String,
    pub value: f64,
}

impl ExpenseItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

pub const OTHER_EXPENSES_LABEL: &str = "Other Expenses";

/// Rank items descending by value and bucket everything past the top `n`
/// into a single synthetic "Other Expenses" entry appended last.
///
/// The sort is stable, so ties keep their original order. When the input
/// already fits within `n`, the sorted list comes back unchanged with no
/// synthetic entry.
pub fn top_n_with_other(items: &[ExpenseItem], n: usize) -> Vec<ExpenseItem> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));

    if ranked.len() <= n {
        return ranked;
    }

    let other_total: f64 = ranked[n..].iter().map(|item| item.value).sum();
    ranked.truncate(n);
    ranked.push(ExpenseItem::new(OTHER_EXPENSES_LABEL, other_total));
    ranked
}

/// Percentage change between two adjacent periods.
///
/// Returns 0.0 when `previous` is zero. That is a clamp to keep empty
/// periods from injecting Infinity/NaN into charts, not a true rate;
/// tests should treat the zero-base case as "no growth reported".
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Net profit as a percentage of revenue; 0.0 unless revenue is positive.
pub fn profit_margin(net_profit: f64, revenue: f64) -> f64 {
    if revenue > 0.0 {
        net_profit / revenue * 100.0
    } else {
        0.0
    }
}

/// A scalar metric paired with its USD rendering, ready for a summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub value: f64,
    pub display: String,
}

impl Metric {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            display: format_amount(value),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::new(0.0)
    }
}
