use crate::amount::parse_amount;
use crate::flatten::{flatten_rows, FlatRow};
use crate::metrics::Metric;
use crate::schema::{Report, ReportResponse};
use crate::sections::{
    find_value_by_title, GROSS_PROFIT, NET_PROFIT, TOTAL_INCOME, TOTAL_OPERATING_EXPENSES,
};
use serde::Serialize;

/// Single-period view: the full renderable row list plus the four named
/// totals the summary cards show. Missing totals surface as $0.00 metrics.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub rows: Vec<FlatRow>,
    pub total_income: Metric,
    pub gross_profit: Metric,
    pub total_operating_expenses: Metric,
    pub net_profit: Metric,
    pub is_profit: bool,
}

impl SummaryView {
    pub fn empty() -> Self {
        Self {
            is_profit: true,
            ..Self::default()
        }
    }

    pub fn from_response(response: &ReportResponse) -> Self {
        response
            .primary_report()
            .map(Self::from_report)
            .unwrap_or_else(Self::empty)
    }

    pub fn from_report(report: &Report) -> Self {
        let scalar = |title: &str| {
            let raw = find_value_by_title(&report.rows, title).unwrap_or("");
            Metric::new(parse_amount(raw))
        };

        let net_profit = scalar(NET_PROFIT);
        let is_profit = net_profit.value >= 0.0;

        Self {
            rows: flatten_rows(&report.rows),
            total_income: scalar(TOTAL_INCOME),
            gross_profit: scalar(GROSS_PROFIT),
            total_operating_expenses: scalar(TOTAL_OPERATING_EXPENSES),
            net_profit,
            is_profit,
        }
    }
}
