use crate::amount::parse_amount;
use crate::metrics::{growth_rate, profit_margin, top_n_with_other, ExpenseItem};
use crate::schema::{Report, ReportResponse, ReportRow};
use crate::sections::{
    find_section_titled, item_rows, summary_row, INCOME_SECTION, NET_PROFIT,
    OPERATING_EXPENSES_SECTION,
};
use crate::series::PeriodSeries;
use log::debug;
use serde::Serialize;

const TREND_EXPENSE_COUNT: usize = 5;

/// Quarterly/annual trend view: revenue, expense, and net-profit series,
/// "vs last period" growth figures, and the top expense categories both as
/// per-period trend lines and as a latest-period ranking with an Other
/// bucket.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTrendView {
    pub revenue: PeriodSeries,
    pub expenses: PeriodSeries,
    pub net_profit: PeriodSeries,
    pub revenue_growth: f64,
    pub expense_growth: f64,
    pub net_profit_growth: f64,
    pub net_profit_margin: f64,
    /// Top expense categories ranked by total across all periods, one
    /// series per category.
    pub expense_trends: Vec<(String, PeriodSeries)>,
    /// Latest-period expense ranking with the remainder bucketed as Other.
    pub top_expenses: Vec<ExpenseItem>,
}

/// Assemble the quarterly trend view from a fetched payload.
pub fn assemble_quarterly(response: &ReportResponse) -> PeriodTrendView {
    debug!("assembling quarterly trend view");
    PeriodTrendView::from_response(response)
}

/// Assemble the annual trend view. Same extraction contract as quarterly;
/// the upstream payload decides the period granularity.
pub fn assemble_annual(response: &ReportResponse) -> PeriodTrendView {
    debug!("assembling annual trend view");
    PeriodTrendView::from_response(response)
}

impl PeriodTrendView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_response(response: &ReportResponse) -> Self {
        response
            .primary_report()
            .map(Self::from_report)
            .unwrap_or_else(Self::empty)
    }

    pub fn from_report(report: &Report) -> Self {
        let rows = &report.rows;

        let revenue_values = section_summary_values(rows, INCOME_SECTION);
        let expense_values = section_summary_values(rows, OPERATING_EXPENSES_SECTION);
        let net_profit_values = net_profit_row(rows).map(parsed_values).unwrap_or_default();

        let labels = period_labels_or_synthesized(
            report,
            revenue_values
                .len()
                .max(expense_values.len())
                .max(net_profit_values.len()),
        );

        let revenue = PeriodSeries::from_labels_values(&labels, &revenue_values);
        let expenses = PeriodSeries::from_labels_values(&labels, &expense_values);
        let net_profit = PeriodSeries::from_labels_values(&labels, &net_profit_values);

        let expense_items = expense_item_values(rows);
        let expense_trends = ranked_trends(&expense_items, &labels);
        let top_expenses = latest_period_ranking(&expense_items);

        Self {
            revenue_growth: adjacent_growth(&revenue),
            expense_growth: adjacent_growth(&expenses),
            net_profit_growth: adjacent_growth(&net_profit),
            net_profit_margin: profit_margin(net_profit.latest(), revenue.latest()),
            revenue,
            expenses,
            net_profit,
            expense_trends,
            top_expenses,
        }
    }
}

fn adjacent_growth(series: &PeriodSeries) -> f64 {
    series
        .last_two()
        .map(|(previous, current)| growth_rate(current, previous))
        .unwrap_or(0.0)
}

fn section_summary_values(rows: &[ReportRow], title: &str) -> Vec<f64> {
    find_section_titled(rows, title)
        .and_then(summary_row)
        .map(parsed_values)
        .unwrap_or_default()
}

/// The row literally titled "Net Profit", wherever it sits as a direct
/// child of a top-level section.
fn net_profit_row(rows: &[ReportRow]) -> Option<&ReportRow> {
    rows.iter()
        .filter(|row| row.is_section())
        .flat_map(|section| section.rows.iter())
        .find(|row| row.label() == NET_PROFIT)
}

fn parsed_values(row: &ReportRow) -> Vec<f64> {
    row.value_cells()
        .iter()
        .map(|cell| parse_amount(&cell.value))
        .collect()
}

// Hand-built payloads occasionally omit the Period/Column fields; data
// rows without labels would otherwise zip to an empty series.
fn period_labels_or_synthesized(report: &Report, width: usize) -> Vec<String> {
    let labels = report.period_labels();
    if !labels.is_empty() {
        return labels;
    }
    if width > 0 {
        debug!("report carries no period fields, synthesizing {} labels", width);
    }
    (1..=width).map(|i| format!("Period {}", i)).collect()
}

fn expense_item_values(rows: &[ReportRow]) -> Vec<(String, Vec<f64>)> {
    find_section_titled(rows, OPERATING_EXPENSES_SECTION)
        .map(|section| {
            item_rows(section)
                .into_iter()
                .map(|row| (row.label().to_string(), parsed_values(row)))
                .collect()
        })
        .unwrap_or_default()
}

fn ranked_trends(items: &[(String, Vec<f64>)], labels: &[String]) -> Vec<(String, PeriodSeries)> {
    let mut ranked: Vec<&(String, Vec<f64>)> = items.iter().collect();
    ranked.sort_by(|a, b| {
        let total_a: f64 = a.1.iter().sum();
        let total_b: f64 = b.1.iter().sum();
        total_b
            .partial_cmp(&total_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(TREND_EXPENSE_COUNT)
        .map(|(name, values)| {
            (
                name.clone(),
                PeriodSeries::from_labels_values(labels, values),
            )
        })
        .collect()
}

fn latest_period_ranking(items: &[(String, Vec<f64>)]) -> Vec<ExpenseItem> {
    let latest: Vec<ExpenseItem> = items
        .iter()
        .map(|(name, values)| ExpenseItem::new(name.clone(), values.last().copied().unwrap_or(0.0)))
        .collect();
    top_n_with_other(&latest, TREND_EXPENSE_COUNT)
}
