//! # P&L Report Builder
//!
//! A library for reshaping the nested, heterogeneous profit & loss report
//! trees returned by accounting integrations into normalized, chart-ready
//! view models.
//!
//! ## Core Concepts
//!
//! - **Report Tree**: the provider payload, recursive rows tagged by kind
//!   (Header, Section, SummaryRow, Row) with amounts as display strings
//! - **Period Series**: an ordered period-label to value mapping, the common
//!   currency between section extraction and charting
//! - **View Models**: one flat, serializable shape per presentation view
//!   (single period, monthly breakdown, quarterly, annual, financial year),
//!   rebuilt from scratch on every payload
//! - **Degraded, never fatal**: missing sections, blank cells, and empty
//!   payloads come back as zero-filled output, not errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use pnl_report_builder::*;
//!
//! let response = parse_response(&fetched_json)?;
//!
//! let dashboard = build_dashboard(&response);
//! println!("net profit: {}", dashboard.summary.net_profit.display);
//!
//! let csv = dashboard.monthly.to_csv("");
//! ```

pub mod amount;
pub mod error;
pub mod financial_year;
pub mod flatten;
pub mod ingestion;
pub mod metrics;
pub mod monthly;
pub mod periodic;
pub mod schema;
pub mod sections;
pub mod series;
pub mod summary;

pub use amount::{format_amount, format_amount_in, parse_amount};
pub use error::{ReportError, Result};
pub use financial_year::{FinancialYearReport, FinancialYearSection, FinancialYearView};
pub use flatten::{flatten_rows, FlatRow};
pub use ingestion::{
    parse_financial_year, parse_response, read_response, ReportVariant,
};
pub use metrics::{
    growth_rate, profit_margin, top_n_with_other, ExpenseItem, Metric, OTHER_EXPENSES_LABEL,
};
pub use monthly::{export_file_name, MonthlyBreakdownView};
pub use periodic::{assemble_annual, assemble_quarterly, PeriodTrendView};
pub use schema::{
    Cell, CellAttribute, Report, ReportField, ReportResponse, ReportRow, RowType,
};
pub use sections::{
    find_section, find_section_titled, find_value_by_title, item_rows, summary_row,
    GROSS_PROFIT, INCOME_SECTION, NET_PROFIT, OPERATING_EXPENSES_SECTION, TOTAL_INCOME,
    TOTAL_OPERATING_EXPENSES,
};
pub use series::PeriodSeries;
pub use summary::SummaryView;

use log::info;
use serde::Serialize;

/// Everything the P&L dashboard renders from one fetched payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlDashboard {
    pub summary: SummaryView,
    pub monthly: MonthlyBreakdownView,
    pub trend: PeriodTrendView,
}

impl PnlDashboard {
    pub fn from_response(response: &ReportResponse) -> Self {
        info!(
            "building dashboard views from response '{}' ({} report(s))",
            response.id,
            response.reports.len()
        );

        Self {
            summary: SummaryView::from_response(response),
            monthly: MonthlyBreakdownView::from_response(response),
            trend: PeriodTrendView::from_response(response),
        }
    }
}

pub fn build_dashboard(response: &ReportResponse) -> PnlDashboard {
    PnlDashboard::from_response(response)
}
