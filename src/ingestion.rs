use crate::error::{ReportError, Result};
use crate::financial_year::FinancialYearReport;
use crate::schema::ReportResponse;
use log::info;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// Parse a fetched report payload. Malformed JSON is the only fatal case;
/// an empty `reports` array parses fine and flows through as the empty
/// state.
pub fn parse_response(json: &str) -> Result<ReportResponse> {
    let response: ReportResponse = serde_json::from_str(json)?;
    info!(
        "parsed report response '{}' from {} with {} report(s)",
        response.id,
        response.provider_name,
        response.reports.len()
    );
    Ok(response)
}

pub fn read_response<R: Read>(reader: R) -> Result<ReportResponse> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_financial_year(json: &str) -> Result<FinancialYearReport> {
    Ok(serde_json::from_str(json)?)
}

/// The pre-built report documents the edge layer serves, addressed as
/// `/{resource}/{businessId}/{variant}.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    BasicCurrentFinancialYear,
    MonthByMonthBreakdownLast12Months,
    VisualFriendlyPnlDashboardDisplay,
}

impl ReportVariant {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BasicCurrentFinancialYear => "basicCurrentFinancialYear",
            Self::MonthByMonthBreakdownLast12Months => "monthByMonthBreakdownLast12Months",
            Self::VisualFriendlyPnlDashboardDisplay => "visualFriendlyPnlDashboardDisplay",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.slug())
    }

    pub fn path(&self, resource: &str, business_id: &str) -> String {
        format!("/{}/{}/{}", resource, business_id, self.file_name())
    }
}

impl fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ReportVariant {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basicCurrentFinancialYear" => Ok(Self::BasicCurrentFinancialYear),
            "monthByMonthBreakdownLast12Months" => Ok(Self::MonthByMonthBreakdownLast12Months),
            "visualFriendlyPnlDashboardDisplay" => Ok(Self::VisualFriendlyPnlDashboardDisplay),
            other => Err(ReportError::UnknownVariant(other.to_string())),
        }
    }
}
