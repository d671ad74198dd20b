use crate::flatten::{flatten_rows, FlatRow};
use crate::schema::{Report, ReportResponse};
use chrono::NaiveDate;
use serde::Serialize;

/// Month-by-month breakdown: every row flattened with its section nesting
/// preserved, plus the period labels heading each value column.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdownView {
    pub period_labels: Vec<String>,
    pub rows: Vec<FlatRow>,
}

impl MonthlyBreakdownView {
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
        Self {
            period_labels: report.period_labels(),
            rows: flatten_rows(&report.rows),
        }
    }

    /// Case-insensitive substring filter over the label and every period
    /// value. A blank query keeps everything.
    pub fn filter(&self, query: &str) -> Vec<FlatRow> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.clone();
        }

        self.rows
            .iter()
            .filter(|row| {
                row.label.to_lowercase().contains(&needle)
                    || row.values.iter().any(|v| v.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Build the CSV export for the filtered rows. Header row is
    /// `Item,<period labels>`; values go out verbatim as already-formatted
    /// display strings, with no re-escaping of embedded commas.
    pub fn to_csv(&self, query: &str) -> String {
        let mut header = vec!["Item".to_string()];
        header.extend(self.period_labels.iter().cloned());

        let mut lines = vec![header.join(",")];
        for row in self.filter(query) {
            let mut fields = vec![row.label];
            fields.extend(row.values);
            lines.push(fields.join(","));
        }

        lines.join("\n")
    }
}

/// Download name for the CSV export, e.g. `monthly_breakdown_2024-03-01.csv`.
/// The caller supplies the date; the core reads no clocks.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("monthly_breakdown_{}.csv", date.format("%Y-%m-%d"))
}
