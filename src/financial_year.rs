use crate::amount::parse_amount;
use crate::metrics::{growth_rate, profit_margin};
use crate::series::PeriodSeries;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One pre-grouped block of the financial-year payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYearSection {
    pub title: String,

    #[serde(default)]
    #[schemars(description = "Formatted per-period amounts, aligned positionally with the payload's headings.")]
    pub values: Vec<String>,
}

/// The financial-year report arrives pre-normalized: the upstream layer
/// has already grouped sections around gross and net profit and pulled
/// the two profit rows out as plain value sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYearReport {
    #[serde(default)]
    #[schemars(description = "Period labels, one per value column.")]
    pub headings: Vec<String>,

    #[serde(default)]
    pub gross_profit_sections: Vec<FinancialYearSection>,

    #[serde(default)]
    pub net_profit_sections: Vec<FinancialYearSection>,

    #[serde(default)]
    pub gross_profit_data_row: Vec<String>,

    #[serde(default)]
    pub net_profit_data_row: Vec<String>,
}

/// Financial-year view: the revenue section, each expense section as its
/// own series, their element-wise total, and the two profit trend lines.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialYearView {
    pub revenue: PeriodSeries,
    pub expense_sections: Vec<(String, PeriodSeries)>,
    pub total_expenses: PeriodSeries,
    pub gross_profit: PeriodSeries,
    pub net_profit: PeriodSeries,
    pub net_profit_growth: f64,
    pub net_profit_margin: f64,
}

impl FinancialYearView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_report(report: &FinancialYearReport) -> Self {
        let headings = &report.headings;

        let revenue = report
            .gross_profit_sections
            .iter()
            .find(|section| {
                let title = section.title.to_lowercase();
                title.contains("income") || title.contains("revenue")
            })
            .map(|section| series_from(headings, &section.values))
            .unwrap_or_else(|| {
                debug!("no income/revenue section in financial-year payload");
                PeriodSeries::new()
            });

        let expense_sections: Vec<(String, PeriodSeries)> = report
            .net_profit_sections
            .iter()
            .filter(|section| {
                let title = section.title.to_lowercase();
                title.contains("expense") || title.contains("operating")
            })
            .map(|section| (section.title.clone(), series_from(headings, &section.values)))
            .collect();

        let mut total_expenses = PeriodSeries::new();
        for (_, series) in &expense_sections {
            total_expenses.merge_add(series);
        }

        let gross_profit = series_from(headings, &report.gross_profit_data_row);
        let net_profit = series_from(headings, &report.net_profit_data_row);

        let net_profit_growth = net_profit
            .last_two()
            .map(|(previous, current)| growth_rate(current, previous))
            .unwrap_or(0.0);
        let net_profit_margin = profit_margin(net_profit.latest(), revenue.latest());

        Self {
            revenue,
            expense_sections,
            total_expenses,
            gross_profit,
            net_profit,
            net_profit_growth,
            net_profit_margin,
        }
    }
}

fn series_from(headings: &[String], values: &[String]) -> PeriodSeries {
    let parsed: Vec<f64> = values.iter().map(|v| parse_amount(v)).collect();
    PeriodSeries::from_labels_values(headings, &parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fy_section(title: &str, values: &[&str]) -> FinancialYearSection {
        FinancialYearSection {
            title: title.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn sample_report() -> FinancialYearReport {
        FinancialYearReport {
            headings: vec!["2022".to_string(), "2023".to_string(), "2024".to_string()],
            gross_profit_sections: vec![
                fy_section("Trading Income", &["10,000", "12,000", "15,000"]),
                fy_section("Cost of Sales", &["4,000", "4,500", "5,000"]),
            ],
            net_profit_sections: vec![
                fy_section("Operating Expenses", &["3,000", "3,200", "3,500"]),
                fy_section("Administrative Expenses", &["500", "550", "600"]),
                fy_section("Other Adjustments", &["0", "100", "0"]),
            ],
            gross_profit_data_row: vec!["6,000".to_string(), "7,500".to_string(), "10,000".to_string()],
            net_profit_data_row: vec!["2,500".to_string(), "3,750".to_string(), "5,900".to_string()],
        }
    }

    #[test]
    fn test_revenue_section_by_title() {
        let view = FinancialYearView::from_report(&sample_report());
        assert_eq!(view.revenue.get("2022"), Some(10000.0));
        assert_eq!(view.revenue.get("2024"), Some(15000.0));
    }

    #[test]
    fn test_expense_sections_filtered_by_title() {
        let view = FinancialYearView::from_report(&sample_report());

        let titles: Vec<&str> = view
            .expense_sections
            .iter()
            .map(|(title, _)| title.as_str())
            .collect();
        assert_eq!(titles, vec!["Operating Expenses", "Administrative Expenses"]);

        assert_eq!(view.total_expenses.get("2023"), Some(3750.0));
    }

    #[test]
    fn test_profit_trends_zip_headings() {
        let view = FinancialYearView::from_report(&sample_report());

        assert_eq!(view.gross_profit.labels(), vec!["2022", "2023", "2024"]);
        assert_eq!(view.net_profit.get("2024"), Some(5900.0));

        // 3,750 -> 5,900 between the two most recent years.
        assert!((view.net_profit_growth - 57.333333333333336).abs() < 1e-9);
        // 5,900 / 15,000 of the latest year.
        assert!((view.net_profit_margin - 39.333333333333336).abs() < 1e-9);
    }

    #[test]
    fn test_short_data_row_pads_with_zeros() {
        let mut report = sample_report();
        report.net_profit_data_row.truncate(1);

        let view = FinancialYearView::from_report(&report);
        assert_eq!(view.net_profit.get("2022"), Some(2500.0));
        assert_eq!(view.net_profit.get("2023"), Some(0.0));
        assert_eq!(view.net_profit.get("2024"), Some(0.0));
    }

    #[test]
    fn test_empty_report() {
        let view = FinancialYearView::from_report(&FinancialYearReport::default());
        assert!(view.revenue.is_empty());
        assert!(view.expense_sections.is_empty());
        assert_eq!(view.net_profit_growth, 0.0);
        assert_eq!(view.net_profit_margin, 0.0);
    }
}
