use crate::schema::{ReportRow, RowType};
use log::debug;

// Section and summary labels as they appear in upstream profit & loss
// reports.
pub const INCOME_SECTION: &str = "Income";
pub const OPERATING_EXPENSES_SECTION: &str = "Less Operating Expenses";
pub const TOTAL_INCOME: &str = "Total Income";
pub const GROSS_PROFIT: &str = "Gross Profit";
pub const TOTAL_OPERATING_EXPENSES: &str = "Total Operating Expenses";
pub const NET_PROFIT: &str = "Net Profit";

/// First top-level section whose title satisfies the predicate. The scan
/// is deliberately shallow: nested sections are the children's concern,
/// and callers treat `None` as "empty series", never as fatal.
pub fn find_section<'a, P>(rows: &'a [ReportRow], predicate: P) -> Option<&'a ReportRow>
where
    P: Fn(&str) -> bool,
{
    rows.iter()
        .find(|row| row.row_type == RowType::Section && predicate(row.title.as_deref().unwrap_or("")))
}

/// Case-insensitive substring lookup against a known section label.
pub fn find_section_titled<'a>(rows: &'a [ReportRow], title: &str) -> Option<&'a ReportRow> {
    let needle = title.to_lowercase();
    let found = find_section(rows, |candidate| candidate.to_lowercase().contains(&needle));
    if found.is_none() {
        debug!("section '{}' not found, substituting empty output", title);
    }
    found
}

/// First direct SummaryRow child of a section.
pub fn summary_row(section: &ReportRow) -> Option<&ReportRow> {
    section
        .rows
        .iter()
        .find(|row| row.row_type == RowType::SummaryRow)
}

/// Direct line-item children of a section, excluding total rows so that
/// per-category aggregation never double counts.
pub fn item_rows(section: &ReportRow) -> Vec<&ReportRow> {
    section
        .rows
        .iter()
        .filter(|row| row.row_type == RowType::Row && !row.label().starts_with("Total"))
        .collect()
}

/// Look up a named scalar total ("Total Income", "Net Profit", ...) and
/// return its first amount cell's raw value.
///
/// The search is intentionally shallow: summary rows inside each
/// top-level section first, then top-level non-section rows. A label
/// nested deeper than one level is not found; upstream reports keep their
/// named totals within these two levels.
pub fn find_value_by_title<'a>(rows: &'a [ReportRow], title: &str) -> Option<&'a str> {
    for row in rows {
        if row.row_type != RowType::Section {
            continue;
        }
        for child in &row.rows {
            if child.row_type == RowType::SummaryRow && child.label() == title {
                return amount_cell(child);
            }
        }
    }

    for row in rows {
        if row.row_type != RowType::Section && row.label() == title {
            return amount_cell(row);
        }
    }

    debug!("no row titled '{}' at searchable depth", title);
    None
}

fn amount_cell(row: &ReportRow) -> Option<&str> {
    row.cells.get(1).map(|cell| cell.value.as_str())
}
