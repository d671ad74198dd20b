use crate::schema::{ReportRow, RowType};
use serde::Serialize;

/// One renderable line of a flattened report, values verbatim from the
/// source cells. Reformatting is left to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRow {
    pub label: String,
    pub values: Vec<String>,
    /// Section nesting depth, used for indentation.
    pub level: usize,
    pub is_header: bool,
    pub is_total: bool,
}

/// Flatten a report tree into display order.
///
/// Pre-order traversal: each section emits its own header entry first
/// (label from the section title, values from the section's own summary
/// cells when it carries any), then its children at the next depth, in
/// source document order. Header rows carry no data and are dropped.
/// A childless section still emits its header entry.
pub fn flatten_rows(rows: &[ReportRow]) -> Vec<FlatRow> {
    let mut out = Vec::new();
    flatten_into(rows, 0, &mut out);
    out
}

fn flatten_into(rows: &[ReportRow], depth: usize, out: &mut Vec<FlatRow>) {
    for row in rows {
        match row.row_type {
            RowType::Header => {}
            RowType::Section => {
                let label = row.label().to_string();
                out.push(FlatRow {
                    is_total: is_total_label(&label),
                    label,
                    values: row.cell_values(),
                    level: depth,
                    is_header: true,
                });
                flatten_into(&row.rows, depth + 1, out);
            }
            RowType::SummaryRow | RowType::Row => {
                let label = row.label().to_string();
                out.push(FlatRow {
                    is_total: row.row_type == RowType::SummaryRow || is_total_label(&label),
                    label,
                    values: row.cell_values(),
                    level: depth,
                    is_header: false,
                });
            }
        }
    }
}

fn is_total_label(label: &str) -> bool {
    label.contains("Total") || label.contains("Profit") || label.contains("Loss")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Cell;

    fn cell(value: &str) -> Cell {
        Cell {
            value: value.to_string(),
            attributes: vec![],
        }
    }

    fn data_row(row_type: RowType, cells: &[&str]) -> ReportRow {
        ReportRow {
            row_type,
            title: None,
            cells: cells.iter().map(|v| cell(v)).collect(),
            rows: vec![],
        }
    }

    fn section(title: &str, rows: Vec<ReportRow>) -> ReportRow {
        ReportRow {
            row_type: RowType::Section,
            title: Some(title.to_string()),
            cells: vec![],
            rows,
        }
    }

    #[test]
    fn test_preorder_document_ordering() {
        let rows = vec![
            section(
                "A",
                vec![
                    data_row(RowType::Row, &["a1", "1"]),
                    data_row(RowType::Row, &["a2", "2"]),
                ],
            ),
            section("B", vec![data_row(RowType::Row, &["b1", "3"])]),
        ];

        let flat = flatten_rows(&rows);
        let labels: Vec<&str> = flat.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "a1", "a2", "B", "b1"]);
    }

    #[test]
    fn test_depth_tracks_nesting() {
        let rows = vec![section(
            "Outer",
            vec![section("Inner", vec![data_row(RowType::Row, &["leaf", "9"])])],
        )];

        let flat = flatten_rows(&rows);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].level, 0);
        assert_eq!(flat[1].level, 1);
        assert_eq!(flat[2].level, 2);
        assert!(flat[0].is_header);
        assert!(flat[1].is_header);
        assert!(!flat[2].is_header);
    }

    #[test]
    fn test_header_rows_are_dropped() {
        let rows = vec![
            data_row(RowType::Header, &["", "Jan", "Feb"]),
            data_row(RowType::Row, &["Sales", "10", "20"]),
        ];

        let flat = flatten_rows(&rows);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].label, "Sales");
        assert_eq!(flat[0].values, vec!["10", "20"]);
    }

    #[test]
    fn test_total_marking() {
        let rows = vec![
            data_row(RowType::Row, &["Sales", "10"]),
            data_row(RowType::Row, &["Total Income", "10"]),
            data_row(RowType::SummaryRow, &["Closing balance", "10"]),
            data_row(RowType::Row, &["Net Profit", "4"]),
            data_row(RowType::Row, &["Net Loss", "-4"]),
        ];

        let flat = flatten_rows(&rows);
        assert!(!flat[0].is_total);
        assert!(flat[1].is_total);
        assert!(flat[2].is_total);
        assert!(flat[3].is_total);
        assert!(flat[4].is_total);
    }

    #[test]
    fn test_childless_section_still_emits_header() {
        let mut empty_with_cells = section("Depreciation", vec![]);
        empty_with_cells.cells = vec![cell("Depreciation"), cell("300")];

        let flat = flatten_rows(&[empty_with_cells]);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].label, "Depreciation");
        assert_eq!(flat[0].values, vec!["300"]);
        assert!(flat[0].is_header);
    }
}
