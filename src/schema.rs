use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum RowType {
    #[schemars(description = "Column heading row. Carries no report data and is skipped by every consumer.")]
    Header,

    #[schemars(
        description = "Grouping row (e.g. 'Income', 'Less Operating Expenses') that contains child rows. The only row kind that nests."
    )]
    Section,

    #[schemars(description = "Aggregate total row for its enclosing section (e.g. 'Total Income').")]
    SummaryRow,

    #[schemars(description = "Leaf line-item row for a single account or category.")]
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellAttribute {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default)]
    #[schemars(
        description = "Display string. The first cell of a row is its label; later cells are one-per-period amounts formatted with thousands separators and an optional leading minus sign."
    )]
    pub value: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<CellAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub row_type: RowType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Section label. Present on Section rows; other kinds label themselves via their first cell.")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<Cell>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Nested child rows. Only Section rows carry these; nesting depth is unbounded.")]
    pub rows: Vec<ReportRow>,
}

impl ReportRow {
    /// The row's display label. Sections label themselves via `title`,
    /// everything else via the first cell.
    pub fn label(&self) -> &str {
        let first_cell = self.cells.first().map(|c| c.value.as_str());
        match self.row_type {
            RowType::Section => self.title.as_deref().or(first_cell).unwrap_or(""),
            _ => first_cell.or(self.title.as_deref()).unwrap_or(""),
        }
    }

    /// The per-period amount cells, i.e. everything after the label cell.
    pub fn value_cells(&self) -> &[Cell] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// Raw per-period display strings, taken verbatim from the cells.
    pub fn cell_values(&self) -> Vec<String> {
        self.value_cells().iter().map(|c| c.value.clone()).collect()
    }

    pub fn is_section(&self) -> bool {
        self.row_type == RowType::Section
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportField {
    #[schemars(description = "Metadata key. 'Period' and 'Column' entries carry the period labels for the report's value columns.")]
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub report_id: String,

    #[serde(default)]
    pub report_name: String,

    #[serde(default)]
    pub report_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ReportField>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Period labels in column order, taken from the 'Period'/'Column'
    /// metadata fields. Column order is the alignment contract for every
    /// data row in the same report.
    pub fn period_labels(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.id == "Period" || f.id == "Column")
            .map(|f| f.value.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    #[schemars(description = "Upstream fetch status, e.g. 'OK'.")]
    pub status: String,

    #[serde(default)]
    pub provider_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(description = "Reports in the payload. Empty means 'no data available', a recoverable state rather than an error.")]
    pub reports: Vec<Report>,
}

impl ReportResponse {
    pub fn has_data(&self) -> bool {
        !self.reports.is_empty()
    }

    /// The report every view is assembled from. `None` is the empty state.
    pub fn primary_report(&self) -> Option<&Report> {
        self.reports.first()
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ReportResponse)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
