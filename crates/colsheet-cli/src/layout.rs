use serde::{Deserialize, Serialize};

use colsheet_core::{CellValue, ColumnDefinition, ColumnRange, SheetConfig, SheetError, Worksheet};

/// Input document: a column layout plus data rows keyed by column key
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default = "default_sheet_name")]
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

/// What the CLI prints for a layout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub name: String,
    pub header_rows: usize,
    pub row_count: u32,
    pub columns: Vec<serde_json::Value>,
    pub condensed: Vec<ColumnRange>,
}

impl Layout {
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the worksheet: columns first, then data rows below the header rows
    pub fn build(self, config: SheetConfig) -> Result<Worksheet, SheetError> {
        let mut sheet = Worksheet::with_config(self.name, config);
        sheet.set_columns(self.columns)?;

        let first_data_row = sheet.header_row_count() as u32 + 1;
        for (offset, record) in (0u32..).zip(self.rows) {
            let row = first_data_row + offset;
            for (key, value) in record {
                let Some(col) = sheet.column_by_key(&key).map(|c| c.number()) else {
                    tracing::warn!(key = %key, row, "no column for key, skipping value");
                    continue;
                };
                sheet.set_cell_value(row, col, json_to_cell(value))?;
            }
        }

        Ok(sheet)
    }
}

fn json_to_cell(value: serde_json::Value) -> CellValue {
    match value {
        serde_json::Value::Null => CellValue::Empty,
        serde_json::Value::Bool(b) => CellValue::Boolean(b),
        serde_json::Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
        serde_json::Value::String(s) => CellValue::Text(s),
        other => CellValue::Text(other.to_string()),
    }
}

impl LayoutReport {
    pub fn from_sheet(sheet: &Worksheet) -> Result<Self, SheetError> {
        let columns = sheet
            .columns()
            .map(|column| serde_json::from_str(&column.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: sheet.name.clone(),
            header_rows: sheet.header_row_count(),
            row_count: sheet.row_count(),
            columns,
            condensed: sheet.condensed_columns(),
        })
    }
}
