use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Deref;

use crate::cell::{Cell, CellValue};
use crate::column::{Column, ColumnDefinition, ColumnHost, Header};
use crate::config::SheetConfig;
use crate::error::SheetError;
use crate::keys::KeyTable;
use crate::range::col_from_label;
use crate::row::{EachCellOptions, Row};
use crate::style::{Alignment, Border, Fill, Font, Style, StyleAttribute, StyleSlot};

/// Rows and key table of a worksheet, the part columns write through
#[derive(Debug, Clone)]
pub struct SheetBody {
    rows: BTreeMap<u32, Row>,
    keys: KeyTable,
    max_rows: u32,
}

impl SheetBody {
    fn new(max_rows: u32) -> Self {
        Self {
            rows: BTreeMap::new(),
            keys: KeyTable::new(),
            max_rows,
        }
    }

    fn last_row_number(&self) -> u32 {
        self.rows.keys().next_back().copied().unwrap_or(0)
    }

    fn row_mut(&mut self, number: u32) -> &mut Row {
        self.rows.entry(number).or_insert_with(|| Row::new(number))
    }
}

impl ColumnHost for SheetBody {
    fn cell_mut(&mut self, row: u32, col: u32) -> &mut Cell {
        self.row_mut(row).get_cell_mut(col)
    }

    fn find_cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
        self.rows.get_mut(&row)?.find_cell_mut(col)
    }

    fn for_each_row(&mut self, options: EachCellOptions, f: &mut dyn FnMut(&mut Row)) {
        if options.include_empty {
            for number in 1..=self.last_row_number() {
                f(self.row_mut(number));
            }
        } else {
            for row in self.rows.values_mut() {
                f(row);
            }
        }
    }

    fn keys(&self) -> &KeyTable {
        &self.keys
    }

    fn keys_mut(&mut self) -> &mut KeyTable {
        &mut self.keys
    }

    fn max_rows(&self) -> u32 {
        self.max_rows
    }
}

/// Mutable handle on one column of a worksheet.
///
/// Pairs the column with the worksheet body so header, key and style changes
/// reach the cells and key table immediately. Reads go through `Deref`.
pub struct ColumnMut<'a> {
    column: &'a mut Column,
    body: &'a mut SheetBody,
}

impl Deref for ColumnMut<'_> {
    type Target = Column;

    fn deref(&self) -> &Column {
        &*self.column
    }
}

impl ColumnMut<'_> {
    pub fn apply_definition(
        &mut self,
        definition: Option<ColumnDefinition>,
    ) -> Result<&mut Self, SheetError> {
        self.column.apply_definition(self.body, definition)?;
        Ok(self)
    }

    pub fn set_header(&mut self, header: impl Into<Header>) -> Result<&mut Self, SheetError> {
        self.column.set_header(self.body, header.into())?;
        Ok(self)
    }

    pub fn clear_header(&mut self) -> &mut Self {
        self.column.clear_header(self.body);
        self
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> Result<&mut Self, SheetError> {
        self.column.set_key(self.body, Some(key))?;
        Ok(self)
    }

    pub fn clear_key(&mut self) -> &mut Self {
        self.column.clear_key(self.body);
        self
    }

    pub fn set_width(&mut self, width: Option<f64>) -> &mut Self {
        self.column.set_width(width);
        self
    }

    pub fn set_style_attribute(&mut self, attribute: StyleAttribute) -> &mut Self {
        self.column.set_style_attribute(self.body, attribute);
        self
    }

    pub fn clear_style_attribute(&mut self, slot: StyleSlot) -> &mut Self {
        self.column.clear_style_attribute(self.body, slot);
        self
    }

    pub fn set_num_fmt(&mut self, num_fmt: impl Into<String>) -> &mut Self {
        self.column.set_num_fmt(self.body, num_fmt);
        self
    }

    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.column.set_font(self.body, font);
        self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.column.set_alignment(self.body, alignment);
        self
    }

    pub fn set_border(&mut self, border: Border) -> &mut Self {
        self.column.set_border(self.body, border);
        self
    }

    pub fn set_fill(&mut self, fill: Fill) -> &mut Self {
        self.column.set_fill(self.body, fill);
        self
    }

    pub fn each_cell<F: FnMut(&mut Cell, u32)>(&mut self, f: F) {
        self.column.each_cell(self.body, f);
    }

    pub fn each_cell_with<F: FnMut(&mut Cell, u32)>(&mut self, options: EachCellOptions, f: F) {
        self.column.each_cell_with(self.body, options, f);
    }
}

/// A run of adjacent, equivalent, non-default columns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRange {
    pub min: u32,
    pub max: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Style::is_plain")]
    pub style: Style,
}

impl ColumnRange {
    fn from_column(column: &Column) -> Self {
        Self {
            min: column.number(),
            max: column.number(),
            width: column.width(),
            style: column.style().clone(),
        }
    }
}

/// A worksheet: columns, sparse rows and the key table
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name (displayed in tab)
    pub name: String,
    config: SheetConfig,
    columns: BTreeMap<u32, Column>,
    body: SheetBody,
}

impl Worksheet {
    /// Create a new empty worksheet with the default configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SheetConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SheetConfig) -> Self {
        Self {
            name: name.into(),
            body: SheetBody::new(config.max_rows),
            config,
            columns: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    // =========================================================================
    // columns

    /// Add (or reuse) the column at `number`.
    ///
    /// `None` leaves a new column blank so fields can be set one by one.
    pub fn add_column(
        &mut self,
        number: u32,
        definition: Option<ColumnDefinition>,
    ) -> Result<ColumnMut<'_>, SheetError> {
        let column = match self.columns.entry(number) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let column = Column::new(number, &self.config)?;
                tracing::debug!(sheet = %self.name, column = number, "created column");
                entry.insert(column)
            }
        };

        if let Some(definition) = definition {
            column.apply_definition(&mut self.body, Some(definition))?;
        }

        Ok(ColumnMut {
            column,
            body: &mut self.body,
        })
    }

    /// Column at `number`, if it has been created
    pub fn column(&self, number: u32) -> Option<&Column> {
        self.columns.get(&number)
    }

    /// Column at `number`, created on first access
    pub fn column_mut(&mut self, number: u32) -> Result<ColumnMut<'_>, SheetError> {
        self.add_column(number, None)
    }

    pub fn column_by_key(&self, key: &str) -> Option<&Column> {
        self.body
            .keys
            .owner(key)
            .and_then(|number| self.columns.get(&number))
    }

    pub fn column_mut_by_key(&mut self, key: &str) -> Result<ColumnMut<'_>, SheetError> {
        let number = self
            .body
            .keys
            .owner(key)
            .ok_or_else(|| SheetError::UnknownKey(key.to_string()))?;
        self.column_mut(number)
    }

    /// Column by letter (`"A"`, `"AB"`), created on first access
    pub fn column_mut_by_letter(&mut self, letter: &str) -> Result<ColumnMut<'_>, SheetError> {
        let number = col_from_label(letter)
            .ok_or_else(|| SheetError::InvalidColumnLetter(letter.to_string()))?;
        self.column_mut(number)
    }

    /// Columns in number order
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.values()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn keys(&self) -> &KeyTable {
        &self.body.keys
    }

    /// Replace every column with `definitions[i]` at number `i + 1`.
    ///
    /// All columns are created first, then the definitions are applied in
    /// order. Header cells written by the old columns are left in place.
    /// The definitions are checked up front; on error the current columns
    /// and keys are untouched.
    pub fn set_columns(&mut self, definitions: Vec<ColumnDefinition>) -> Result<(), SheetError> {
        let count = u32::try_from(definitions.len()).unwrap_or(u32::MAX);
        if count > 0 {
            self.config.check_column(count)?;
        }

        let mut seen = KeyTable::new();
        for (number, definition) in (1u32..).zip(&definitions) {
            if let Some(key) = definition.key.as_deref().filter(|k| !k.is_empty()) {
                if let Some(owner) = seen.insert(key, number) {
                    return Err(SheetError::DuplicateKey {
                        key: key.to_string(),
                        owner,
                    });
                }
            }
            let lines = definition.header.as_ref().map_or(0, |h| h.lines().len());
            if lines > self.config.max_rows as usize {
                return Err(SheetError::InvalidRowNumber(
                    u32::try_from(lines).unwrap_or(u32::MAX),
                ));
            }
        }

        let mut columns = BTreeMap::new();
        for number in 1..=count {
            columns.insert(number, Column::new(number, &self.config)?);
        }

        self.body.keys.clear();
        self.columns = columns;

        for (number, definition) in (1u32..).zip(definitions) {
            if let Some(column) = self.columns.get_mut(&number) {
                column.apply_definition(&mut self.body, Some(definition))?;
            }
        }

        tracing::debug!(sheet = %self.name, columns = self.columns.len(), "replaced columns");
        Ok(())
    }

    /// Number of header rows: the most header lines any column has
    pub fn header_row_count(&self) -> usize {
        self.columns
            .values()
            .map(Column::header_count)
            .max()
            .unwrap_or(0)
    }

    /// Merge adjacent equivalent columns into ranges, skipping default columns
    pub fn condensed_columns(&self) -> Vec<ColumnRange> {
        let default_width = self.config.default_column_width;
        let mut ranges: Vec<ColumnRange> = Vec::new();
        let mut previous: Option<&Column> = None;

        for column in self.columns.values() {
            if column.is_default_for(default_width) {
                previous = None;
                continue;
            }

            let extends = match (ranges.last(), previous) {
                (Some(range), Some(prev)) => {
                    range.max + 1 == column.number() && prev.equivalent_to(column)
                }
                _ => false,
            };

            match ranges.last_mut() {
                Some(range) if extends => range.max = column.number(),
                _ => ranges.push(ColumnRange::from_column(column)),
            }
            previous = Some(column);
        }

        ranges
    }

    /// Drop default columns that carry neither key nor header
    ///
    /// Returns the number of columns removed.
    pub fn prune_default_columns(&mut self) -> usize {
        let default_width = self.config.default_column_width;
        let before = self.columns.len();
        self.columns.retain(|_, column| {
            !(column.is_default_for(default_width)
                && column.key().is_none()
                && column.headers().is_empty())
        });

        let removed = before - self.columns.len();
        if removed > 0 {
            tracing::debug!(sheet = %self.name, removed, "pruned default columns");
        }
        removed
    }

    // =========================================================================
    // rows and cells

    pub fn row(&self, number: u32) -> Option<&Row> {
        self.body.rows.get(&number)
    }

    /// Rows in number order
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.body.rows.values()
    }

    /// Number of the last row in use
    pub fn row_count(&self) -> u32 {
        self.body.last_row_number()
    }

    pub fn each_row<F: FnMut(&mut Row)>(&mut self, options: EachCellOptions, mut f: F) {
        self.body.for_each_row(options, &mut f);
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.body.rows.get(&row)?.find_cell(col)
    }

    /// Get a cell, creating it if it doesn't exist
    pub fn cell_mut(&mut self, row: u32, col: u32) -> Result<&mut Cell, SheetError> {
        self.config.check_row(row)?;
        self.config.check_column(col)?;
        Ok(self.body.cell_mut(row, col))
    }

    pub fn set_cell_value(
        &mut self,
        row: u32,
        col: u32,
        value: impl Into<CellValue>,
    ) -> Result<(), SheetError> {
        self.cell_mut(row, col)?.set_value(value);
        Ok(())
    }

    /// Value at a coordinate (`Empty` for missing cells)
    pub fn cell_value(&self, row: u32, col: u32) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.cell(row, col).map(|c| &c.value).unwrap_or(EMPTY)
    }

    // =========================================================================
    // serialization

    /// Serialize the worksheet to JSON
    pub fn to_json(&self) -> Result<String, SheetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the worksheet to pretty JSON
    pub fn to_json_pretty(&self) -> Result<String, SheetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a worksheet from JSON, rebuilding the key table
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for Worksheet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct WorksheetRef<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            columns: Vec<&'a Column>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            rows: Vec<&'a Row>,
        }

        WorksheetRef {
            name: &self.name,
            columns: self.columns.values().collect(),
            rows: self.body.rows.values().collect(),
        }
        .serialize(serializer)
    }
}

// Custom Deserialize implementation to rebuild the key table after deserialization
impl<'de> Deserialize<'de> for Worksheet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        struct WorksheetHelper {
            name: String,
            #[serde(default)]
            columns: Vec<Column>,
            #[serde(default)]
            rows: Vec<Row>,
        }

        let helper = WorksheetHelper::deserialize(deserializer)?;
        let mut sheet = Worksheet::new(helper.name);

        for row in helper.rows {
            sheet.config.check_row(row.number).map_err(D::Error::custom)?;
            if sheet.body.rows.contains_key(&row.number) {
                return Err(D::Error::custom(format!("duplicate row {}", row.number)));
            }
            sheet.body.rows.insert(row.number, row);
        }

        for column in helper.columns {
            let number = sheet.config.check_column(column.number()).map_err(D::Error::custom)?;
            if sheet.columns.contains_key(&number) {
                return Err(D::Error::custom(format!("duplicate column {number}")));
            }
            if let Some(key) = column.key() {
                if let Some(owner) = sheet.body.keys.insert(key, number) {
                    return Err(D::Error::custom(SheetError::DuplicateKey {
                        key: key.to_string(),
                        owner,
                    }));
                }
            }
            sheet.columns.insert(number, column);
        }

        Ok(sheet)
    }
}
