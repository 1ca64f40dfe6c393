//! Column metadata and the cascades that keep a worksheet in step with it.
//!
//! A [`Column`] owns its header, key, width and style. Mutations that affect
//! other parts of the worksheet (header cells, the key table, per-cell style
//! slots) take the worksheet side as a [`ColumnHost`] so the fan-out is
//! visible at the call site.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::{Cell, CellValue};
use crate::config::{SheetConfig, DEFAULT_COLUMN_WIDTH};
use crate::error::SheetError;
use crate::keys::KeyTable;
use crate::range::col_to_label;
use crate::row::{EachCellOptions, Row};
use crate::style::{Alignment, Border, Fill, Font, Style, StyleAttribute, StyleSlot};

/// Worksheet-side capabilities a column writes through
pub trait ColumnHost {
    /// Get a cell, creating it (and its row) if it doesn't exist
    fn cell_mut(&mut self, row: u32, col: u32) -> &mut Cell;

    /// Look up a cell without creating it
    fn find_cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell>;

    /// Visit rows in row-number order.
    ///
    /// With `include_empty`, every row from 1 to the last used row is visited,
    /// materializing the missing ones.
    fn for_each_row(&mut self, options: EachCellOptions, f: &mut dyn FnMut(&mut Row));

    fn keys(&self) -> &KeyTable;

    fn keys_mut(&mut self) -> &mut KeyTable;

    /// Highest row number cells may be written to
    fn max_rows(&self) -> u32;
}

/// Header text: one line, or one line per header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Header {
    Single(String),
    Multi(Vec<String>),
}

impl Header {
    /// The header as an ordered list of lines (row 1 first)
    pub fn lines(&self) -> &[String] {
        match self {
            Header::Single(text) => std::slice::from_ref(text),
            Header::Multi(lines) => lines,
        }
    }
}

impl From<&str> for Header {
    fn from(text: &str) -> Self {
        Header::Single(text.to_string())
    }
}

impl From<String> for Header {
    fn from(text: String) -> Self {
        Header::Single(text)
    }
}

impl From<Vec<String>> for Header {
    fn from(lines: Vec<String>) -> Self {
        Header::Multi(lines)
    }
}

impl From<Vec<&str>> for Header {
    fn from(lines: Vec<&str>) -> Self {
        Header::Multi(lines.into_iter().map(str::to_string).collect())
    }
}

/// Aggregate view of a column's header, key, width and style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl ColumnDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set header
    pub fn with_header(mut self, header: impl Into<Header>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Builder pattern: set key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Builder pattern: set width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Builder pattern: set style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Metadata for one worksheet column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(default)]
    style: Style,
}

impl Column {
    /// Create a blank column; fails if `number` is outside `1..=max_columns`
    pub fn new(number: u32, config: &SheetConfig) -> Result<Self, SheetError> {
        let number = config.check_column(number)?;
        Ok(Self {
            number,
            header: None,
            key: None,
            width: None,
            style: Style::default(),
        })
    }

    /// Create a column and apply a definition to it
    pub fn with_definition<H: ColumnHost + ?Sized>(
        host: &mut H,
        number: u32,
        config: &SheetConfig,
        definition: ColumnDefinition,
    ) -> Result<Self, SheetError> {
        let mut column = Self::new(number, config)?;
        column.apply_definition(host, Some(definition))?;
        Ok(column)
    }

    /// 1-based column number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Column letter(s), e.g. `A`, `AB`
    pub fn letter(&self) -> String {
        col_to_label(self.number)
    }

    /// Snapshot of header, key, width and style
    pub fn definition(&self) -> ColumnDefinition {
        ColumnDefinition {
            header: self.header.clone(),
            key: self.key.clone(),
            width: self.width,
            style: Some(self.style.clone()),
        }
    }

    /// Replace header, key, width and style in one step.
    ///
    /// `None` clears all four. The header is applied last so header cells are
    /// written after the style is in place. On a key conflict or a header
    /// taller than the sheet nothing changes.
    pub fn apply_definition<H: ColumnHost + ?Sized>(
        &mut self,
        host: &mut H,
        definition: Option<ColumnDefinition>,
    ) -> Result<(), SheetError> {
        match definition {
            Some(definition) => {
                if let Some(header) = definition.header.as_ref() {
                    check_header_rows(host, header)?;
                }
                self.set_key(host, definition.key)?;
                self.width = definition.width;
                self.style = definition.style.unwrap_or_default();
                match definition.header {
                    Some(header) => self.set_header(host, header)?,
                    None => self.clear_header(host),
                }
            }
            None => {
                self.clear_key(host);
                self.blank_header_cells(host, 0);
                self.header = None;
                self.width = None;
                self.style = Style::default();
            }
        }
        tracing::debug!(column = self.number, "applied column definition");
        Ok(())
    }

    // =========================================================================
    // header

    /// Raw stored header
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Header lines, empty when no header is set
    pub fn headers(&self) -> &[String] {
        self.header.as_ref().map(Header::lines).unwrap_or(&[])
    }

    pub fn header_count(&self) -> usize {
        self.headers().len()
    }

    /// Set the header and write each line into rows `1..=n` of this column.
    ///
    /// Rows this column previously wrote beyond the new line count are
    /// blanked. Fails without writing anything if the header has more lines
    /// than the host has rows.
    pub fn set_header<H: ColumnHost + ?Sized>(
        &mut self,
        host: &mut H,
        header: Header,
    ) -> Result<(), SheetError> {
        check_header_rows(host, &header)?;
        self.write_header(host, header);
        Ok(())
    }

    /// Blank the header cells this column wrote and store an empty header
    pub fn clear_header<H: ColumnHost + ?Sized>(&mut self, host: &mut H) {
        self.write_header(host, Header::Multi(Vec::new()));
    }

    fn write_header<H: ColumnHost + ?Sized>(&mut self, host: &mut H, header: Header) {
        let keep = header.lines().len();
        self.blank_header_cells(host, keep);

        for (index, text) in header.lines().iter().enumerate() {
            host.cell_mut(index as u32 + 1, self.number)
                .set_value(CellValue::Text(text.clone()));
        }
        tracing::trace!(column = self.number, lines = keep, "wrote header cells");

        self.header = Some(header);
    }

    // Only cells that already exist are touched.
    fn blank_header_cells<H: ColumnHost + ?Sized>(&self, host: &mut H, keep: usize) {
        for row in (keep + 1)..=self.header_count() {
            if let Some(cell) = host.find_cell_mut(row as u32, self.number) {
                cell.set_value(CellValue::Empty);
            }
        }
    }

    // =========================================================================
    // key

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Set or clear the key, keeping the host's key table in step.
    ///
    /// An empty key clears. A key owned by another column is rejected and
    /// leaves both columns untouched.
    pub fn set_key<H, K>(&mut self, host: &mut H, key: Option<K>) -> Result<(), SheetError>
    where
        H: ColumnHost + ?Sized,
        K: Into<String>,
    {
        let key = key.map(Into::into).filter(|k| !k.is_empty());

        if let Some(new_key) = key.as_deref() {
            if let Some(owner) = host.keys().owner(new_key) {
                if owner != self.number {
                    tracing::warn!(key = new_key, owner, column = self.number, "duplicate column key");
                    return Err(SheetError::DuplicateKey {
                        key: new_key.to_string(),
                        owner,
                    });
                }
            }
        }

        self.clear_key(host);

        if let Some(new_key) = key.as_deref() {
            host.keys_mut().insert(new_key, self.number);
            tracing::debug!(key = new_key, column = self.number, "registered column key");
        }
        self.key = key;
        Ok(())
    }

    /// Drop the key and its key-table entry
    pub fn clear_key<H: ColumnHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(old_key) = self.key.take() {
            if host.keys().owner(&old_key) == Some(self.number) {
                host.keys_mut().remove(&old_key);
            }
        }
    }

    // =========================================================================
    // width

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn set_width(&mut self, width: Option<f64>) {
        self.width = width;
    }

    // =========================================================================
    // styles

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_attribute(&self, slot: StyleSlot) -> Option<StyleAttribute> {
        self.style.get(slot)
    }

    pub fn num_fmt(&self) -> Option<&str> {
        self.style.num_fmt.as_deref()
    }

    pub fn font(&self) -> Option<&Font> {
        self.style.font.as_ref()
    }

    pub fn alignment(&self) -> Option<&Alignment> {
        self.style.alignment.as_ref()
    }

    pub fn border(&self) -> Option<&Border> {
        self.style.border.as_ref()
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.style.fill.as_ref()
    }

    /// Set a style slot on the column and on every cell it currently has.
    ///
    /// Cells are not created; rows without a cell here are skipped.
    pub fn set_style_attribute<H: ColumnHost + ?Sized>(
        &mut self,
        host: &mut H,
        attribute: StyleAttribute,
    ) {
        let slot = attribute.slot();
        self.style.set(attribute.clone());

        let mut touched = 0usize;
        self.each_cell(host, |cell, _| {
            cell.apply_style(attribute.clone());
            touched += 1;
        });
        tracing::trace!(column = self.number, %slot, touched, "applied column style");
    }

    /// Unset a style slot on the column and on every cell it currently has
    pub fn clear_style_attribute<H: ColumnHost + ?Sized>(&mut self, host: &mut H, slot: StyleSlot) {
        self.style.clear(slot);

        let mut touched = 0usize;
        self.each_cell(host, |cell, _| {
            cell.clear_style(slot);
            touched += 1;
        });
        tracing::trace!(column = self.number, %slot, touched, "cleared column style");
    }

    pub fn set_num_fmt<H: ColumnHost + ?Sized>(&mut self, host: &mut H, num_fmt: impl Into<String>) {
        self.set_style_attribute(host, StyleAttribute::NumFmt(num_fmt.into()));
    }

    pub fn set_font<H: ColumnHost + ?Sized>(&mut self, host: &mut H, font: Font) {
        self.set_style_attribute(host, StyleAttribute::Font(font));
    }

    pub fn set_alignment<H: ColumnHost + ?Sized>(&mut self, host: &mut H, alignment: Alignment) {
        self.set_style_attribute(host, StyleAttribute::Alignment(alignment));
    }

    pub fn set_border<H: ColumnHost + ?Sized>(&mut self, host: &mut H, border: Border) {
        self.set_style_attribute(host, StyleAttribute::Border(border));
    }

    pub fn set_fill<H: ColumnHost + ?Sized>(&mut self, host: &mut H, fill: Fill) {
        self.set_style_attribute(host, StyleAttribute::Fill(fill));
    }

    // =========================================================================
    // queries

    /// Same width and same style
    pub fn equivalent_to(&self, other: &Column) -> bool {
        self.width == other.width && self.style == other.style
    }

    /// True when the column needs no explicit persistence
    pub fn is_default(&self) -> bool {
        self.is_default_for(DEFAULT_COLUMN_WIDTH)
    }

    /// Like [`Column::is_default`], against a worksheet-specific default width
    pub fn is_default_for(&self, default_width: f64) -> bool {
        if let Some(width) = self.width {
            if width != default_width {
                return false;
            }
        }
        self.style.is_plain()
    }

    // =========================================================================
    // cell iteration

    /// Visit the cells that already exist in this column
    pub fn each_cell<H, F>(&self, host: &mut H, f: F)
    where
        H: ColumnHost + ?Sized,
        F: FnMut(&mut Cell, u32),
    {
        self.each_cell_with(host, EachCellOptions::default(), f);
    }

    /// Visit this column's cells row by row.
    ///
    /// With `include_empty`, a cell is created for every row up to the last
    /// used row; otherwise rows without a cell here are skipped.
    pub fn each_cell_with<H, F>(&self, host: &mut H, options: EachCellOptions, mut f: F)
    where
        H: ColumnHost + ?Sized,
        F: FnMut(&mut Cell, u32),
    {
        let col = self.number;
        host.for_each_row(options, &mut |row: &mut Row| {
            let row_number = row.number;
            if options.include_empty {
                f(row.get_cell_mut(col), row_number);
            } else if let Some(cell) = row.find_cell_mut(col) {
                f(cell, row_number);
            }
        });
    }
}

fn check_header_rows<H: ColumnHost + ?Sized>(host: &H, header: &Header) -> Result<(), SheetError> {
    let lines = header.lines().len();
    if lines > host.max_rows() as usize {
        return Err(SheetError::InvalidRowNumber(
            u32::try_from(lines).unwrap_or(u32::MAX),
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct ColumnSnapshot<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<&'a [String]>,
}

/// JSON snapshot `{key, width, headers}` for debugging; empty headers are omitted
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.headers();
        let snapshot = ColumnSnapshot {
            key: self.key(),
            width: self.width,
            headers: (!headers.is_empty()).then_some(headers),
        };
        let json = serde_json::to_string(&snapshot).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, PatternType};
    use std::collections::BTreeMap;

    /// Bare host over a row map
    struct GridHost {
        rows: BTreeMap<u32, Row>,
        keys: KeyTable,
        max_rows: u32,
    }

    impl Default for GridHost {
        fn default() -> Self {
            Self {
                rows: BTreeMap::new(),
                keys: KeyTable::new(),
                max_rows: SheetConfig::default().max_rows,
            }
        }
    }

    impl ColumnHost for GridHost {
        fn cell_mut(&mut self, row: u32, col: u32) -> &mut Cell {
            self.rows
                .entry(row)
                .or_insert_with(|| Row::new(row))
                .get_cell_mut(col)
        }

        fn find_cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
            self.rows.get_mut(&row)?.find_cell_mut(col)
        }

        fn for_each_row(&mut self, options: EachCellOptions, f: &mut dyn FnMut(&mut Row)) {
            if options.include_empty {
                let last = self.rows.keys().next_back().copied().unwrap_or(0);
                for number in 1..=last {
                    f(self.rows.entry(number).or_insert_with(|| Row::new(number)));
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

    impl GridHost {
        fn value(&self, row: u32, col: u32) -> Option<&CellValue> {
            self.rows.get(&row)?.find_cell(col).map(|c| &c.value)
        }
    }

    fn column(number: u32) -> Column {
        Column::new(number, &SheetConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range_numbers() {
        let config = SheetConfig::default();
        assert!(matches!(
            Column::new(0, &config),
            Err(SheetError::InvalidColumnNumber(0))
        ));
        assert!(Column::new(config.max_columns + 1, &config).is_err());
        assert_eq!(column(28).letter(), "AB");
    }

    #[test]
    fn test_single_header_writes_row_one() {
        let mut host = GridHost::default();
        let mut col = column(2);

        col.set_header(&mut host, "Name".into()).unwrap();

        assert_eq!(col.headers(), ["Name".to_string()]);
        assert_eq!(col.header_count(), 1);
        assert_eq!(host.value(1, 2), Some(&CellValue::from("Name")));
    }

    #[test]
    fn test_multi_header_writes_each_row() {
        let mut host = GridHost::default();
        let mut col = column(3);

        col.set_header(&mut host, vec!["Q1", "Revenue"].into()).unwrap();

        assert_eq!(col.header_count(), 2);
        assert_eq!(host.value(1, 3), Some(&CellValue::from("Q1")));
        assert_eq!(host.value(2, 3), Some(&CellValue::from("Revenue")));
    }

    #[test]
    fn test_clearing_header_blanks_written_cells() {
        let mut host = GridHost::default();
        let mut col = column(1);
        col.set_header(&mut host, vec!["A", "B"].into()).unwrap();

        col.clear_header(&mut host);

        assert_eq!(col.header(), Some(&Header::Multi(Vec::new())));
        assert!(col.headers().is_empty());
        assert_eq!(host.value(1, 1), Some(&CellValue::Empty));
        assert_eq!(host.value(2, 1), Some(&CellValue::Empty));
    }

    #[test]
    fn test_shorter_header_blanks_leftover_rows() {
        let mut host = GridHost::default();
        let mut col = column(1);
        col.set_header(&mut host, vec!["A", "B"].into()).unwrap();
        col.set_header(&mut host, "Only".into()).unwrap();

        assert_eq!(host.value(1, 1), Some(&CellValue::from("Only")));
        assert_eq!(host.value(2, 1), Some(&CellValue::Empty));
    }

    #[test]
    fn test_header_taller_than_sheet_rejected() {
        let mut host = GridHost {
            max_rows: 1,
            ..GridHost::default()
        };
        let mut col = column(1);
        col.set_header(&mut host, "Kept".into()).unwrap();

        let err = col
            .set_header(&mut host, vec!["a", "b"].into())
            .unwrap_err();

        assert!(matches!(err, SheetError::InvalidRowNumber(2)));
        assert_eq!(col.headers(), ["Kept".to_string()]);
        assert!(!host.rows.contains_key(&2));
        assert_eq!(host.value(1, 1), Some(&CellValue::from("Kept")));
    }

    #[test]
    fn test_tall_header_definition_changes_nothing() {
        let mut host = GridHost {
            max_rows: 1,
            ..GridHost::default()
        };
        let mut col = column(1);
        col.set_key(&mut host, Some("id")).unwrap();

        let result = col.apply_definition(
            &mut host,
            Some(
                ColumnDefinition::new()
                    .with_key("other")
                    .with_width(30.0)
                    .with_header(vec!["a", "b"]),
            ),
        );

        assert!(result.is_err());
        assert_eq!(col.key(), Some("id"));
        assert!(col.width().is_none());
        assert_eq!(host.keys.owner("id"), Some(1));
        assert!(!host.keys.contains("other"));
    }

    #[test]
    fn test_headers_empty_before_set() {
        let col = column(1);
        assert!(col.header().is_none());
        assert!(col.headers().is_empty());
        assert_eq!(col.header_count(), 0);
    }

    #[test]
    fn test_key_reassignment_moves_entry() {
        let mut host = GridHost::default();
        let mut col = column(4);

        col.set_key(&mut host, Some("a")).unwrap();
        col.set_key(&mut host, Some("b")).unwrap();

        assert!(!host.keys.contains("a"));
        assert_eq!(host.keys.owner("b"), Some(4));
        assert_eq!(host.keys.len(), 1);

        // idempotent
        col.set_key(&mut host, Some("b")).unwrap();
        assert_eq!(host.keys.len(), 1);

        col.set_key(&mut host, Some("")).unwrap();
        assert!(col.key().is_none());
        assert!(host.keys.is_empty());

        col.set_key(&mut host, Some("c")).unwrap();
        col.clear_key(&mut host);
        assert!(col.key().is_none());
        assert!(host.keys.is_empty());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut host = GridHost::default();
        let mut first = column(1);
        let mut second = column(2);
        first.set_key(&mut host, Some("id")).unwrap();
        second.set_key(&mut host, Some("name")).unwrap();

        let err = second.set_key(&mut host, Some("id")).unwrap_err();

        assert!(matches!(err, SheetError::DuplicateKey { owner: 1, .. }));
        assert_eq!(second.key(), Some("name"));
        assert_eq!(host.keys.owner("id"), Some(1));
        assert_eq!(host.keys.owner("name"), Some(2));
    }

    #[test]
    fn test_style_cascade_touches_existing_cells_only() {
        let mut host = GridHost::default();
        host.cell_mut(1, 2).set_value("top");
        host.cell_mut(3, 2).set_value("bottom");
        host.cell_mut(2, 5).set_value("elsewhere");
        let mut col = column(2);

        let fill = Fill::Pattern {
            pattern: PatternType::Solid,
            fg_color: None,
            bg_color: None,
        };
        col.set_fill(&mut host, fill.clone());

        assert_eq!(col.fill(), Some(&fill));
        assert_eq!(host.rows[&1].find_cell(2).unwrap().style.fill, Some(fill.clone()));
        assert_eq!(host.rows[&3].find_cell(2).unwrap().style.fill, Some(fill));
        assert!(host.rows[&2].find_cell(2).is_none());
        assert!(host.rows[&2].find_cell(5).unwrap().style.is_plain());
    }

    #[test]
    fn test_clear_style_attribute() {
        let mut host = GridHost::default();
        host.cell_mut(1, 1);
        let mut col = column(1);
        col.set_num_fmt(&mut host, "0.00");
        assert_eq!(col.num_fmt(), Some("0.00"));

        col.clear_style_attribute(&mut host, StyleSlot::NumFmt);
        assert!(col.num_fmt().is_none());
        assert!(host.rows[&1].find_cell(1).unwrap().style.num_fmt.is_none());
    }

    #[test]
    fn test_each_cell_include_empty_materializes_gaps() {
        let mut host = GridHost::default();
        host.cell_mut(1, 1);
        host.cell_mut(3, 2);
        let col = column(1);

        let mut seen = Vec::new();
        col.each_cell(&mut host, |_, row| seen.push(row));
        assert_eq!(seen, vec![1]);

        seen.clear();
        col.each_cell_with(&mut host, EachCellOptions::include_empty(), |_, row| {
            seen.push(row)
        });
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(host.rows[&2].find_cell(1).is_some());
    }

    #[test]
    fn test_is_default() {
        let mut host = GridHost::default();
        let mut col = column(1);
        assert!(col.is_default());

        col.set_width(Some(8.0));
        assert!(col.is_default());
        assert!(!col.is_default_for(9.0));

        col.set_width(Some(20.0));
        assert!(!col.is_default());

        col.set_width(None);
        col.set_num_fmt(&mut host, "");
        assert!(col.is_default());

        col.set_font(&mut host, Font::new().with_bold(true));
        assert!(!col.is_default());
    }

    #[test]
    fn test_equivalent_to() {
        let mut host = GridHost::default();
        let mut a = column(1);
        let mut b = column(2);
        assert!(a.equivalent_to(&b));

        a.set_width(Some(12.0));
        b.set_width(Some(12.0));
        a.set_font(&mut host, Font::new().with_color(Color::RED));
        b.set_font(&mut host, Font::new().with_color(Color::RED));
        assert!(a.equivalent_to(&b));

        b.set_width(Some(13.0));
        assert!(!a.equivalent_to(&b));
    }

    #[test]
    fn test_definition_round_trip() {
        let mut host = GridHost::default();
        let definition = ColumnDefinition::new()
            .with_key("k")
            .with_width(12.0)
            .with_style(Style {
                font: Some(Font::new().with_bold(true)),
                ..Style::default()
            })
            .with_header("H");

        let col = Column::with_definition(&mut host, 1, &SheetConfig::default(), definition)
            .unwrap();
        let back = col.definition();

        assert_eq!(back.key.as_deref(), Some("k"));
        assert_eq!(back.width, Some(12.0));
        assert!(back.style.unwrap().font.unwrap().bold);
        assert_eq!(back.header, Some(Header::Single("H".to_string())));
        assert_eq!(host.value(1, 1), Some(&CellValue::from("H")));
    }

    #[test]
    fn test_clearing_definition() {
        let mut host = GridHost::default();
        let mut col = Column::with_definition(
            &mut host,
            1,
            &SheetConfig::default(),
            ColumnDefinition::new().with_key("k").with_width(30.0).with_header("H"),
        )
        .unwrap();

        col.apply_definition(&mut host, None).unwrap();

        assert!(col.header().is_none());
        assert!(col.key().is_none());
        assert!(col.width().is_none());
        assert_eq!(col.style(), &Style::default());
        assert!(host.keys.is_empty());
        assert_eq!(host.value(1, 1), Some(&CellValue::Empty));
    }

    #[test]
    fn test_display_snapshot() {
        let mut host = GridHost::default();
        let mut col = column(1);
        assert_eq!(col.to_string(), "{}");

        col.set_key(&mut host, Some("id")).unwrap();
        col.set_width(Some(10.0));
        assert_eq!(col.to_string(), r#"{"key":"id","width":10.0}"#);

        col.set_header(&mut host, "Id".into()).unwrap();
        assert_eq!(
            col.to_string(),
            r#"{"key":"id","width":10.0,"headers":["Id"]}"#
        );
    }
}
