use serde::{Deserialize, Serialize};

use crate::style::{Style, StyleAttribute, StyleSlot};

/// Represents the value stored in a cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl CellValue {
    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

/// A single cell: a value plus its own style slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Style::is_plain")]
    pub style: Style,
}

impl Cell {
    /// Create a cell holding a value
    pub fn new(value: impl Into<CellValue>) -> Self {
        Cell {
            value: value.into(),
            style: Style::default(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<CellValue>) {
        self.value = value.into();
    }

    /// Set one style slot on this cell
    pub fn apply_style(&mut self, attribute: StyleAttribute) {
        self.style.set(attribute);
    }

    /// Unset one style slot on this cell
    pub fn clear_style(&mut self, slot: StyleSlot) {
        self.style.clear(slot);
    }

    /// Check if the cell is empty (no value and no style)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.style.is_plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Font;

    #[test]
    fn test_cell_style_slots() {
        let mut cell = Cell::new("Name");
        assert!(!cell.is_empty());
        cell.apply_style(StyleAttribute::Font(Font::new().with_bold(true)));
        assert!(cell.style.font.as_ref().is_some_and(|f| f.bold));
        cell.clear_style(StyleSlot::Font);
        assert!(cell.style.is_plain());

        assert!(Cell::default().is_empty());
    }
}
