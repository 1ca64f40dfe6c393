use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cell::Cell;

/// Options controlling row and column-cell iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EachCellOptions {
    /// Visit gaps too, materializing a row/cell for each
    pub include_empty: bool,
}

impl EachCellOptions {
    pub fn include_empty() -> Self {
        Self {
            include_empty: true,
        }
    }
}

/// A worksheet row with sparse cell storage keyed by 1-based column number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub number: u32,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    cells: BTreeMap<u32, Cell>,
}

impl Row {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            cells: BTreeMap::new(),
        }
    }

    /// Look up a cell without creating it
    pub fn find_cell(&self, col: u32) -> Option<&Cell> {
        self.cells.get(&col)
    }

    /// Look up a cell mutably without creating it
    pub fn find_cell_mut(&mut self, col: u32) -> Option<&mut Cell> {
        self.cells.get_mut(&col)
    }

    /// Get a mutable reference to a cell, creating it if it doesn't exist
    pub fn get_cell_mut(&mut self, col: u32) -> &mut Cell {
        self.cells.entry(col).or_default()
    }

    /// Number of materialized cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate materialized cells in column order
    pub fn cells(&self) -> impl Iterator<Item = (u32, &Cell)> + '_ {
        self.cells.iter().map(|(col, cell)| (*col, cell))
    }
}
