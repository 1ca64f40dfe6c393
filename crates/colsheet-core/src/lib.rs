pub mod cell;
pub mod column;
pub mod config;
pub mod error;
pub mod keys;
pub mod range;
pub mod row;
pub mod style;
pub mod worksheet;

pub use cell::{Cell, CellValue};
pub use column::{Column, ColumnDefinition, ColumnHost, Header};
pub use config::{SheetConfig, DEFAULT_COLUMN_WIDTH, MAX_COLUMNS, MAX_ROWS};
pub use error::SheetError;
pub use keys::KeyTable;
pub use range::{col_from_label, col_to_label};
pub use row::{EachCellOptions, Row};
pub use style::{
    Alignment, Border, BorderEdge, BorderStyle, Color, Fill, Font, GradientStop, HorizontalAlign,
    PatternType, Style, StyleAttribute, StyleSlot, VerticalAlign,
};
pub use worksheet::{ColumnMut, ColumnRange, SheetBody, Worksheet};
