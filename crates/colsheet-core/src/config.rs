use std::env;

use crate::error::SheetError;

/// Width Excel assumes for a column without an explicit width
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.0;
/// Maximum number of rows (Excel compatibility)
pub const MAX_ROWS: u32 = 1_048_576;
/// Maximum number of columns (Column XFD)
pub const MAX_COLUMNS: u32 = 16_384;

/// Worksheet configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Width a column may carry and still be treated as default
    pub default_column_width: f64,
    /// Highest valid row number
    pub max_rows: u32,
    /// Highest valid column number
    pub max_columns: u32,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
            max_rows: MAX_ROWS,
            max_columns: MAX_COLUMNS,
        }
    }
}

impl SheetConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `COLSHEET_DEFAULT_COLUMN_WIDTH`, `COLSHEET_MAX_ROWS` and
    /// `COLSHEET_MAX_COLUMNS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, SheetError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, SheetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("COLSHEET_DEFAULT_COLUMN_WIDTH") {
            let width: f64 = raw.trim().parse().map_err(|_| {
                SheetError::Config(format!("COLSHEET_DEFAULT_COLUMN_WIDTH is not a number: {raw}"))
            })?;
            if !width.is_finite() || width <= 0.0 {
                return Err(SheetError::Config(format!(
                    "COLSHEET_DEFAULT_COLUMN_WIDTH must be positive: {raw}"
                )));
            }
            config.default_column_width = width;
        }

        if let Some(raw) = lookup("COLSHEET_MAX_ROWS") {
            config.max_rows = parse_limit("COLSHEET_MAX_ROWS", &raw, MAX_ROWS)?;
        }

        if let Some(raw) = lookup("COLSHEET_MAX_COLUMNS") {
            config.max_columns = parse_limit("COLSHEET_MAX_COLUMNS", &raw, MAX_COLUMNS)?;
        }

        Ok(config)
    }

    /// Check that a column number lies within `1..=max_columns`
    pub fn check_column(&self, number: u32) -> Result<u32, SheetError> {
        if number == 0 || number > self.max_columns {
            return Err(SheetError::InvalidColumnNumber(number));
        }
        Ok(number)
    }

    /// Check that a row number lies within `1..=max_rows`
    pub fn check_row(&self, number: u32) -> Result<u32, SheetError> {
        if number == 0 || number > self.max_rows {
            return Err(SheetError::InvalidRowNumber(number));
        }
        Ok(number)
    }
}

// Limits can only be tightened, never raised past Excel's own.
fn parse_limit(name: &str, raw: &str, ceiling: u32) -> Result<u32, SheetError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| SheetError::Config(format!("{name} is not a positive integer: {raw}")))?;
    if value == 0 || value > ceiling {
        return Err(SheetError::Config(format!(
            "{name} must be between 1 and {ceiling}: {raw}"
        )));
    }
    Ok(value)
}
