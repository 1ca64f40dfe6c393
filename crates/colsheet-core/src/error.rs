use thiserror::Error;

/// Errors raised by worksheet and column operations
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Invalid column number: {0} (columns are 1-based)")]
    InvalidColumnNumber(u32),

    #[error("Invalid row number: {0} (rows are 1-based)")]
    InvalidRowNumber(u32),

    #[error("Invalid column letter: {0}")]
    InvalidColumnLetter(String),

    #[error("Key '{key}' is already used by column {owner}")]
    DuplicateKey { key: String, owner: u32 },

    #[error("No column has key '{0}'")]
    UnknownKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let err = SheetError::DuplicateKey {
            key: "id".to_string(),
            owner: 3,
        };
        assert_eq!(err.to_string(), "Key 'id' is already used by column 3");
    }
}
