//! Error types for zaiko-manager

use thiserror::Error;

/// Field-level errors raised when constructing a [`Car`](crate::Car) from raw text
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid year format: {0}")]
    Year(String),

    #[error("Invalid price format: {0}")]
    Price(String),

    #[error("Invalid status: {0} (expected Available or Sold)")]
    Status(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Malformed row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ParseError,
    },

    #[error("Malformed row {row}: expected Make, Model, Year, Price, Status, found {found} fields")]
    RowShape { row: usize, found: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
