use std::error::Error;
use std::fmt;

/// Custom error type for sort-column resolution failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    Unknown(String),
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColumnError::Unknown(name) => write!(
                f,
                "Unknown sort column '{}'. Valid columns: country_code, name, numeric_code, region, sub_region, year, production",
                name
            ),
        }
    }
}

impl Error for ColumnError {}
