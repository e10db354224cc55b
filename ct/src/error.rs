//! Errors from period parsing

use thiserror::Error;

/// Reasons a period string cannot be turned into a tenure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenureError {
    #[error("Period is empty")]
    Empty,

    #[error("Date is empty")]
    EmptyDate,

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Unexpected date format ({tokens} tokens): {text}")]
    TokenCount { tokens: usize, text: String },
}
