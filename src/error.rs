use std::num::ParseIntError;

use crate::compute::COLUMNS;

/// A log line that could not be folded into the totals. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error(
        "line {line}: expected {expected} comma-separated fields, found {found}",
        expected = COLUMNS
    )]
    FieldCount { line: usize, found: usize },

    #[error("line {line}, column {column}: invalid integer {field:?}")]
    InvalidInteger {
        line: usize,
        column: usize,
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}, column {column}: sum overflows i128")]
    Overflow { line: usize, column: usize },
}
