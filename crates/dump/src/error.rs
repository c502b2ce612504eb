//! Dump parser error type.

use thiserror::Error;

/// Error type for parsing one bank's hex table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DumpError {
    /// The section has no hyphen separator between title and table.
    #[error("no hyphen separator between section title and table")]
    MalformedTable,
    /// A table token is not a two-digit hex byte.
    #[error("token `{token}` at index {index} is not a two-digit hex byte")]
    MalformedByteToken {
        /// The offending token, verbatim.
        token: String,
        /// Zero-based position of the token in the table.
        index: usize,
    },
}
