//! Shared error taxonomy for decode/encode operations.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file extension is neither `rda` nor `raw`.
    #[error("unsupported input format: .{0}")]
    UnsupportedFormat(String),

    /// A required key was absent from a binary-export header.
    #[error("missing required header field: {0}")]
    MissingHeaderField(String),

    /// A binary export lacked one of its ASCII header sentinels.
    #[error("binary export missing sentinel: {0}")]
    MissingSentinel(&'static str),

    /// Raw-text input lacked the expected terminator structure.
    #[error("malformed raw text: {0}")]
    MalformedRawText(String),

    /// A header or payload value failed to parse as a number.
    #[error("invalid numeric value for {field}: {value:?}")]
    NumericParse { field: String, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
