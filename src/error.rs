//! Error types for parsing colors and readout formats.
//!
//! Numeric conversions never fail; only string input can be rejected.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Nothing left after stripping whitespace and `#`
    #[error("empty color string")]
    Empty,

    /// Digit count other than 3, 6, or 8
    #[error("invalid hex length: {0} digits (expected 3, 6, or 8)")]
    InvalidLength(usize),

    /// Character outside `0-9a-fA-F`
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),

    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Unknown readout format name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color format '{0}' (expected RGBA, HEX, or HSLA)")]
pub struct FormatParseError(pub String);
