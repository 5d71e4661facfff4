use std::num::ParseIntError;
use std::str::Utf8Error;

/// Errors produced while decoding fuzzer input in the `course-core` crate.
///
/// None of these ever escape an oracle entry point: every variant is folded
/// into [`Signal::NoMatch`](crate::Signal::NoMatch) at the boundary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Fewer bytes were available than a fixed-width field requires.
    #[error("input too short: need {needed} bytes, got {actual}")]
    ShortInput { needed: usize, actual: usize },

    /// Input that must be text was not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    NotUtf8(#[from] Utf8Error),

    /// Text could not be parsed as a base-10 integer.
    #[error("invalid decimal integer: {0}")]
    InvalidDecimal(#[from] ParseIntError),

    /// Text could not be decoded as hexadecimal.
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// No target is registered under the given name.
    #[error("unknown target '{name}'")]
    UnknownTarget { name: String },
}
