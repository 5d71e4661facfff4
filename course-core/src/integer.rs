//! Integer oracles: four encodings of the same hidden number.
//!
//! Each entry point decodes the input differently and hands the result to
//! [`find_int`]. Decoders never read past the input; anything malformed or
//! too short is [`Signal::NoMatch`].

use crate::error::CoreError;
use crate::signal::{target_reached, Signal};

/// The integer every decoder is hunting for.
pub const TARGET_INT: i64 = 1337;

const WORD_LEN: usize = 8;

/// Abort if `value` is the hidden integer.
///
/// The constant sits on the left of the comparison so value tracers record it
/// as the operand to reproduce.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when `value` matches.
pub fn find_int(value: i64) {
    if TARGET_INT == value {
        target_reached("found int");
    }
}

/// Decode the first eight bytes of `data` as a big-endian integer.
///
/// # Errors
/// Returns [`CoreError::ShortInput`] if fewer than eight bytes are available.
pub fn decode_big_endian(data: &[u8]) -> Result<i64, CoreError> {
    first_word(data).map(i64::from_be_bytes)
}

/// Decode the first eight bytes of `data` as a little-endian integer.
///
/// # Errors
/// Returns [`CoreError::ShortInput`] if fewer than eight bytes are available.
pub fn decode_little_endian(data: &[u8]) -> Result<i64, CoreError> {
    first_word(data).map(i64::from_le_bytes)
}

/// Parse `data` as a base-10 signed integer.
///
/// Accepts an optional leading `+` or `-` followed by ASCII digits; no
/// whitespace, separators or radix prefixes.
///
/// # Errors
/// Returns [`CoreError::NotUtf8`] or [`CoreError::InvalidDecimal`].
pub fn decode_decimal(data: &[u8]) -> Result<i64, CoreError> {
    let text = std::str::from_utf8(data)?;
    Ok(text.parse::<i64>()?)
}

/// Decode `data` as hexadecimal text into raw bytes.
///
/// # Errors
/// Returns [`CoreError::InvalidHex`] on odd length or a non-hex character.
pub fn decode_hex(data: &[u8]) -> Result<Vec<u8>, CoreError> {
    Ok(hex::decode(data)?)
}

/// Fuzz entry point: input is a big-endian 64-bit word.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the word is the target.
pub fn fuzz_integer_big_endian(data: &[u8]) -> Signal {
    match decode_big_endian(data) {
        Ok(value) => find_int(value),
        Err(err) => tracing::trace!(error = %err, "big-endian decode skipped"),
    }
    Signal::NoMatch
}

/// Fuzz entry point: input is a little-endian 64-bit word.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the word is the target.
pub fn fuzz_integer_little_endian(data: &[u8]) -> Signal {
    match decode_little_endian(data) {
        Ok(value) => find_int(value),
        Err(err) => tracing::trace!(error = %err, "little-endian decode skipped"),
    }
    Signal::NoMatch
}

/// Fuzz entry point: input is decimal text.
///
/// Returns [`Signal::Parsed`] for every well-formed number, matched or not.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the number is the target.
pub fn fuzz_integer_decimal_string(data: &[u8]) -> Signal {
    match decode_decimal(data) {
        Ok(value) => {
            find_int(value);
            Signal::Parsed
        }
        Err(err) => {
            tracing::trace!(error = %err, "decimal parse rejected");
            Signal::NoMatch
        }
    }
}

/// Fuzz entry point: input is hex text of a big-endian word.
///
/// Returns [`Signal::Parsed`] for every well-formed hex string, including
/// ones that decode to fewer than eight bytes.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the decoded word is the target.
pub fn fuzz_integer_hex_string(data: &[u8]) -> Signal {
    match decode_hex(data) {
        Ok(bytes) => {
            fuzz_integer_big_endian(&bytes);
            Signal::Parsed
        }
        Err(err) => {
            tracing::trace!(error = %err, "hex decode rejected");
            Signal::NoMatch
        }
    }
}

fn first_word(data: &[u8]) -> Result<[u8; WORD_LEN], CoreError> {
    data.get(..WORD_LEN)
        .and_then(|word| word.try_into().ok())
        .ok_or(CoreError::ShortInput { needed: WORD_LEN, actual: data.len() })
}
