//! Registry of every fuzz entry point in the course.
//!
//! Lets tools address an oracle by name, run it, and produce the canonical
//! input that reaches it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::signal::Signal;
use crate::{checksum, integer, literal, record, reversed};

/// A named fuzz entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Target {
    /// Tagged, dated, hashed and checksummed record.
    BigEvent,
    /// Exact phrase behind a SHA-256 digest.
    Literal,
    /// CRC32 header over the remaining bytes.
    Checksum,
    /// Big-endian 64-bit word.
    IntegerBigEndian,
    /// Little-endian 64-bit word.
    IntegerLittleEndian,
    /// Decimal text.
    IntegerDecimalString,
    /// Hex text of a big-endian word.
    IntegerHexString,
    /// Reversed literal.
    String,
}

impl Target {
    /// Every registered target, in declaration order.
    pub const ALL: [Target; 8] = [
        Target::BigEvent,
        Target::Literal,
        Target::Checksum,
        Target::IntegerBigEndian,
        Target::IntegerLittleEndian,
        Target::IntegerDecimalString,
        Target::IntegerHexString,
        Target::String,
    ];

    /// Stable snake_case name, matching the fuzz binary suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BigEvent => "big_event",
            Self::Literal => "literal",
            Self::Checksum => "checksum",
            Self::IntegerBigEndian => "integer_big_endian",
            Self::IntegerLittleEndian => "integer_little_endian",
            Self::IntegerDecimalString => "integer_decimal_string",
            Self::IntegerHexString => "integer_hex_string",
            Self::String => "string",
        }
    }

    /// Run the target's fuzz entry point on `data`.
    ///
    /// # Panics
    /// Panics with a [`TargetHit`](crate::TargetHit) when `data` reaches the target.
    pub fn fuzz(self, data: &[u8]) -> Signal {
        match self {
            Self::BigEvent => record::fuzz_big_event(data),
            Self::Literal => literal::fuzz_literal(data),
            Self::Checksum => checksum::fuzz_checksum(data),
            Self::IntegerBigEndian => integer::fuzz_integer_big_endian(data),
            Self::IntegerLittleEndian => integer::fuzz_integer_little_endian(data),
            Self::IntegerDecimalString => integer::fuzz_integer_decimal_string(data),
            Self::IntegerHexString => integer::fuzz_integer_hex_string(data),
            Self::String => reversed::fuzz_string(data),
        }
    }

    /// Returns `true` if `data` would reach the target. Never panics.
    #[must_use]
    pub fn reaches(self, data: &[u8]) -> bool {
        let is_target = |value: i64| value == integer::TARGET_INT;
        match self {
            Self::BigEvent => record::big_event(data),
            Self::Literal => literal::matches(data),
            Self::Checksum => checksum::checksum_ok(data),
            Self::IntegerBigEndian => integer::decode_big_endian(data).is_ok_and(is_target),
            Self::IntegerLittleEndian => integer::decode_little_endian(data).is_ok_and(is_target),
            Self::IntegerDecimalString => integer::decode_decimal(data).is_ok_and(is_target),
            Self::IntegerHexString => integer::decode_hex(data)
                .and_then(|bytes| integer::decode_big_endian(&bytes))
                .is_ok_and(is_target),
            Self::String => reversed::is_reversal(data, reversed::HIDDEN_LITERAL),
        }
    }

    /// The canonical input that reaches this target.
    #[must_use]
    pub fn solution(self) -> Vec<u8> {
        match self {
            Self::BigEvent => record::winning_record(),
            Self::Literal => literal::HIDDEN_PHRASE.as_bytes().to_vec(),
            Self::Checksum => checksum::with_checksum(b"sonar"),
            Self::IntegerBigEndian => integer::TARGET_INT.to_be_bytes().to_vec(),
            Self::IntegerLittleEndian => integer::TARGET_INT.to_le_bytes().to_vec(),
            Self::IntegerDecimalString => integer::TARGET_INT.to_string().into_bytes(),
            Self::IntegerHexString => hex::encode(integer::TARGET_INT.to_be_bytes()).into_bytes(),
            Self::String => reversed::reverse(reversed::HIDDEN_LITERAL).into_bytes(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.name() == s)
            .ok_or_else(|| CoreError::UnknownTarget { name: s.to_owned() })
    }
}
