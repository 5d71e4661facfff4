//! Reversed string oracle.
//!
//! The input must spell a hidden literal backwards. Because the comparison is
//! `input == reverse(literal)`, a value tracer sees the reversed literal as
//! an operand and can splice it straight into the next input. Written the
//! other way round (`literal == reverse(input)`) the tracer would only ever
//! see the literal and the fuzzer would be stuck.

use crate::signal::{target_reached, Signal};

pub(crate) const HIDDEN_LITERAL: &str = "1337 string abcdefg";

/// Reverse `s` one Unicode scalar value at a time.
#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Abort if `candidate` spells `literal` backwards.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) on a match.
pub fn find_string(candidate: &[u8], literal: &str) {
    if is_reversal(candidate, literal) {
        target_reached("found string");
    }
}

/// Returns `true` if `candidate` equals `literal` reversed.
#[must_use]
pub fn is_reversal(candidate: &[u8], literal: &str) -> bool {
    candidate == reverse(literal).as_bytes()
}

/// Fuzz entry point for the reversed literal.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the input is the reversed literal.
pub fn fuzz_string(data: &[u8]) -> Signal {
    find_string(data, HIDDEN_LITERAL);
    Signal::NoMatch
}
