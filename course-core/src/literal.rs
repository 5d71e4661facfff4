//! Literal hash oracle.
//!
//! The only way through is the exact phrase whose SHA-256 digest is stored.
//! Random mutation cannot invert the hash; the phrase has to be lifted from
//! the binary's string literals.

use once_cell::sync::Lazy;

use crate::digest::sha256;
use crate::signal::{target_reached, Signal};

pub(crate) const HIDDEN_PHRASE: &str = "really too long to be guessed";

static PHRASE_DIGEST: Lazy<[u8; 32]> = Lazy::new(|| sha256(HIDDEN_PHRASE.as_bytes()));

/// Returns `true` if `data` hashes to the hidden phrase's digest.
#[must_use]
pub fn matches(data: &[u8]) -> bool {
    sha256(data) == *PHRASE_DIGEST
}

/// Fuzz entry point for the literal hash.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the phrase is found.
pub fn fuzz_literal(data: &[u8]) -> Signal {
    if matches(data) {
        target_reached("found string");
    }
    Signal::NoMatch
}
