//! Fuzz target: exact phrase hidden behind a SHA-256 digest.
//!
//! Only reachable if the fuzzer lifts the phrase from the binary's literals.

#![no_main]

use course_core::literal;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    literal::fuzz_literal(data);
});
