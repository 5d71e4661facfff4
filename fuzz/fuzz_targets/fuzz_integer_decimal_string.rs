//! Fuzz target: input parsed as decimal text.

#![no_main]

use course_core::integer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The parsed/no-match signal has no libFuzzer equivalent; both keep the input.
    let _ = integer::fuzz_integer_decimal_string(data);
});
