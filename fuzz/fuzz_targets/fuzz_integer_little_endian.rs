//! Fuzz target: first eight bytes as a little-endian integer.

#![no_main]

use course_core::integer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    integer::fuzz_integer_little_endian(data);
});
