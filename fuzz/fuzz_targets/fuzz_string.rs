//! Fuzz target: input must be a hidden literal spelled backwards.

#![no_main]

use course_core::reversed;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    reversed::fuzz_string(data);
});
