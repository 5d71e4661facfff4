//! Fuzz target: four-byte big-endian CRC32 header over the rest of the input.
//!
//! Value tracing sees both sides of the comparison and can patch the header.

#![no_main]

use course_core::checksum;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    checksum::fuzz_checksum(data);
});
