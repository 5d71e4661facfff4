//! Fuzz target: the race record (tag, ASCII year, hashed payload, CRC32 trailer).
//!
//! Needs literal extraction for the tag and hidden phrase, integer-to-text
//! tracing for the year, and checksum repair for the trailer.

#![no_main]

use course_core::record;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    record::fuzz_big_event(data);
});
