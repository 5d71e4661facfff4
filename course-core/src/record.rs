//! Structured record oracle: a multi-stage "big event" obstacle.
//!
//! A winning record is laid out as
//!
//! ```text
//! "race" | "2021" | payload | BE32(CRC32(payload))
//! ```
//!
//! where `SHA-256(payload)` must equal the digest of a hidden phrase. Each
//! stage is a different kind of comparison, so a fuzzer needs literal
//! extraction, integer-to-text tracing and checksum repair to get through.

use once_cell::sync::Lazy;

use crate::digest::{crc32_ieee, read_be_u32, sha256};
use crate::signal::{target_reached, Signal};

const TAG: &[u8; 4] = b"race";
const YEAR: i64 = 2021;
const FIELD_LEN: usize = 4;

static PAYLOAD_DIGEST: Lazy<[u8; 32]> = Lazy::new(|| sha256(HIDDEN_PAYLOAD.as_bytes()));

/// Phrase whose digest the payload must reproduce.
pub(crate) const HIDDEN_PAYLOAD: &str = " is on! F$ck COVID";

/// Returns `true` if `data` is a complete, valid race record.
#[must_use]
pub fn big_event(data: &[u8]) -> bool {
    let Some((tag, data)) = split_field(data) else {
        return false;
    };
    if tag != TAG {
        return false;
    }

    // The year is compared as an integer, so a tracer has to try its ASCII form.
    let Some((year, data)) = split_field(data) else {
        return false;
    };
    match std::str::from_utf8(year).map(str::parse::<i64>) {
        Ok(Ok(YEAR)) => {}
        _ => return false,
    }

    if data.len() < FIELD_LEN {
        return false;
    }
    let (payload, trailer) = data.split_at(data.len() - FIELD_LEN);
    if sha256(payload) != *PAYLOAD_DIGEST {
        return false;
    }

    read_be_u32(trailer) == Some(crc32_ieee(payload))
}

/// Fuzz entry point for the race record.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the record is complete.
pub fn fuzz_big_event(data: &[u8]) -> Signal {
    if big_event(data) {
        target_reached("completed the obstacle course!");
    }
    Signal::NoMatch
}

/// Build the record that completes the course.
#[must_use]
pub fn winning_record() -> Vec<u8> {
    let payload = HIDDEN_PAYLOAD.as_bytes();
    let mut record = Vec::with_capacity(2 * FIELD_LEN + payload.len() + FIELD_LEN);
    record.extend_from_slice(TAG);
    record.extend_from_slice(YEAR.to_string().as_bytes());
    record.extend_from_slice(payload);
    record.extend_from_slice(&crc32_ieee(payload).to_be_bytes());
    record
}

fn split_field(data: &[u8]) -> Option<(&[u8], &[u8])> {
    (data.len() >= FIELD_LEN).then(|| data.split_at(FIELD_LEN))
}
