//! Checksum oracle: a four-byte big-endian CRC32 header over the rest of the input.

use crate::digest::{crc32_ieee, read_be_u32};
use crate::signal::{target_reached, Signal};

const HEADER_LEN: usize = 4;

/// Returns `true` if the first four bytes of `data` are the CRC32 of the rest.
///
/// Inputs of four bytes or fewer never qualify, so an empty body cannot match.
#[must_use]
pub fn checksum_ok(data: &[u8]) -> bool {
    if data.len() <= HEADER_LEN {
        return false;
    }
    let sum = crc32_ieee(&data[HEADER_LEN..]);
    read_be_u32(data) == Some(sum)
}

/// Fuzz entry point for the checksum header.
///
/// # Panics
/// Panics with a [`TargetHit`](crate::TargetHit) when the header is correct.
pub fn fuzz_checksum(data: &[u8]) -> Signal {
    if checksum_ok(data) {
        target_reached("found correct checksum");
    }
    Signal::NoMatch
}

/// Prefix `payload` with its big-endian CRC32.
#[must_use]
pub fn with_checksum(payload: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(HEADER_LEN + payload.len());
    framed.extend_from_slice(&crc32_ieee(payload).to_be_bytes());
    framed.extend_from_slice(payload);
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_header_matches() {
        assert!(checksum_ok(&with_checksum(b"123456789")));
        let mut framed = vec![0xCB, 0xF4, 0x39, 0x26];
        framed.extend_from_slice(b"123456789");
        assert!(checksum_ok(&framed));
    }

    #[test]
    #[should_panic]
    fn fuzz_entry_aborts_on_correct_header() {
        fuzz_checksum(&with_checksum(b"x"));
    }

    #[test]
    fn header_without_body_never_matches() {
        // CRC32 of the empty body is zero, but a bare header is too short.
        assert!(!checksum_ok(&[0, 0, 0, 0]));
        assert!(!checksum_ok(b""));
        assert_eq!(fuzz_checksum(&[0, 0, 0, 0]), Signal::NoMatch);
    }

    #[test]
    fn little_endian_header_is_rejected() {
        let payload = b"payload";
        let mut framed = crc32_ieee(payload).to_le_bytes().to_vec();
        framed.extend_from_slice(payload);
        assert!(!checksum_ok(&framed));
    }

    proptest::proptest! {
        #[test]
        fn proptest_framed_payload_always_matches(
            payload in proptest::collection::vec(proptest::prelude::any::<u8>(), 1..256usize),
        ) {
            proptest::prop_assert!(checksum_ok(&with_checksum(&payload)));
        }

        #[test]
        fn proptest_short_input_never_matches(
            data in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..=4usize),
        ) {
            proptest::prop_assert!(!checksum_ok(&data));
            proptest::prop_assert_eq!(fuzz_checksum(&data), Signal::NoMatch);
        }

        #[test]
        fn proptest_corrupted_body_is_rejected(
            payload in proptest::collection::vec(proptest::prelude::any::<u8>(), 1..256usize),
            index in proptest::prelude::any::<proptest::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let mut framed = with_checksum(&payload);
            let i = 4 + index.index(payload.len());
            framed[i] ^= flip;
            // CRC32 detects every error confined to a single byte.
            proptest::prop_assert!(!checksum_ok(&framed));
        }
    }
}
