//! SHA-256 and CRC32 helpers shared by the hash-comparing oracles.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `data`.
///
/// # Complexity
/// O(n) where n = len(data).
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 of `data` as 64 lowercase hex characters.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// IEEE CRC32 of `data`, as computed by zlib and Go's `hash/crc32`.
#[must_use]
pub fn crc32_ieee(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Read the first four bytes of `data` as a big-endian `u32`.
///
/// Returns `None` if fewer than four bytes are available.
#[must_use]
pub fn read_be_u32(data: &[u8]) -> Option<u32> {
    let bytes: [u8; 4] = data.get(..4)?.try_into().ok()?;
    Some(u32::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input_is_well_known() {
        let hex = sha256_hex(b"");
        assert_eq!(
            hex, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "empty input hash must match known SHA-256 value"
        );
    }

    #[test]
    fn sha256_is_deterministic() {
        assert_eq!(sha256(b"race"), sha256(b"race"));
        assert_ne!(sha256(b"race"), sha256(b"Race"));
    }

    #[test]
    fn crc32_matches_reference_check_value() {
        // Standard CRC-32/ISO-HDLC check value.
        assert_eq!(crc32_ieee(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32_ieee(b""), 0);
    }

    #[test]
    fn read_be_u32_requires_four_bytes() {
        assert_eq!(read_be_u32(&[0x01, 0x02, 0x03]), None);
        assert_eq!(read_be_u32(&[0x01, 0x02, 0x03, 0x04, 0xff]), Some(0x0102_0304));
    }

    proptest::proptest! {
        #[test]
        fn proptest_hex_digest_always_64_lowercase_chars(
            data in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512usize),
        ) {
            let hex = sha256_hex(&data);
            proptest::prop_assert_eq!(hex.len(), 64, "SHA-256 hex must always be 64 chars");
            proptest::prop_assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            proptest::prop_assert_eq!(hex::decode(&hex).ok(), Some(sha256(&data).to_vec()));
        }
    }
}
