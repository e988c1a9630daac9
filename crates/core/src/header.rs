//! Block header layout.
//!
//! A header is exactly [`HEADER_LEN`] bytes:
//!
//! | offset | len | field                      |
//! |--------|-----|----------------------------|
//! | 0      | 1   | version (always 0)         |
//! | 1      | 32  | previous block hash        |
//! | 33     | 4   | timestamp, u32 big-endian  |
//! | 37     | 24  | zero padding               |
//! | 61     | 8   | nonce, u64 big-endian      |

/// Header format version. Only version 0 exists.
pub const VERSION: u8 = 0;

/// Length of a block hash in bytes.
pub const HASH_LEN: usize = 32;

/// Length of a serialized block header in bytes.
pub const HEADER_LEN: usize = 69;

const TIMESTAMP_OFFSET: usize = 1 + HASH_LEN;
const NONCE_OFFSET: usize = HEADER_LEN - 8;

/// Serialize a block header for the given fields.
///
/// The padding bytes between timestamp and nonce are always zero.
pub fn block_header(
    previous_hash: &[u8; HASH_LEN],
    timestamp: u32,
    nonce: u64,
) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[0] = VERSION;
    header[1..1 + HASH_LEN].copy_from_slice(previous_hash);
    header[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 4].copy_from_slice(&timestamp.to_be_bytes());
    header[NONCE_OFFSET..NONCE_OFFSET + 8].copy_from_slice(&nonce.to_be_bytes());
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_is_stable() {
        let prev = [0xabu8; HASH_LEN];
        let header = block_header(&prev, 0x0102_0304, 0x1122_3344_5566_7788);

        assert_eq!(header.len(), HEADER_LEN);
        assert_eq!(header[0], VERSION);
        assert_eq!(&header[1..33], &prev[..]);
        assert_eq!(&header[33..37], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&header[37..61], &[0u8; 24]);
        assert_eq!(
            &header[61..69],
            &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]
        );
    }

    #[test]
    fn nonce_zero_serializes_as_zero_bytes() {
        let header = block_header(&[0u8; HASH_LEN], 0, 0);
        assert_eq!(&header[61..69], &[0u8; 8]);
    }
}
