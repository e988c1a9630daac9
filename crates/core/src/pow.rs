//! Double-SHA256 proof of work and chained mining.

use sha2::{Digest, Sha256};

use crate::header::{block_header, HASH_LEN, HEADER_LEN};

/// Network difficulty: the number of leading zero bytes a block hash must
/// carry.
pub const DIFFICULTY: usize = 2;

/// Previous-hash field of the genesis block.
pub const GENESIS_PREVIOUS_HASH: [u8; HASH_LEN] = [0u8; HASH_LEN];

/// Timestamp of the genesis block.
pub const GENESIS_TIMESTAMP: u32 = 1_634_700_000;

/// Seconds between consecutive block timestamps.
pub const BLOCK_INTERVAL_SECS: u32 = 600;

/// A successfully mined block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinedBlock {
    /// The winning nonce.
    pub nonce: u64,
    /// `sha256d` of the winning header.
    pub hash: [u8; HASH_LEN],
    /// The winning header itself.
    pub header: [u8; HEADER_LEN],
}

/// SHA-256 applied twice: the digest of the digest.
pub fn sha256d(bytes: &[u8]) -> [u8; HASH_LEN] {
    let first = Sha256::digest(bytes);
    let second = Sha256::digest(first);
    second.into()
}

/// Whether `hash` begins with `difficulty` zero bytes.
pub fn meets_difficulty(hash: &[u8; HASH_LEN], difficulty: usize) -> bool {
    hash.iter().take(difficulty).all(|&b| b == 0)
}

/// Mine one block: increment the nonce from 0 until the header's `sha256d`
/// meets `difficulty`.
pub fn mine_block(
    previous_hash: &[u8; HASH_LEN],
    timestamp: u32,
    difficulty: usize,
) -> MinedBlock {
    let mut nonce: u64 = 0;
    loop {
        let header = block_header(previous_hash, timestamp, nonce);
        let hash = sha256d(&header);
        if meets_difficulty(&hash, difficulty) {
            return MinedBlock {
                nonce,
                hash,
                header,
            };
        }
        nonce += 1;
    }
}

/// Mine the chain from genesis through `height` and return the nonce of
/// block `height`.
///
/// Each block's previous-hash field is the hash of the prior block's
/// header, and timestamps advance by [`BLOCK_INTERVAL_SECS`].
pub fn nonce_for_block(height: u32) -> u64 {
    let mut previous_hash = GENESIS_PREVIOUS_HASH;
    let mut timestamp = GENESIS_TIMESTAMP;
    let mut nonce = 0u64;

    for _ in 0..=height {
        let block = mine_block(&previous_hash, timestamp, DIFFICULTY);
        previous_hash = block.hash;
        timestamp += BLOCK_INTERVAL_SECS;
        nonce = block.nonce;
    }

    nonce
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256d_matches_known_vector() {
        // Double SHA-256 of "hello".
        let expected: [u8; 32] = [
            0x95, 0x95, 0xc9, 0xdf, 0x90, 0x07, 0x51, 0x48, 0xeb, 0x06, 0x86, 0x03, 0x65, 0xdf,
            0x33, 0x58, 0x4b, 0x75, 0xbf, 0xf7, 0x82, 0xa5, 0x10, 0xc6, 0xcd, 0x48, 0x83, 0xa4,
            0x19, 0x83, 0x3d, 0x50,
        ];
        assert_eq!(sha256d(b"hello"), expected);
    }

    #[test]
    fn difficulty_counts_leading_zero_bytes() {
        let mut hash = [0xffu8; HASH_LEN];
        assert!(meets_difficulty(&hash, 0));
        assert!(!meets_difficulty(&hash, 1));

        hash[0] = 0;
        hash[1] = 0;
        assert!(meets_difficulty(&hash, 2));
        assert!(!meets_difficulty(&hash, 3));
    }

    #[test]
    fn mined_block_is_internally_consistent() {
        let block = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);

        assert_eq!(block.hash, sha256d(&block.header));
        assert!(meets_difficulty(&block.hash, DIFFICULTY));
        // The winning nonce is embedded big-endian at the header's tail.
        assert_eq!(&block.header[61..69], &block.nonce.to_be_bytes());
    }

    #[test]
    fn mining_is_deterministic() {
        let a = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);
        let b = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);
        assert_eq!(a, b);
    }

    #[test]
    fn lower_difficulty_never_needs_more_work() {
        let easy = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, 1);
        let hard = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);
        assert!(easy.nonce <= hard.nonce);
    }

    #[test]
    fn chain_height_zero_is_the_genesis_block() {
        let genesis = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);
        assert_eq!(nonce_for_block(0), genesis.nonce);
    }

    #[test]
    fn chain_links_blocks_by_header_hash() {
        let genesis = mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);
        let second = mine_block(
            &genesis.hash,
            GENESIS_TIMESTAMP + BLOCK_INTERVAL_SECS,
            DIFFICULTY,
        );
        assert_eq!(nonce_for_block(1), second.nonce);
    }
}
