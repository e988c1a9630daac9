//! # readcoin
//!
//! Double-SHA256 proof of work over a fixed-layout block header.
//!
//! The same source builds two artifacts:
//! - an rlib used by the native miner, tests, and benches;
//! - a `cdylib` (`readcoin.wasm`) whose single raw export,
//!   [`block_number_to_nonce`], is instantiated directly by the browser's
//!   `WebAssembly` API. The export deliberately avoids wasm-bindgen so the
//!   module has no imports and needs no JS glue.
//!
//! ## Quick Start
//!
//! ```
//! use readcoin::pow::{self, DIFFICULTY, GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP};
//!
//! let block = pow::mine_block(&GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP, DIFFICULTY);
//! assert!(pow::meets_difficulty(&block.hash, DIFFICULTY));
//! ```
//!
//! ## Modules
//!
//! - [`header`]: block header layout
//! - [`pow`]: hashing, difficulty, mining
//! - [`hex`]: display helpers

pub mod header;
pub mod hex;
pub mod pow;

/// The compute module's single export.
///
/// Mines the chain from genesis through block `x` and returns the winning
/// nonce of block `x`. Pure and deterministic for a given `x`. Negative
/// heights clamp to 0.
#[no_mangle]
pub extern "C" fn block_number_to_nonce(x: i32) -> i32 {
    let height = x.max(0) as u32;
    pow::nonce_for_block(height) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_matches_chain_mining() {
        assert_eq!(block_number_to_nonce(0), pow::nonce_for_block(0) as i32);
    }

    #[test]
    fn export_clamps_negative_heights_to_genesis() {
        assert_eq!(block_number_to_nonce(-7), block_number_to_nonce(0));
    }

    #[test]
    fn export_is_deterministic() {
        assert_eq!(block_number_to_nonce(1), block_number_to_nonce(1));
    }
}
