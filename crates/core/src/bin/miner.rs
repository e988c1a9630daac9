//! readcoin-miner: mine a chain of blocks from genesis and report each
//! winning nonce.
//!
//! Usage:
//!   readcoin-miner [COUNT] [--json]
//!
//! COUNT defaults to 10. With `--json`, one JSON summary per block is
//! printed to stdout instead of log lines.

use std::time::Instant;

use serde::Serialize;
use tracing::info;

use readcoin::hex::hex_encode;
use readcoin::pow::{
    mine_block, BLOCK_INTERVAL_SECS, DIFFICULTY, GENESIS_PREVIOUS_HASH, GENESIS_TIMESTAMP,
};

#[derive(Debug, Serialize)]
struct BlockSummary {
    height: u32,
    timestamp: u32,
    nonce: u64,
    hash: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut count: u32 = 10;
    let mut json = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return;
            }
            "--json" => json = true,
            other => match other.parse::<u32>() {
                Ok(n) => count = n,
                Err(_) => {
                    eprintln!("Unknown argument: {other}");
                    print_help();
                    std::process::exit(2);
                }
            },
        }
    }

    if !json {
        tracing_subscriber::fmt().init();
    }

    let mut previous_hash = GENESIS_PREVIOUS_HASH;
    let mut timestamp = GENESIS_TIMESTAMP;

    let start = Instant::now();

    for height in 0..count {
        let block = mine_block(&previous_hash, timestamp, DIFFICULTY);

        let summary = BlockSummary {
            height,
            timestamp,
            nonce: block.nonce,
            hash: hex_encode(&block.hash),
        };
        if json {
            if let Ok(line) = serde_json::to_string(&summary) {
                println!("{line}");
            }
        } else {
            info!(
                height = summary.height,
                nonce = summary.nonce,
                hash = %summary.hash,
                "mined block"
            );
        }

        previous_hash = block.hash;
        timestamp += BLOCK_INTERVAL_SECS;
    }

    if !json {
        info!(blocks = count, elapsed = ?start.elapsed(), "done");
    }
}

fn print_help() {
    println!("readcoin-miner: mine a chain of blocks from genesis");
    println!();
    println!("Usage: readcoin-miner [COUNT] [--json]");
    println!();
    println!("  COUNT    number of blocks to mine (default 10)");
    println!("  --json   print one JSON summary per block instead of logs");
}
