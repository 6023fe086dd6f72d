//! File digest example.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Digesting file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    for checksum_type in [ChecksumType::Crc32, ChecksumType::Crc32c] {
        let config = DigestConfig::default().with_checksum_type(checksum_type);
        let mut digest = Md5Md5CrcDigest::new(config)?;

        digest.update_reader(File::open(&path)?)?;
        let blocks = digest.block_count();
        let pending = digest.crcs_in_block() + usize::from(digest.pending_len() > 0);

        println!(
            "{:<7} {} ({} full blocks, {} CRCs in last block)",
            checksum_type.name(),
            digest.finalize(),
            blocks,
            pending
        );
    }

    Ok(())
}
