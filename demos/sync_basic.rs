//! Basic synchronous digest example with the streaming API.
//!
//! Run with:
//!     cargo run --example sync_basic

use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 3 MB of deterministic data
    let data: Vec<u8> = (0..3 * 1024 * 1024).map(|i| (i * 7 + 13) as u8).collect();

    // 512-byte chunks, 1 MiB blocks
    let config = DigestConfig::new(512, 2048, ChecksumType::Crc32c)?;
    let mut digest = Md5Md5CrcDigest::new(config)?;

    println!("Digesting {} bytes of data...\n", data.len());

    // Simulate streaming data in batches
    let batch_size = 8 * 1024;
    for batch in data.chunks(batch_size) {
        let blocks_before = digest.block_count();
        digest.update(batch);

        if digest.block_count() > blocks_before {
            println!(
                "Block {} closed after {} bytes",
                digest.block_count() - 1,
                digest.bytes_written()
            );
        }
    }

    for (i, block) in digest.block_digests().enumerate() {
        println!("Block {}: {}", i, block);
    }

    let total = digest.bytes_written();
    let hash = digest.finalize();
    println!("\nMD5-of-MD5-of-{}: {} ({} bytes)", config.checksum_type(), hash, total);

    Ok(())
}
