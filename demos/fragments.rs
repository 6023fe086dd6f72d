//! Combining digests of block-aligned fragments.
//!
//! Each "node" digests its own fragment of the file and hands back the
//! per-block digests; the coordinator combines them into the file digest.
//!
//! Run with:
//!     cargo run --example fragments

use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest, combine_block_digests};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u8> = (0..1_000_000).map(|i| (i * 7 + 13) as u8).collect();

    // 64 KiB blocks
    let config = DigestConfig::new(512, 128, ChecksumType::Crc32c)?;
    let fragment_len = 4 * config.block_len();

    let mut blocks = Vec::new();
    for (node, fragment) in data.chunks(fragment_len).enumerate() {
        let mut digest = Md5Md5CrcDigest::new(config)?;
        digest.update(fragment);

        let fragment_blocks = digest.finalize_blocks();
        println!(
            "Node {}: {} bytes, {} blocks",
            node,
            fragment.len(),
            fragment_blocks.len()
        );
        blocks.extend(fragment_blocks);
    }

    let combined = combine_block_digests(&config, blocks);

    let mut whole = Md5Md5CrcDigest::new(config)?;
    whole.update(&data);
    let single_pass = whole.finalize();

    println!("\nCombined:    {}", combined);
    println!("Single pass: {}", single_pass);
    assert_eq!(combined, single_pass);

    Ok(())
}
