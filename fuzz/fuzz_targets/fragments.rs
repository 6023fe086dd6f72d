#![no_main]

use libfuzzer_sys::fuzz_target;
use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest, combine_block_digests};

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (blocks_per_fragment, data) = input;
    let config = DigestConfig::new(8, 3, ChecksumType::Crc32c).unwrap();
    let fragment_len = config.block_len() * (1 + blocks_per_fragment as usize % 4);

    let mut blocks = Vec::new();
    for fragment in data.chunks(fragment_len) {
        let mut digest = Md5Md5CrcDigest::new(config).unwrap();
        digest.update(fragment);
        blocks.extend(digest.finalize_blocks());
    }

    let mut whole = Md5Md5CrcDigest::new(config).unwrap();
    whole.update(&data);

    assert_eq!(combine_block_digests(&config, blocks), whole.finalize());
});
