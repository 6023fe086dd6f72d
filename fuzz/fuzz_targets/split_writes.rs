#![no_main]

use libfuzzer_sys::fuzz_target;
use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest};

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (seed, split, data) = input;

    let configs = [
        DigestConfig::new(1, 1, ChecksumType::Crc32).unwrap(),
        DigestConfig::new(16, 4, ChecksumType::Crc32c).unwrap(),
        DigestConfig::new(512, 8, ChecksumType::Crc32).unwrap(),
        DigestConfig::default()
            .with_bytes_per_crc(7 + seed as usize)
            .with_crcs_per_block(1 + (seed % 5) as usize)
            .with_zero_padding(seed % 2 == 0),
    ];

    for config in configs {
        let mut whole = Md5Md5CrcDigest::new(config).unwrap();
        whole.update(&data);

        // Verify: write batching never changes the digest
        let mut pieces = Md5Md5CrcDigest::new(config).unwrap();
        for piece in data.chunks(1 + split as usize) {
            pieces.update(piece);
        }
        assert_eq!(pieces.bytes_written(), data.len() as u64);

        // Verify: reset returns to the fresh state
        let mut reused = Md5Md5CrcDigest::new(config).unwrap();
        reused.update(&[seed; 37]);
        reused.reset();
        reused.update(&data);

        let expected = whole.finalize();
        assert_eq!(pieces.finalize(), expected);
        assert_eq!(reused.finalize(), expected);
    }
});
