//! Benchmarks for md5md5crc.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest, digest_reader};

fn pattern(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 7 + 13) as u8).collect()
}

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = pattern(size);
        group.throughput(Throughput::Bytes(size as u64));

        for checksum_type in [ChecksumType::Crc32, ChecksumType::Crc32c] {
            let config = DigestConfig::default().with_checksum_type(checksum_type);
            group.bench_with_input(
                format!("{checksum_type}_{}kb", size / 1024),
                &data,
                |b, data| {
                    b.iter(|| {
                        let mut digest = Md5Md5CrcDigest::new(config).unwrap();
                        digest.update(black_box(data));
                        black_box(digest.finalize())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("configs");
    let size = 4 * 1024 * 1024;
    let data = pattern(size);
    group.throughput(Throughput::Bytes(size as u64));

    // (bytes_per_crc, crcs_per_block)
    for (bytes_per_crc, crcs_per_block) in [(64, 16), (512, 2048), (512, 65536), (4096, 256)] {
        let config = DigestConfig::new(bytes_per_crc, crcs_per_block, ChecksumType::Crc32c).unwrap();
        group.bench_function(format!("bpc{bytes_per_crc}_cpb{crcs_per_block}"), |b| {
            b.iter(|| {
                let mut digest = Md5Md5CrcDigest::new(config).unwrap();
                digest.update(black_box(&data));
                black_box(digest.finalize())
            });
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let size = 1024 * 1024;
    let data = pattern(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("reader", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            black_box(digest_reader(cursor, DigestConfig::default()).unwrap())
        });
    });

    // Small writes exercise the chunk-completion path
    group.bench_function("writes_100b", |b| {
        b.iter(|| {
            let mut digest = Md5Md5CrcDigest::default();
            for piece in data.chunks(100) {
                digest.update(black_box(piece));
            }
            black_box(digest.finalize())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_digest, bench_configs, bench_streaming);
criterion_main!(benches);
