//! Async digests of several streams on a tokio runtime.
//!
//! Multiple digests can run concurrently for different streams.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io

use md5md5crc::{DigestConfig, Md5Hash, digest_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create multiple data streams
    let streams: Vec<Vec<u8>> = vec![
        (0..50_000).map(|i| (i % 256) as u8).collect(),
        (50_000..100_000).map(|i| (i % 256) as u8).collect(),
        (100_000..150_000).map(|i| (i % 256) as u8).collect(),
    ];

    println!("Digesting {} streams concurrently...\n", streams.len());

    let config = DigestConfig::new(512, 16, Default::default())?;

    let handles: Vec<_> = streams
        .into_iter()
        .enumerate()
        .map(|(stream_id, data)| tokio::spawn(process_stream(stream_id, data, config)))
        .collect();

    for handle in handles {
        let (stream_id, len, hash) = handle.await??;
        println!("Stream {}: {} bytes, digest={}", stream_id, len, hash);
    }

    Ok(())
}

async fn process_stream(
    stream_id: usize,
    data: Vec<u8>,
    config: DigestConfig,
) -> Result<(usize, usize, Md5Hash), md5md5crc::DigestError> {
    let len = data.len();
    // tokio reader, adapted to futures-io
    let reader = std::io::Cursor::new(data).compat();
    let hash = digest_async(reader, config).await?;
    Ok((stream_id, len, hash))
}
