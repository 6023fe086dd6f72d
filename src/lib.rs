//! md5md5crc
//!
//! Streaming MD5-of-MD5-of-CRC32 file checksums for Rust.
//!
//! `md5md5crc` turns a byte stream into the composite checksum distributed
//! file systems such as HDFS use to compare files across nodes:
//!
//! - the stream is cut into fixed-size chunks, each gets a CRC-32 or CRC-32C
//! - every `crcs_per_block` chunk CRCs are MD5'd into a block digest
//! - the block digests are MD5'd once more into the 16-byte file digest
//!
//! Because blocks are independent, nodes holding block-aligned fragments of
//! a file can each produce block digests and a coordinator can combine them
//! into the value a single pass would have produced.
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//! - does NOT encode output (beyond hex display of [`Md5Hash`])
//!
//! It only does one thing: **Bytes in → 16-byte digest out**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use md5md5crc::{ChecksumType, DigestConfig, DigestError, Md5Md5CrcDigest};
//!
//! fn main() -> Result<(), DigestError> {
//!     let config = DigestConfig::new(512, 65536, ChecksumType::Crc32c)?;
//!     let mut digest = Md5Md5CrcDigest::new(config)?;
//!
//!     digest.update_reader(File::open("data.bin")?)?;
//!     println!("{}", digest.finalize());
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use md5md5crc::{digest_async, DigestConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), md5md5crc::DigestError> {
//!     let hash = digest_async(reader, DigestConfig::default()).await?;
//!     println!("{}", hash);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod digester;
mod error;
mod hash;

mod buffer; // internal (growable digest buffer, pooled read buffers)

#[cfg(feature = "async-io")]
mod async_io;

//
// Public surface (intentionally tiny)
//

pub use chunk::ChecksumType;
pub use config::{DEFAULT_BYTES_PER_CRC, DEFAULT_CRCS_PER_BLOCK, DigestConfig};
pub use digester::{Md5Md5CrcDigest, combine_block_digests, digest_reader};
pub use error::DigestError;
pub use hash::Md5Hash;

#[cfg(feature = "async-io")]
pub use async_io::{UpdateAsync, digest_async};
