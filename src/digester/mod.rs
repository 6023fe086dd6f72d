//! Digest engine for processing byte streams.
//!
//! - [`Md5Md5CrcDigest`] - Stateful digest with `update()`/`finalize()` API
//! - [`combine_block_digests`] - Final combine step over per-block digests
//! - [`digest_reader`] - One-shot digest of a [`std::io::Read`] source

mod combine;
mod engine;
mod reader;
mod traits;

pub use combine::combine_block_digests;
pub use engine::Md5Md5CrcDigest;
pub use reader::digest_reader;
