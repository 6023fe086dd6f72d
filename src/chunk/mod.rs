//! Chunk checksums.
//!
//! - [`ChecksumType`] - CRC-32 or CRC-32C
//! - [`ChunkCrc`] - running CRC over the current chunk

mod checksum;

pub use checksum::{CHECKSUM_SIZE, ChecksumType, ChunkCrc};
