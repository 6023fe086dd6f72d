//! Combining block digests into a file digest.
//!
//! Nodes that each hold a block-aligned fragment of a file can digest their
//! fragment independently, ship the per-block digests to a coordinator, and
//! have the coordinator produce the same value a single pass over the whole
//! file would have produced.

use crate::buffer::{GrowableBuffer, INITIAL_CAPACITY};
use crate::config::DigestConfig;
use crate::hash::{Md5Hash, Md5Hasher};

/// Returns the bytes of `buffer` that go into the final MD5.
pub(crate) fn final_region(buffer: &GrowableBuffer, zero_padding: bool) -> &[u8] {
    if zero_padding {
        buffer.allocated()
    } else {
        buffer.logical()
    }
}

/// Computes the final digest from per-block digests, in stream order.
///
/// Only `zero_padding` is read from `config`; the block geometry is implied
/// by the digests themselves. Every fragment except the last must end on a
/// block boundary (a multiple of [`DigestConfig::block_len`] bytes) for the
/// result to match a single-pass digest.
///
/// # Example
///
/// ```
/// use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest, combine_block_digests};
///
/// let config = DigestConfig::new(16, 4, ChecksumType::Crc32c)?;
/// let data = vec![0x42u8; 200];
///
/// // Two fragments split on a 64-byte block boundary
/// let mut blocks = Vec::new();
/// for fragment in [&data[..128], &data[128..]] {
///     let mut digest = Md5Md5CrcDigest::new(config)?;
///     digest.update(fragment);
///     blocks.extend(digest.finalize_blocks());
/// }
///
/// let mut whole = Md5Md5CrcDigest::new(config)?;
/// whole.update(&data);
/// assert_eq!(combine_block_digests(&config, blocks), whole.finalize());
/// # Ok::<(), md5md5crc::DigestError>(())
/// ```
pub fn combine_block_digests<I>(config: &DigestConfig, digests: I) -> Md5Hash
where
    I: IntoIterator<Item = Md5Hash>,
{
    let mut buffer = GrowableBuffer::with_capacity(INITIAL_CAPACITY);
    for digest in digests {
        buffer.write(digest.as_bytes());
    }
    Md5Hasher::hash(final_region(&buffer, config.zero_padding()))
}
