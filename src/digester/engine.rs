//! Core digest engine - `Md5Md5CrcDigest` with a streaming API.
//!
//! The input stream is split into fixed-size chunks, each chunk gets a
//! CRC-32, every `crcs_per_block` CRCs are MD5'd into a block digest, and the
//! block digests are MD5'd once more at the end:
//!
//! ```text
//! bytes ─► CRC per chunk ─► MD5 per block of CRCs ─► MD5 over block MD5s
//! ```
//!
//! - `update()` - Feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finalize()` - Flush the partial chunk and block, return the digest
//!
//! # Example
//!
//! ```
//! use md5md5crc::{DigestConfig, Md5Md5CrcDigest};
//!
//! let mut digest = Md5Md5CrcDigest::new(DigestConfig::default())?;
//!
//! // Feed data in any size
//! digest.update(b"first");
//! digest.update(b"second");
//!
//! let hash = digest.finalize();
//! assert_eq!(hash.to_hex().len(), 32);
//! # Ok::<(), md5md5crc::DigestError>(())
//! ```

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::buffer::{GrowableBuffer, INITIAL_CAPACITY};
use crate::config::DigestConfig;
use crate::chunk::ChunkCrc;
use crate::error::DigestError;
use crate::hash::{Md5Hash, Md5Hasher};

use super::combine::final_region;

/// A streaming MD5-of-MD5-of-CRC digest.
///
/// `Md5Md5CrcDigest` accepts bytes via `update()` and keeps chunk and block
/// state across calls, so chunk boundaries depend only on stream offsets.
///
/// # Determinism
///
/// Identical byte streams produce identical digests, regardless of:
/// - How many bytes are passed at once (1 byte vs 1MB)
/// - Number of `update()` calls
///
/// # Finalization
///
/// Finalizing flushes the pending partial chunk and partial block into the
/// running state, so it is a one-way transition. [`Md5Md5CrcDigest::finalize`]
/// consumes the digest; [`Md5Md5CrcDigest::finalize_reset`] returns the value
/// and puts the instance back into its freshly constructed state.
///
/// # Example
///
/// ```
/// use md5md5crc::{ChecksumType, DigestConfig, Md5Md5CrcDigest};
///
/// let config = DigestConfig::new(512, 65536, ChecksumType::Crc32c)?;
/// let mut digest = Md5Md5CrcDigest::new(config)?;
///
/// for part in [&b"first part"[..], b" second part", b" final part"] {
///     digest.update(part);
/// }
///
/// println!("{}", digest.finalize());
/// # Ok::<(), md5md5crc::DigestError>(())
/// ```
#[derive(Debug)]
pub struct Md5Md5CrcDigest {
    config: DigestConfig,
    crc: ChunkCrc,
    crcs_in_block: usize,
    block_crcs: BytesMut,
    block_digests: GrowableBuffer,
    md5: Md5Hasher,
    bytes_written: u64,
}

impl Md5Md5CrcDigest {
    /// Size of the final digest in bytes.
    pub const OUTPUT_SIZE: usize = Md5Hash::SIZE;

    /// Nominal block size of the underlying MD5, for generic hash consumers.
    pub const BLOCK_SIZE: usize = 64;

    /// Creates a new digest with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`DigestConfig::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use md5md5crc::{DigestConfig, Md5Md5CrcDigest};
    ///
    /// let digest = Md5Md5CrcDigest::new(DigestConfig::default())?;
    /// assert!(Md5Md5CrcDigest::new(DigestConfig::default().with_bytes_per_crc(0)).is_err());
    /// # Ok::<(), md5md5crc::DigestError>(())
    /// ```
    pub fn new(config: DigestConfig) -> Result<Self, DigestError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    pub(crate) fn with_valid_config(config: DigestConfig) -> Self {
        Self {
            config,
            crc: ChunkCrc::new(config.bytes_per_crc(), config.checksum_type()),
            crcs_in_block: 0,
            block_crcs: BytesMut::new(),
            block_digests: GrowableBuffer::with_capacity(INITIAL_CAPACITY),
            md5: Md5Hasher::new(),
            bytes_written: 0,
        }
    }

    /// Feeds data into the digest.
    ///
    /// Chunk boundaries are placed every `bytes_per_crc` bytes of the overall
    /// stream, independent of how the stream is split across calls.
    pub fn update(&mut self, data: &[u8]) {
        let mut rest = data;

        // Complete the chunk left open by the previous call
        let to_complete = self.crc.remaining();
        if rest.len() >= to_complete {
            let (head, tail) = rest.split_at(to_complete);
            self.crc.update(head);
            self.flush_crc();
            rest = tail;
        }

        let mut chunks = rest.chunks_exact(self.config.bytes_per_crc());
        for chunk in &mut chunks {
            self.crc.update(chunk);
            self.flush_crc();
        }

        let tail = chunks.remainder();
        if !tail.is_empty() {
            self.crc.update(tail);
        }

        self.bytes_written += data.len() as u64;
    }

    /// Closes the current chunk and appends its CRC to the block.
    fn flush_crc(&mut self) {
        let crc = self.crc.emit_and_reset();
        self.block_crcs.extend_from_slice(&crc);
        self.crcs_in_block += 1;

        if self.crcs_in_block == self.config.crcs_per_block() {
            self.flush_block();
        }
    }

    /// Hashes the block's CRCs and appends the block digest.
    fn flush_block(&mut self) {
        self.md5.update(&self.block_crcs);
        let digest = self.md5.finalize_reset();
        self.block_digests.write(digest.as_bytes());

        trace!(
            block = self.block_count() - 1,
            crcs = self.crcs_in_block,
            digest = %digest,
            "block digest complete"
        );

        self.block_crcs.clear();
        self.crcs_in_block = 0;
    }

    /// Flushes the partial chunk and the partial block, if any.
    fn flush_pending(&mut self) {
        if self.crc.pending() > 0 {
            self.flush_crc();
        }

        if !self.block_crcs.is_empty() {
            self.flush_block();
        }
    }

    /// Runs the terminal transition and returns the final digest.
    ///
    /// Leaves the instance in a finished state; callers either drop it or
    /// reset it.
    fn finish(&mut self) -> Md5Hash {
        self.flush_pending();

        debug!(
            bytes = self.bytes_written,
            blocks = self.block_count(),
            capacity = self.block_digests.capacity(),
            zero_padding = self.config.zero_padding(),
            "finalizing digest"
        );

        self.md5.update(final_region(&self.block_digests, self.config.zero_padding()));
        self.md5.finalize_reset()
    }

    /// Consumes the digest and returns the final value.
    ///
    /// An empty stream is well defined: it hashes the empty block-digest
    /// buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use md5md5crc::Md5Md5CrcDigest;
    ///
    /// let digest = Md5Md5CrcDigest::default();
    /// // 32 zero bytes: the initial capacity of the block-digest buffer
    /// assert_eq!(digest.finalize().to_hex(), "70bc8f4b72a86921468bf8e8441dce51");
    /// ```
    pub fn finalize(mut self) -> Md5Hash {
        self.finish()
    }

    /// Returns the final value and resets the digest for a new stream.
    pub fn finalize_reset(&mut self) -> Md5Hash {
        let hash = self.finish();
        self.reset();
        hash
    }

    /// Consumes the digest and returns the per-block digests.
    ///
    /// The partial chunk and partial block are flushed first, exactly as
    /// [`Md5Md5CrcDigest::finalize`] would, but the final combine step is
    /// skipped. Feed the result (possibly concatenated with other fragments'
    /// blocks) to [`combine_block_digests`](crate::combine_block_digests).
    pub fn finalize_blocks(mut self) -> Vec<Md5Hash> {
        self.flush_pending();
        self.block_digests().collect()
    }

    /// Resets the digest to its just-constructed state.
    ///
    /// The configuration is kept.
    pub fn reset(&mut self) {
        self.crc.reset();
        self.crcs_in_block = 0;
        self.block_crcs.clear();
        self.block_digests.reset(INITIAL_CAPACITY);
        self.md5.reset();
        self.bytes_written = 0;
    }

    /// Returns the digests of the blocks completed so far.
    pub fn block_digests(&self) -> impl Iterator<Item = Md5Hash> + '_ {
        self.block_digests
            .logical()
            .chunks_exact(Md5Hash::SIZE)
            .filter_map(Md5Hash::from_slice)
    }

    /// Returns the number of blocks completed so far.
    pub fn block_count(&self) -> usize {
        self.block_digests.len() / Md5Hash::SIZE
    }

    /// Returns the number of CRCs collected for the current block.
    pub fn crcs_in_block(&self) -> usize {
        self.crcs_in_block
    }

    /// Returns the number of bytes absorbed into the current, open chunk.
    pub fn pending_len(&self) -> usize {
        self.crc.pending()
    }

    /// Returns the total number of bytes fed since construction or reset.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Returns the configuration used by this digest.
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Returns the digest size in bytes (always 16).
    pub fn size(&self) -> usize {
        Self::OUTPUT_SIZE
    }

    /// Returns the nominal hash block size in bytes (always 64).
    pub fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }
}

impl Default for Md5Md5CrcDigest {
    fn default() -> Self {
        Self::with_valid_config(DigestConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChecksumType;

    fn small_config() -> DigestConfig {
        DigestConfig::new(4, 3, ChecksumType::Crc32c).unwrap()
    }

    #[test]
    fn test_partial_chunk_stays_pending() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(b"ab");

        assert_eq!(digest.pending_len(), 2);
        assert_eq!(digest.crcs_in_block(), 0);
        assert_eq!(digest.bytes_written(), 2);
    }

    #[test]
    fn test_split_write_completes_chunk() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(b"ab");
        digest.update(b"cdefg");

        // "abcd" closed, "efg" pending
        assert_eq!(digest.crcs_in_block(), 1);
        assert_eq!(digest.pending_len(), 3);
        assert_eq!(
            &digest.block_crcs[..],
            &ChecksumType::Crc32c.checksum(b"abcd").to_be_bytes()[..]
        );
    }

    #[test]
    fn test_block_flushes_at_crcs_per_block() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(&[0x5A; 12]);

        assert_eq!(digest.block_count(), 1);
        assert_eq!(digest.crcs_in_block(), 0);
        assert!(digest.block_crcs.is_empty());

        let crc = ChecksumType::Crc32c.checksum(&[0x5A; 4]).to_be_bytes();
        let expected = Md5Hasher::hash(&crc.repeat(3));
        assert_eq!(digest.block_digests().collect::<Vec<_>>(), vec![expected]);
    }

    #[test]
    fn test_exact_chunk_multiple_has_no_pending() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(&[1; 8]);
        assert_eq!(digest.pending_len(), 0);
        assert_eq!(digest.crcs_in_block(), 2);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(b"");
        assert_eq!(digest.pending_len(), 0);
        assert_eq!(digest.crcs_in_block(), 0);
        assert_eq!(
            digest.finalize(),
            Md5Md5CrcDigest::new(small_config()).unwrap().finalize()
        );
    }

    #[test]
    fn test_finalize_blocks_flushes_pending() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(&[2; 13]);

        // 3 full chunks make a block, then one 1-byte chunk forms a short block
        let blocks = digest.finalize_blocks();
        assert_eq!(blocks.len(), 2);

        let short = ChecksumType::Crc32c.checksum(&[2]).to_be_bytes();
        assert_eq!(blocks[1], Md5Hasher::hash(&short));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(&[3; 100]);
        digest.reset();

        assert_eq!(digest.pending_len(), 0);
        assert_eq!(digest.crcs_in_block(), 0);
        assert_eq!(digest.block_count(), 0);
        assert_eq!(digest.bytes_written(), 0);
        assert_eq!(digest.block_digests.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_finalize_reset_matches_finalize() {
        let mut digest = Md5Md5CrcDigest::new(small_config()).unwrap();
        digest.update(b"hello world");
        let first = digest.finalize_reset();

        digest.update(b"hello world");
        let second = digest.finalize_reset();

        let mut fresh = Md5Md5CrcDigest::new(small_config()).unwrap();
        fresh.update(b"hello world");

        assert_eq!(first, second);
        assert_eq!(first, fresh.finalize());
    }

    #[test]
    fn test_size_metadata() {
        let digest = Md5Md5CrcDigest::default();
        assert_eq!(digest.size(), 16);
        assert_eq!(digest.block_size(), 64);
    }
}
