//! Per-chunk CRC-32 state.
//!
//! Every chunk of `bytes_per_crc` input bytes gets one CRC. [`ChunkCrc`]
//! accumulates bytes into the active CRC and emits it as 4 big-endian bytes
//! when the digest closes the chunk.

use std::fmt;

use crc::{CRC_32_ISCSI, CRC_32_ISO_HDLC, Crc};

/// Width of an emitted chunk checksum in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// CRC-32 (IEEE 802.3, as used by zlib and PKZIP).
static CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// CRC-32C (Castagnoli, as used by iSCSI and HDFS).
static CRC32C: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

/// The CRC-32 variant computed over each chunk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumType {
    /// CRC-32 with the IEEE polynomial.
    #[default]
    Crc32,
    /// CRC-32C with the Castagnoli polynomial.
    Crc32c,
}

impl ChecksumType {
    fn algorithm(self) -> &'static Crc<u32> {
        match self {
            ChecksumType::Crc32 => &CRC32,
            ChecksumType::Crc32c => &CRC32C,
        }
    }

    /// Computes the checksum of `data` in one shot.
    ///
    /// # Example
    ///
    /// ```
    /// use md5md5crc::ChecksumType;
    ///
    /// assert_eq!(ChecksumType::Crc32.checksum(b"123456789"), 0xCBF4_3926);
    /// assert_eq!(ChecksumType::Crc32c.checksum(b"123456789"), 0xE306_9283);
    /// ```
    pub fn checksum(self, data: &[u8]) -> u32 {
        self.algorithm().checksum(data)
    }

    /// Returns the conventional name of this variant.
    pub const fn name(self) -> &'static str {
        match self {
            ChecksumType::Crc32 => "CRC32",
            ChecksumType::Crc32c => "CRC32C",
        }
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running CRC over the current chunk.
///
/// Tracks how many bytes of the chunk have been absorbed. The owning digest
/// decides where chunks end; this type never splits input on its own.
pub struct ChunkCrc {
    checksum_type: ChecksumType,
    bytes_per_crc: usize,
    digest: crc::Digest<'static, u32>,
    in_chunk: usize,
}

impl ChunkCrc {
    /// Creates a new chunk CRC for `bytes_per_crc`-byte chunks.
    pub fn new(bytes_per_crc: usize, checksum_type: ChecksumType) -> Self {
        Self {
            checksum_type,
            bytes_per_crc,
            digest: checksum_type.algorithm().digest(),
            in_chunk: 0,
        }
    }

    /// Feeds bytes into the active CRC.
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
        self.in_chunk += data.len();
    }

    /// Emits the current CRC as big-endian bytes and starts a new chunk.
    pub fn emit_and_reset(&mut self) -> [u8; CHECKSUM_SIZE] {
        let digest = std::mem::replace(
            &mut self.digest,
            self.checksum_type.algorithm().digest(),
        );
        self.in_chunk = 0;
        digest.finalize().to_be_bytes()
    }

    /// Discards the active CRC.
    pub fn reset(&mut self) {
        self.digest = self.checksum_type.algorithm().digest();
        self.in_chunk = 0;
    }

    /// Returns the number of bytes absorbed since the last emit or reset.
    pub fn pending(&self) -> usize {
        self.in_chunk
    }

    /// Returns the number of bytes still needed to complete the chunk.
    pub fn remaining(&self) -> usize {
        self.bytes_per_crc - self.in_chunk
    }
}

impl fmt::Debug for ChunkCrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkCrc")
            .field("checksum_type", &self.checksum_type)
            .field("bytes_per_crc", &self.bytes_per_crc)
            .field("in_chunk", &self.in_chunk)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_values() {
        // Standard "123456789" check values for both polynomials
        assert_eq!(ChecksumType::Crc32.checksum(b"123456789"), 0xCBF4_3926);
        assert_eq!(ChecksumType::Crc32c.checksum(b"123456789"), 0xE306_9283);
    }

    #[test]
    fn test_emit_is_big_endian() {
        let mut crc = ChunkCrc::new(512, ChecksumType::Crc32);
        crc.update(b"123456789");
        assert_eq!(crc.emit_and_reset(), [0xCB, 0xF4, 0x39, 0x26]);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut crc = ChunkCrc::new(512, ChecksumType::Crc32c);
        crc.update(b"1234");
        crc.update(b"56789");
        assert_eq!(crc.pending(), 9);
        assert_eq!(
            u32::from_be_bytes(crc.emit_and_reset()),
            ChecksumType::Crc32c.checksum(b"123456789")
        );
    }

    #[test]
    fn test_emit_resets_state() {
        let mut crc = ChunkCrc::new(16, ChecksumType::Crc32);
        crc.update(b"first chunk");
        let _ = crc.emit_and_reset();

        assert_eq!(crc.pending(), 0);
        assert_eq!(crc.remaining(), 16);

        crc.update(b"hello");
        assert_eq!(
            u32::from_be_bytes(crc.emit_and_reset()),
            ChecksumType::Crc32.checksum(b"hello")
        );
    }

    #[test]
    fn test_reset_discards_bytes() {
        let mut crc = ChunkCrc::new(16, ChecksumType::Crc32c);
        crc.update(b"garbage");
        crc.reset();
        crc.update(b"hello");
        assert_eq!(
            u32::from_be_bytes(crc.emit_and_reset()),
            ChecksumType::Crc32c.checksum(b"hello")
        );
    }

    #[test]
    fn test_remaining() {
        let mut crc = ChunkCrc::new(8, ChecksumType::Crc32);
        assert_eq!(crc.remaining(), 8);
        crc.update(b"abc");
        assert_eq!(crc.remaining(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(ChecksumType::Crc32.to_string(), "CRC32");
        assert_eq!(ChecksumType::Crc32c.to_string(), "CRC32C");
        assert_eq!(ChecksumType::default(), ChecksumType::Crc32);
    }
}
