//! Configuration for digest behavior.
//!
//! - [`DigestConfig`] - Chunk and block geometry, checksum selection, output layout
//!
//! # Example
//!
//! ```
//! use md5md5crc::{ChecksumType, DigestConfig};
//!
//! // HDFS-style layout: 512-byte chunks, 32 MiB blocks, CRC32C
//! let config = DigestConfig::new(512, 65536, ChecksumType::Crc32c)?;
//! assert_eq!(config.block_len(), 32 * 1024 * 1024);
//!
//! // Builder pattern
//! let config = DigestConfig::default()
//!     .with_bytes_per_crc(4096)
//!     .with_checksum_type(ChecksumType::Crc32c);
//! config.validate()?;
//!
//! # Ok::<(), md5md5crc::DigestError>(())
//! ```

use crate::chunk::{CHECKSUM_SIZE, ChecksumType};
use crate::error::DigestError;

/// Default number of data bytes covered by one CRC.
pub const DEFAULT_BYTES_PER_CRC: usize = 512;

/// Default number of CRCs per block (32 MiB blocks at the default chunk size).
pub const DEFAULT_CRCS_PER_BLOCK: usize = 32 * 1024 * 1024 / DEFAULT_BYTES_PER_CRC;

/// Configuration for an MD5-of-MD5-of-CRC digest.
///
/// The geometry is fixed for the lifetime of a digest:
///
/// - `bytes_per_crc` - chunk size; every chunk gets one CRC
/// - `crcs_per_block` - number of chunk CRCs hashed together into one block MD5
/// - `checksum_type` - which CRC-32 polynomial to use per chunk
///
/// # Zero padding
///
/// By default the final MD5 covers the block-digest buffer's entire allocated
/// region. That region starts at 32 bytes and doubles as digests are
/// appended, so a file with one, three or five blocks has trailing zero bytes
/// mixed into the final MD5. Existing checksums were computed this way.
/// Disable it with
/// [`DigestConfig::with_zero_padding`] to hash only the written digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestConfig {
    /// Data bytes covered by one CRC.
    bytes_per_crc: usize,

    /// CRCs accumulated before a block MD5 is taken.
    crcs_per_block: usize,

    /// Polynomial used for the chunk CRCs.
    checksum_type: ChecksumType,

    /// Width of one chunk checksum in bytes.
    checksum_size: usize,

    /// Whether the final MD5 covers the digest buffer's spare capacity.
    zero_padding: bool,
}

impl DigestConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidConfig`] if either size is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use md5md5crc::{ChecksumType, DigestConfig};
    ///
    /// let config = DigestConfig::new(512, 128, ChecksumType::Crc32)?;
    /// assert_eq!(config.bytes_per_crc(), 512);
    /// assert!(DigestConfig::new(0, 128, ChecksumType::Crc32).is_err());
    /// # Ok::<(), md5md5crc::DigestError>(())
    /// ```
    pub fn new(
        bytes_per_crc: usize,
        crcs_per_block: usize,
        checksum_type: ChecksumType,
    ) -> Result<Self, DigestError> {
        let config = Self {
            bytes_per_crc,
            crcs_per_block,
            checksum_type,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of bytes covered by one CRC.
    ///
    /// Note: This does not validate the configuration. Use [`DigestConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_bytes_per_crc(mut self, bytes: usize) -> Self {
        self.bytes_per_crc = bytes;
        self
    }

    /// Sets the number of CRCs per block.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_crcs_per_block(mut self, crcs: usize) -> Self {
        self.crcs_per_block = crcs;
        self
    }

    /// Sets the chunk checksum polynomial.
    pub fn with_checksum_type(mut self, checksum_type: ChecksumType) -> Self {
        self.checksum_type = checksum_type;
        self
    }

    /// Sets the width of a chunk checksum in bytes.
    ///
    /// Only 4 is supported; anything else fails validation with
    /// [`DigestError::UnsupportedChecksumSize`].
    pub fn with_checksum_size(mut self, size: usize) -> Self {
        self.checksum_size = size;
        self
    }

    /// Controls whether the final MD5 covers the digest buffer's spare capacity.
    pub fn with_zero_padding(mut self, enabled: bool) -> Self {
        self.zero_padding = enabled;
        self
    }

    /// Returns the number of bytes covered by one CRC.
    pub fn bytes_per_crc(&self) -> usize {
        self.bytes_per_crc
    }

    /// Returns the number of CRCs per block.
    pub fn crcs_per_block(&self) -> usize {
        self.crcs_per_block
    }

    /// Returns the chunk checksum polynomial.
    pub fn checksum_type(&self) -> ChecksumType {
        self.checksum_type
    }

    /// Returns the chunk checksum width in bytes.
    pub fn checksum_size(&self) -> usize {
        self.checksum_size
    }

    /// Returns whether zero padding is hashed into the final digest.
    pub fn zero_padding(&self) -> bool {
        self.zero_padding
    }

    /// Returns the number of data bytes covered by one full block.
    pub fn block_len(&self) -> usize {
        self.bytes_per_crc.saturating_mul(self.crcs_per_block)
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use md5md5crc::DigestConfig;
    ///
    /// assert!(DigestConfig::default().with_crcs_per_block(0).validate().is_err());
    /// assert!(DigestConfig::default().with_checksum_size(8).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), DigestError> {
        if self.bytes_per_crc == 0 {
            return Err(DigestError::InvalidConfig {
                message: "bytes_per_crc must be non-zero",
            });
        }

        if self.crcs_per_block == 0 {
            return Err(DigestError::InvalidConfig {
                message: "crcs_per_block must be non-zero",
            });
        }

        if self.checksum_size != CHECKSUM_SIZE {
            return Err(DigestError::UnsupportedChecksumSize {
                size: self.checksum_size,
            });
        }

        Ok(())
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            bytes_per_crc: DEFAULT_BYTES_PER_CRC,
            crcs_per_block: DEFAULT_CRCS_PER_BLOCK,
            checksum_type: ChecksumType::default(),
            checksum_size: CHECKSUM_SIZE,
            zero_padding: true,
        }
    }
}
