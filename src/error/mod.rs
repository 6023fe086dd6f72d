//! Error types for md5md5crc.

use thiserror::Error;

/// Errors that can occur while configuring or feeding a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    /// An I/O error occurred while reading input data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The requested per-chunk checksum width is not supported.
    #[error("unsupported checksum size: {size} bytes (only 4-byte checksums are supported)")]
    UnsupportedChecksumSize {
        /// The width that was requested, in bytes.
        size: usize,
    },
}
