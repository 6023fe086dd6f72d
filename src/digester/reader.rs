//! Blocking front-ends: `std::io::Write` and reader pumping.

use std::io::{self, ErrorKind, Read, Write};

use crate::buffer::ReadBuffer;
use crate::config::DigestConfig;
use crate::error::DigestError;
use crate::hash::Md5Hash;

use super::Md5Md5CrcDigest;

impl Md5Md5CrcDigest {
    /// Reads `reader` to the end, feeding everything into the digest.
    ///
    /// Returns the number of bytes read. Interrupted reads are retried; any
    /// other I/O error aborts, leaving the bytes read so far absorbed.
    ///
    /// # Example
    ///
    /// ```
    /// use md5md5crc::Md5Md5CrcDigest;
    /// use std::io::Cursor;
    ///
    /// let mut digest = Md5Md5CrcDigest::default();
    /// let n = digest.update_reader(Cursor::new(vec![0u8; 10_000]))?;
    /// assert_eq!(n, 10_000);
    /// # Ok::<(), md5md5crc::DigestError>(())
    /// ```
    pub fn update_reader<R: Read>(&mut self, mut reader: R) -> Result<u64, DigestError> {
        let mut buffer = ReadBuffer::take();
        let mut total = 0u64;

        loop {
            match reader.read(buffer.as_mut_slice()) {
                Ok(0) => return Ok(total),
                Ok(n) => {
                    self.update(buffer.filled(n));
                    total += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl Write for Md5Md5CrcDigest {
    /// Always consumes the whole buffer.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Digests everything `reader` yields with the given configuration.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use md5md5crc::{digest_reader, ChecksumType, DigestConfig, DigestError};
///
/// fn main() -> Result<(), DigestError> {
///     let file = File::open("data.bin")?;
///     let config = DigestConfig::new(512, 65536, ChecksumType::Crc32c)?;
///     println!("{}", digest_reader(file, config)?);
///     Ok(())
/// }
/// ```
pub fn digest_reader<R: Read>(reader: R, config: DigestConfig) -> Result<Md5Hash, DigestError> {
    let mut digest = Md5Md5CrcDigest::new(config)?;
    digest.update_reader(reader)?;
    Ok(digest.finalize())
}
