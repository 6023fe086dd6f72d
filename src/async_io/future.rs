//! Async reader adapter and `AsyncWrite` support.
//!
//! # Example
//!
//! ```ignore
//! use futures_io::AsyncRead;
//! use md5md5crc::{digest_async, DigestConfig};
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), md5md5crc::DigestError> {
//!     let hash = digest_async(reader, DigestConfig::default()).await?;
//!     println!("{}", hash);
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::io::{self, ErrorKind};
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_io::{AsyncRead, AsyncWrite};
use pin_project_lite::pin_project;

use crate::buffer::ReadBuffer;
use crate::config::DigestConfig;
use crate::digester::Md5Md5CrcDigest;
use crate::error::DigestError;
use crate::hash::Md5Hash;

pin_project! {
    /// Future that reads an async reader to the end, feeding the digest.
    ///
    /// Resolves to the number of bytes read.
    #[must_use = "futures do nothing unless polled"]
    pub struct UpdateAsync<'a, R> {
        #[pin]
        reader: R,
        digest: &'a mut Md5Md5CrcDigest,
        buffer: ReadBuffer,
        total: u64,
    }
}

impl<R: AsyncRead> Future for UpdateAsync<'_, R> {
    type Output = Result<u64, DigestError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            let read = ready!(
                this.reader
                    .as_mut()
                    .poll_read(cx, this.buffer.as_mut_slice())
            );
            match read {
                Ok(0) => return Poll::Ready(Ok(*this.total)),
                Ok(n) => {
                    this.digest.update(this.buffer.filled(n));
                    *this.total += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Poll::Ready(Err(DigestError::Io(e))),
            }
        }
    }
}

impl Md5Md5CrcDigest {
    /// Returns a future that reads `reader` to the end into this digest.
    pub fn update_async<R: AsyncRead>(&mut self, reader: R) -> UpdateAsync<'_, R> {
        UpdateAsync {
            reader,
            digest: self,
            buffer: ReadBuffer::take(),
            total: 0,
        }
    }
}

/// Digests everything an async reader yields with the given configuration.
pub async fn digest_async<R: AsyncRead>(
    reader: R,
    config: DigestConfig,
) -> Result<Md5Hash, DigestError> {
    let mut digest = Md5Md5CrcDigest::new(config)?;
    digest.update_async(reader).await?;
    Ok(digest.finalize())
}

impl AsyncWrite for Md5Md5CrcDigest {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.get_mut().update(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
