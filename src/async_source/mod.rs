//! Async integration for [`CopySource`].
//!
//! Implements `futures_io::AsyncRead`, making the adapter usable with any
//! futures-compatible runtime (tokio, async-std, smol, …). An in-memory
//! source is always ready, so every poll completes immediately with the
//! synchronous read result.
//!
//! # Example
//!
//! ```ignore
//! use copysource::CopySource;
//! use futures_util::io::AsyncReadExt;
//!
//! async fn drain(data: &[u8]) -> std::io::Result<Vec<u8>> {
//!     let mut source = CopySource::new(data);
//!     let mut out = Vec::new();
//!     source.read_to_end(&mut out).await?;
//!     Ok(out)
//! }
//! ```

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;

use crate::source::CopySource;

impl AsyncRead for CopySource<'_> {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(io::Read::read(self.get_mut(), buf))
    }
}

#[cfg(test)]
mod tests {
    use crate::source::CopySource;
    use futures_util::io::AsyncReadExt;

    #[tokio::test]
    async fn test_async_read_to_end() {
        let data: Vec<u8> = (0..=255u8).collect();
        let mut source = CopySource::new(&data);

        let mut out = Vec::new();
        source.read_to_end(&mut out).await.unwrap();
        assert_eq!(out, data);
        assert!(source.is_exhausted());
    }

    #[tokio::test]
    async fn test_async_read_partial() {
        let data = vec![0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06];
        let mut source = CopySource::new(&data);

        let mut buf = [0u8; 4];
        let n = AsyncReadExt::read(&mut source, &mut buf).await.unwrap();
        assert_eq!(n, 4);
        assert_eq!(&buf[..n], &data[..4]);
        assert_eq!(source.position(), 4);
    }

    #[tokio::test]
    async fn test_async_read_empty_source() {
        let data: Vec<u8> = Vec::new();
        let mut source = CopySource::new(&data);

        let mut buf = [0u8; 8];
        let n = AsyncReadExt::read(&mut source, &mut buf).await.unwrap();
        assert_eq!(n, 0);
    }
}
