//! Standard framework integrations for [`CopySource`].
//!
//! - [`std::io::Read`] - the std buffered-read contract; exhaustion is
//!   reported as `Ok(0)` per the std EOF convention
//! - [`bytes::Buf`] - zero-copy streaming consumption sharing the same
//!   cursor as the buffered reads

use std::io;

use bytes::Buf;

use crate::error::SourceError;
use crate::source::CopySource;

impl io::Read for CopySource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match CopySource::read(self, buf) {
            Ok(count) => Ok(count),
            // std::io signals end-of-stream with a zero count.
            Err(SourceError::Exhausted) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl Buf for CopySource<'_> {
    fn remaining(&self) -> usize {
        CopySource::remaining(self)
    }

    fn chunk(&self) -> &[u8] {
        &self.as_slice()[self.position()..]
    }

    fn advance(&mut self, cnt: usize) {
        let remaining = CopySource::remaining(self);
        assert!(
            cnt <= remaining,
            "cannot advance past end of source: {} > {}",
            cnt,
            remaining
        );
        self.consume(cnt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_io_read_drains_to_eof() {
        let data = vec![0x01u8, 0x02, 0x03];
        let mut source = CopySource::new(&data);
        let mut out = Vec::new();
        source.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);

        // Further reads report EOF, not an error.
        let mut buf = [0u8; 4];
        assert_eq!(io::Read::read(&mut source, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_io_read_partial() {
        let data = vec![0xAAu8; 10];
        let mut source = CopySource::new(&data);
        let mut buf = [0u8; 4];
        assert_eq!(io::Read::read(&mut source, &mut buf).unwrap(), 4);
        assert_eq!(source.position(), 4);
    }

    #[test]
    fn test_buf_consumption() {
        let data = vec![0x01u8, 0x02, 0x03, 0x04];
        let mut source = CopySource::new(&data);

        assert_eq!(Buf::remaining(&source), 4);
        assert_eq!(source.chunk(), &data[..]);

        source.advance(3);
        assert_eq!(Buf::remaining(&source), 1);
        assert_eq!(source.chunk(), &[0x04]);

        assert_eq!(source.get_u8(), 0x04);
        assert!(!source.has_remaining());
    }

    #[test]
    fn test_buf_shares_cursor_with_read() {
        let data = vec![0x01u8, 0x02, 0x03, 0x04];
        let mut source = CopySource::new(&data);

        let mut buf = [0u8; 2];
        assert_eq!(CopySource::read(&mut source, &mut buf), Ok(2));
        assert_eq!(source.chunk(), &[0x03, 0x04]);

        source.advance(1);
        assert_eq!(CopySource::read(&mut source, &mut buf), Ok(1));
        assert_eq!(buf[0], 0x04);
    }

    #[test]
    #[should_panic(expected = "past end")]
    fn test_buf_advance_past_end_panics() {
        let data = vec![0x01u8];
        let mut source = CopySource::new(&data);
        source.advance(2);
    }
}
