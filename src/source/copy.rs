//! Core source adapter - CopySource with direct and buffered access.
//!
//! This module implements the adapter itself. It provides the two access
//! patterns a streaming framework consumes:
//!
//! - [`CopySource::input_sequence`] - Raw half-open bounds of the whole
//!   source, for direct in-place consumption
//! - [`CopySource::read`] / [`CopySource::try_read`] - Buffered pulls that
//!   advance the cursor
//! - [`CopySource::read_raw`] - Numeric compatibility shim using [`NO_DATA`]
//!
//! # Example
//!
//! ```
//! use copysource::CopySource;
//!
//! let data = vec![0x42u8; 8];
//! let mut source = CopySource::new(&data);
//!
//! let mut buf = [0u8; 3];
//! assert_eq!(source.read(&mut buf), Ok(3));
//! assert_eq!(source.position(), 3);
//! assert_eq!(source.remaining(), 5);
//! ```

use std::ops::Range;

use crate::error::SourceError;

/// Sentinel returned by [`CopySource::read_raw`] when no bytes can be
/// produced: the request was malformed or the source is exhausted.
///
/// The raw shim deliberately does not distinguish the two conditions; use
/// [`CopySource::try_read`] to tell them apart.
pub const NO_DATA: isize = -1;

/// A read-only source adapter over an externally-owned byte container.
///
/// `CopySource` borrows a contiguous byte container and serves its bytes
/// without ever copying or mutating the underlying storage. It carries a
/// single piece of state: a forward-only cursor used by the buffered read
/// path. Direct-mode access ignores the cursor entirely and always covers
/// the full container.
///
/// # Binding
///
/// The adapter binds to anything contiguous via `AsRef<[u8]>`: a `Vec<u8>`,
/// a slice, a `bytes::Bytes`, a `String`'s bytes, and so on. The borrow
/// checker enforces the lifetime relation: the adapter cannot outlive the
/// container it views.
///
/// # Cursor invariants
///
/// - `0 <= position <= len` at all times
/// - `position` is monotonically non-decreasing; there is no rewind
/// - only buffered reads (and `bytes::Buf::advance`) move it
/// - `position == len` is terminal for buffered reads
///
/// # Sequencing
///
/// Buffered reads are sequential and cumulative: each call resumes exactly
/// where the previous one stopped, so the concatenation of all bytes
/// delivered equals the consumed prefix of the source, in order, with no
/// gap or duplication.
///
/// # Example
///
/// ```
/// use copysource::CopySource;
///
/// let data = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
/// let mut source = CopySource::new(&data);
///
/// let mut a = [0u8; 1];
/// let mut b = [0u8; 2];
/// let mut c = [0u8; 3];
///
/// assert_eq!(source.read(&mut a), Ok(1));
/// assert_eq!(source.read(&mut b), Ok(2));
/// assert_eq!(source.read(&mut c), Ok(3));
///
/// assert_eq!(a, [0x01]);
/// assert_eq!(b, [0x02, 0x03]);
/// assert_eq!(c, [0x04, 0x05, 0x06]);
/// assert!(source.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct CopySource<'a> {
    source: &'a [u8],
    position: usize,
}

impl<'a> CopySource<'a> {
    /// Creates an adapter bound to the given container.
    ///
    /// The container is borrowed, never copied; the cursor starts at 0.
    ///
    /// # Example
    ///
    /// ```
    /// use copysource::CopySource;
    ///
    /// let owned = vec![1u8, 2, 3];
    /// let source = CopySource::new(&owned);
    /// assert_eq!(source.len(), 3);
    ///
    /// let source = CopySource::new(b"static bytes");
    /// assert_eq!(source.len(), 12);
    /// ```
    pub fn new<C>(container: &'a C) -> Self
    where
        C: AsRef<[u8]> + ?Sized,
    {
        Self {
            source: container.as_ref(),
            position: 0,
        }
    }

    /// Returns the raw half-open address range `[first, second)` covering
    /// the whole bound source.
    ///
    /// This is the direct-mode accessor: a consumer that reads memory in
    /// place takes these bounds once and never calls `read`. The distance
    /// `second - first` equals [`len`](Self::len) exactly; for an empty
    /// source `first == second`, a valid one-past-none sentinel that must
    /// not be dereferenced.
    ///
    /// Idempotent: never touches the cursor, and the bounds are stable for
    /// the adapter's lifetime.
    ///
    /// # Example
    ///
    /// ```
    /// use copysource::CopySource;
    ///
    /// let data = vec![0u8; 42];
    /// let source = CopySource::new(&data);
    /// let bounds = source.input_sequence();
    /// assert_eq!(bounds.end as usize - bounds.start as usize, 42);
    /// ```
    pub fn input_sequence(&self) -> Range<*const u8> {
        self.source.as_ptr_range()
    }

    /// Returns the whole bound source as a borrowed slice.
    ///
    /// The safe twin of [`input_sequence`](Self::input_sequence): same full
    /// range, expressed as a slice instead of raw bounds. Does not touch
    /// the cursor.
    pub fn as_slice(&self) -> &'a [u8] {
        self.source
    }

    /// Returns the size of the bound source in bytes.
    ///
    /// This is the full container size, not the unread remainder; see
    /// [`remaining`](Self::remaining) for the latter.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the bound source is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns the cursor position: the number of bytes consumed so far by
    /// buffered reads.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of unread bytes left for buffered reads.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.position
    }

    /// Returns true if the cursor has reached the end of the source.
    ///
    /// True immediately for an empty source. Once exhausted, every further
    /// buffered read of a positive length fails with
    /// [`SourceError::Exhausted`].
    pub fn is_exhausted(&self) -> bool {
        self.position == self.source.len()
    }

    /// Pulls up to `dest.len()` bytes into `dest`, advancing the cursor.
    ///
    /// Copies `min(dest.len(), remaining)` bytes from the unread portion of
    /// the source into the front of `dest` and returns the count. A request
    /// larger than the remainder is truncated, not an error.
    ///
    /// An empty `dest` is a valid zero-length read: returns `Ok(0)` and
    /// leaves the cursor unchanged, even when the source is exhausted.
    ///
    /// # Errors
    ///
    /// [`SourceError::Exhausted`] when `dest` is non-empty and the cursor
    /// is already at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use copysource::{CopySource, SourceError};
    ///
    /// let data = vec![0xAA, 0xBB];
    /// let mut source = CopySource::new(&data);
    ///
    /// let mut buf = [0u8; 8];
    /// assert_eq!(source.read(&mut buf), Ok(2)); // truncated to remainder
    /// assert_eq!(source.read(&mut buf), Err(SourceError::Exhausted));
    /// ```
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize, SourceError> {
        if dest.is_empty() {
            return Ok(0);
        }
        if self.is_exhausted() {
            return Err(SourceError::Exhausted);
        }
        Ok(self.pull(dest, dest.len()))
    }

    /// Buffered read with the full request-validation policy, as a tagged
    /// result.
    ///
    /// This is the primitive behind [`read_raw`](Self::read_raw), keeping
    /// the two failure conditions the sentinel convention conflates
    /// distinguishable:
    ///
    /// - `size < 0` → [`SourceError::InvalidRequest`]; nothing is copied
    ///   and the cursor does not move, regardless of `dest`.
    /// - `dest` of `None` (the null buffer) → [`SourceError::InvalidRequest`].
    /// - `size == 0` with a valid buffer (even zero-capacity) → `Ok(0)`,
    ///   cursor unchanged. A zero-length read is a success, distinct from
    ///   exhaustion.
    /// - cursor at end with a positive request → [`SourceError::Exhausted`].
    /// - otherwise copies `min(size, remaining, dest.len())` bytes and
    ///   advances the cursor by the count returned.
    ///
    /// `dest` is expected to hold at least `size` bytes; a shorter buffer
    /// further clamps the copy to its capacity.
    pub fn try_read(
        &mut self,
        dest: Option<&mut [u8]>,
        size: isize,
    ) -> Result<usize, SourceError> {
        if size < 0 {
            return Err(SourceError::InvalidRequest { requested: size });
        }
        let Some(dest) = dest else {
            return Err(SourceError::InvalidRequest { requested: size });
        };
        if size == 0 {
            return Ok(0);
        }
        if self.is_exhausted() {
            return Err(SourceError::Exhausted);
        }
        Ok(self.pull(dest, size as usize))
    }

    /// Buffered read with the legacy numeric convention.
    ///
    /// Compatibility shim over [`try_read`](Self::try_read): any failure
    /// collapses to the [`NO_DATA`] sentinel (`-1`), a success returns the
    /// byte count (possibly `0` for a zero-length request, possibly less
    /// than `size` when the request runs past the end).
    ///
    /// The caller cannot tell a malformed request from an exhausted source
    /// through this return value; prefer `try_read` when that matters.
    ///
    /// # Example
    ///
    /// ```
    /// use copysource::{CopySource, NO_DATA};
    ///
    /// let data = vec![0x42];
    /// let mut source = CopySource::new(&data);
    /// let mut buf = [0u8; 1];
    ///
    /// assert_eq!(source.read_raw(None, 0), NO_DATA);          // null buffer
    /// assert_eq!(source.read_raw(Some(&mut buf), -1), NO_DATA); // negative
    /// assert_eq!(source.read_raw(Some(&mut buf), 0), 0);      // valid no-op
    /// assert_eq!(source.read_raw(Some(&mut buf), 2), 1);      // truncated
    /// assert_eq!(source.read_raw(Some(&mut buf), 1), NO_DATA); // exhausted
    /// ```
    pub fn read_raw(&mut self, dest: Option<&mut [u8]>, size: isize) -> isize {
        match self.try_read(dest, size) {
            Ok(count) => count as isize,
            Err(_) => NO_DATA,
        }
    }

    /// Copies up to `limit` bytes of the unread remainder into `dest` and
    /// advances the cursor. Caller has ruled out the empty cases.
    fn pull(&mut self, dest: &mut [u8], limit: usize) -> usize {
        let count = limit.min(self.remaining()).min(dest.len());
        let end = self.position + count;
        dest[..count].copy_from_slice(&self.source[self.position..end]);
        self.position = end;
        count
    }

    /// Moves the cursor forward by `count` bytes without copying anything.
    ///
    /// Used by the `bytes::Buf` integration after the consumer has read
    /// from the exposed remainder directly. Caller must keep
    /// `count <= remaining()`.
    pub(crate) fn consume(&mut self, count: usize) {
        debug_assert!(count <= self.remaining());
        self.position += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let data = vec![1u8, 2, 3];
        let source = CopySource::new(&data);
        assert_eq!(source.position(), 0);
        assert_eq!(source.remaining(), 3);
        assert!(!source.is_exhausted());
    }

    #[test]
    fn test_input_sequence_spans_source() {
        let data = vec![0u8; 42];
        let source = CopySource::new(&data);
        let bounds = source.input_sequence();
        assert_eq!(bounds.start, data.as_ptr());
        assert_eq!(bounds.end as usize - bounds.start as usize, 42);
    }

    #[test]
    fn test_input_sequence_empty_is_degenerate() {
        let data: Vec<u8> = Vec::new();
        let source = CopySource::new(&data);
        let bounds = source.input_sequence();
        assert_eq!(bounds.start, bounds.end);
    }

    #[test]
    fn test_read_truncates_past_end() {
        let data = vec![0x42u8];
        let mut source = CopySource::new(&data);
        let mut buf = [0u8; 2];
        assert_eq!(source.read(&mut buf), Ok(1));
        assert_eq!(buf[0], 0x42);
        assert!(source.is_exhausted());
    }

    #[test]
    fn test_read_zero_length_is_success() {
        let data = vec![0x42u8];
        let mut source = CopySource::new(&data);
        assert_eq!(source.read(&mut []), Ok(0));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_read_exhausted() {
        let data: Vec<u8> = Vec::new();
        let mut source = CopySource::new(&data);
        let mut buf = [0u8; 1];
        assert_eq!(source.read(&mut buf), Err(SourceError::Exhausted));
    }

    #[test]
    fn test_try_read_negative_leaves_cursor() {
        let data = vec![0x42u8];
        let mut source = CopySource::new(&data);
        let mut buf = [0u8; 1];
        assert_eq!(
            source.try_read(Some(&mut buf), -1),
            Err(SourceError::InvalidRequest { requested: -1 })
        );
        assert_eq!(source.position(), 0);
        assert_eq!(buf[0], 0x00);
    }

    #[test]
    fn test_read_raw_sentinel_cases() {
        let data = vec![0x42u8];
        let mut source = CopySource::new(&data);
        assert_eq!(source.read_raw(None, 0), NO_DATA);
        assert_eq!(source.read_raw(None, -1), NO_DATA);
        let mut buf = [0u8; 1];
        assert_eq!(source.read_raw(Some(&mut buf), -1), NO_DATA);
        assert_eq!(source.position(), 0);
    }
}
