//! copysource
//!
//! A read-only streaming source adapter over borrowed byte containers.
//!
//! [`CopySource`] binds to any contiguous, externally-owned byte container
//! (`Vec<u8>`, `[u8]`, `bytes::Bytes`, …) without copying it, and exposes the
//! bytes through the two access patterns a streaming I/O framework expects:
//!
//! - **Direct-mode**: [`CopySource::input_sequence`] hands out the raw
//!   half-open address range of the whole container, for consumers that read
//!   memory in place with zero copies.
//! - **Buffered-mode**: [`CopySource::read`] pulls up to `dest.len()` bytes
//!   at a time, advancing an internal cursor with exact truncation and
//!   exhaustion semantics.
//!
//! The crate intentionally:
//! - does NOT own or copy the source bytes
//! - does NOT provide a sink/writer counterpart
//! - does NOT seek or rewind (the cursor only moves forward)
//! - does NOT manage concurrency
//!
//! It only does one thing: **bind a byte container → serve its bytes**
//!
//! # Buffered reads
//!
//! ```
//! use copysource::{CopySource, SourceError};
//!
//! fn main() -> Result<(), SourceError> {
//!     let data = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
//!     let mut source = CopySource::new(&data);
//!
//!     let mut buf = [0u8; 4];
//!     let n = source.read(&mut buf)?;
//!     assert_eq!(&buf[..n], &[0x01, 0x02, 0x03, 0x04]);
//!     assert_eq!(source.remaining(), 2);
//!     Ok(())
//! }
//! ```
//!
//! # Direct-mode bounds
//!
//! ```
//! use copysource::CopySource;
//!
//! let data = vec![0u8; 42];
//! let source = CopySource::new(&data);
//!
//! let bounds = source.input_sequence();
//! assert_eq!(bounds.end as usize - bounds.start as usize, 42);
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use copysource::CopySource;
//! use futures_util::io::AsyncReadExt;
//!
//! async fn demo(data: &[u8]) -> std::io::Result<Vec<u8>> {
//!     let mut source = CopySource::new(data);
//!     let mut out = Vec::new();
//!     source.read_to_end(&mut out).await?;
//!     Ok(out)
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod source;

#[cfg(feature = "async-io")]
mod async_source;

//
// Public surface (intentionally tiny)
//

pub use error::SourceError;
pub use source::{CopySource, NO_DATA};
