//! Error types for copysource.

use std::fmt;

/// Errors that can occur on the buffered read path.
///
/// Direct-mode access ([`crate::CopySource::input_sequence`]) has no failure
/// path and never produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The cursor is already at the end of the source; no bytes remain.
    Exhausted,

    /// The read request itself was malformed: a negative length, or a null
    /// destination buffer.
    InvalidRequest {
        /// The length that was requested.
        requested: isize,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Exhausted => write!(f, "source exhausted: no bytes remain"),
            SourceError::InvalidRequest { requested } => {
                write!(f, "invalid read request: {} bytes", requested)
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl From<SourceError> for std::io::Error {
    fn from(e: SourceError) -> Self {
        let kind = match e {
            SourceError::Exhausted => std::io::ErrorKind::UnexpectedEof,
            SourceError::InvalidRequest { .. } => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert!(SourceError::Exhausted.to_string().contains("exhausted"));

        let err = SourceError::InvalidRequest { requested: -1 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: std::io::Error = SourceError::Exhausted.into();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);

        let err: std::io::Error = SourceError::InvalidRequest { requested: -3 }.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
