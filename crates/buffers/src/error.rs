//! Sub-codec error type.

use thiserror::Error;

/// Error type for integer and byte-string decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("insufficient bytes: need {needed}, have {available}")]
    InsufficientBytes { needed: usize, available: usize },
    #[error("invalid varint length prefix {0:#04x}")]
    InvalidVarintLength(u8),
    #[error("varint {0} overflows i64")]
    VarintOverflow(u64),
    #[error("expected marker {expected:#04x}, found {found:?}")]
    MarkerNotFound { expected: u8, found: Option<u8> },
    #[error("did not find byte-string terminator")]
    MissingTerminator,
    #[error("malformed escape sequence {0:#04x}")]
    MalformedEscape(u8),
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}
