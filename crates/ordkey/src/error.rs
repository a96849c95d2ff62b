//! Codec error type.

use ordkey_buffers::BufferError;
use thiserror::Error;

use crate::FieldKind;

/// How many leading bytes a [`CodecError::MarkersNotFound`] keeps.
pub const MAX_REPORTED_PREFIX: usize = 16;

/// Error type for key decoding and field-value encoding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// The leading byte matched none of the markers valid for the expected type.
    #[error("markers not found: expected one of {expected:02x?}, found {found:02x?}")]
    MarkersNotFound {
        found: Vec<u8>,
        expected: &'static [u8],
    },
    /// The leading byte is not a marker of any known type.
    #[error("unrecognized type marker {0:02x?}")]
    UnknownMarker(Option<u8>),
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("invalid JSON path segment")]
    InvalidJsonPath(#[source] BufferError),
    #[error("invalid JSON payload at path {path:?}")]
    InvalidJsonPayload {
        path: Vec<String>,
        #[source]
        source: Box<CodecError>,
    },
    /// The payload after a float marker holds a value of another category.
    #[error("float payload {bits:#x} does not belong to marker {marker:#04x}")]
    MismatchedFloatPayload { marker: u8, bits: u64 },
    #[error("invalid timestamp {seconds}s + {nanos}ns")]
    InvalidTime { seconds: i64, nanos: i64 },
    #[error("can not decode field value of kind {kind}")]
    CanNotDecodeFieldValue {
        kind: FieldKind,
        #[source]
        source: Box<CodecError>,
    },
    #[error("values of kind {0} can not be encoded as keys")]
    UnsupportedValueKind(FieldKind),
}

/// Error of [`encode_field_value`](crate::encode_field_value).
///
/// Carries the caller's buffer back out, as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{source}")]
pub struct EncodeError {
    pub buf: Vec<u8>,
    #[source]
    pub source: CodecError,
}

impl EncodeError {
    pub fn into_buf(self) -> Vec<u8> {
        self.buf
    }
}

impl From<EncodeError> for CodecError {
    fn from(err: EncodeError) -> Self {
        err.source
    }
}

impl CodecError {
    pub(crate) fn markers_not_found(b: &[u8], expected: &'static [u8]) -> Self {
        CodecError::MarkersNotFound {
            found: b[..b.len().min(MAX_REPORTED_PREFIX)].to_vec(),
            expected,
        }
    }
}
