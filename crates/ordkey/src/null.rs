//! Null codec.

use crate::markers::{NULL, NULL_DESC};
use crate::{CodecError, Direction};

/// Appends the ascending null marker. Nulls sort before every other value.
pub fn encode_null_ascending(mut buf: Vec<u8>) -> Vec<u8> {
    buf.push(NULL);
    buf
}

/// Appends the descending null marker. Nulls sort after every other value.
pub fn encode_null_descending(mut buf: Vec<u8>) -> Vec<u8> {
    buf.push(NULL_DESC);
    buf
}

pub fn encode_null(buf: Vec<u8>, direction: Direction) -> Vec<u8> {
    match direction {
        Direction::Ascending => encode_null_ascending(buf),
        Direction::Descending => encode_null_descending(buf),
    }
}

pub fn decode_null_ascending(b: &[u8]) -> Result<&[u8], CodecError> {
    match b.split_first() {
        Some((&NULL, rest)) => Ok(rest),
        _ => Err(CodecError::markers_not_found(b, &[NULL])),
    }
}

pub fn decode_null_descending(b: &[u8]) -> Result<&[u8], CodecError> {
    match b.split_first() {
        Some((&NULL_DESC, rest)) => Ok(rest),
        _ => Err(CodecError::markers_not_found(b, &[NULL_DESC])),
    }
}

pub fn decode_null(b: &[u8], direction: Direction) -> Result<&[u8], CodecError> {
    match direction {
        Direction::Ascending => decode_null_ascending(b),
        Direction::Descending => decode_null_descending(b),
    }
}

/// Consumes a null marker of either direction if one leads `b`.
///
/// Returns the input untouched and `false` otherwise.
pub fn decode_if_null(b: &[u8]) -> (&[u8], bool) {
    match b.split_first() {
        Some((&(NULL | NULL_DESC), rest)) => (rest, true),
        _ => (b, false),
    }
}
