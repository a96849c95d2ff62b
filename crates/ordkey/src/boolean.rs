//! Boolean codec.

use crate::direction::encode_descending;
use crate::markers::{BOOL_MARKERS, FALSE, TRUE};
use crate::{CodecError, Direction};

/// Appends the ascending encoding of `v`; `false` sorts before `true`.
pub fn encode_bool_ascending(mut buf: Vec<u8>, v: bool) -> Vec<u8> {
    buf.push(if v { TRUE } else { FALSE });
    buf
}

pub fn encode_bool_descending(buf: Vec<u8>, v: bool) -> Vec<u8> {
    encode_descending(buf, v, encode_bool_ascending)
}

pub fn encode_bool(buf: Vec<u8>, v: bool, direction: Direction) -> Vec<u8> {
    match direction {
        Direction::Ascending => encode_bool_ascending(buf, v),
        Direction::Descending => encode_bool_descending(buf, v),
    }
}

pub fn decode_bool_ascending(b: &[u8]) -> Result<(&[u8], bool), CodecError> {
    match b.split_first() {
        Some((&TRUE, rest)) => Ok((rest, true)),
        Some((&FALSE, rest)) => Ok((rest, false)),
        _ => Err(CodecError::markers_not_found(b, &BOOL_MARKERS)),
    }
}

pub fn decode_bool_descending(b: &[u8]) -> Result<(&[u8], bool), CodecError> {
    let (rest, v) = decode_bool_ascending(b)?;
    Ok((rest, !v))
}

pub fn decode_bool(b: &[u8], direction: Direction) -> Result<(&[u8], bool), CodecError> {
    match direction {
        Direction::Ascending => decode_bool_ascending(b),
        Direction::Descending => decode_bool_descending(b),
    }
}
