//! Timestamp codec.
//!
//! Layout: `TIME` marker, then seconds since the Unix epoch and the
//! nanosecond of that second, each as a varint. The offset is not encoded:
//! two representations of the same instant produce the same bytes, and
//! decoding always yields UTC.

use ordkey_buffers::{
    decode_varint_ascending, decode_varint_descending, encode_varint_ascending,
    encode_varint_descending, BufferError,
};
use time::OffsetDateTime;

use crate::markers::TIME;
use crate::{CodecError, Direction};

type DecodeInt = fn(&[u8]) -> Result<(&[u8], i64), BufferError>;

pub fn encode_time_ascending(mut buf: Vec<u8>, t: OffsetDateTime) -> Vec<u8> {
    buf.push(TIME);
    let buf = encode_varint_ascending(buf, t.unix_timestamp());
    encode_varint_ascending(buf, t.nanosecond() as i64)
}

/// Appends the descending encoding of `t`: both components are
/// bit-complemented rather than negated.
pub fn encode_time_descending(mut buf: Vec<u8>, t: OffsetDateTime) -> Vec<u8> {
    buf.push(TIME);
    let buf = encode_varint_descending(buf, t.unix_timestamp());
    encode_varint_descending(buf, t.nanosecond() as i64)
}

pub fn encode_time(buf: Vec<u8>, t: OffsetDateTime, direction: Direction) -> Vec<u8> {
    match direction {
        Direction::Ascending => encode_time_ascending(buf, t),
        Direction::Descending => encode_time_descending(buf, t),
    }
}

fn decode_time_with(
    b: &[u8],
    decode_int: DecodeInt,
) -> Result<(&[u8], OffsetDateTime), CodecError> {
    let rest = match b.split_first() {
        Some((&TIME, rest)) => rest,
        _ => return Err(CodecError::markers_not_found(b, &[TIME])),
    };
    let (rest, seconds) = decode_int(rest)?;
    let (rest, nanos) = decode_int(rest)?;
    let invalid = || CodecError::InvalidTime { seconds, nanos };
    if !(0..1_000_000_000).contains(&nanos) {
        return Err(invalid());
    }
    let total = seconds as i128 * 1_000_000_000 + nanos as i128;
    let t = OffsetDateTime::from_unix_timestamp_nanos(total).map_err(|_| invalid())?;
    Ok((rest, t))
}

pub fn decode_time_ascending(b: &[u8]) -> Result<(&[u8], OffsetDateTime), CodecError> {
    decode_time_with(b, decode_varint_ascending)
}

pub fn decode_time_descending(b: &[u8]) -> Result<(&[u8], OffsetDateTime), CodecError> {
    decode_time_with(b, decode_varint_descending)
}

pub fn decode_time(b: &[u8], direction: Direction) -> Result<(&[u8], OffsetDateTime), CodecError> {
    match direction {
        Direction::Ascending => decode_time_ascending(b),
        Direction::Descending => decode_time_descending(b),
    }
}
