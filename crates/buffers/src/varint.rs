//! Order-preserving variable-width integers.
//!
//! The first byte of every encoding lies in `INT_MIN..=INT_MAX` and doubles
//! as the length prefix:
//!
//! - `INT_MIN..INT_ZERO` - negative values, `INT_ZERO - b` trailing bytes
//! - `INT_ZERO..=INT_ZERO + INT_SMALL` - small non-negative values inline
//! - `INT_MAX - 7..=INT_MAX` - larger values, `b - (INT_MAX - 8)` trailing bytes
//!
//! Trailing bytes are big-endian, so fewer bytes always means a value closer
//! to zero and byte order equals numeric order.

use crate::{BufferError, Reader};

/// Lowest int marker.
pub const INT_MIN: u8 = 0x80;
/// Highest int marker.
pub const INT_MAX: u8 = 0xfd;

const INT_MAX_WIDTH: u8 = 8;
const INT_ZERO: u8 = INT_MIN + INT_MAX_WIDTH;
const INT_SMALL: u8 = INT_MAX - INT_ZERO - INT_MAX_WIDTH;

/// Number of big-endian bytes needed to hold `v`.
#[inline]
fn width(v: u64) -> usize {
    8 - (v.leading_zeros() as usize / 8)
}

#[inline]
fn push_low_bytes(mut buf: Vec<u8>, v: u64, n: usize) -> Vec<u8> {
    buf.extend_from_slice(&v.to_be_bytes()[8 - n..]);
    buf
}

/// Smallest width `n` with `v >= -(2^(8n) - 1)`, for negative `v`.
#[inline]
fn negative_width(v: i64) -> usize {
    (1..8usize)
        .find(|&n| v >= -((1i64 << (8 * n)) - 1))
        .unwrap_or(8)
}

/// Appends the ascending encoding of a signed integer.
pub fn encode_varint_ascending(mut buf: Vec<u8>, v: i64) -> Vec<u8> {
    if v >= 0 {
        return encode_uvarint_ascending(buf, v as u64);
    }
    let n = negative_width(v);
    buf.push(INT_ZERO - n as u8);
    push_low_bytes(buf, v as u64, n)
}

/// Appends the descending encoding of a signed integer.
pub fn encode_varint_descending(buf: Vec<u8>, v: i64) -> Vec<u8> {
    encode_varint_ascending(buf, !v)
}

/// Appends the ascending encoding of an unsigned integer.
pub fn encode_uvarint_ascending(mut buf: Vec<u8>, v: u64) -> Vec<u8> {
    if v <= INT_SMALL as u64 {
        buf.push(INT_ZERO + v as u8);
        return buf;
    }
    let n = width(v);
    buf.push(INT_MAX - INT_MAX_WIDTH + n as u8);
    push_low_bytes(buf, v, n)
}

/// Appends the descending encoding of an unsigned integer.
pub fn encode_uvarint_descending(mut buf: Vec<u8>, v: u64) -> Vec<u8> {
    if v == 0 {
        buf.push(INT_ZERO);
        return buf;
    }
    let n = width(v);
    buf.push(INT_ZERO - n as u8);
    push_low_bytes(buf, !v, n)
}

/// Decodes a signed integer written by [`encode_varint_ascending`].
///
/// Only the shortest encoding of a value is accepted, so every integer has
/// exactly one key.
pub fn decode_varint_ascending(b: &[u8]) -> Result<(&[u8], i64), BufferError> {
    let mut reader = Reader::new(b);
    let prefix = reader.u8()?;
    if prefix < INT_ZERO {
        let n = (INT_ZERO - prefix) as usize;
        if prefix < INT_MIN {
            return Err(BufferError::InvalidVarintLength(prefix));
        }
        // Build the positive complement, then flip it back.
        let v = !(reader.uint_be(n, |t| !t)? as i64);
        if v >= 0 || negative_width(v) != n {
            return Err(BufferError::InvalidVarintLength(prefix));
        }
        return Ok((reader.rest(), v));
    }
    let (rest, v) = decode_uvarint_ascending(b)?;
    if v > i64::MAX as u64 {
        return Err(BufferError::VarintOverflow(v));
    }
    Ok((rest, v as i64))
}

/// Decodes a signed integer written by [`encode_varint_descending`].
pub fn decode_varint_descending(b: &[u8]) -> Result<(&[u8], i64), BufferError> {
    let (rest, v) = decode_varint_ascending(b)?;
    Ok((rest, !v))
}

/// Decodes an unsigned integer written by [`encode_uvarint_ascending`].
///
/// Rejects a wide form of a value that has a shorter one.
pub fn decode_uvarint_ascending(b: &[u8]) -> Result<(&[u8], u64), BufferError> {
    let mut reader = Reader::new(b);
    let prefix = reader.u8()?;
    if prefix < INT_ZERO {
        return Err(BufferError::InvalidVarintLength(prefix));
    }
    let length = prefix - INT_ZERO;
    if length <= INT_SMALL {
        return Ok((reader.rest(), length as u64));
    }
    let n = (length - INT_SMALL) as usize;
    if n > INT_MAX_WIDTH as usize {
        return Err(BufferError::InvalidVarintLength(prefix));
    }
    let v = reader.uint_be(n, |t| t)?;
    if v <= INT_SMALL as u64 || width(v) != n {
        return Err(BufferError::InvalidVarintLength(prefix));
    }
    Ok((reader.rest(), v))
}

/// Decodes an unsigned integer written by [`encode_uvarint_descending`].
pub fn decode_uvarint_descending(b: &[u8]) -> Result<(&[u8], u64), BufferError> {
    let mut reader = Reader::new(b);
    let prefix = reader.u8()?;
    if !(INT_MIN..=INT_ZERO).contains(&prefix) {
        return Err(BufferError::InvalidVarintLength(prefix));
    }
    let n = (INT_ZERO - prefix) as usize;
    let v = reader.uint_be(n, |t| !t)?;
    if width(v) != n {
        return Err(BufferError::InvalidVarintLength(prefix));
    }
    Ok((reader.rest(), v))
}
