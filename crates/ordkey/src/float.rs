//! Float codec shared by `f32` and `f64`.
//!
//! Values fall into five ordered categories, each with its own marker:
//!
//! ```text
//! NaN < negative < zero < positive < NaN (descending)
//! ```
//!
//! Non-zero values are followed by their IEEE-754 bit pattern as a
//! fixed-width big-endian integer. The raw bits of negative numbers grow with
//! magnitude, so negative patterns are complemented to put them back in
//! numeric order. `+0.0` and `-0.0` share the zero marker.

use ordkey_buffers::Reader;

use crate::direction::{encode_descending, Negate};
use crate::markers::{peek_type, EncodingType, FLOAT32_MARKERS, FLOAT64_MARKERS};
use crate::{CodecError, Direction};

/// A float width with its own marker range.
pub trait KeyFloat: Copy + Negate {
    /// `[nan, neg, zero, pos, nan_desc]`.
    const MARKERS: &'static [u8; 5];
    const WIDTH: usize;
    const TYPE: EncodingType;

    fn nan() -> Self;
    fn zero() -> Self;
    fn is_nan(self) -> bool;
    fn is_zero(self) -> bool;
    fn is_sign_negative(self) -> bool;
    /// IEEE-754 bit pattern, zero-extended.
    fn to_key_bits(self) -> u64;
    fn from_key_bits(bits: u64) -> Self;
}

macro_rules! impl_key_float {
    ($ty:ty, $bits:ty, $markers:expr, $type:expr) => {
        impl KeyFloat for $ty {
            const MARKERS: &'static [u8; 5] = &$markers;
            const WIDTH: usize = std::mem::size_of::<$ty>();
            const TYPE: EncodingType = $type;

            fn nan() -> Self {
                <$ty>::NAN
            }
            fn zero() -> Self {
                0.0
            }
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            fn is_zero(self) -> bool {
                self == 0.0
            }
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }
            fn to_key_bits(self) -> u64 {
                self.to_bits() as u64
            }
            fn from_key_bits(bits: u64) -> Self {
                <$ty>::from_bits(bits as $bits)
            }
        }
    };
}

impl_key_float!(f32, u32, FLOAT32_MARKERS, EncodingType::Float32);
impl_key_float!(f64, u64, FLOAT64_MARKERS, EncodingType::Float64);

#[inline]
fn width_mask<F: KeyFloat>() -> u64 {
    u64::MAX >> (64 - 8 * F::WIDTH)
}

/// Appends the ascending encoding of `f`.
pub fn encode_float_ascending<F: KeyFloat>(mut buf: Vec<u8>, f: F) -> Vec<u8> {
    let [nan, neg, zero, pos, _] = *F::MARKERS;
    if f.is_nan() {
        buf.push(nan);
        return buf;
    }
    if f.is_zero() {
        buf.push(zero);
        return buf;
    }
    let bits = f.to_key_bits();
    let bits = if f.is_sign_negative() {
        buf.push(neg);
        !bits & width_mask::<F>()
    } else {
        buf.push(pos);
        bits
    };
    buf.extend_from_slice(&bits.to_be_bytes()[8 - F::WIDTH..]);
    buf
}

/// Appends the descending encoding of `f`.
///
/// NaN gets its own marker here: negating NaN is a no-op and would land on
/// the ascending NaN marker, which sorts first instead of last.
pub fn encode_float_descending<F: KeyFloat>(mut buf: Vec<u8>, f: F) -> Vec<u8> {
    if f.is_nan() {
        buf.push(F::MARKERS[4]);
        return buf;
    }
    encode_descending(buf, f, encode_float_ascending::<F>)
}

pub fn encode_float<F: KeyFloat>(buf: Vec<u8>, f: F, direction: Direction) -> Vec<u8> {
    match direction {
        Direction::Ascending => encode_float_ascending(buf, f),
        Direction::Descending => encode_float_descending(buf, f),
    }
}

/// Decodes a float written by [`encode_float_ascending`].
///
/// Both NaN markers decode to a canonical NaN; the payload bits of the
/// encoded NaN are not preserved.
///
/// The payload after a sign marker must be a non-zero, non-NaN value of that
/// sign. Anything else is [`CodecError::MismatchedFloatPayload`].
pub fn decode_float_ascending<F: KeyFloat>(b: &[u8]) -> Result<(&[u8], F), CodecError> {
    let [nan, neg, zero, _, nan_desc] = *F::MARKERS;
    let (m, rest) = match b.split_first() {
        Some((&m, rest)) if peek_type(b) == F::TYPE => (m, rest),
        _ => return Err(CodecError::markers_not_found(b, F::MARKERS)),
    };
    if m == nan || m == nan_desc {
        return Ok((rest, F::nan()));
    }
    if m == zero {
        return Ok((rest, F::zero()));
    }
    let mut reader = Reader::new(rest);
    let bits = reader.uint_be(F::WIDTH, |t| t)?;
    let negative = m == neg;
    let f = F::from_key_bits(if negative {
        !bits & width_mask::<F>()
    } else {
        bits
    });
    if f.is_nan() || f.is_zero() || f.is_sign_negative() != negative {
        return Err(CodecError::MismatchedFloatPayload { marker: m, bits });
    }
    Ok((reader.rest(), f))
}

/// Decodes a float written by [`encode_float_descending`].
pub fn decode_float_descending<F: KeyFloat>(b: &[u8]) -> Result<(&[u8], F), CodecError> {
    let (rest, f) = decode_float_ascending::<F>(b)?;
    if f.is_zero() {
        return Ok((rest, F::zero()));
    }
    Ok((rest, f.negate()))
}

pub fn decode_float<F: KeyFloat>(
    b: &[u8],
    direction: Direction,
) -> Result<(&[u8], F), CodecError> {
    match direction {
        Direction::Ascending => decode_float_ascending(b),
        Direction::Descending => decode_float_descending(b),
    }
}

pub fn encode_float32_ascending(buf: Vec<u8>, f: f32) -> Vec<u8> {
    encode_float_ascending(buf, f)
}

pub fn encode_float32_descending(buf: Vec<u8>, f: f32) -> Vec<u8> {
    encode_float_descending(buf, f)
}

pub fn encode_float64_ascending(buf: Vec<u8>, f: f64) -> Vec<u8> {
    encode_float_ascending(buf, f)
}

pub fn encode_float64_descending(buf: Vec<u8>, f: f64) -> Vec<u8> {
    encode_float_descending(buf, f)
}

pub fn decode_float32_ascending(b: &[u8]) -> Result<(&[u8], f32), CodecError> {
    decode_float_ascending(b)
}

pub fn decode_float32_descending(b: &[u8]) -> Result<(&[u8], f32), CodecError> {
    decode_float_descending(b)
}

pub fn decode_float64_ascending(b: &[u8]) -> Result<(&[u8], f64), CodecError> {
    decode_float_ascending(b)
}

pub fn decode_float64_descending(b: &[u8]) -> Result<(&[u8], f64), CodecError> {
    decode_float_descending(b)
}
