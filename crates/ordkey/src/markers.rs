//! Type tag registry.
//!
//! Every encoding starts with a marker byte that identifies its type. The
//! values below are part of the on-disk key format: changing any of them
//! breaks every index written before the change.

pub use ordkey_buffers::{BYTES_DESC_MARKER as BYTES_DESC, BYTES_MARKER as BYTES, INT_MAX, INT_MIN};

pub const NULL: u8 = 0x00;

pub const FLOAT64_NAN: u8 = 0x01;
pub const FLOAT64_NEG: u8 = 0x02;
pub const FLOAT64_ZERO: u8 = 0x03;
pub const FLOAT64_POS: u8 = 0x04;
pub const FLOAT64_NAN_DESC: u8 = 0x05;

pub const FLOAT32_NAN: u8 = 0x06;
pub const FLOAT32_NEG: u8 = 0x07;
pub const FLOAT32_ZERO: u8 = 0x08;
pub const FLOAT32_POS: u8 = 0x09;
pub const FLOAT32_NAN_DESC: u8 = 0x0a;

pub const TIME: u8 = 0x14;
pub const JSON: u8 = 0x15;
pub const FALSE: u8 = 0x16;
pub const TRUE: u8 = 0x17;

pub const NULL_DESC: u8 = 0xff;

/// Ends the path section of a JSON encoding. Only ever read where a path
/// segment's [`BYTES`] marker could appear.
pub const JSON_PATH_END: u8 = 0x00;

pub const NULL_MARKERS: [u8; 2] = [NULL, NULL_DESC];
pub const BOOL_MARKERS: [u8; 2] = [FALSE, TRUE];
pub const FLOAT64_MARKERS: [u8; 5] = [
    FLOAT64_NAN,
    FLOAT64_NEG,
    FLOAT64_ZERO,
    FLOAT64_POS,
    FLOAT64_NAN_DESC,
];
pub const FLOAT32_MARKERS: [u8; 5] = [
    FLOAT32_NAN,
    FLOAT32_NEG,
    FLOAT32_ZERO,
    FLOAT32_POS,
    FLOAT32_NAN_DESC,
];

/// Type of an encoded value, read from its leading byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingType {
    Unknown,
    Null,
    Bool,
    Int,
    Float32,
    Float64,
    Bytes,
    BytesDesc,
    Time,
    Json,
}

/// Inclusive marker ranges in byte order.
pub const MARKER_TABLE: &[(u8, u8, EncodingType)] = &[
    (NULL, NULL, EncodingType::Null),
    (FLOAT64_NAN, FLOAT64_NAN_DESC, EncodingType::Float64),
    (FLOAT32_NAN, FLOAT32_NAN_DESC, EncodingType::Float32),
    (BYTES, BYTES, EncodingType::Bytes),
    (BYTES_DESC, BYTES_DESC, EncodingType::BytesDesc),
    (TIME, TIME, EncodingType::Time),
    (JSON, JSON, EncodingType::Json),
    (FALSE, TRUE, EncodingType::Bool),
    (INT_MIN, INT_MAX, EncodingType::Int),
    (NULL_DESC, NULL_DESC, EncodingType::Null),
];

/// Classifies the value at the start of `b` without decoding it.
///
/// Returns [`EncodingType::Unknown`] for an empty buffer or an unassigned
/// marker.
pub fn peek_type(b: &[u8]) -> EncodingType {
    let Some(&m) = b.first() else {
        return EncodingType::Unknown;
    };
    match m {
        NULL | NULL_DESC => EncodingType::Null,
        FLOAT64_NAN..=FLOAT64_NAN_DESC => EncodingType::Float64,
        FLOAT32_NAN..=FLOAT32_NAN_DESC => EncodingType::Float32,
        BYTES => EncodingType::Bytes,
        BYTES_DESC => EncodingType::BytesDesc,
        TIME => EncodingType::Time,
        JSON => EncodingType::Json,
        FALSE | TRUE => EncodingType::Bool,
        INT_MIN..=INT_MAX => EncodingType::Int,
        _ => EncodingType::Unknown,
    }
}
