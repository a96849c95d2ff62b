//! Order-preserving, type-tagged key encoding.
//!
//! Encodes typed scalar values into byte strings whose lexicographic order
//! matches the order of the values, so they can be used directly as keys in
//! an ordered key-value store. Each encoding starts with a marker that
//! identifies its type, and each can be written in ascending or descending
//! order.
//!
//! # Overview
//!
//! - [`markers`] - Marker table and [`peek_type`]
//! - [`null`], [`boolean`], [`float`], [`timestamp`] - Scalar codecs
//! - [`json`] - One JSON leaf (path plus scalar) per encoding
//! - [`encode_field_value`] / [`decode_field_value`] - Dispatch over
//!   [`NormalValue`]
//!
//! Every encoder takes the buffer by value, appends to it and returns it.
//! Every decoder returns the unconsumed remainder of its input, so encodings
//! concatenate into composite keys.
//!
//! # Example
//!
//! ```
//! use ordkey::{decode_field_value, encode_field_value, Direction, FieldKind, NormalValue};
//!
//! let buf = encode_field_value(Vec::new(), &NormalValue::Int(7), Direction::Descending)?;
//! let buf = encode_field_value(buf, &NormalValue::String("a".into()), Direction::Ascending)?;
//!
//! let (rest, id) = decode_field_value(&buf, Direction::Descending, FieldKind::Int)?;
//! let (rest, name) = decode_field_value(rest, Direction::Ascending, FieldKind::String)?;
//! assert_eq!(id, NormalValue::Int(7));
//! assert_eq!(name, NormalValue::String("a".into()));
//! assert!(rest.is_empty());
//! # Ok::<(), ordkey::CodecError>(())
//! ```

pub mod boolean;
mod direction;
mod error;
mod field_value;
pub mod float;
pub mod json;
pub mod markers;
mod normal_value;
pub mod null;
pub mod timestamp;

pub use boolean::{
    decode_bool_ascending, decode_bool_descending, encode_bool_ascending, encode_bool_descending,
};
pub use direction::{encode_descending, Direction, Negate};
pub use error::{CodecError, EncodeError, MAX_REPORTED_PREFIX};
pub use field_value::{decode_field_value, encode_field_value};
pub use float::{
    decode_float32_ascending, decode_float32_descending, decode_float64_ascending,
    decode_float64_descending, encode_float32_ascending, encode_float32_descending,
    encode_float64_ascending, encode_float64_descending, KeyFloat,
};
pub use json::{
    decode_json_ascending, decode_json_descending, encode_json_ascending, encode_json_descending,
    json_leaves, JsonLeaf, JsonScalar,
};
pub use markers::{peek_type, EncodingType};
pub use normal_value::{FieldKind, NormalValue};
pub use null::{
    decode_if_null, decode_null_ascending, decode_null_descending, encode_null_ascending,
    encode_null_descending,
};
pub use timestamp::{
    decode_time_ascending, decode_time_descending, encode_time_ascending, encode_time_descending,
};

pub use ordkey_buffers as buffers;
