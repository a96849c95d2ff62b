//! Order-preserving key primitives.
//!
//! This crate provides the integer and byte-string sub-codecs that the
//! `ordkey` value codecs are built on. Every encoder takes ownership of the
//! buffer, appends to it and hands it back; every decoder returns the
//! unconsumed remainder of its input alongside the decoded value, so
//! encodings can be chained into composite keys.
//!
//! # Overview
//!
//! - [`varint`] - Signed and unsigned variable-width integers
//! - [`bytes`] - Escaped, terminated byte strings and UTF-8 strings
//! - [`Reader`] - Fallible cursor over a byte slice
//!
//! # Example
//!
//! ```
//! use ordkey_buffers::{decode_string_ascending, decode_varint_ascending};
//! use ordkey_buffers::{encode_string_ascending, encode_varint_ascending};
//!
//! let buf = encode_varint_ascending(Vec::new(), -42);
//! let buf = encode_string_ascending(buf, "hello");
//!
//! let (rest, n) = decode_varint_ascending(&buf).unwrap();
//! let (rest, s) = decode_string_ascending(rest).unwrap();
//! assert_eq!(n, -42);
//! assert_eq!(s, "hello");
//! assert!(rest.is_empty());
//! ```

pub mod bytes;
mod error;
mod reader;
pub mod varint;

pub use bytes::{
    decode_bytes_ascending, decode_bytes_descending, decode_string_ascending,
    decode_string_descending, encode_bytes_ascending, encode_bytes_descending,
    encode_string_ascending, encode_string_descending, BYTES_DESC_MARKER, BYTES_MARKER,
};
pub use error::BufferError;
pub use reader::Reader;
pub use varint::{
    decode_uvarint_ascending, decode_uvarint_descending, decode_varint_ascending,
    decode_varint_descending, encode_uvarint_ascending, encode_uvarint_descending,
    encode_varint_ascending, encode_varint_descending, INT_MAX, INT_MIN,
};
