//! JSON leaf codec.
//!
//! A document is indexed one scalar leaf at a time. Each leaf is written as
//!
//! ```text
//! JSON | segment* | JSON_PATH_END | payload
//! ```
//!
//! where every path segment is an ascending byte string and the payload uses
//! the codec of the leaf's scalar type. The path is ascending in both
//! directions so that leaves of one path stay grouped together; only the
//! payload follows the requested direction.

use ordkey_buffers::{
    decode_string_ascending, decode_string_descending, encode_string_ascending,
    encode_string_descending,
};
use serde_json::Value;

use crate::boolean::{decode_bool, encode_bool};
use crate::float::{decode_float, encode_float};
use crate::markers::{
    peek_type, EncodingType, BYTES, BYTES_DESC, FALSE, FLOAT64_NAN, FLOAT64_NAN_DESC, FLOAT64_NEG,
    FLOAT64_POS, FLOAT64_ZERO, JSON, JSON_PATH_END, NULL, NULL_DESC, TRUE,
};
use crate::null::{decode_null, encode_null};
use crate::{CodecError, Direction};

/// Markers a leaf payload may start with.
const PAYLOAD_MARKERS: [u8; 11] = [
    NULL,
    FLOAT64_NAN,
    FLOAT64_NEG,
    FLOAT64_ZERO,
    FLOAT64_POS,
    FLOAT64_NAN_DESC,
    BYTES,
    BYTES_DESC,
    FALSE,
    TRUE,
    NULL_DESC,
];

/// Scalar value of a JSON leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonScalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Path only, no payload. Marks a removed leaf.
    Void,
}

impl JsonScalar {
    /// Converts a scalar JSON value. Returns `None` for arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(JsonScalar::Null),
            Value::Bool(b) => Some(JsonScalar::Bool(*b)),
            Value::Number(n) => n.as_f64().map(JsonScalar::Number),
            Value::String(s) => Some(JsonScalar::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Converts back to a JSON value. [`JsonScalar::Void`] has none.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            JsonScalar::Null => Some(Value::Null),
            JsonScalar::Bool(b) => Some(Value::Bool(*b)),
            JsonScalar::Number(n) => serde_json::Number::from_f64(*n).map(Value::Number),
            JsonScalar::String(s) => Some(Value::String(s.clone())),
            JsonScalar::Void => None,
        }
    }
}

/// One scalar of a JSON document together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLeaf {
    /// Object keys and stringified array indices, outermost first. Empty for
    /// a root-level scalar.
    pub path: Vec<String>,
    pub value: JsonScalar,
}

impl JsonLeaf {
    pub fn new(path: Vec<String>, value: JsonScalar) -> Self {
        Self { path, value }
    }

    pub fn root(value: JsonScalar) -> Self {
        Self::new(Vec::new(), value)
    }

    pub fn void(path: Vec<String>) -> Self {
        Self::new(path, JsonScalar::Void)
    }
}

/// Walks `doc` and returns its scalar leaves in document order.
///
/// Empty objects and arrays contribute no leaves.
pub fn json_leaves(doc: &Value) -> Vec<JsonLeaf> {
    fn walk(value: &Value, path: &mut Vec<String>, out: &mut Vec<JsonLeaf>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    path.push(key.clone());
                    walk(child, path, out);
                    path.pop();
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    path.push(i.to_string());
                    walk(child, path, out);
                    path.pop();
                }
            }
            scalar => {
                if let Some(value) = JsonScalar::from_json(scalar) {
                    out.push(JsonLeaf::new(path.clone(), value));
                }
            }
        }
    }

    let mut out = Vec::new();
    walk(doc, &mut Vec::new(), &mut out);
    out
}

pub fn encode_json(mut buf: Vec<u8>, leaf: &JsonLeaf, direction: Direction) -> Vec<u8> {
    buf.push(JSON);
    for segment in &leaf.path {
        buf = encode_string_ascending(buf, segment);
    }
    buf.push(JSON_PATH_END);
    match &leaf.value {
        JsonScalar::Null => encode_null(buf, direction),
        JsonScalar::Bool(b) => encode_bool(buf, *b, direction),
        JsonScalar::Number(n) => encode_float(buf, *n, direction),
        JsonScalar::String(s) => match direction {
            Direction::Ascending => encode_string_ascending(buf, s),
            Direction::Descending => encode_string_descending(buf, s),
        },
        JsonScalar::Void => buf,
    }
}

pub fn encode_json_ascending(buf: Vec<u8>, leaf: &JsonLeaf) -> Vec<u8> {
    encode_json(buf, leaf, Direction::Ascending)
}

pub fn encode_json_descending(buf: Vec<u8>, leaf: &JsonLeaf) -> Vec<u8> {
    encode_json(buf, leaf, Direction::Descending)
}

fn decode_path(mut b: &[u8]) -> Result<(&[u8], Vec<String>), CodecError> {
    let mut path = Vec::new();
    loop {
        if let Some((&JSON_PATH_END, rest)) = b.split_first() {
            return Ok((rest, path));
        }
        let (rest, segment) = decode_string_ascending(b).map_err(CodecError::InvalidJsonPath)?;
        path.push(segment);
        b = rest;
    }
}

fn decode_payload(b: &[u8], direction: Direction) -> Result<(&[u8], JsonScalar), CodecError> {
    match peek_type(b) {
        EncodingType::Unknown if b.is_empty() => Ok((b, JsonScalar::Void)),
        EncodingType::Bytes | EncodingType::BytesDesc => {
            let (rest, s) = match direction {
                Direction::Ascending => decode_string_ascending(b)?,
                Direction::Descending => decode_string_descending(b)?,
            };
            Ok((rest, JsonScalar::String(s)))
        }
        EncodingType::Float64 => {
            let (rest, n) = decode_float::<f64>(b, direction)?;
            Ok((rest, JsonScalar::Number(n)))
        }
        EncodingType::Bool => {
            let (rest, v) = decode_bool(b, direction)?;
            Ok((rest, JsonScalar::Bool(v)))
        }
        EncodingType::Null => Ok((decode_null(b, direction)?, JsonScalar::Null)),
        _ => Err(CodecError::markers_not_found(b, &PAYLOAD_MARKERS)),
    }
}

/// Decodes one leaf written by [`encode_json`] with the same direction.
///
/// A leaf with nothing after its path decodes as [`JsonScalar::Void`]. A void
/// leaf is only valid as the last component of a composite key: whatever
/// follows it is read as the leaf's payload.
pub fn decode_json(b: &[u8], direction: Direction) -> Result<(&[u8], JsonLeaf), CodecError> {
    let rest = match b.split_first() {
        Some((&JSON, rest)) => rest,
        _ => return Err(CodecError::markers_not_found(b, &[JSON])),
    };
    let (rest, path) = decode_path(rest)?;
    match decode_payload(rest, direction) {
        Ok((rest, value)) => Ok((rest, JsonLeaf { path, value })),
        Err(source) => {
            tracing::trace!(?path, error = %source, "rejected JSON leaf payload");
            Err(CodecError::InvalidJsonPayload {
                path,
                source: Box::new(source),
            })
        }
    }
}

pub fn decode_json_ascending(b: &[u8]) -> Result<(&[u8], JsonLeaf), CodecError> {
    decode_json(b, Direction::Ascending)
}

pub fn decode_json_descending(b: &[u8]) -> Result<(&[u8], JsonLeaf), CodecError> {
    decode_json(b, Direction::Descending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordkey_buffers::BufferError;
    use serde_json::json;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn walks_nested_document() {
        let leaves = json_leaves(&json!({"a": {"b": 1}, "c": [true, null], "d": {}}));
        assert_eq!(
            leaves,
            vec![
                JsonLeaf::new(path(&["a", "b"]), JsonScalar::Number(1.0)),
                JsonLeaf::new(path(&["c", "0"]), JsonScalar::Bool(true)),
                JsonLeaf::new(path(&["c", "1"]), JsonScalar::Null),
            ]
        );
        assert_eq!(
            json_leaves(&json!("x")),
            vec![JsonLeaf::root(JsonScalar::String("x".into()))]
        );
    }

    #[test]
    fn root_scalar_layout() {
        let buf = encode_json_ascending(Vec::new(), &JsonLeaf::root(JsonScalar::Bool(true)));
        assert_eq!(buf, vec![JSON, JSON_PATH_END, TRUE]);
        let buf = encode_json_descending(Vec::new(), &JsonLeaf::root(JsonScalar::Bool(true)));
        assert_eq!(buf, vec![JSON, JSON_PATH_END, FALSE]);
    }

    #[test]
    fn path_is_ascending_in_both_directions() {
        let leaf = JsonLeaf::new(path(&["k"]), JsonScalar::String("v".into()));
        let asc = encode_json_ascending(Vec::new(), &leaf);
        let desc = encode_json_descending(Vec::new(), &leaf);
        let path_len = 1 + encode_string_ascending(Vec::new(), "k").len() + 1;
        assert_eq!(asc[..path_len], desc[..path_len]);
        assert_eq!(desc[path_len], BYTES_DESC);
        assert_eq!(decode_json_descending(&desc).unwrap().1, leaf);
    }

    #[test]
    fn void_leaf_has_no_payload() {
        let leaf = JsonLeaf::void(path(&["gone"]));
        let buf = encode_json_ascending(Vec::new(), &leaf);
        assert_eq!(*buf.last().unwrap(), JSON_PATH_END);
        assert_eq!(decode_json_ascending(&buf), Ok((&[][..], leaf)));
    }

    #[test]
    fn corrupt_path_segment() {
        let buf = vec![JSON, BYTES, b'a'];
        assert_eq!(
            decode_json_ascending(&buf),
            Err(CodecError::InvalidJsonPath(BufferError::MissingTerminator))
        );
        assert!(matches!(
            decode_json_ascending(&[JSON]),
            Err(CodecError::InvalidJsonPath(_))
        ));
    }

    #[test]
    fn unsupported_payload_keeps_path() {
        let mut buf = encode_json_ascending(Vec::new(), &JsonLeaf::void(path(&["a"])));
        buf.push(0x90);
        match decode_json_ascending(&buf) {
            Err(CodecError::InvalidJsonPayload { path: p, source }) => {
                assert_eq!(p, path(&["a"]));
                assert!(matches!(*source, CodecError::MarkersNotFound { .. }));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wrong_marker() {
        assert!(matches!(
            decode_json_ascending(&[TRUE]),
            Err(CodecError::MarkersNotFound { .. })
        ));
    }
}
