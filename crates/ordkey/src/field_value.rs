//! Single entry point for encoding and decoding [`NormalValue`]s.

use ordkey_buffers::{
    decode_string_ascending, decode_string_descending, decode_varint_ascending,
    decode_varint_descending, encode_string_ascending, encode_string_descending,
    encode_varint_ascending, encode_varint_descending,
};

use crate::boolean::{decode_bool, encode_bool};
use crate::float::{decode_float, encode_float};
use crate::json::{decode_json, encode_json};
use crate::markers::{peek_type, EncodingType};
use crate::null::{decode_null, encode_null};
use crate::timestamp::{decode_time, encode_time};
use crate::{CodecError, Direction, EncodeError, FieldKind, NormalValue};

/// Appends the encoding of `value` to `buf`.
///
/// Nils of every kind encode as the null marker of `direction`. Plain and
/// nillable values of the same kind produce identical bytes.
///
/// Blobs have no ordered key form and are rejected with
/// [`CodecError::UnsupportedValueKind`]. The error hands `buf` back unchanged.
pub fn encode_field_value(
    buf: Vec<u8>,
    value: &NormalValue,
    direction: Direction,
) -> Result<Vec<u8>, EncodeError> {
    let buf = match value {
        NormalValue::NillableBool(None)
        | NormalValue::NillableInt(None)
        | NormalValue::NillableFloat32(None)
        | NormalValue::NillableFloat64(None)
        | NormalValue::NillableString(None)
        | NormalValue::NillableTime(None)
        | NormalValue::NillableJson(None)
        | NormalValue::NillableBlob(None) => encode_null(buf, direction),
        NormalValue::Bool(v) | NormalValue::NillableBool(Some(v)) => {
            encode_bool(buf, *v, direction)
        }
        NormalValue::Int(v) | NormalValue::NillableInt(Some(v)) => match direction {
            Direction::Ascending => encode_varint_ascending(buf, *v),
            Direction::Descending => encode_varint_descending(buf, *v),
        },
        NormalValue::Float32(v) | NormalValue::NillableFloat32(Some(v)) => {
            encode_float(buf, *v, direction)
        }
        NormalValue::Float64(v) | NormalValue::NillableFloat64(Some(v)) => {
            encode_float(buf, *v, direction)
        }
        NormalValue::String(v) | NormalValue::NillableString(Some(v)) => match direction {
            Direction::Ascending => encode_string_ascending(buf, v),
            Direction::Descending => encode_string_descending(buf, v),
        },
        NormalValue::Time(v) | NormalValue::NillableTime(Some(v)) => {
            encode_time(buf, *v, direction)
        }
        NormalValue::Json(v) | NormalValue::NillableJson(Some(v)) => {
            encode_json(buf, v, direction)
        }
        NormalValue::Blob(_) | NormalValue::NillableBlob(Some(_)) => {
            let kind = value.kind();
            tracing::debug!(%kind, "refusing to encode field value without a key form");
            return Err(EncodeError {
                buf,
                source: CodecError::UnsupportedValueKind(kind),
            });
        }
    };
    Ok(buf)
}

fn decode_by_type(
    b: &[u8],
    direction: Direction,
    kind: FieldKind,
) -> Result<(&[u8], NormalValue), CodecError> {
    match peek_type(b) {
        EncodingType::Null => Ok((decode_null(b, direction)?, NormalValue::nil_of_kind(kind))),
        EncodingType::Bool => {
            let (rest, v) = decode_bool(b, direction)?;
            Ok((rest, NormalValue::Bool(v)))
        }
        EncodingType::Int => {
            let (rest, v) = match direction {
                Direction::Ascending => decode_varint_ascending(b)?,
                Direction::Descending => decode_varint_descending(b)?,
            };
            Ok((rest, NormalValue::Int(v)))
        }
        EncodingType::Float32 => {
            let (rest, v) = decode_float::<f32>(b, direction)?;
            Ok((rest, NormalValue::Float32(v)))
        }
        EncodingType::Float64 => {
            let (rest, v) = decode_float::<f64>(b, direction)?;
            Ok((rest, NormalValue::Float64(v)))
        }
        EncodingType::Bytes | EncodingType::BytesDesc => {
            let (rest, v) = match direction {
                Direction::Ascending => decode_string_ascending(b)?,
                Direction::Descending => decode_string_descending(b)?,
            };
            Ok((rest, NormalValue::String(v)))
        }
        EncodingType::Time => {
            let (rest, v) = decode_time(b, direction)?;
            Ok((rest, NormalValue::Time(v)))
        }
        EncodingType::Json => {
            let (rest, v) = decode_json(b, direction)?;
            Ok((rest, NormalValue::Json(v)))
        }
        EncodingType::Unknown => Err(CodecError::UnknownMarker(b.first().copied())),
    }
}

/// Decodes the value at the start of `b`.
///
/// The value type comes from the encoding itself; `kind` is only consulted
/// to type a null. Non-null values always decode to their plain variant.
pub fn decode_field_value(
    b: &[u8],
    direction: Direction,
    kind: FieldKind,
) -> Result<(&[u8], NormalValue), CodecError> {
    decode_by_type(b, direction, kind).map_err(|source| {
        tracing::debug!(%kind, error = %source, "can not decode field value");
        CodecError::CanNotDecodeFieldValue {
            kind,
            source: Box::new(source),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::{NULL, NULL_DESC, TRUE};

    #[test]
    fn nil_uses_direction_marker() {
        let nil = NormalValue::NillableInt(None);
        assert_eq!(
            encode_field_value(Vec::new(), &nil, Direction::Ascending).unwrap(),
            vec![NULL]
        );
        assert_eq!(
            encode_field_value(Vec::new(), &nil, Direction::Descending).unwrap(),
            vec![NULL_DESC]
        );
    }

    #[test]
    fn nillable_and_plain_encode_identically() {
        let plain = NormalValue::Bool(true);
        let nillable = NormalValue::NillableBool(Some(true));
        let a = encode_field_value(Vec::new(), &plain, Direction::Ascending).unwrap();
        let b = encode_field_value(Vec::new(), &nillable, Direction::Ascending).unwrap();
        assert_eq!(a, vec![TRUE]);
        assert_eq!(a, b);
    }

    #[test]
    fn null_takes_kind_from_schema() {
        let (rest, v) = decode_field_value(&[NULL], Direction::Ascending, FieldKind::Float64).unwrap();
        assert!(rest.is_empty());
        assert_eq!(v, NormalValue::NillableFloat64(None));
    }

    #[test]
    fn blob_is_rejected() {
        let err = encode_field_value(vec![0x01], &NormalValue::Blob(vec![1]), Direction::Ascending)
            .unwrap_err();
        assert_eq!(err.source, CodecError::UnsupportedValueKind(FieldKind::Blob));
        assert_eq!(err.into_buf(), vec![0x01]);

        let prefix = encode_field_value(Vec::new(), &NormalValue::Int(3), Direction::Ascending)
            .unwrap();
        let err = encode_field_value(
            prefix.clone(),
            &NormalValue::NillableBlob(Some(vec![])),
            Direction::Descending,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "values of kind Blob can not be encoded as keys");
        let buf = encode_field_value(err.into_buf(), &NormalValue::Bool(true), Direction::Ascending)
            .unwrap();
        assert_eq!(buf[..prefix.len()], prefix[..]);
        assert_eq!(buf[prefix.len()..], [TRUE]);
        let nil = NormalValue::NillableBlob(None);
        assert_eq!(
            encode_field_value(Vec::new(), &nil, Direction::Ascending).unwrap(),
            vec![NULL]
        );
    }

    #[test]
    fn unknown_marker_is_wrapped() {
        let err = decode_field_value(&[0xfe], Direction::Ascending, FieldKind::Int).unwrap_err();
        assert_eq!(
            err,
            CodecError::CanNotDecodeFieldValue {
                kind: FieldKind::Int,
                source: Box::new(CodecError::UnknownMarker(Some(0xfe))),
            }
        );
        assert!(decode_field_value(&[], Direction::Ascending, FieldKind::Int).is_err());
    }
}
