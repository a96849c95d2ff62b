//! Normalized field values.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::JsonLeaf;

/// Schema-declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Bool,
    NillableBool,
    Int,
    NillableInt,
    Float32,
    NillableFloat32,
    Float64,
    NillableFloat64,
    String,
    NillableString,
    DateTime,
    NillableDateTime,
    Json,
    NillableJson,
    Blob,
    NillableBlob,
}

impl FieldKind {
    pub fn is_nillable(self) -> bool {
        matches!(
            self,
            FieldKind::NillableBool
                | FieldKind::NillableInt
                | FieldKind::NillableFloat32
                | FieldKind::NillableFloat64
                | FieldKind::NillableString
                | FieldKind::NillableDateTime
                | FieldKind::NillableJson
                | FieldKind::NillableBlob
        )
    }

    /// The nillable counterpart of a plain kind; nillable kinds map to
    /// themselves.
    pub fn nillable(self) -> Self {
        match self {
            FieldKind::Bool => FieldKind::NillableBool,
            FieldKind::Int => FieldKind::NillableInt,
            FieldKind::Float32 => FieldKind::NillableFloat32,
            FieldKind::Float64 => FieldKind::NillableFloat64,
            FieldKind::String => FieldKind::NillableString,
            FieldKind::DateTime => FieldKind::NillableDateTime,
            FieldKind::Json => FieldKind::NillableJson,
            FieldKind::Blob => FieldKind::NillableBlob,
            nillable => nillable,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.nillable() {
            FieldKind::NillableBool => "Boolean",
            FieldKind::NillableInt => "Int",
            FieldKind::NillableFloat32 => "Float32",
            FieldKind::NillableFloat64 => "Float64",
            FieldKind::NillableString => "String",
            FieldKind::NillableDateTime => "DateTime",
            FieldKind::NillableJson => "JSON",
            _ => "Blob",
        };
        if self.is_nillable() {
            write!(f, "{name}")
        } else {
            write!(f, "{name}!")
        }
    }
}

/// A field value with its kind fixed by the variant.
///
/// Plain and nillable variants of the same kind encode identically when the
/// nillable one holds a value. Decoding can only produce the plain variant,
/// or the nillable variant holding `None` for a null.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalValue {
    Bool(bool),
    NillableBool(Option<bool>),
    Int(i64),
    NillableInt(Option<i64>),
    Float32(f32),
    NillableFloat32(Option<f32>),
    Float64(f64),
    NillableFloat64(Option<f64>),
    String(String),
    NillableString(Option<String>),
    Time(OffsetDateTime),
    NillableTime(Option<OffsetDateTime>),
    Json(JsonLeaf),
    NillableJson(Option<JsonLeaf>),
    Blob(Vec<u8>),
    NillableBlob(Option<Vec<u8>>),
}

impl NormalValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            NormalValue::Bool(_) => FieldKind::Bool,
            NormalValue::NillableBool(_) => FieldKind::NillableBool,
            NormalValue::Int(_) => FieldKind::Int,
            NormalValue::NillableInt(_) => FieldKind::NillableInt,
            NormalValue::Float32(_) => FieldKind::Float32,
            NormalValue::NillableFloat32(_) => FieldKind::NillableFloat32,
            NormalValue::Float64(_) => FieldKind::Float64,
            NormalValue::NillableFloat64(_) => FieldKind::NillableFloat64,
            NormalValue::String(_) => FieldKind::String,
            NormalValue::NillableString(_) => FieldKind::NillableString,
            NormalValue::Time(_) => FieldKind::DateTime,
            NormalValue::NillableTime(_) => FieldKind::NillableDateTime,
            NormalValue::Json(_) => FieldKind::Json,
            NormalValue::NillableJson(_) => FieldKind::NillableJson,
            NormalValue::Blob(_) => FieldKind::Blob,
            NormalValue::NillableBlob(_) => FieldKind::NillableBlob,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            NormalValue::NillableBool(None)
                | NormalValue::NillableInt(None)
                | NormalValue::NillableFloat32(None)
                | NormalValue::NillableFloat64(None)
                | NormalValue::NillableString(None)
                | NormalValue::NillableTime(None)
                | NormalValue::NillableJson(None)
                | NormalValue::NillableBlob(None)
        )
    }

    /// The null of `kind`. Plain kinds cannot hold a null, so this is always
    /// the nillable variant.
    pub fn nil_of_kind(kind: FieldKind) -> Self {
        match kind.nillable() {
            FieldKind::NillableBool => NormalValue::NillableBool(None),
            FieldKind::NillableInt => NormalValue::NillableInt(None),
            FieldKind::NillableFloat32 => NormalValue::NillableFloat32(None),
            FieldKind::NillableFloat64 => NormalValue::NillableFloat64(None),
            FieldKind::NillableString => NormalValue::NillableString(None),
            FieldKind::NillableDateTime => NormalValue::NillableTime(None),
            FieldKind::NillableJson => NormalValue::NillableJson(None),
            _ => NormalValue::NillableBlob(None),
        }
    }
}

macro_rules! probes {
    ($($plain:ident, $nillable:ident, $ty:ty, $is:ident, $is_nillable:ident;)*) => {
        impl NormalValue {
            $(
                pub fn $is(&self) -> Option<&$ty> {
                    match self {
                        NormalValue::$plain(v) => Some(v),
                        _ => None,
                    }
                }

                pub fn $is_nillable(&self) -> Option<Option<&$ty>> {
                    match self {
                        NormalValue::$nillable(v) => Some(v.as_ref()),
                        _ => None,
                    }
                }
            )*
        }
    };
}

probes! {
    Bool, NillableBool, bool, as_bool, as_nillable_bool;
    Int, NillableInt, i64, as_int, as_nillable_int;
    Float32, NillableFloat32, f32, as_float32, as_nillable_float32;
    Float64, NillableFloat64, f64, as_float64, as_nillable_float64;
    String, NillableString, String, as_string, as_nillable_string;
    Time, NillableTime, OffsetDateTime, as_time, as_nillable_time;
    Json, NillableJson, JsonLeaf, as_json, as_nillable_json;
    Blob, NillableBlob, Vec<u8>, as_blob, as_nillable_blob;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_is_always_nillable() {
        for kind in [FieldKind::Bool, FieldKind::NillableBool, FieldKind::DateTime, FieldKind::Blob] {
            let nil = NormalValue::nil_of_kind(kind);
            assert!(nil.is_nil());
            assert_eq!(nil.kind(), kind.nillable());
        }
        assert!(!NormalValue::NillableInt(Some(0)).is_nil());
        assert!(!NormalValue::String(String::new()).is_nil());
    }

    #[test]
    fn probes() {
        let v = NormalValue::NillableBool(Some(true));
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_nillable_bool(), Some(Some(&true)));
        assert_eq!(NormalValue::Int(3).as_int(), Some(&3));
        assert_eq!(NormalValue::NillableString(None).as_nillable_string(), Some(None));
    }

    #[test]
    fn kinds_from_schema_config() {
        let kinds: Vec<FieldKind> =
            serde_json::from_str(r#"["Int", "NillableDateTime", "Json"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![FieldKind::Int, FieldKind::NillableDateTime, FieldKind::Json]
        );
        assert_eq!(FieldKind::Int.to_string(), "Int!");
        assert_eq!(FieldKind::NillableJson.to_string(), "JSON");
    }
}
