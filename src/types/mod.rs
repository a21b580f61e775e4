//! # Runtime Value Representation
//!
//! This module provides `OwnedValue`, the adapter-neutral runtime value used
//! to carry caller-supplied column values into a statement and to transport
//! RETURNING rows back out. Values are owned: the mapping layer never borrows
//! from the record it describes, so a description can outlive intermediate
//! borrows of the record during write-back.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Description |
//! |---------|-----------|-------------|
//! | Null | - | SQL NULL |
//! | Bool | bool | Boolean |
//! | Int | i64 | 64-bit signed integer (all integer columns widen into this) |
//! | Float | f64 | 64-bit floating point |
//! | Text | String | UTF-8 string |
//! | Blob | Vec<u8> | Binary data |
//!
//! ## Conversion Semantics
//!
//! - Every fixed-width integer widens into `Int` on the way in.
//! - `FromValue` converts a returned value back into a concrete field type;
//!   integer targets use native narrowing (`as`), no overflow checking.

use eyre::{bail, Result};

/// Owned runtime value for statement parameters and RETURNING rows.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl OwnedValue {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, OwnedValue::Null)
    }

    /// Short type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            OwnedValue::Null => "null",
            OwnedValue::Bool(_) => "bool",
            OwnedValue::Int(_) => "int",
            OwnedValue::Float(_) => "float",
            OwnedValue::Text(_) => "text",
            OwnedValue::Blob(_) => "blob",
        }
    }
}

macro_rules! owned_value_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for OwnedValue {
                fn from(v: $t) -> Self {
                    OwnedValue::Int(v as i64)
                }
            }
        )*
    };
}

owned_value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<bool> for OwnedValue {
    fn from(v: bool) -> Self {
        OwnedValue::Bool(v)
    }
}

impl From<f32> for OwnedValue {
    fn from(v: f32) -> Self {
        OwnedValue::Float(v as f64)
    }
}

impl From<f64> for OwnedValue {
    fn from(v: f64) -> Self {
        OwnedValue::Float(v)
    }
}

impl From<&str> for OwnedValue {
    fn from(v: &str) -> Self {
        OwnedValue::Text(v.to_string())
    }
}

impl From<String> for OwnedValue {
    fn from(v: String) -> Self {
        OwnedValue::Text(v)
    }
}

impl From<Vec<u8>> for OwnedValue {
    fn from(v: Vec<u8>) -> Self {
        OwnedValue::Blob(v)
    }
}

impl<T> From<Option<T>> for OwnedValue
where
    T: Into<OwnedValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => OwnedValue::Null,
        }
    }
}

/// Conversion from a returned `OwnedValue` into a concrete field type.
///
/// Used by the RETURNING write-back path to populate auto fields from the
/// row the database sent back.
pub trait FromValue: Sized {
    fn from_value(value: OwnedValue) -> Result<Self>;
}

macro_rules! from_value_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromValue for $t {
                fn from_value(value: OwnedValue) -> Result<Self> {
                    match value {
                        OwnedValue::Int(i) => Ok(i as $t),
                        other => bail!(
                            "cannot convert {} value into integer field",
                            other.type_name()
                        ),
                    }
                }
            }
        )*
    };
}

from_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl FromValue for f64 {
    fn from_value(value: OwnedValue) -> Result<Self> {
        match value {
            OwnedValue::Float(f) => Ok(f),
            OwnedValue::Int(i) => Ok(i as f64),
            other => bail!("cannot convert {} value into float field", other.type_name()),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: OwnedValue) -> Result<Self> {
        f64::from_value(value).map(|f| f as f32)
    }
}

impl FromValue for bool {
    fn from_value(value: OwnedValue) -> Result<Self> {
        match value {
            OwnedValue::Bool(b) => Ok(b),
            OwnedValue::Int(i) => Ok(i != 0),
            other => bail!("cannot convert {} value into bool field", other.type_name()),
        }
    }
}

impl FromValue for String {
    fn from_value(value: OwnedValue) -> Result<Self> {
        match value {
            OwnedValue::Text(s) => Ok(s),
            other => bail!("cannot convert {} value into text field", other.type_name()),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: OwnedValue) -> Result<Self> {
        match value {
            OwnedValue::Blob(b) => Ok(b),
            other => bail!("cannot convert {} value into blob field", other.type_name()),
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: OwnedValue) -> Result<Self> {
        match value {
            OwnedValue::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_into_int() {
        assert_eq!(OwnedValue::from(7i8), OwnedValue::Int(7));
        assert_eq!(OwnedValue::from(7u32), OwnedValue::Int(7));
        assert_eq!(OwnedValue::from(-1i64), OwnedValue::Int(-1));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(OwnedValue::from(None::<i32>), OwnedValue::Null);
        assert_eq!(OwnedValue::from(Some("x")), OwnedValue::Text("x".into()));
    }

    #[test]
    fn from_value_narrows_with_native_semantics() {
        let v = i8::from_value(OwnedValue::Int(300)).unwrap();
        assert_eq!(v, 300i64 as i8);

        let v = u16::from_value(OwnedValue::Int(70000)).unwrap();
        assert_eq!(v, 70000i64 as u16);
    }

    #[test]
    fn from_value_rejects_mismatched_kinds() {
        let err = i64::from_value(OwnedValue::Text("42".into())).unwrap_err();
        assert!(err.to_string().contains("integer field"));

        let err = String::from_value(OwnedValue::Int(1)).unwrap_err();
        assert!(err.to_string().contains("text field"));
    }

    #[test]
    fn from_value_option_passes_null_through() {
        assert_eq!(Option::<i32>::from_value(OwnedValue::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::from_value(OwnedValue::Int(5)).unwrap(),
            Some(5)
        );
    }
}
