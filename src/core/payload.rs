//! Free-form MSG arguments

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One element of a message payload
///
/// Text rendering uses each kind's `Display`: strings verbatim, integers in
/// decimal, floats in shortest round-trip form (`1.5`, `1`), booleans as
/// `true`/`false`.
///
/// Every primitive integer converts into `Int`; `u64`/`usize` values above
/// `i64::MAX` saturate to `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for PayloadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadValue::String(s) => f.write_str(s),
            PayloadValue::Int(i) => write!(f, "{}", i),
            PayloadValue::Float(fl) => write!(f, "{}", fl),
            PayloadValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for PayloadValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PayloadValue::String(s) => serializer.serialize_str(s),
            PayloadValue::Int(i) => serializer.serialize_i64(*i),
            // JSON has no representation for NaN or infinities
            PayloadValue::Float(fl) if !fl.is_finite() => Err(S::Error::custom(format!(
                "non-finite float {} cannot be encoded",
                fl
            ))),
            PayloadValue::Float(fl) => serializer.serialize_f64(*fl),
            PayloadValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<String> for PayloadValue {
    fn from(s: String) -> Self {
        PayloadValue::String(s)
    }
}

impl From<&str> for PayloadValue {
    fn from(s: &str) -> Self {
        PayloadValue::String(s.to_string())
    }
}

impl From<&String> for PayloadValue {
    fn from(s: &String) -> Self {
        PayloadValue::String(s.clone())
    }
}

macro_rules! lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PayloadValue {
                fn from(i: $ty) -> Self {
                    PayloadValue::Int(i64::from(i))
                }
            }
        )*
    };
}

lossless_int!(i8, i16, i32, i64, u8, u16, u32);

// values above i64::MAX saturate
macro_rules! saturating_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PayloadValue {
                fn from(i: $ty) -> Self {
                    PayloadValue::Int(i64::try_from(i).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

saturating_int!(u64, usize);

impl From<isize> for PayloadValue {
    fn from(i: isize) -> Self {
        // isize is at most 64 bits on every supported target
        PayloadValue::Int(i as i64)
    }
}

impl From<f64> for PayloadValue {
    fn from(f: f64) -> Self {
        PayloadValue::Float(f)
    }
}

impl From<f32> for PayloadValue {
    fn from(f: f32) -> Self {
        PayloadValue::Float(f64::from(f))
    }
}

impl From<bool> for PayloadValue {
    fn from(b: bool) -> Self {
        PayloadValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PayloadValue::from("hello, syslog!").to_string(), "hello, syslog!");
        assert_eq!(PayloadValue::from(-42).to_string(), "-42");
        assert_eq!(PayloadValue::from(1.5).to_string(), "1.5");
        assert_eq!(PayloadValue::from(2.0).to_string(), "2");
        assert_eq!(PayloadValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_json_natural_types() {
        let values = vec![
            PayloadValue::from("a"),
            PayloadValue::from(1),
            PayloadValue::from(0.5),
            PayloadValue::from(false),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["a",1,0.5,false]"#);

        let back: Vec<PayloadValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_integer_widths() {
        let items: Vec<u8> = vec![1, 2, 3];
        assert_eq!(PayloadValue::from(items.len()), PayloadValue::Int(3));
        assert_eq!(PayloadValue::from(7u8), PayloadValue::Int(7));
        assert_eq!(PayloadValue::from(-7i16), PayloadValue::Int(-7));
        assert_eq!(PayloadValue::from(u64::MAX).to_string(), i64::MAX.to_string());
        assert_eq!(PayloadValue::from(usize::MAX), PayloadValue::Int(i64::MAX));
        assert_eq!(PayloadValue::from(-5isize), PayloadValue::Int(-5));
    }

    #[test]
    fn test_json_rejects_non_finite() {
        assert!(serde_json::to_string(&PayloadValue::Float(f64::NAN)).is_err());
        assert!(serde_json::to_string(&PayloadValue::Float(f64::INFINITY)).is_err());
    }
}
