//! Dynamic value representation for PHP literals.
//!
//! This module provides the [`PhpValue`] enum which represents anything the
//! generator can turn into PHP source text.
//!
//! ## Core Types
//!
//! - [`PhpValue`]: null, bool, number, string, array, or a constant expression
//! - [`Number`]: integers, floats (including `INF`/`NAN`) and integers beyond `i64`
//! - [`Constant`]: a serde-visible marker for fields that hold PHP expressions
//!
//! ## Usage Patterns
//!
//! ```rust
//! use php_literal::{php, PhpValue};
//!
//! let null = PhpValue::Null;
//! let number = PhpValue::from(42);
//! let text = PhpValue::from("hello");
//! let eol = PhpValue::constant("PHP_EOL");
//!
//! assert!(number.is_number());
//! assert_eq!(text.as_str(), Some("hello"));
//! assert_eq!(eol.as_constant(), Some("PHP_EOL"));
//!
//! let array = php!(["a", "b" => 2]);
//! assert!(array.is_array());
//! ```

use crate::{ArrayKey, PhpArray};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Newtype-struct name used to carry [`PhpValue::Constant`] through serde.
pub(crate) const CONSTANT_TOKEN: &str = "$php_literal::private::Constant";

/// A dynamically-typed PHP value.
///
/// # Examples
///
/// ```rust
/// use php_literal::{Number, PhpValue};
///
/// let num = PhpValue::Number(Number::Integer(42));
/// let text = PhpValue::String("hello".to_string());
///
/// assert!(PhpValue::Null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PhpValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(PhpArray),
    /// Source text emitted verbatim, such as `PHP_EOL` or `__DIR__ . '/x'`.
    Constant(String),
}

/// A PHP number.
///
/// Formatting follows what PHP reads back as the same number:
///
/// ```rust
/// use php_literal::Number;
///
/// assert_eq!(Number::Integer(5).to_string(), "5");
/// assert_eq!(Number::Float(5.25).to_string(), "5.25");
/// assert_eq!(Number::Float(5.0).to_string(), "5.0");
/// assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-INF");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    /// An integer outside `i64`; PHP parses such a literal as a float.
    Big(BigInt),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is integral and in range.
    ///
    /// ```rust
    /// use php_literal::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::Big(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Big(bi) => bi.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => write!(f, "NAN"),
            Number::Float(fl) if fl.is_infinite() => {
                write!(f, "{}", if *fl > 0.0 { "INF" } else { "-INF" })
            }
            Number::Float(fl) => {
                let text = fl.to_string();
                if text.contains(|c| matches!(c, '.' | 'e' | 'E')) {
                    write!(f, "{}", text)
                } else {
                    // Keep the literal a float when PHP parses it back
                    write!(f, "{}.0", text)
                }
            }
            Number::Big(bi) => write!(f, "{}", bi),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }

            impl From<$ty> for PhpValue {
                fn from(value: $ty) -> Self {
                    PhpValue::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => Number::Integer(i),
                        Err(_) => Number::Big(BigInt::from(value)),
                    }
                }
            }

            impl From<$ty> for PhpValue {
                fn from(value: $ty) -> Self {
                    PhpValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, i128, u128, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Big(value),
        }
    }
}

impl PhpValue {
    /// Creates a constant/expression value that is emitted unquoted.
    pub fn constant(expr: impl Into<String>) -> Self {
        PhpValue::Constant(expr.into())
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, PhpValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, PhpValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, PhpValue::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, PhpValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, PhpValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, PhpValue::Constant(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PhpValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PhpValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PhpValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PhpValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&PhpArray> {
        match self {
            PhpValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_constant(&self) -> Option<&str> {
        match self {
            PhpValue::Constant(expr) => Some(expr),
            _ => None,
        }
    }

    /// PHP-facing name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            PhpValue::Null => "null",
            PhpValue::Bool(_) => "boolean",
            PhpValue::Number(Number::Integer(_)) => "integer",
            PhpValue::Number(_) => "float",
            PhpValue::String(_) => "string",
            PhpValue::Array(_) => "array",
            PhpValue::Constant(_) => "constant",
        }
    }
}

/// Marks a serialized field as a PHP expression to be emitted unquoted.
///
/// # Examples
///
/// ```rust
/// use php_literal::{Constant, GeneratorOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Config {
///     separator: Constant,
///     name: String,
/// }
///
/// let config = Config {
///     separator: Constant::new("DIRECTORY_SEPARATOR"),
///     name: "app".to_string(),
/// };
/// let php = php_literal::to_string_with_options(&config, GeneratorOptions::compact()).unwrap();
/// assert_eq!(php, "array('separator' => DIRECTORY_SEPARATOR, 'name' => 'app')");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constant(pub String);

impl Constant {
    pub fn new(expr: impl Into<String>) -> Self {
        Constant(expr.into())
    }
}

impl Serialize for Constant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(CONSTANT_TOKEN, &self.0)
    }
}

impl From<Constant> for PhpValue {
    fn from(value: Constant) -> Self {
        PhpValue::Constant(value.0)
    }
}

impl Serialize for PhpValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PhpValue::Null => serializer.serialize_unit(),
            PhpValue::Bool(b) => serializer.serialize_bool(*b),
            PhpValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            PhpValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            PhpValue::Number(Number::Big(bi)) => {
                if let Ok(i) = i128::try_from(bi) {
                    serializer.serialize_i128(i)
                } else if let Ok(u) = u128::try_from(bi) {
                    serializer.serialize_u128(u)
                } else {
                    serializer.serialize_str(&bi.to_string())
                }
            }
            PhpValue::String(s) => serializer.serialize_str(s),
            PhpValue::Array(arr) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(arr.len()))?;
                for (k, v) in arr.iter() {
                    match k {
                        ArrayKey::Int(i) => map.serialize_entry(i, v)?,
                        ArrayKey::Str(s) => map.serialize_entry(s, v)?,
                    }
                }
                map.end()
            }
            PhpValue::Constant(expr) => serializer.serialize_newtype_struct(CONSTANT_TOKEN, expr),
        }
    }
}

impl<'de> Deserialize<'de> for PhpValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PhpValueVisitor;

        impl<'de> Visitor<'de> for PhpValueVisitor {
            type Value = PhpValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value representable as a PHP literal")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(PhpValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(PhpValue::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(PhpValue::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(PhpValue::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(PhpValue::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(PhpValue::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(PhpValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(PhpValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(PhpValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(PhpValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = PhpArray::new();
                while let Some(elem) = seq.next_element::<PhpValue>()? {
                    array.push(elem).map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(PhpValue::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut array = PhpArray::new();
                while let Some((key, value)) = map.next_entry::<String, PhpValue>()? {
                    array.insert(key, value);
                }
                Ok(PhpValue::Array(array))
            }
        }

        deserializer.deserialize_any(PhpValueVisitor)
    }
}

impl TryFrom<PhpValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: PhpValue) -> crate::Result<Self> {
        match value.as_i64() {
            Some(i) => Ok(i),
            None => Err(crate::Error::type_mismatch("integer", value.type_name())),
        }
    }
}

impl TryFrom<PhpValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: PhpValue) -> crate::Result<Self> {
        match value {
            PhpValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::type_mismatch("float", value.type_name())),
        }
    }
}

impl TryFrom<PhpValue> for bool {
    type Error = crate::Error;

    fn try_from(value: PhpValue) -> crate::Result<Self> {
        match value {
            PhpValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::type_mismatch("boolean", value.type_name())),
        }
    }
}

impl TryFrom<PhpValue> for String {
    type Error = crate::Error;

    fn try_from(value: PhpValue) -> crate::Result<Self> {
        match value {
            PhpValue::String(s) => Ok(s),
            _ => Err(crate::Error::type_mismatch("string", value.type_name())),
        }
    }
}

impl From<bool> for PhpValue {
    fn from(value: bool) -> Self {
        PhpValue::Bool(value)
    }
}

impl From<f32> for PhpValue {
    fn from(value: f32) -> Self {
        PhpValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for PhpValue {
    fn from(value: f64) -> Self {
        PhpValue::Number(Number::Float(value))
    }
}

impl From<Number> for PhpValue {
    fn from(value: Number) -> Self {
        PhpValue::Number(value)
    }
}

impl From<BigInt> for PhpValue {
    fn from(value: BigInt) -> Self {
        PhpValue::Number(Number::from(value))
    }
}

impl From<String> for PhpValue {
    fn from(value: String) -> Self {
        PhpValue::String(value)
    }
}

impl From<&str> for PhpValue {
    fn from(value: &str) -> Self {
        PhpValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for PhpValue {
    fn from(value: DateTime<Utc>) -> Self {
        PhpValue::String(value.to_rfc3339())
    }
}

impl<T: Into<PhpValue>> From<Option<T>> for PhpValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PhpValue::Null, Into::into)
    }
}

impl From<Vec<PhpValue>> for PhpValue {
    fn from(value: Vec<PhpValue>) -> Self {
        PhpValue::Array(value.into())
    }
}

impl From<PhpArray> for PhpValue {
    fn from(value: PhpArray) -> Self {
        PhpValue::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_float_display() {
        assert_eq!(Number::Float(5.25).to_string(), "5.25");
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NAN");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "INF");
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(PhpValue::from(7u64), PhpValue::Number(Number::Integer(7)));
        let big = PhpValue::from(u64::MAX);
        assert_eq!(
            big,
            PhpValue::Number(Number::Big(BigInt::from(u64::MAX)))
        );
        assert_eq!(
            Number::from(u64::MAX).to_string(),
            "18446744073709551615"
        );
        assert_eq!(
            Number::from(BigInt::from(12)),
            Number::Integer(12)
        );
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(PhpValue::from(42)).unwrap(), 42);
        assert_eq!(f64::try_from(PhpValue::from(42)).unwrap(), 42.0);
        assert!(bool::try_from(PhpValue::from(1)).is_err());
        assert_eq!(String::try_from(PhpValue::from("x")).unwrap(), "x");

        let err = String::try_from(PhpValue::constant("PHP_EOL")).unwrap_err();
        assert!(err.to_string().contains("found constant"));
    }

    #[test]
    fn test_from_option_and_date() {
        assert_eq!(PhpValue::from(None::<i32>), PhpValue::Null);
        assert_eq!(PhpValue::from(Some("a")), PhpValue::from("a"));

        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            PhpValue::from(date).as_str(),
            Some("2024-01-02T03:04:05+00:00")
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(PhpValue::Null.type_name(), "null");
        assert_eq!(PhpValue::from(1.5).type_name(), "float");
        assert_eq!(PhpValue::from(vec![]).type_name(), "array");
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: PhpValue = serde_json::from_str(r#"{"a": [1, 2.5], "7": null}"#).unwrap();
        let array = value.as_array().unwrap();

        assert_eq!(array.keys().cloned().collect::<Vec<_>>(), vec![
            ArrayKey::from("a"),
            ArrayKey::Int(7)
        ]);
        assert_eq!(array.get(7), Some(&PhpValue::Null));
        assert!(array.get("a").unwrap().as_array().unwrap().is_list());
    }
}
