//! Type hints accepted by [`crate::ValueGenerator`].

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// How a value should be rendered.
///
/// `Auto` inspects the value; every other variant forces a rendering and
/// fails if the value does not fit it.
///
/// # Examples
///
/// ```rust
/// use php_literal::ValueType;
///
/// assert_eq!("constant".parse::<ValueType>().unwrap(), ValueType::Constant);
/// assert_eq!("INT".parse::<ValueType>().unwrap(), ValueType::Integer);
/// assert!("resource".parse::<ValueType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    #[default]
    Auto,
    Boolean,
    Number,
    Integer,
    Float,
    String,
    /// An array in the generator's configured [`crate::ArrayStyle`].
    Array,
    ArrayShort,
    ArrayLong,
    Constant,
    Null,
    Other,
}

impl ValueType {
    /// Canonical name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Auto => "auto",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::ArrayShort => "array_short",
            ValueType::ArrayLong => "array_long",
            ValueType::Constant => "constant",
            ValueType::Null => "null",
            ValueType::Other => "other",
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(
            self,
            ValueType::Array | ValueType::ArrayShort | ValueType::ArrayLong
        )
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            ValueType::Number | ValueType::Integer | ValueType::Float
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let ty = match s.to_ascii_lowercase().as_str() {
            "auto" => ValueType::Auto,
            "boolean" | "bool" => ValueType::Boolean,
            "number" => ValueType::Number,
            "integer" | "int" => ValueType::Integer,
            "float" | "double" => ValueType::Float,
            "string" => ValueType::String,
            "array" => ValueType::Array,
            "array_short" => ValueType::ArrayShort,
            "array_long" => ValueType::ArrayLong,
            "constant" => ValueType::Constant,
            "null" => ValueType::Null,
            "other" => ValueType::Other,
            _ => return Err(Error::unknown_type(s)),
        };
        Ok(ty)
    }
}
