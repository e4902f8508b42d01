//! Error types for PHP literal generation.
//!
//! ## Error Categories
//!
//! - **Type Mismatches**: A value does not fit the type hint it was given
//! - **Unsupported Types**: The value (or hint) has no PHP literal form
//! - **Unknown Types**: A type name string was not recognised
//! - **Invalid Keys**: A map key cannot become a PHP array key
//! - **Occupied Indices**: An append found its next free index already taken
//! - **I/O Errors**: Writing generated source failed
//!
//! ## Examples
//!
//! ```rust
//! use php_literal::{Error, PhpValue, ValueGenerator, ValueType};
//!
//! let generator = ValueGenerator::with_value(PhpValue::from("yes"), ValueType::Boolean);
//! let err = generator.generate().unwrap_err();
//! assert!(matches!(err, Error::TypeMismatch { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while building or rendering PHP values.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// The value cannot be rendered with the requested type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// The type cannot be used as a PHP literal
    #[error("Type \"{0}\" is unknown or cannot be used as property default value")]
    UnsupportedType(String),

    /// A type name that does not map to any [`crate::ValueType`]
    #[error("Unknown value type name: {0}")]
    UnknownType(String),

    /// A map key that PHP arrays cannot hold
    #[error("Invalid array key: {0}")]
    InvalidKey(String),

    /// Appending failed because the next free index already holds a value
    #[error("Cannot add element to the array: next index {0} is already occupied")]
    IndexOccupied(i64),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_literal::Error;
    ///
    /// let err = Error::type_mismatch("boolean", "string");
    /// assert!(err.to_string().contains("expected boolean"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an unknown type name error.
    pub fn unknown_type(name: &str) -> Self {
        Error::UnknownType(name.to_string())
    }

    /// Creates an invalid key error.
    pub fn invalid_key(msg: &str) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_literal::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
