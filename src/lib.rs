//! # php_literal
//!
//! Generates the text of PHP literals from Rust values, for embedding into
//! generated PHP source code.
//!
//! ## What does it produce?
//!
//! - Strings become single-quoted, escaped literals: `'it\'s'`
//! - Numbers, booleans and null are written bare: `5`, `5.25`, `true`, `null`
//! - Arrays become `array(...)` (or `[...]`) literals with one `key => value`
//!   entry per line, leaving out keys PHP would assign by itself
//! - Constants and expressions are written verbatim: `PHP_EOL`,
//!   `__DIR__ . '/cache'`, `ArrayObject::STD_PROP_LIST`
//!
//! ## Quick Start
//!
//! ```rust
//! use php_literal::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Database {
//!     host: String,
//!     port: u16,
//!     persistent: bool,
//! }
//!
//! let db = Database {
//!     host: "localhost".to_string(),
//!     port: 5432,
//!     persistent: false,
//! };
//!
//! let php = to_string(&db).unwrap();
//! assert_eq!(
//!     php,
//!     "array(\n    'host' => 'localhost',\n    'port' => 5432,\n    'persistent' => false,\n)"
//! );
//! ```
//!
//! ### Building values directly
//!
//! ```rust
//! use php_literal::{php, ValueGenerator, ValueType};
//!
//! let value = php!([
//!     5,
//!     "one" => 1,
//!     "constant1" => "__DIR__ . '/anydir1/anydir2'",
//!     const "PHP_EOL",
//! ]);
//!
//! let mut generator = ValueGenerator::with_value(value, ValueType::Auto);
//! generator.init_environment_constants();
//!
//! assert_eq!(
//!     generator.generate().unwrap(),
//!     "array(\n    5,\n    'one' => 1,\n    'constant1' => __DIR__ . '/anydir1/anydir2',\n    PHP_EOL,\n)"
//! );
//! ```
//!
//! ## Non-goals
//!
//! The crate only renders values. It does not parse PHP, and it does not
//! generate classes, methods or files.

pub mod array;
pub mod constants;
pub mod error;
pub mod generator;
pub mod macros;
pub mod options;
pub mod ser;
pub mod types;
pub mod value;

pub use array::{ArrayKey, PhpArray};
pub use constants::ConstantSet;
pub use error::{Error, Result};
pub use generator::ValueGenerator;
pub use options::{ArrayStyle, GeneratorOptions, OutputMode};
pub use ser::ValueSerializer;
pub use types::ValueType;
pub use value::{Constant, Number, PhpValue};

use serde::Serialize;
use std::io;

/// Render any `T: Serialize` as a PHP literal with default options.
///
/// # Examples
///
/// ```rust
/// use php_literal::to_string;
///
/// assert_eq!(to_string("foo").unwrap(), "'foo'");
/// assert_eq!(to_string(&vec!["foo"]).unwrap(), "array(\n    'foo',\n)");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted (e.g. a map key that is
/// neither a string nor an integer).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, GeneratorOptions::default())
}

/// Render any `T: Serialize` as a PHP literal with custom options.
///
/// # Examples
///
/// ```rust
/// use php_literal::{to_string_with_options, ArrayStyle, GeneratorOptions};
///
/// let options = GeneratorOptions::new()
///     .with_indentation("\t")
///     .with_array_style(ArrayStyle::Short);
/// let php = to_string_with_options(&vec![1, 2], options).unwrap();
/// assert_eq!(php, "[\n\t1,\n\t2,\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: GeneratorOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut generator = ValueGenerator::with_value(to_value(value)?, ValueType::Auto);
    generator.set_options(options);
    generator.generate()
}

/// Convert any `T: Serialize` to a [`PhpValue`].
///
/// # Examples
///
/// ```rust
/// use php_literal::{to_value, PhpValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.as_array().unwrap().get("x"), Some(&PhpValue::from(1)));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<PhpValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Write the PHP literal for any `T: Serialize` to a writer.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, GeneratorOptions::default())
}

/// Write the PHP literal for any `T: Serialize` to a writer with custom options.
///
/// # Examples
///
/// ```rust
/// use php_literal::{to_writer_with_options, GeneratorOptions};
///
/// let mut buffer = Vec::new();
/// to_writer_with_options(&mut buffer, &[1, 2], GeneratorOptions::compact()).unwrap();
/// assert_eq!(buffer, b"array(1, 2)");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: GeneratorOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let php = to_string_with_options(value, options)?;
    writer
        .write_all(php.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Escape `input` for a single-quoted PHP string; see [`ValueGenerator::escape`].
#[must_use]
pub fn escape(input: &str, quote: bool) -> String {
    ValueGenerator::escape(input, quote)
}
