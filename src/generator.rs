//! Rendering values as PHP source text.
//!
//! [`ValueGenerator`] holds a value, a [`ValueType`] hint, layout options and
//! the set of constant names used for auto-detection. [`ValueGenerator::generate`]
//! turns all of it into the text of a PHP literal.
//!
//! ## Rendering Rules
//!
//! - Strings become single-quoted literals with `\` and `'` escaped
//! - Numbers, `true`, `false` and `null` are written bare
//! - Constants are written verbatim
//! - Arrays list one `key => value` entry per element; a key is left out when
//!   it equals the index PHP would assign to an element without a key
//!
//! ## Examples
//!
//! ```rust
//! use php_literal::{php, ValueGenerator, ValueType};
//!
//! let generator = ValueGenerator::with_value(php!([1 => "a", 0 => "b", "c"]), ValueType::Auto);
//! assert_eq!(
//!     generator.generate().unwrap(),
//!     "array(\n    1 => 'a',\n    0 => 'b',\n    'c',\n)"
//! );
//!
//! let eol = ValueGenerator::constant("PHP_EOL");
//! assert_eq!(eol.generate().unwrap(), "PHP_EOL");
//! ```

use crate::{
    ArrayKey, ArrayStyle, ConstantSet, Error, GeneratorOptions, Number, OutputMode, PhpArray,
    PhpValue, Result, ValueType,
};
use tracing::{trace, warn};

/// Builds the PHP literal for a single value.
#[derive(Debug, Clone, Default)]
pub struct ValueGenerator {
    value: PhpValue,
    value_type: ValueType,
    options: GeneratorOptions,
    constants: ConstantSet,
    array_depth: usize,
}

impl ValueGenerator {
    /// Creates a generator holding `null` with an automatic type.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<PhpValue>, value_type: ValueType) -> Self {
        ValueGenerator {
            value: value.into(),
            value_type,
            ..Default::default()
        }
    }

    /// Creates a generator that emits `expr` unquoted.
    pub fn constant(expr: impl Into<String>) -> Self {
        Self::with_value(PhpValue::String(expr.into()), ValueType::Constant)
    }

    pub fn set_value(&mut self, value: impl Into<PhpValue>) -> &mut Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn value(&self) -> &PhpValue {
        &self.value
    }

    pub fn set_type(&mut self, value_type: ValueType) -> &mut Self {
        self.value_type = value_type;
        self
    }

    /// Sets the type from its PHP name; unknown names fall back to [`ValueType::Auto`].
    pub fn set_type_name(&mut self, name: &str) -> &mut Self {
        self.value_type = name.parse().unwrap_or_else(|_| {
            warn!(type_name = %name, "unknown value type name, using auto");
            ValueType::Auto
        });
        self
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn set_options(&mut self, options: GeneratorOptions) -> &mut Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn set_indentation(&mut self, indentation: impl Into<String>) -> &mut Self {
        self.options.indentation = indentation.into();
        self
    }

    pub fn set_output_mode(&mut self, output_mode: OutputMode) -> &mut Self {
        self.options.output_mode = output_mode;
        self
    }

    pub fn set_array_style(&mut self, array_style: ArrayStyle) -> &mut Self {
        self.options.array_style = array_style;
        self
    }

    /// Sets the nesting level the output starts at.
    ///
    /// Multi-line arrays indent their entries one level deeper than this and
    /// their closing token at this level.
    pub fn set_array_depth(&mut self, depth: usize) -> &mut Self {
        self.array_depth = depth;
        self
    }

    #[must_use]
    pub fn array_depth(&self) -> usize {
        self.array_depth
    }

    #[must_use]
    pub fn constants(&self) -> &ConstantSet {
        &self.constants
    }

    pub fn constants_mut(&mut self) -> &mut ConstantSet {
        &mut self.constants
    }

    /// Registers the magic constants, `::` and the core predefined constants.
    pub fn init_environment_constants(&mut self) -> &mut Self {
        self.constants.extend(ConstantSet::environment().iter().cloned());
        self
    }

    /// The type [`ValueType::Auto`] resolves to for `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_literal::{PhpValue, ValueGenerator, ValueType};
    ///
    /// let mut generator = ValueGenerator::new();
    /// let expr = PhpValue::from("__DIR__ . '/cache'");
    /// assert_eq!(generator.auto_determined_type(&expr), ValueType::String);
    ///
    /// generator.init_environment_constants();
    /// assert_eq!(generator.auto_determined_type(&expr), ValueType::Constant);
    /// ```
    #[must_use]
    pub fn auto_determined_type(&self, value: &PhpValue) -> ValueType {
        match value {
            PhpValue::Null => ValueType::Null,
            PhpValue::Bool(_) => ValueType::Boolean,
            PhpValue::Number(_) => ValueType::Number,
            PhpValue::String(s) if self.constants.matches(s) => {
                trace!(value = %s, "string treated as constant expression");
                ValueType::Constant
            }
            PhpValue::String(_) => ValueType::String,
            PhpValue::Array(_) => ValueType::Array,
            PhpValue::Constant(_) => ValueType::Constant,
        }
    }

    /// Renders the value as PHP source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when the value does not fit an explicit
    /// type hint, and [`Error::UnsupportedType`] for [`ValueType::Other`].
    pub fn generate(&self) -> Result<String> {
        let mut output = String::new();
        self.write_value(&mut output, &self.value, self.value_type, self.array_depth)?;
        Ok(output)
    }

    /// Backslash-escapes `\` and `'`, optionally wrapping the result in single quotes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_literal::ValueGenerator;
    ///
    /// assert_eq!(ValueGenerator::escape("it's", true), r"'it\'s'");
    /// assert_eq!(ValueGenerator::escape(r"C:\tmp", false), r"C:\\tmp");
    /// ```
    #[must_use]
    pub fn escape(input: &str, quote: bool) -> String {
        let mut output = String::with_capacity(input.len() + 2);
        if quote {
            output.push('\'');
        }
        for ch in input.chars() {
            if ch == '\\' || ch == '\'' {
                output.push('\\');
            }
            output.push(ch);
        }
        if quote {
            output.push('\'');
        }
        output
    }

    fn write_value(
        &self,
        output: &mut String,
        value: &PhpValue,
        value_type: ValueType,
        depth: usize,
    ) -> Result<()> {
        let value_type = match value_type {
            ValueType::Auto => self.auto_determined_type(value),
            explicit => explicit,
        };

        match (value_type, value) {
            (ValueType::Boolean, PhpValue::Bool(b)) => {
                output.push_str(if *b { "true" } else { "false" })
            }
            (ValueType::Null, PhpValue::Null) => output.push_str("null"),
            (ValueType::Integer, PhpValue::Number(n @ (Number::Integer(_) | Number::Big(_)))) => {
                output.push_str(&n.to_string())
            }
            (ValueType::Float, PhpValue::Number(Number::Integer(i))) => {
                output.push_str(&format!("{}.0", i))
            }
            (ValueType::Float, PhpValue::Number(Number::Big(bi))) => {
                output.push_str(&format!("{}.0", bi))
            }
            (ValueType::Float, PhpValue::Number(n @ Number::Float(_))) => {
                output.push_str(&n.to_string())
            }
            (ValueType::Number | ValueType::Constant, PhpValue::Number(n)) => {
                output.push_str(&n.to_string())
            }
            (ValueType::String, PhpValue::String(s)) => output.push_str(&Self::escape(s, true)),
            (ValueType::Constant, PhpValue::String(expr) | PhpValue::Constant(expr)) => {
                output.push_str(expr)
            }
            (ty, PhpValue::Array(array)) if ty.is_array() => {
                let style = match ty {
                    ValueType::ArrayShort => ArrayStyle::Short,
                    ValueType::ArrayLong => ArrayStyle::Long,
                    _ => self.options.array_style,
                };
                self.write_array(output, array, style, depth)?
            }
            (ValueType::Other, _) => return Err(Error::unsupported_type(value.type_name())),
            (ty, value) => return Err(Error::type_mismatch(ty.as_str(), value.type_name())),
        }
        Ok(())
    }

    fn write_array(
        &self,
        output: &mut String,
        array: &PhpArray,
        style: ArrayStyle,
        depth: usize,
    ) -> Result<()> {
        let (open, close) = style.delimiters();
        let element_type = match style {
            ArrayStyle::Long => ValueType::ArrayLong,
            ArrayStyle::Short => ValueType::ArrayShort,
        };

        let mut parts = Vec::with_capacity(array.len());
        let mut implicit_index: i64 = 0;
        for (key, element) in array.iter() {
            let mut part = String::new();
            let omit_key = match key {
                ArrayKey::Int(i) if *i == implicit_index => {
                    implicit_index += 1;
                    true
                }
                ArrayKey::Int(i) => {
                    implicit_index = implicit_index.max(i.saturating_add(1));
                    part.push_str(&i.to_string());
                    false
                }
                ArrayKey::Str(s) => {
                    part.push_str(&Self::escape(s, true));
                    false
                }
            };
            if !omit_key {
                part.push_str(" => ");
            }

            let child_type = if element.is_array() {
                element_type
            } else {
                ValueType::Auto
            };
            self.write_value(&mut part, element, child_type, depth + 1)?;
            parts.push(part);
        }

        output.push_str(open);
        if parts.is_empty() {
            output.push_str(close);
            return Ok(());
        }

        match self.options.output_mode {
            OutputMode::MultipleLine => {
                let inner = self.options.indentation.repeat(depth + 1);
                for part in &parts {
                    output.push('\n');
                    output.push_str(&inner);
                    output.push_str(part);
                    output.push(',');
                }
                output.push('\n');
                output.push_str(&self.options.indentation.repeat(depth));
            }
            OutputMode::SingleLine => output.push_str(&parts.join(", ")),
        }
        output.push_str(close);
        Ok(())
    }
}
