//! Configuration options for PHP literal generation.
//!
//! - [`GeneratorOptions`]: Main configuration struct
//! - [`OutputMode`]: Multi-line or single-line array layout
//! - [`ArrayStyle`]: `array(...)` or `[...]` array syntax
//!
//! ## Examples
//!
//! ```rust
//! use php_literal::{to_string_with_options, ArrayStyle, GeneratorOptions};
//!
//! let options = GeneratorOptions::compact().with_array_style(ArrayStyle::Short);
//! let php = to_string_with_options(&vec![1, 2, 3], options).unwrap();
//! assert_eq!(php, "[1, 2, 3]");
//! ```

/// Layout of generated array literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One entry per line, each followed by a comma.
    #[default]
    MultipleLine,
    /// All entries on one line, separated by `, `.
    SingleLine,
}

/// Syntax used to open and close array literals.
///
/// # Examples
///
/// ```rust
/// use php_literal::ArrayStyle;
///
/// assert_eq!(ArrayStyle::Long.delimiters(), ("array(", ")"));
/// assert_eq!(ArrayStyle::Short.delimiters(), ("[", "]"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayStyle {
    #[default]
    Long,
    Short,
}

impl ArrayStyle {
    /// Returns the opening and closing tokens for this style.
    #[must_use]
    pub const fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            ArrayStyle::Long => ("array(", ")"),
            ArrayStyle::Short => ("[", "]"),
        }
    }
}

/// Configuration options for PHP literal generation.
///
/// # Examples
///
/// ```rust
/// use php_literal::{ArrayStyle, GeneratorOptions, OutputMode};
///
/// // Default: multi-line, four-space indentation, `array(` syntax
/// let options = GeneratorOptions::new();
/// assert_eq!(options.indentation, "    ");
///
/// // Custom configuration
/// let options = GeneratorOptions::new()
///     .with_indentation("\t")
///     .with_array_style(ArrayStyle::Short);
/// assert_eq!(options.output_mode, OutputMode::MultipleLine);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub indentation: String,
    pub output_mode: OutputMode,
    pub array_style: ArrayStyle,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            indentation: "    ".to_string(),
            output_mode: OutputMode::default(),
            array_style: ArrayStyle::default(),
        }
    }
}

impl GeneratorOptions {
    /// Creates default options (multi-line, four-space indent, long array syntax).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_literal::{GeneratorOptions, OutputMode};
    ///
    /// let options = GeneratorOptions::compact();
    /// assert_eq!(options.output_mode, OutputMode::SingleLine);
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        GeneratorOptions {
            output_mode: OutputMode::SingleLine,
            ..Default::default()
        }
    }

    /// Sets the string repeated once per nesting level.
    #[must_use]
    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    #[must_use]
    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    #[must_use]
    pub fn with_array_style(mut self, array_style: ArrayStyle) -> Self {
        self.array_style = array_style;
        self
    }
}
