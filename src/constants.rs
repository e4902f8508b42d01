//! Names that mark a string as a PHP expression.
//!
//! When a [`crate::ValueGenerator`] auto-detects the type of a string, it
//! checks the string against its [`ConstantSet`]: a string that *contains* any
//! registered name is emitted verbatim instead of quoted. This is how
//! `__DIR__ . '/config'` or `ArrayObject::STD_PROP_LIST` survive as code.
//!
//! Names made of identifier characters only match as whole identifiers, so
//! `E_ALL` matches `E_ALL & ~E_NOTICE` but not `THE_ALLEY`.
//!
//! ```rust
//! use php_literal::ConstantSet;
//!
//! let constants = ConstantSet::environment();
//! assert!(constants.matches("__DIR__ . '/config'"));
//! assert!(constants.matches("ArrayObject::STD_PROP_LIST"));
//! assert!(constants.matches("E_ALL & ~E_NOTICE"));
//! assert!(!constants.matches("plain text"));
//! assert!(!constants.matches("INFO"));
//! ```

use indexmap::IndexSet;

/// Magic constants resolved by the PHP compiler.
const MAGIC_CONSTANTS: &[&str] = &[
    "__DIR__",
    "__FILE__",
    "__LINE__",
    "__CLASS__",
    "__TRAIT__",
    "__METHOD__",
    "__FUNCTION__",
    "__NAMESPACE__",
];

/// Scope resolution operator; any `Foo::BAR` reference is an expression.
const SCOPE_OPERATOR: &str = "::";

/// Core predefined constants available in every PHP build.
const PREDEFINED_CONSTANTS: &[&str] = &[
    "INF",
    "NAN",
    "PHP_EOL",
    "PHP_VERSION",
    "PHP_MAJOR_VERSION",
    "PHP_MINOR_VERSION",
    "PHP_RELEASE_VERSION",
    "PHP_VERSION_ID",
    "PHP_OS",
    "PHP_OS_FAMILY",
    "PHP_INT_MAX",
    "PHP_INT_MIN",
    "PHP_INT_SIZE",
    "PHP_FLOAT_EPSILON",
    "PHP_FLOAT_MAX",
    "PHP_FLOAT_MIN",
    "PHP_FLOAT_DIG",
    "PHP_MAXPATHLEN",
    "PHP_SAPI",
    "PHP_BINARY",
    "PHP_PREFIX",
    "PHP_BINDIR",
    "PHP_LIBDIR",
    "PHP_DATADIR",
    "PHP_EXTENSION_DIR",
    "PHP_SHLIB_SUFFIX",
    "DEFAULT_INCLUDE_PATH",
    "PEAR_INSTALL_DIR",
    "PEAR_EXTENSION_DIR",
    "DIRECTORY_SEPARATOR",
    "PATH_SEPARATOR",
    "JSON_PRETTY_PRINT",
    "JSON_UNESCAPED_SLASHES",
    "JSON_UNESCAPED_UNICODE",
    "JSON_THROW_ON_ERROR",
    "E_ERROR",
    "E_WARNING",
    "E_PARSE",
    "E_NOTICE",
    "E_DEPRECATED",
    "E_STRICT",
    "E_USER_ERROR",
    "E_USER_WARNING",
    "E_USER_NOTICE",
    "E_USER_DEPRECATED",
    "E_ALL",
    "M_PI",
    "M_E",
    "M_SQRT2",
    "SORT_REGULAR",
    "SORT_NUMERIC",
    "SORT_STRING",
    "COUNT_RECURSIVE",
    "LC_ALL",
    "SEEK_SET",
    "SEEK_CUR",
    "SEEK_END",
    "LOCK_SH",
    "LOCK_EX",
    "LOCK_UN",
];

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Finds `name` in `value`, requiring identifier boundaries on each side of
/// `name` that starts or ends with an identifier character.
fn contains_name(value: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let check_start = name.starts_with(is_identifier_char);
    let check_end = name.ends_with(is_identifier_char);

    value.match_indices(name).any(|(start, _)| {
        let end = start + name.len();
        let before_ok = !check_start || !value[..start].ends_with(is_identifier_char);
        let after_ok = !check_end || !value[end..].starts_with(is_identifier_char);
        before_ok && after_ok
    })
}

/// An insertion-ordered set of constant names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantSet(IndexSet<String>);

impl ConstantSet {
    /// Creates an empty set; no string is treated as a constant.
    #[must_use]
    pub fn new() -> Self {
        ConstantSet(IndexSet::new())
    }

    /// Magic constants, the `::` operator and the core predefined constants.
    #[must_use]
    pub fn environment() -> Self {
        MAGIC_CONSTANTS
            .iter()
            .chain(std::iter::once(&SCOPE_OPERATOR))
            .chain(PREDEFINED_CONSTANTS.iter())
            .copied()
            .collect()
    }

    /// Adds a name, returning `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns `true` if `value` contains any registered name.
    ///
    /// Identifier-like names must stand alone: `PHP_EOL` matches
    /// `'a' . PHP_EOL` but not `MY_PHP_EOL`. Operators such as `::` match
    /// anywhere.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.0.iter().any(|name| contains_name(value, name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> Extend<S> for ConstantSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ConstantSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = ConstantSet::new();
        set.extend(iter);
        set
    }
}
