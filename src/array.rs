//! Ordered PHP arrays.
//!
//! PHP has a single array type that is both a list and an ordered dictionary.
//! [`PhpArray`] models it as an [`IndexMap`] from [`ArrayKey`] to [`PhpValue`]
//! plus the "next free index" PHP uses when an element is appended without a key.
//!
//! ## Examples
//!
//! ```rust
//! use php_literal::{ArrayKey, PhpArray, PhpValue};
//!
//! let mut array = PhpArray::new();
//! array.insert(1, "a");
//! array.insert(0, "b");
//! array.push("c").unwrap();
//!
//! // `push` used the next free index, not the length
//! assert_eq!(array.get(2).and_then(|v| v.as_str()), Some("c"));
//! assert_eq!(array.next_index(), 3);
//!
//! // Numeric strings become integer keys, as in PHP
//! assert_eq!(ArrayKey::from("7"), ArrayKey::Int(7));
//! assert_eq!(ArrayKey::from("07"), ArrayKey::Str("07".to_string()));
//! ```

use crate::{Error, PhpValue, Result};
use indexmap::IndexMap;
use std::fmt;

/// A PHP array key: an integer or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl ArrayKey {
    /// Builds a key from a string, turning canonical decimal integers into `Int`.
    ///
    /// Only strings PHP itself would cast are converted: no leading zeros,
    /// no `+` sign, no `-0`, no whitespace and nothing out of `i64` range.
    #[must_use]
    pub fn from_string(key: String) -> Self {
        match parse_integer_key(&key) {
            Some(i) => ArrayKey::Int(i),
            None => ArrayKey::Str(key),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, ArrayKey::Int(_))
    }

    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArrayKey::Int(i) => Some(*i),
            ArrayKey::Str(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArrayKey::Str(s) => Some(s),
            ArrayKey::Int(_) => None,
        }
    }
}

fn parse_integer_key(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == s.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Int(i) => write!(f, "{}", i),
            ArrayKey::Str(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_int_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArrayKey {
                fn from(value: $ty) -> Self {
                    ArrayKey::Int(value as i64)
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for ArrayKey {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(i) => ArrayKey::Int(i),
            Err(_) => ArrayKey::Str(value.to_string()),
        }
    }
}

impl From<&str> for ArrayKey {
    fn from(value: &str) -> Self {
        ArrayKey::from_string(value.to_string())
    }
}

impl From<String> for ArrayKey {
    fn from(value: String) -> Self {
        ArrayKey::from_string(value)
    }
}

/// An insertion-ordered PHP array.
///
/// Equality is order-sensitive, matching PHP's `===`.
#[derive(Debug, Clone, Default)]
pub struct PhpArray {
    entries: IndexMap<ArrayKey, PhpValue>,
    next_index: i64,
}

impl PhpArray {
    #[must_use]
    pub fn new() -> Self {
        PhpArray {
            entries: IndexMap::new(),
            next_index: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PhpArray {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Appends a value at the next free integer index and returns that index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOccupied`] when the key `i64::MAX` is in use, as
    /// there is no index left to append at.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use php_literal::PhpArray;
    ///
    /// let mut array = PhpArray::new();
    /// array.insert(7, "d");
    /// assert_eq!(array.push("e").unwrap(), 8);
    ///
    /// array.insert(i64::MAX, "last");
    /// assert!(array.push("f").is_err());
    /// ```
    pub fn push(&mut self, value: impl Into<PhpValue>) -> Result<i64> {
        let index = self.next_index;
        if self.entries.contains_key(&ArrayKey::Int(index)) {
            return Err(Error::IndexOccupied(index));
        }
        self.insert(index, value);
        Ok(index)
    }

    /// Inserts a value under an explicit key.
    ///
    /// An existing key keeps its position and the old value is returned.
    pub fn insert(&mut self, key: impl Into<ArrayKey>, value: impl Into<PhpValue>) -> Option<PhpValue> {
        let key = key.into();
        if let ArrayKey::Int(i) = key {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }
        self.entries.insert(key, value.into())
    }

    #[must_use]
    pub fn get(&self, key: impl Into<ArrayKey>) -> Option<&PhpValue> {
        self.entries.get(&key.into())
    }

    pub fn get_mut(&mut self, key: impl Into<ArrayKey>) -> Option<&mut PhpValue> {
        self.entries.get_mut(&key.into())
    }

    #[must_use]
    pub fn contains_key(&self, key: impl Into<ArrayKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Removes a key, keeping the order of the remaining entries.
    ///
    /// Like PHP's `unset`, this does not lower the next free index.
    pub fn remove(&mut self, key: impl Into<ArrayKey>) -> Option<PhpValue> {
        self.entries.shift_remove(&key.into())
    }

    /// The index the next [`PhpArray::push`] will use.
    #[must_use]
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    /// Returns `true` if the keys are exactly `0..len` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| *key == ArrayKey::Int(i as i64))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, ArrayKey, PhpValue> {
        self.entries.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, ArrayKey, PhpValue> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, ArrayKey, PhpValue> {
        self.entries.iter()
    }
}

impl PartialEq for PhpArray {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl From<Vec<PhpValue>> for PhpArray {
    fn from(values: Vec<PhpValue>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<PhpValue> for PhpArray {
    fn from_iter<T: IntoIterator<Item = PhpValue>>(iter: T) -> Self {
        let mut array = PhpArray::new();
        // A fresh list fills 0, 1, 2, ... and cannot reach `i64::MAX`
        for (index, value) in (0_i64..).zip(iter) {
            array.insert(index, value);
        }
        array
    }
}

impl<K: Into<ArrayKey>> FromIterator<(K, PhpValue)> for PhpArray {
    fn from_iter<T: IntoIterator<Item = (K, PhpValue)>>(iter: T) -> Self {
        let mut array = PhpArray::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

impl IntoIterator for PhpArray {
    type Item = (ArrayKey, PhpValue);
    type IntoIter = indexmap::map::IntoIter<ArrayKey, PhpValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PhpArray {
    type Item = (&'a ArrayKey, &'a PhpValue);
    type IntoIter = indexmap::map::Iter<'a, ArrayKey, PhpValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_string_keys() {
        assert_eq!(ArrayKey::from("0"), ArrayKey::Int(0));
        assert_eq!(ArrayKey::from("42"), ArrayKey::Int(42));
        assert_eq!(ArrayKey::from("-3"), ArrayKey::Int(-3));
        assert_eq!(ArrayKey::from("-0"), ArrayKey::Str("-0".to_string()));
        assert_eq!(ArrayKey::from("007"), ArrayKey::Str("007".to_string()));
        assert_eq!(ArrayKey::from("+1"), ArrayKey::Str("+1".to_string()));
        assert_eq!(ArrayKey::from(" 1"), ArrayKey::Str(" 1".to_string()));
        assert_eq!(ArrayKey::from(""), ArrayKey::Str(String::new()));
        assert_eq!(ArrayKey::from("-"), ArrayKey::Str("-".to_string()));
        assert_eq!(
            ArrayKey::from("9223372036854775808"),
            ArrayKey::Str("9223372036854775808".to_string())
        );
    }

    #[test]
    fn test_push_follows_highest_integer_key() {
        let mut array = PhpArray::new();
        array.insert(1, "a");
        array.insert(0, "b");
        assert_eq!(array.push("c").unwrap(), 2);
        array.insert(7, "d");
        array.insert(3, "e");
        assert_eq!(array.next_index(), 8);

        let keys: Vec<_> = array.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                ArrayKey::Int(1),
                ArrayKey::Int(0),
                ArrayKey::Int(2),
                ArrayKey::Int(7),
                ArrayKey::Int(3)
            ]
        );
    }

    #[test]
    fn test_negative_key_does_not_lower_next_index() {
        let mut array = PhpArray::new();
        array.insert(-5, "x");
        assert_eq!(array.push("y").unwrap(), 0);
    }

    #[test]
    fn test_push_refuses_occupied_last_index() {
        let mut array = PhpArray::new();
        array.insert(i64::MAX, "a");
        assert_eq!(array.next_index(), i64::MAX);

        let err = array.push("b").unwrap_err();
        assert!(matches!(err, Error::IndexOccupied(i64::MAX)));
        assert_eq!(array.len(), 1);
        assert_eq!(array.get(i64::MAX), Some(&PhpValue::from("a")));

        array.remove(i64::MAX);
        assert_eq!(array.push("c").unwrap(), i64::MAX);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut array = PhpArray::new();
        array.insert("one", 1);
        array.insert("two", 2);
        let old = array.insert("one", 10);

        assert_eq!(old, Some(PhpValue::from(1)));
        assert_eq!(array.keys().next(), Some(&ArrayKey::from("one")));
        assert_eq!(array.get("one"), Some(&PhpValue::from(10)));
    }

    #[test]
    fn test_remove_keeps_next_index() {
        let mut array: PhpArray = vec![PhpValue::from(1), PhpValue::from(2)].into();
        array.remove(1);
        assert_eq!(array.len(), 1);
        assert_eq!(array.push(3).unwrap(), 2);
        assert!(!array.is_list());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: PhpArray = vec![("x", PhpValue::from(1)), ("y", PhpValue::from(2))]
            .into_iter()
            .collect();
        let b: PhpArray = vec![("y", PhpValue::from(2)), ("x", PhpValue::from(1))]
            .into_iter()
            .collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
