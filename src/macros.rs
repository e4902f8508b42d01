/// Builds a [`PhpValue`](crate::PhpValue) with PHP-like array syntax.
///
/// Entries without a key are appended at the next free index; `key => value`
/// entries use an explicit key; `const "EXPR"` marks an expression. Literals,
/// negative ones included, may be written directly; any other expression must
/// be a single token tree, so wrap it in parentheses.
///
/// # Panics
///
/// Panics if an entry without a key follows the key `i64::MAX`, since the
/// next index is then already taken.
///
/// ```rust
/// use php_literal::{php, PhpValue};
///
/// let value = php!([5, "one" => 1, [true, null], const "PHP_EOL", -2]);
/// let array = value.as_array().unwrap();
/// assert_eq!(array.get("one"), Some(&PhpValue::from(1)));
/// assert_eq!(array.get(2), Some(&PhpValue::constant("PHP_EOL")));
/// assert_eq!(array.get(3), Some(&PhpValue::from(-2)));
/// ```
#[macro_export]
macro_rules! php {
    (null) => {
        $crate::PhpValue::Null
    };

    (true) => {
        $crate::PhpValue::Bool(true)
    };

    (false) => {
        $crate::PhpValue::Bool(false)
    };

    (const $expr:expr) => {
        $crate::PhpValue::constant($expr)
    };

    ([]) => {
        $crate::PhpValue::Array($crate::PhpArray::new())
    };

    ([ $($tt:tt)+ ]) => {{
        let mut array = $crate::PhpArray::new();
        $crate::php!(@entries array; $($tt)+);
        $crate::PhpValue::Array(array)
    }};

    // Array entries, munched one at a time
    (@entries $array:ident;) => {};

    (@entries $array:ident; $key:literal => const $expr:literal $(, $($rest:tt)*)?) => {
        $array.insert($key, $crate::PhpValue::constant($expr));
        $crate::php!(@entries $array; $($($rest)*)?);
    };

    (@entries $array:ident; $key:literal => $value:literal $(, $($rest:tt)*)?) => {
        $array.insert($key, $crate::PhpValue::from($value));
        $crate::php!(@entries $array; $($($rest)*)?);
    };

    (@entries $array:ident; $key:literal => $value:tt $(, $($rest:tt)*)?) => {
        $array.insert($key, $crate::php!($value));
        $crate::php!(@entries $array; $($($rest)*)?);
    };

    (@entries $array:ident; const $expr:literal $(, $($rest:tt)*)?) => {
        $crate::php!(@push $array; $crate::PhpValue::constant($expr));
        $crate::php!(@entries $array; $($($rest)*)?);
    };

    (@entries $array:ident; $value:literal $(, $($rest:tt)*)?) => {
        $crate::php!(@push $array; $crate::PhpValue::from($value));
        $crate::php!(@entries $array; $($($rest)*)?);
    };

    (@entries $array:ident; $value:tt $(, $($rest:tt)*)?) => {
        $crate::php!(@push $array; $crate::php!($value));
        $crate::php!(@entries $array; $($($rest)*)?);
    };

    (@push $array:ident; $value:expr) => {
        if let ::std::result::Result::Err(err) = $array.push($value) {
            panic!("{}", err);
        }
    };

    ($other:expr) => {
        $crate::PhpValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{ArrayKey, PhpArray, PhpValue};

    #[test]
    fn test_php_macro_primitives() {
        assert_eq!(php!(null), PhpValue::Null);
        assert_eq!(php!(true), PhpValue::Bool(true));
        assert_eq!(php!(false), PhpValue::Bool(false));
        assert_eq!(php!(42), PhpValue::from(42));
        assert_eq!(php!(3.5), PhpValue::from(3.5));
        assert_eq!(php!("hello"), PhpValue::from("hello"));
        assert_eq!(php!(const "PHP_EOL"), PhpValue::constant("PHP_EOL"));
    }

    #[test]
    fn test_php_macro_lists() {
        assert_eq!(php!([]), PhpValue::Array(PhpArray::new()));

        let value = php!([1, 2, 3,]);
        let array = value.as_array().unwrap();
        assert!(array.is_list());
        assert_eq!(array.get(2), Some(&PhpValue::from(3)));
    }

    #[test]
    fn test_php_macro_mixed_keys() {
        let value = php!([1 => "a", 0 => "b", "c", 7 => "d", 3 => "e"]);
        let keys: Vec<_> = value.as_array().unwrap().keys().cloned().collect();
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
    fn test_php_macro_negative_literals() {
        let value = php!([-5, -2.5, "n" => -1, -3 => -4]);
        let array = value.as_array().unwrap();
        assert_eq!(array.get(0), Some(&PhpValue::from(-5)));
        assert_eq!(array.get(1), Some(&PhpValue::from(-2.5)));
        assert_eq!(array.get("n"), Some(&PhpValue::from(-1)));
        assert_eq!(array.get(-3), Some(&PhpValue::from(-4)));
        assert_eq!(php!(-7), PhpValue::from(-7));
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_php_macro_panics_when_next_index_is_taken() {
        let _ = php!([9223372036854775807i64 => "last", "overflow"]);
    }

    #[test]
    fn test_php_macro_nested_and_constants() {
        let value = php!(["outer" => ["inner" => const "Foo::BAR"], null]);
        let array = value.as_array().unwrap();
        let inner = array.get("outer").and_then(PhpValue::as_array).unwrap();
        assert_eq!(inner.get("inner"), Some(&PhpValue::constant("Foo::BAR")));
        assert_eq!(array.get(0), Some(&PhpValue::Null));
    }
}
