//! Property-based tests for escaping and array layout.

use php_literal::{
    escape, to_string, to_string_with_options, GeneratorOptions, OutputMode, PhpArray, PhpValue,
    ValueGenerator, ValueType,
};
use proptest::prelude::*;

/// Reverses single-quoted PHP string escaping.
fn unescape(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push(chars.next()?),
            '\'' => return None,
            _ => out.push(ch),
        }
    }
    Some(out)
}

proptest! {
    #[test]
    fn prop_escape_is_reversible(s in any::<String>()) {
        let quoted = escape(&s, true);
        prop_assert_eq!(unescape(&quoted), Some(s));
    }

    #[test]
    fn prop_string_literal_matches_escape(s in "[a-zA-Z0-9 '\\\\]{0,24}") {
        prop_assert_eq!(to_string(&s).unwrap(), escape(&s, true));
    }

    #[test]
    fn prop_integers_render_bare(n in any::<i64>()) {
        prop_assert_eq!(to_string(&n).unwrap(), n.to_string());
    }

    #[test]
    fn prop_finite_floats_parse_back(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = to_string(&f).unwrap();
        prop_assert_eq!(text.parse::<f64>().unwrap(), f);
        prop_assert!(text.contains('.'));
    }

    #[test]
    fn prop_list_has_one_line_per_element(v in prop::collection::vec(any::<i32>(), 1..20)) {
        let php = to_string(&v).unwrap();
        let lines: Vec<_> = php.lines().collect();
        prop_assert_eq!(lines.len(), v.len() + 2);
        prop_assert_eq!(lines[0], "array(");
        prop_assert_eq!(lines[lines.len() - 1], ")");
        for (line, n) in lines[1..lines.len() - 1].iter().zip(&v) {
            prop_assert_eq!(*line, format!("    {},", n));
        }
    }

    #[test]
    fn prop_lists_never_print_keys(v in prop::collection::vec(any::<bool>(), 0..20)) {
        let php = to_string_with_options(&v, GeneratorOptions::compact()).unwrap();
        prop_assert!(!php.contains("=>"));
    }

    #[test]
    fn prop_explicit_keys_follow_implicit_index(keys in prop::collection::vec(-50i64..50, 0..12)) {
        let mut array = PhpArray::new();
        for key in &keys {
            array.insert(*key, PhpValue::Null);
        }
        let mut generator = ValueGenerator::with_value(array.clone(), ValueType::Auto);
        generator.set_output_mode(OutputMode::SingleLine);
        let php = generator.generate().unwrap();

        // A key is written only when it differs from the index PHP would assign
        let mut index = 0i64;
        let expected: Vec<String> = array
            .keys()
            .map(|key| {
                let key = key.as_int().unwrap();
                if key == index {
                    index += 1;
                    "null".to_string()
                } else {
                    index = index.max(key + 1);
                    format!("{} => null", key)
                }
            })
            .collect();
        prop_assert_eq!(php, format!("array({})", expected.join(", ")));
    }
}
