use php_literal::{
    to_string, to_string_with_options, to_value, ArrayKey, ArrayStyle, Constant, Error,
    GeneratorOptions, Number, PhpValue,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Connection {
    driver: String,
    host: String,
    port: u16,
    options: BTreeMap<u32, bool>,
}

#[derive(Serialize)]
struct Config {
    debug: bool,
    base_path: Constant,
    connections: Vec<Connection>,
    timeout: Option<f64>,
}

#[derive(Serialize)]
enum Cache {
    None,
    File(String),
    Redis { host: String, db: u8 },
}

fn sample_config() -> Config {
    let mut options = BTreeMap::new();
    options.insert(12, true);
    Config {
        debug: false,
        base_path: Constant::new("__DIR__ . '/..'"),
        connections: vec![Connection {
            driver: "pgsql".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            options,
        }],
        timeout: Some(2.0),
    }
}

#[test]
fn test_nested_config() {
    let php = to_string(&sample_config()).unwrap();

    let expected = "\
array(
    'debug' => false,
    'base_path' => __DIR__ . '/..',
    'connections' => array(
        array(
            'driver' => 'pgsql',
            'host' => 'localhost',
            'port' => 5432,
            'options' => array(
                12 => true,
            ),
        ),
    ),
    'timeout' => 2.0,
)";
    assert_eq!(php, expected);
}

#[test]
fn test_nested_config_short_tabs() {
    let options = GeneratorOptions::new()
        .with_indentation("\t")
        .with_array_style(ArrayStyle::Short);
    let php = to_string_with_options(&sample_config().connections, options).unwrap();

    let expected = "[\n\t[\n\t\t'driver' => 'pgsql',\n\t\t'host' => 'localhost',\n\t\t'port' => 5432,\n\t\t'options' => [\n\t\t\t12 => true,\n\t\t],\n\t],\n]";
    assert_eq!(php, expected);
}

#[test]
fn test_enum_representations() {
    let compact = GeneratorOptions::compact();
    assert_eq!(
        to_string_with_options(&Cache::None, compact.clone()).unwrap(),
        "'None'"
    );
    assert_eq!(
        to_string_with_options(&Cache::File("/tmp".to_string()), compact.clone()).unwrap(),
        "array('File' => '/tmp')"
    );
    assert_eq!(
        to_string_with_options(
            &Cache::Redis {
                host: "127.0.0.1".to_string(),
                db: 2
            },
            compact
        )
        .unwrap(),
        "array('Redis' => array('host' => '127.0.0.1', 'db' => 2))"
    );
}

#[test]
fn test_numeric_string_keys_become_integers() {
    let mut map = BTreeMap::new();
    map.insert("0", "zero");
    map.insert("1", "one");
    map.insert("10", "ten");
    map.insert("x", "ex");

    let value = to_value(&map).unwrap();
    let keys: Vec<_> = value.as_array().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            ArrayKey::Int(0),
            ArrayKey::Int(1),
            ArrayKey::Int(10),
            ArrayKey::from("x")
        ]
    );

    let php = to_string_with_options(&map, GeneratorOptions::compact()).unwrap();
    assert_eq!(php, "array('zero', 'one', 10 => 'ten', 'x' => 'ex')");
}

#[test]
fn test_big_integers() {
    assert_eq!(to_string(&u64::MAX).unwrap(), "18446744073709551615");
    assert_eq!(
        to_value(&(i64::MAX as u64)).unwrap(),
        PhpValue::Number(Number::Integer(i64::MAX))
    );
}

#[test]
fn test_special_floats() {
    let values = vec![f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.1];
    let php = to_string_with_options(&values, GeneratorOptions::compact()).unwrap();
    assert_eq!(php, "array(INF, -INF, NAN, 0.1)");
}

#[test]
fn test_invalid_key() {
    let mut map = BTreeMap::new();
    map.insert((1, 2), "pair");
    let err = to_string(&map).unwrap_err();
    assert!(matches!(err, Error::InvalidKey(_)));
}

#[test]
fn test_value_from_json() {
    let value: PhpValue =
        serde_json::from_str(r#"{"name": "app", "paths": ["src", "tests"], "3": 1.5}"#).unwrap();
    let php = to_string_with_options(&value, GeneratorOptions::compact()).unwrap();
    assert_eq!(
        php,
        "array('name' => 'app', 'paths' => array('src', 'tests'), 3 => 1.5)"
    );
}

#[test]
fn test_php_value_to_json() {
    let value = to_value(&sample_config()).unwrap();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["connections"][0]["port"], 5432);
    assert_eq!(json["base_path"], "__DIR__ . '/..'");
    assert_eq!(json["connections"][0]["options"]["12"], true);
}
