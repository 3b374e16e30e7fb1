use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use zaha_core::{Callable, Fields, Value, ValueTypeError};

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn typed_accessors_return_none_for_null() -> Result<(), ValueTypeError> {
    assert_eq!(Value::Null.try_bool()?, None);
    assert_eq!(Value::Null.try_i64()?, None);
    assert_eq!(Value::Null.try_f64()?, None);
    assert_eq!(Value::Null.try_str()?, None);
    Ok(())
}

#[test]
fn typed_accessors_report_mismatch() {
    let err = Value::Int(5).try_str().unwrap_err();
    assert_eq!(err, ValueTypeError::new("String", "Int"));
    assert_eq!(err.to_string(), "expected String, found Int");

    let err = Value::string("x").try_list().unwrap_err();
    assert_eq!(err.actual, "String");
}

#[test]
fn from_conversions_pick_expected_variants() {
    assert_eq!(Value::from(7_i32), Value::Int(7));
    assert_eq!(Value::from(7_u32), Value::Int(7));
    assert_eq!(Value::from(1.5_f64), Value::Number(1.5));
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from("a"), Value::string("a"));
    assert_eq!(Value::from(String::from("a")), Value::string("a"));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::string("x"));
    assert_eq!(
        Value::from(vec![Value::Int(1)]),
        Value::List(vec![Value::Int(1)])
    );
}

#[test]
fn fields_keep_insertion_order_and_replace_in_place() {
    let mut fields = Fields::new();
    assert_eq!(fields.insert("b", Value::Int(1)), None);
    assert_eq!(fields.insert("a", Value::Int(2)), None);
    assert_eq!(fields.insert("b", Value::Int(3)), Some(Value::Int(1)));

    assert_eq!(fields.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(fields.get("b"), Some(&Value::Int(3)));
    assert_eq!(fields.len(), 2);
    assert!(fields.contains("a"));
    assert!(!fields.contains("c"));
}

#[test]
fn indexing_missing_paths_yields_null() {
    let value = Value::object([(
        "a",
        Value::object([("b", Value::list([Value::Int(1), Value::Int(2)]))]),
    )]);

    assert_eq!(value["a"]["b"][1], Value::Int(2));
    assert!(value["a"]["b"][9].is_null());
    assert!(value["missing"]["deeper"].is_null());
    assert!(Value::Int(1)["a"].is_null());
    assert!(Value::Int(1)[0].is_null());
}

#[test]
fn callable_equality_is_identity() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let f = Callable::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let alias = f.clone();

    alias.call();
    f.call();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(f, alias);
    assert_ne!(Callable::noop(), Callable::noop());
}

#[test]
fn function_value_is_callable_through_try_function() -> Result<(), ValueTypeError> {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let value = Value::function(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let f = value.try_function()?;
    f.call();
    f.call();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(value.clone(), value);
    assert!(Value::Int(1).try_function().is_err());
    Ok(())
}

#[test]
fn display_renders_nested_values() {
    let value = Value::object([
        ("name", Value::string("Zaha")),
        ("tags", Value::list([Value::Int(1), Value::Number(2.5)])),
        ("empty", Value::object(Vec::<(String, Value)>::new())),
        ("f", Value::function(|| {})),
        ("none", Value::Null),
    ]);

    assert_eq!(
        value.to_string(),
        r#"{ name: "Zaha", tags: [1, 2.5], empty: {}, f: <function>, none: null }"#
    );
}
