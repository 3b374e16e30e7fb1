use zaha::{Builder, Factory, FactoryError, Value, ValueTypeError, is, schema};

fn basic_types() -> Value {
    Factory::new(schema! {
        value: is::value("some value"),
        string: is::string(),
        number: is::number(),
        int: is::int(),
        boolean: is::boolean(),
    })
    .build()
}

#[test]
fn literal_is_the_given_value() {
    assert_eq!(basic_types()["value"], Value::string("some value"));
}

#[test]
fn primitive_placeholders_have_their_types() -> Result<(), ValueTypeError> {
    let obj = basic_types();

    assert!(obj["string"].try_str()?.is_some());
    assert!(obj["number"].try_f64()?.is_some());
    assert!(obj["boolean"].try_bool()?.is_some());

    let int = obj["int"].try_i64()?;
    assert_eq!(int, Some(zaha::DEFAULT_INT));
    Ok(())
}

#[test]
fn schema_accepts_other_builders() -> Result<(), ValueTypeError> {
    let builder_a = Factory::new(schema! { a: is::string() });
    let builder_b = Factory::new(schema! { b: builder_a.instance() });

    let obj = builder_b.build();

    assert!(obj["b"]["a"].try_str()?.is_some());
    Ok(())
}

#[test]
fn nested_objects_are_built() -> Result<(), ValueTypeError> {
    let factory = Factory::new(schema! {
        a: is::object(schema! { b: is::string() }),
    });

    let obj = factory.build();

    assert_eq!(obj["a"]["b"].try_str()?, Some(zaha::DEFAULT_STRING));
    Ok(())
}

#[test]
fn doubly_nested_objects_are_built() -> Result<(), ValueTypeError> {
    let factory = Factory::new(schema! {
        a: is::object(schema! {
            b: is::object(schema! { c: is::number() }),
        }),
    });

    let obj = factory.build();

    assert_eq!(obj["a"]["b"]["c"].try_f64()?, Some(zaha::DEFAULT_NUMBER));
    Ok(())
}

#[test]
fn object_without_schema_is_empty() -> Result<(), ValueTypeError> {
    let obj = Factory::new(schema! { a: is::empty_object() }).build();

    assert!(obj["a"].try_object()?.is_empty());
    Ok(())
}

#[test]
fn array_of_primitives() -> Result<(), ValueTypeError> {
    let obj = Factory::new(schema! { a: is::array_of(is::string()) }).build();

    let items = obj["a"].try_list()?;
    assert_eq!(items.len(), 1);
    assert!(items[0].try_str()?.is_some());
    Ok(())
}

#[test]
fn array_of_objects() -> Result<(), ValueTypeError> {
    let obj = Factory::new(schema! {
        a: is::array_of(is::object(schema! { b: is::string() })),
    })
    .build();

    assert!(obj["a"][0].try_object()?.contains("b"));
    Ok(())
}

#[test]
fn array_of_builders() -> Result<(), ValueTypeError> {
    let builder_a = Factory::new(schema! { a: is::string() });
    let obj = Factory::new(schema! { b: is::array_of(builder_a.instance()) }).build();

    assert_eq!(obj["b"].try_list()?.len(), 1);
    assert!(obj["b"][0]["a"].try_str()?.is_some());
    Ok(())
}

#[test]
fn array_of_arrays() -> Result<(), ValueTypeError> {
    let obj = Factory::new(schema! { a: is::array_of(is::array_of(is::number())) }).build();

    assert_eq!(obj["a"][0].try_list()?.len(), 1);
    assert!(obj["a"][0][0].try_f64()?.is_some());
    Ok(())
}

#[test]
fn function_field_can_be_called() -> Result<(), ValueTypeError> {
    let obj = Factory::new(schema! { f: is::function() }).build();

    obj["f"].try_function()?.call();
    Ok(())
}

#[test]
fn one_of_picks_a_provided_value() -> Result<(), FactoryError> {
    let values = ["value 1", "value 2"];
    let obj = Factory::new(schema! { n: is::one_of(values)? }).build();

    assert!(values.iter().any(|v| obj["n"] == Value::string(v)));
    Ok(())
}

#[test]
fn with_uses_the_exact_value() -> Result<(), FactoryError> {
    let factory = Factory::new(schema! { key: is::string() });

    let obj = factory.instance().with("key", "Exact Key")?.build();

    assert_eq!(obj["key"], Value::string("Exact Key"));
    Ok(())
}

#[test]
fn with_applies_every_override() -> Result<(), FactoryError> {
    let factory = Factory::new(schema! {
        keyA: is::string(),
        keyB: is::number(),
    });

    let obj = factory
        .instance()
        .with("keyA", "Exact Key")?
        .with("keyB", 55)?
        .build();

    assert_eq!(obj["keyA"], Value::string("Exact Key"));
    assert_eq!(obj["keyB"], Value::Int(55));
    Ok(())
}

#[test]
fn nested_builder_can_be_overridden_with_a_built_value() -> Result<(), FactoryError> {
    let builder_a = Factory::new(schema! { a: is::string() });
    let builder_b = Factory::new(schema! { b: builder_a.instance() });

    let obj = builder_b
        .instance()
        .with("b", builder_a.instance().with("a", "a string")?.build())?
        .build();

    assert_eq!(obj["b"]["a"], Value::string("a string"));
    Ok(())
}

struct JoyBuilder(Builder);

impl JoyBuilder {
    fn new(base: &Factory) -> Self {
        Self(base.instance())
    }

    fn with_joy(self) -> Self {
        self.0.schema_mut().insert("key", is::value("Joy!"));
        self
    }

    fn build(&self) -> Value {
        self.0.build()
    }
}

#[test]
fn builders_are_extensible() {
    let base = Factory::new(schema! { key: is::string() });

    let obj = JoyBuilder::new(&base).with_joy().build();

    assert_eq!(obj["key"], Value::string("Joy!"));
    assert_eq!(base.build()["key"], Value::string(zaha::DEFAULT_STRING));
}
