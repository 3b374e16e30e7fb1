//! Descriptor constructors.
//!
//! [`value`] wraps anything as-is; the remaining functions describe a kind of
//! value and let the builder pick it.

use std::rc::Rc;

use zaha_core::{Callable, TypeKind, Value};

use crate::{
    descriptor::{Candidates, Descriptor},
    error::FactoryError,
    schema::Schema,
};

/// Wrap `v`. Plain values become literals; descriptors pass through; a
/// [`Builder`](crate::Builder) becomes a reference built at resolution time.
pub fn value(v: impl Into<Descriptor>) -> Descriptor {
    v.into()
}

/// Resolves to [`DEFAULT_STRING`](zaha_core::DEFAULT_STRING).
pub fn string() -> Descriptor {
    Descriptor::Default(TypeKind::String)
}

/// Resolves to [`DEFAULT_INT`](zaha_core::DEFAULT_INT).
pub fn int() -> Descriptor {
    Descriptor::Default(TypeKind::Int)
}

/// Resolves to [`DEFAULT_NUMBER`](zaha_core::DEFAULT_NUMBER).
pub fn number() -> Descriptor {
    Descriptor::Default(TypeKind::Number)
}

/// Resolves to [`DEFAULT_BOOLEAN`](zaha_core::DEFAULT_BOOLEAN).
pub fn boolean() -> Descriptor {
    Descriptor::Default(TypeKind::Boolean)
}

/// An object built from the nested schema on every resolution.
pub fn object(schema: impl Into<Schema>) -> Descriptor {
    Descriptor::Object(schema.into())
}

pub fn empty_object() -> Descriptor {
    object(Schema::new())
}

/// A one-element list whose element is an empty list.
pub fn array() -> Descriptor {
    array_of(Value::List(Vec::new()))
}

/// A one-element list holding the resolved `element`.
pub fn array_of(element: impl Into<Descriptor>) -> Descriptor {
    Descriptor::ArrayOf(Rc::new(element.into()))
}

pub fn function() -> Descriptor {
    Descriptor::Function(Callable::noop())
}

/// Always resolves to the first of `values`.
pub fn one_of<I, V>(values: I) -> Result<Descriptor, FactoryError>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Candidates::new(values).map(Descriptor::OneOf)
}

/// Calls `producer` on every resolution and resolves what it returns.
pub fn deferred(producer: impl Fn() -> Descriptor + 'static) -> Descriptor {
    Descriptor::Deferred(Rc::new(producer))
}
