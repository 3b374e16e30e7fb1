//! Lazily-resolved field descriptors.

use std::{
    fmt::{self, Debug, Formatter},
    iter,
    rc::Rc,
    sync::Arc,
};

use zaha_core::{Callable, Fields, TypeKind, Value};

use crate::{builder::Builder, error::FactoryError, schema::Schema};

/// How a schema field produces its value.
///
/// Resolution never mutates the descriptor. Every variant except
/// [`Descriptor::Builder`] and [`Descriptor::Deferred`] resolves to
/// structurally equal values each time; those two read live state at the
/// moment of resolution.
#[derive(Clone)]
pub enum Descriptor {
    /// Exactly this value.
    Literal(Value),
    /// The canonical placeholder for a primitive kind.
    Default(TypeKind),
    /// An object built by a fresh builder over the nested schema.
    Object(Schema),
    /// A one-element list holding the resolved element.
    ArrayOf(Rc<Descriptor>),
    /// A function that does nothing. The callable is fixed at construction.
    Function(Callable),
    /// The first candidate.
    OneOf(Candidates),
    /// Whatever the referenced builder builds when resolved.
    Builder(Builder),
    /// A producer invoked on every resolution; its descriptor is then resolved.
    Deferred(Rc<dyn Fn() -> Descriptor>),
}

impl Descriptor {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn resolve(&self) -> Value {
        match self {
            Descriptor::Literal(value) => value.clone(),
            Descriptor::Default(kind) => kind.default_value(),
            Descriptor::Object(schema) => Builder::new(schema.clone()).build(),
            Descriptor::ArrayOf(element) => Value::List(vec![element.resolve()]),
            Descriptor::Function(callable) => Value::Function(callable.clone()),
            Descriptor::OneOf(candidates) => candidates.first().clone(),
            Descriptor::Builder(builder) => builder.build(),
            Descriptor::Deferred(producer) => (**producer)().resolve(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Descriptor::Literal(_) => "literal",
            Descriptor::Default(kind) => kind.type_name(),
            Descriptor::Object(_) => "object",
            Descriptor::ArrayOf(_) => "array",
            Descriptor::Function(_) => "function",
            Descriptor::OneOf(_) => "one_of",
            Descriptor::Builder(_) => "builder",
            Descriptor::Deferred(_) => "deferred",
        }
    }

    /// Whether the descriptor nests other descriptors.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Descriptor::Object(_) | Descriptor::ArrayOf(_) | Descriptor::Builder(_)
        )
    }
}

impl Debug for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Descriptor::Default(kind) => f.debug_tuple("Default").field(kind).finish(),
            Descriptor::Object(schema) => f.debug_tuple("Object").field(schema).finish(),
            Descriptor::ArrayOf(element) => f.debug_tuple("ArrayOf").field(element).finish(),
            Descriptor::Function(_) => f.write_str("Function"),
            Descriptor::OneOf(candidates) => f.debug_tuple("OneOf").field(candidates).finish(),
            Descriptor::Builder(builder) => f.debug_tuple("Builder").field(builder).finish(),
            Descriptor::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

/// Non-empty, ordered candidate list for [`Descriptor::OneOf`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    first: Value,
    rest: Vec<Value>,
}

impl Candidates {
    pub fn new<I, V>(values: I) -> Result<Self, FactoryError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut values = values.into_iter().map(Into::into);
        let first = values.next().ok_or(FactoryError::EmptyCandidates)?;
        Ok(Self {
            first,
            rest: values.collect(),
        })
    }

    pub fn first(&self) -> &Value {
        &self.first
    }

    pub fn count(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

impl From<Value> for Descriptor {
    fn from(value: Value) -> Self {
        Descriptor::Literal(value)
    }
}

impl From<Builder> for Descriptor {
    fn from(builder: Builder) -> Self {
        Descriptor::Builder(builder)
    }
}

impl From<&Builder> for Descriptor {
    fn from(builder: &Builder) -> Self {
        Descriptor::Builder(builder.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Descriptor {
    fn from(value: Option<T>) -> Self {
        Descriptor::Literal(value.into())
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Descriptor {
                fn from(value: $ty) -> Self {
                    Descriptor::Literal(Value::from(value))
                }
            }
        )*
    };
}

impl_from_literal!(
    bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, Arc<str>, Vec<Value>, Fields,
    Callable
);

impl From<&str> for Descriptor {
    fn from(value: &str) -> Self {
        Descriptor::Literal(Value::from(value))
    }
}
