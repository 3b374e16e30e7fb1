//! Factories: a declared schema shared as the defaults of every instance.

use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

use zaha_core::Value;

use crate::{builder::Builder, naming::override_method_name, schema::Schema};

/// Produces [`Builder`] instances that start from the same declared schema.
///
/// Cloning a factory shares the declared schema.
#[derive(Clone)]
pub struct Factory {
    schema: Rc<Schema>,
}

impl Factory {
    pub fn new(schema: impl Into<Schema>) -> Self {
        Self {
            schema: Rc::new(schema.into()),
        }
    }

    /// A new instance holding a shallow copy of the declared schema.
    pub fn instance(&self) -> Builder {
        Builder::from_declared(Rc::clone(&self.schema))
    }

    /// Shorthand for `self.instance().build()`.
    pub fn build(&self) -> Value {
        self.instance().build()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Declared field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.schema.names()
    }

    /// Override names instances answer to, e.g. `withUserName` for `userName`.
    pub fn override_methods(&self) -> impl Iterator<Item = String> {
        self.fields().map(override_method_name)
    }
}

impl Debug for Factory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("schema", &self.schema)
            .finish()
    }
}

/// Declare a factory from `schema`.
pub fn create_factory(schema: impl Into<Schema>) -> Factory {
    Factory::new(schema)
}
