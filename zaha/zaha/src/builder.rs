//! Builder instances: a private schema snapshot, overrides and `build`.

use std::{
    cell::{Ref, RefCell, RefMut},
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

use tracing::{debug, trace};
use zaha_core::Value;

use crate::{
    descriptor::Descriptor, error::FactoryError, naming::override_method_name, schema::Schema,
};

struct Instance {
    /// Defaults the instance was created from. Overrides are only accepted
    /// for fields declared here.
    declared: Rc<Schema>,
    schema: Schema,
}

/// Handle to a live builder instance.
///
/// An instance owns a shallow copy of its factory's schema: overriding a field
/// rebinds only this instance's entry and never touches the factory defaults or
/// any sibling instance. Cloning the handle aliases the same instance, which is
/// what lets a builder embedded in another schema observe later overrides.
#[derive(Clone)]
pub struct Builder {
    inner: Rc<RefCell<Instance>>,
}

impl Builder {
    /// A standalone instance whose declared schema is `schema` itself.
    pub fn new(schema: impl Into<Schema>) -> Self {
        Self::from_declared(Rc::new(schema.into()))
    }

    pub(crate) fn from_declared(declared: Rc<Schema>) -> Self {
        let schema = Schema::clone(&declared);
        trace!(fields = schema.len(), "new builder instance");
        Self {
            inner: Rc::new(RefCell::new(Instance { declared, schema })),
        }
    }

    /// Override `field` and return the builder for chaining.
    ///
    /// Values that are not already descriptors are wrapped as literals; a
    /// [`Builder`] becomes a reference that is built when this one is.
    pub fn with(self, field: &str, value: impl Into<Descriptor>) -> Result<Self, FactoryError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// In-place form of [`Builder::with`].
    pub fn set(&self, field: &str, value: impl Into<Descriptor>) -> Result<(), FactoryError> {
        let descriptor = value.into();
        let mut instance = self.inner.borrow_mut();
        if !instance.declared.contains(field) {
            return Err(FactoryError::UnknownField {
                field: field.to_string(),
                method: override_method_name(field),
            });
        }
        trace!(field, kind = descriptor.type_name(), "override");
        instance.schema.insert(field, descriptor);
        Ok(())
    }

    /// The instance's current schema.
    pub fn schema(&self) -> Ref<'_, Schema> {
        Ref::map(self.inner.borrow(), |instance| &instance.schema)
    }

    /// Direct access to the instance's schema for extensions. Entries may be
    /// rebound or added; `build` always reads the current state.
    ///
    /// The returned guard must be dropped before calling `build`.
    pub fn schema_mut(&self) -> RefMut<'_, Schema> {
        RefMut::map(self.inner.borrow_mut(), |instance| &mut instance.schema)
    }

    /// Apply an ad hoc edit to the instance's schema and return the builder.
    pub fn map_schema(self, edit: impl FnOnce(&mut Schema)) -> Self {
        {
            let mut schema = self.schema_mut();
            edit(&mut *schema);
        }
        self
    }

    pub fn declared_fields(&self) -> Vec<String> {
        self.inner
            .borrow()
            .declared
            .names()
            .map(str::to_string)
            .collect()
    }

    /// Whether `field` no longer uses the factory's default binding.
    pub fn is_overridden(&self, field: &str) -> bool {
        let instance = self.inner.borrow();
        match (
            instance.declared.binding(field),
            instance.schema.binding(field),
        ) {
            (Some(default), Some(current)) => !Rc::ptr_eq(default, current),
            (None, Some(_)) => true,
            _ => false,
        }
    }

    /// Whether both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Builder) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Resolve every field of the current schema into a fresh object.
    pub fn build(&self) -> Value {
        // Resolve from a snapshot so nested resolution may borrow this instance.
        let snapshot = self.schema().clone();
        debug!(fields = snapshot.len(), "build");
        snapshot.resolve()
    }
}

impl Debug for Builder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(instance) => f
                .debug_struct("Builder")
                .field("schema", &instance.schema)
                .finish(),
            Err(_) => f.debug_struct("Builder").finish_non_exhaustive(),
        }
    }
}
