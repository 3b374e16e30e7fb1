use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

use zaha_core::{Fields, Value};

use crate::descriptor::Descriptor;

/// Ordered mapping from field name to [`Descriptor`].
///
/// Bindings hold shared descriptors, so cloning a schema duplicates the
/// bindings while every clone keeps pointing at the same descriptors. This is
/// the snapshot a builder instance takes of its factory's defaults.
#[derive(Clone, Default)]
pub struct Schema {
    entries: Vec<(String, Rc<Descriptor>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining form of [`Schema::insert`].
    pub fn field(mut self, name: impl Into<String>, descriptor: impl Into<Descriptor>) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Binds `name`, replacing an existing binding in place so field order is
    /// preserved. Returns the previous descriptor.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: impl Into<Descriptor>,
    ) -> Option<Rc<Descriptor>> {
        self.bind(name.into(), Rc::new(descriptor.into()))
    }

    pub(crate) fn bind(
        &mut self,
        name: String,
        descriptor: Rc<Descriptor>,
    ) -> Option<Rc<Descriptor>> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, descriptor)),
            None => {
                self.entries.push((name, descriptor));
                None
            }
        }
    }

    pub(crate) fn binding(&self, name: &str) -> Option<&Rc<Descriptor>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, descriptor)| descriptor)
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.binding(name).map(Rc::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.binding(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.entries
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor.as_ref()))
    }

    /// Resolves every binding, in order, into a fresh object.
    pub fn resolve(&self) -> Value {
        let mut fields = Fields::with_capacity(self.entries.len());
        for (name, descriptor) in &self.entries {
            fields.insert(name.as_str(), descriptor.resolve());
        }
        Value::Object(fields)
    }
}

impl<K: Into<String>, D: Into<Descriptor>> FromIterator<(K, D)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, D)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, descriptor) in iter {
            schema.insert(name, descriptor);
        }
        schema
    }
}

impl<K: Into<String>, D: Into<Descriptor>, const N: usize> From<[(K, D); N]> for Schema {
    fn from(entries: [(K, D); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Debug for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}
