//! Ordered schemas and typed field handles.
//!
//! Responsibilities:
//! - Map variable names to type-erased `FieldSpec`s in declaration order.
//! - Hand out `Field<K>` handles so loaded values can be read back with their Rust type.
//! - Accept runtime declarations by type name for schemas assembled from strings.
//!
//! Invariants:
//! - Iteration order is the order in which names were first declared.
//! - Re-declaring a name replaces its spec in place; a schema never holds duplicates.

use std::fmt;
use std::marker::PhantomData;

use crate::descriptor::{ConfigDescriptor, DeclaredType, EnvKind, FieldSpec, ValueType};

/// Typed handle to a schema field, used to read its value from a [`LoadedEnv`](crate::LoadedEnv).
pub struct Field<K: EnvKind> {
    key: String,
    kind: PhantomData<K>,
}

impl<K: EnvKind> Field<K> {
    pub(crate) fn new(key: String) -> Self {
        Self {
            key,
            kind: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<K: EnvKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: EnvKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("value_type", &K::VALUE_TYPE)
            .finish()
    }
}

/// Mapping from variable name to descriptor, defining the expected configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field and return a typed handle to it.
    pub fn add<K: EnvKind>(
        &mut self,
        key: impl Into<String>,
        descriptor: ConfigDescriptor<K>,
    ) -> Field<K> {
        let key = key.into();
        self.insert(key.clone(), descriptor.config());
        Field::new(key)
    }

    /// Builder-style variant of [`Schema::add`] for when no handle is needed.
    pub fn with<K: EnvKind>(
        mut self,
        key: impl Into<String>,
        descriptor: ConfigDescriptor<K>,
    ) -> Self {
        self.insert(key.into(), descriptor.config());
        self
    }

    /// Declare a field by type name (`"string"`, `"number"` or `"boolean"`).
    ///
    /// Unrecognized names are accepted here and reported by the loader as
    /// an unknown-type error for that field.
    pub fn declare(&mut self, key: impl Into<String>, type_name: &str, required: bool) {
        let declared = match type_name.parse::<ValueType>() {
            Ok(ty) => DeclaredType::Known(ty),
            Err(_) => DeclaredType::Unknown(type_name.to_string()),
        };
        self.insert(
            key.into(),
            FieldSpec {
                declared,
                required,
                default: None,
            },
        );
    }

    fn insert(&mut self, key: String, spec: FieldSpec) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = spec,
            None => self.fields.push((key, spec)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, spec)| spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
