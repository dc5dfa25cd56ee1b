//! The typed result of a successful load.
//!
//! Responsibilities:
//! - Hold every schema key with its resolved value, in schema order.
//! - Provide typed access through `Field<K>` handles and checked access by name.
//! - Define `FromEnv` for user structs built from a loaded environment.
//!
//! Invariants:
//! - Every schema key is present; a key maps to `None` only when the field is
//!   optional, unset, and has no default.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::descriptor::{Bool, EnvKind, Num, Str, TypedValue};
use crate::loader::{EnvError, FieldOutcome};
use crate::schema::{Field, Schema};

/// Resolved values for every field of a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedEnv {
    values: Vec<(String, Option<TypedValue>)>,
}

impl LoadedEnv {
    pub(crate) fn from_outcomes(outcomes: Vec<FieldOutcome>) -> Self {
        Self {
            values: outcomes.into_iter().map(|o| (o.key, o.value)).collect(),
        }
    }

    /// Typed value for `field`; `None` if the field resolved to no value.
    pub fn get<K: EnvKind>(&self, field: &Field<K>) -> Option<K::Value> {
        self.value(field.key()).and_then(K::from_typed)
    }

    /// Raw typed value for `key`, if the key is loaded and has a value.
    pub fn value(&self, key: &str) -> Option<&TypedValue> {
        self.values
            .iter()
            .find(|(name, _)| name == key)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.iter().any(|(name, _)| name == key)
    }

    fn checked<K: EnvKind>(&self, key: &str) -> Result<Option<K::Value>, EnvError> {
        let (_, value) = self
            .values
            .iter()
            .find(|(name, _)| name == key)
            .ok_or_else(|| EnvError::UnknownField(key.to_string()))?;

        match value {
            None => Ok(None),
            Some(value) => K::from_typed(value).map(Some).ok_or_else(|| {
                EnvError::TypeMismatch {
                    key: key.to_string(),
                    expected: K::VALUE_TYPE,
                    found: value.value_type(),
                }
            }),
        }
    }

    /// String value for `key`, checked against the stored type.
    pub fn string(&self, key: &str) -> Result<Option<String>, EnvError> {
        self.checked::<Str>(key)
    }

    pub fn number(&self, key: &str) -> Result<Option<f64>, EnvError> {
        self.checked::<Num>(key)
    }

    pub fn boolean(&self, key: &str) -> Result<Option<bool>, EnvError> {
        self.checked::<Bool>(key)
    }

    /// Like [`LoadedEnv::string`], but an absent value is an error.
    pub fn require_string(&self, key: &str) -> Result<String, EnvError> {
        self.string(key)?
            .ok_or_else(|| EnvError::MissingValue(key.to_string()))
    }

    pub fn require_number(&self, key: &str) -> Result<f64, EnvError> {
        self.number(key)?
            .ok_or_else(|| EnvError::MissingValue(key.to_string()))
    }

    pub fn require_boolean(&self, key: &str) -> Result<bool, EnvError> {
        self.boolean(key)?
            .ok_or_else(|| EnvError::MissingValue(key.to_string()))
    }

    /// Entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TypedValue>)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for LoadedEnv {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A configuration type that can be loaded from the environment.
///
/// ```
/// use typenv::{EnvError, FromEnv, LoadedEnv, Schema, e};
///
/// struct ServerEnv {
///     port: f64,
///     debug: Option<bool>,
/// }
///
/// impl FromEnv for ServerEnv {
///     fn schema() -> Schema {
///         Schema::new()
///             .with("PORT", e::number().with_default(8080))
///             .with("DEBUG", e::boolean().optional())
///     }
///
///     fn from_env(env: &LoadedEnv) -> Result<Self, EnvError> {
///         Ok(Self {
///             port: env.require_number("PORT")?,
///             debug: env.boolean("DEBUG")?,
///         })
///     }
/// }
/// ```
pub trait FromEnv: Sized {
    fn schema() -> Schema;

    fn from_env(env: &LoadedEnv) -> Result<Self, EnvError>;
}
