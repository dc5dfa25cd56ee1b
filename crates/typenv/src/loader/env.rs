//! Environment sources the loader reads from.
//!
//! Responsibilities:
//! - Define the read-only `EnvSource` lookup used by validation.
//! - Read the live process environment (`ProcessEnv`).
//! - Adapt in-memory maps and pair slices for tests and embedding.
//!
//! Does NOT handle:
//! - `.env` file parsing or environment mutation.
//! - Deciding whether a value counts as set (empty strings are filtered in `validate.rs`).
//!
//! Invariants:
//! - Values are returned exactly as stored; no trimming happens here.
//! - Non-Unicode process values are decoded lossily (invalid bytes become U+FFFD).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only mapping from variable name to raw value.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        let value = std::env::var_os(key)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::debug!(
                    target: crate::sink::LOG_TARGET,
                    key,
                    "non-Unicode value replaced lossily"
                );
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, Option<String>, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned().flatten()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, Option<String>> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned().flatten()
    }
}

/// Later pairs win when a key repeats, as with successive `export`s.
impl EnvSource for [(&str, &str)] {
    fn get(&self, key: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn get(&self, key: &str) -> Option<String> {
        EnvSource::get(self.as_slice(), key)
    }
}
