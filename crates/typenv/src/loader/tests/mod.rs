//! Tests for the environment loader.
//!
//! Responsibilities:
//! - Test field classification for every outcome kind.
//! - Test number and boolean coercion through the full pass.
//! - Test diagnostic ordering and the aggregate failure.
//! - Test the `EnvLoader` builder, including the live process environment.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `temp_env`.

use std::collections::HashMap;

pub mod diagnostics_tests;

/// Build an in-memory environment from string pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
