//! Builder-style entry point for loading an environment.
//!
//! Responsibilities:
//! - Hold a schema together with the sink diagnostics are sent to.
//! - Load from the process environment or any other `EnvSource`.
//! - Convert loaded values into a user type implementing `FromEnv`.
//!
//! Does NOT handle:
//! - Field classification or coercion (delegated to validate.rs).
//!
//! Invariants / Assumptions:
//! - Diagnostics go to `TracingSink` unless another sink is configured.
//! - Loading never mutates the environment it reads.

use std::sync::Arc;

use super::env::{EnvSource, ProcessEnv};
use super::error::EnvError;
use super::validate::load_env;
use crate::loaded::{FromEnv, LoadedEnv};
use crate::schema::Schema;
use crate::sink::{DiagnosticSink, TracingSink};

/// Loads a [`Schema`] from an environment source, reporting to a diagnostic sink.
pub struct EnvLoader {
    schema: Schema,
    sink: Arc<dyn DiagnosticSink>,
}

impl EnvLoader {
    /// Create a loader for `schema` that reports through `tracing`.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            sink: Arc::new(TracingSink),
        }
    }

    /// Loader for the schema declared by `T`.
    pub fn for_type<T: FromEnv>() -> Self {
        Self::new(T::schema())
    }

    /// Send diagnostics to `sink` instead of `tracing`.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Send diagnostics to a shared sink, e.g. a `MemorySink` inspected afterwards.
    pub fn with_shared_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Load from the current process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ValidationFailed`] if any field fails validation.
    pub fn load(&self) -> Result<LoadedEnv, EnvError> {
        self.load_from(&ProcessEnv)
    }

    /// Load from an arbitrary environment source.
    pub fn load_from<E: EnvSource + ?Sized>(&self, env: &E) -> Result<LoadedEnv, EnvError> {
        load_env(env, &self.schema, self.sink.as_ref())
    }

    /// Load from `env` and convert the result into `T`.
    pub fn load_as<T: FromEnv, E: EnvSource + ?Sized>(&self, env: &E) -> Result<T, EnvError> {
        let loaded = self.load_from(env)?;
        T::from_env(&loaded)
    }
}

impl std::fmt::Debug for EnvLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvLoader")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

/// Load `schema` from the process environment, reporting through `tracing`.
pub fn load_process_env(schema: Schema) -> Result<LoadedEnv, EnvError> {
    EnvLoader::new(schema).load()
}
