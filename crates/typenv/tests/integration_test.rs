//! Integration tests for loading typed environments through the public API.
//!
//! These tests exercise the crate the way an application would at startup:
//! declare a schema, load it against an environment, and read typed values.

use std::collections::BTreeMap;
use std::sync::Arc;

use typenv::{
    EnvError, EnvLoader, FieldFailure, FromEnv, LoadedEnv, MemorySink, Schema, Severity, e,
    load_env,
};

/// Mirrors a typical web service configuration.
#[derive(Debug)]
struct ServiceEnv {
    port: f64,
    debug: Option<bool>,
    name: String,
}

impl FromEnv for ServiceEnv {
    fn schema() -> Schema {
        Schema::new()
            .with("PORT", e::number().with_default(8080))
            .with("DEBUG", e::boolean().optional())
            .with("NAME", e::string())
    }

    fn from_env(env: &LoadedEnv) -> Result<Self, EnvError> {
        Ok(Self {
            port: env.require_number("PORT")?,
            debug: env.boolean("DEBUG")?,
            name: env.require_string("NAME")?,
        })
    }
}

#[test]
fn test_service_env_with_defaults() -> anyhow::Result<()> {
    let sink = Arc::new(MemorySink::new());
    let service: ServiceEnv = EnvLoader::for_type::<ServiceEnv>()
        .with_shared_sink(sink.clone())
        .load_as(&[("NAME", "svc")])?;

    assert_eq!(service.port, 8080.0);
    assert_eq!(service.debug, None);
    assert_eq!(service.name, "svc");
    assert_eq!(sink.warnings().len(), 2);
    assert!(sink.errors().is_empty());
    Ok(())
}

#[test]
fn test_service_env_rejects_bad_port() {
    let sink = Arc::new(MemorySink::new());
    let result = EnvLoader::for_type::<ServiceEnv>()
        .with_shared_sink(sink.clone())
        .load_as::<ServiceEnv, _>(&[("PORT", "notanumber"), ("NAME", "svc")]);

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Environment variable validation failed");
    assert_eq!(err.failures().len(), 1);
    assert_eq!(err.failures()[0].key(), "PORT");

    let errors: Vec<_> = sink
        .diagnostics()
        .into_iter()
        .filter(|d| d.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("PORT"));
}

#[test]
fn test_loaded_env_serializes_to_json() -> anyhow::Result<()> {
    let schema = ServiceEnv::schema();
    let mut env = BTreeMap::new();
    env.insert("NAME".to_string(), "svc".to_string());
    env.insert("DEBUG".to_string(), "1".to_string());

    let loaded = load_env(&env, &schema, &MemorySink::new())?;
    let json = serde_json::to_value(&loaded)?;

    assert_eq!(
        json,
        serde_json::json!({ "PORT": 8080.0, "DEBUG": true, "NAME": "svc" })
    );
    Ok(())
}

#[test]
fn test_optional_unset_serializes_as_null() -> anyhow::Result<()> {
    let loaded = load_env(&[("NAME", "svc")], &ServiceEnv::schema(), &MemorySink::new())?;
    let json = serde_json::to_string(&loaded)?;

    assert_eq!(json, r#"{"PORT":8080.0,"DEBUG":null,"NAME":"svc"}"#);
    Ok(())
}

#[test]
fn test_runtime_declared_schema() {
    let mut schema = Schema::new();
    schema.declare("WORKERS", "number", true);
    schema.declare("MODE", "enum", true);

    let err = load_env(
        &[("WORKERS", "8"), ("MODE", "fast")],
        &schema,
        &MemorySink::new(),
    )
    .unwrap_err();

    assert_eq!(
        err.failures(),
        &[FieldFailure::UnknownType {
            key: "MODE".to_string()
        }]
    );
}

#[test]
fn test_option_valued_map_treats_none_as_unset() -> anyhow::Result<()> {
    let mut env: BTreeMap<String, Option<String>> = BTreeMap::new();
    env.insert("NAME".to_string(), Some("svc".to_string()));
    env.insert("DEBUG".to_string(), None);

    let loaded = load_env(&env, &ServiceEnv::schema(), &MemorySink::new())?;

    assert_eq!(loaded.boolean("DEBUG")?, None);
    Ok(())
}
