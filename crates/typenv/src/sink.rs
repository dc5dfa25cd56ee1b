//! Diagnostic sinks receiving the loader's pre-formatted messages.
//!
//! Responsibilities:
//! - Define the `DiagnosticSink` interface injected into the loader.
//! - Provide `TracingSink`, which forwards to `tracing` events.
//! - Provide `MemorySink`, which records diagnostics for later inspection.
//!
//! Invariants:
//! - Sink methods return nothing and must not panic.
//! - `MemorySink` preserves emission order across severities.

use std::sync::{Arc, Mutex, MutexGuard};

/// Target used for events emitted by [`TracingSink`].
pub const LOG_TARGET: &str = "typenv";

/// Receives diagnostics emitted while loading an environment.
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

/// Forwards diagnostics to `tracing` at the matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: LOG_TARGET, "{}", message);
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Records every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another thread panicked mid-push; the Vec is still valid.
    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, severity: Severity, message: &str) {
        self.lock().push(Diagnostic {
            severity,
            message: message.to_string(),
        });
    }

    /// All diagnostics recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Severity::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }
}
