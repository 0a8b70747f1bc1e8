//! Adapter configuration — warning side channel and quick-start options.

use std::sync::{Arc, Mutex};

use crate::actions::ReadyOptions;
use crate::error::FieldViolation;

/// Receives lenient-validation warnings.
///
/// Called exactly once per operation whose input failed a lenient schema.
pub trait WarningSink {
    fn warn(&self, operation: &'static str, violations: &[FieldViolation]);
}

/// Default sink: logs through `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, operation: &'static str, violations: &[FieldViolation]) {
        let fields = violations
            .iter()
            .map(|v| v.field.as_str())
            .collect::<Vec<_>>()
            .join(",");
        tracing::warn!(
            operation,
            fields = %fields,
            "Input did not match schema, forwarding unchanged"
        );
    }
}

/// A recorded lenient-validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub operation: &'static str,
    pub violations: Vec<FieldViolation>,
}

/// Sink that keeps every warning in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl MemorySink {
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }
}

impl WarningSink for MemorySink {
    fn warn(&self, operation: &'static str, violations: &[FieldViolation]) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(Warning {
                operation,
                violations: violations.to_vec(),
            });
        }
    }
}

/// Settings shared by every sub-client of a `MiniApp`.
#[derive(Clone)]
pub struct MiniAppConfig {
    pub warning_sink: Arc<dyn WarningSink>,
    /// Options passed to `ready` by `MiniApp::quick_start`.
    pub ready_options: ReadyOptions,
}

impl Default for MiniAppConfig {
    fn default() -> Self {
        Self {
            warning_sink: Arc::new(TracingSink),
            ready_options: ReadyOptions::default(),
        }
    }
}

impl std::fmt::Debug for MiniAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniAppConfig")
            .field("ready_options", &self.ready_options)
            .finish_non_exhaustive()
    }
}
