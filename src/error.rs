//! Unified SDK error types.

use std::fmt;

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum MiniAppError {
    #[error("SDK not initialized")]
    NotInitialized,

    #[error("Validation failed for {operation}: {}", join_violations(.violations))]
    Validation {
        operation: &'static str,
        violations: Vec<FieldViolation>,
    },

    #[error("{0} provider not available")]
    ProviderUnavailable(Chain),

    #[error(transparent)]
    External(#[from] HostError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl MiniAppError {
    /// Shorthand for an external-call rejection carrying `message`.
    pub fn external(message: impl Into<String>) -> Self {
        Self::External(HostError::new(message))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// A rejection raised by the external SDK. The message is passed through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single field that failed its schema predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.field, self.reason)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Wallet chain family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Solana => "Solana",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
