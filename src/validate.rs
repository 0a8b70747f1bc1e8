//! Input schemas — `{field: predicate}` rules checked before anything is forwarded.
//!
//! A [`Schema`] is evaluated over the keyed record an option struct serializes
//! to (snake_case keys, absent optionals already dropped). Strict schemas abort
//! the operation; lenient schemas only report through the [`WarningSink`] and
//! let the untouched record through.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::config::WarningSink;
use crate::error::{FieldViolation, MiniAppError};

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(r"^https?://").expect("static pattern");
}

/// A format check applied to a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    NonEmptyString,
    /// `http` or `https` scheme followed by anything.
    Url,
    Integer,
    /// Any object. Nested contents are not inspected.
    Mapping,
    /// A string or an array of byte values.
    StringOrBytes,
    Sequence(Box<Predicate>),
}

impl Predicate {
    pub fn test(&self, value: &Value) -> bool {
        match self {
            Self::NonEmptyString => value.as_str().is_some_and(|s| !s.is_empty()),
            Self::Url => value.as_str().is_some_and(is_url),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Mapping => value.is_object(),
            Self::StringOrBytes => match value {
                Value::String(_) => true,
                Value::Array(items) => items
                    .iter()
                    .all(|b| b.as_u64().is_some_and(|n| n <= u8::MAX as u64)),
                _ => false,
            },
            Self::Sequence(inner) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|v| inner.test(v))),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::NonEmptyString => "must be a non-empty string".into(),
            Self::Url => "must be an http(s) URL".into(),
            Self::Integer => "must be an integer".into(),
            Self::Mapping => "must be a mapping".into(),
            Self::StringOrBytes => "must be a string or a byte sequence".into(),
            Self::Sequence(inner) => format!("must be a sequence; each element {}", inner.describe()),
        }
    }
}

/// Whether `s` starts with an `http://` or `https://` scheme.
pub fn is_url(s: &str) -> bool {
    URL_PATTERN.is_match(s)
}

/// Enforcement mode for a schema failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Abort before the external call.
    Strict,
    /// Warn once, then forward the original record.
    Lenient,
}

/// Required and optional field rules for one operation.
#[derive(Debug, Clone)]
pub struct Schema {
    pub operation: &'static str,
    pub mode: Mode,
    required: Vec<(&'static str, Predicate)>,
    optional: Vec<(&'static str, Predicate)>,
}

impl Schema {
    pub fn strict(operation: &'static str) -> Self {
        Self::new(operation, Mode::Strict)
    }

    pub fn lenient(operation: &'static str) -> Self {
        Self::new(operation, Mode::Lenient)
    }

    fn new(operation: &'static str, mode: Mode) -> Self {
        Self {
            operation,
            mode,
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    pub fn required(mut self, field: &'static str, predicate: Predicate) -> Self {
        self.required.push((field, predicate));
        self
    }

    pub fn optional(mut self, field: &'static str, predicate: Predicate) -> Self {
        self.optional.push((field, predicate));
        self
    }

    /// Every violation in `record`. Empty means the record conforms.
    ///
    /// `null` counts as absent.
    pub fn check(&self, record: &Map<String, Value>) -> Vec<FieldViolation> {
        let present = |field: &str| record.get(field).filter(|v| !v.is_null());
        let mut violations = Vec::new();

        for (field, predicate) in &self.required {
            match present(field) {
                None => violations.push(FieldViolation {
                    field: field.to_string(),
                    reason: "is required".into(),
                }),
                Some(value) if !predicate.test(value) => violations.push(FieldViolation {
                    field: field.to_string(),
                    reason: predicate.describe(),
                }),
                Some(_) => {}
            }
        }

        for (field, predicate) in &self.optional {
            if let Some(value) = present(field) {
                if !predicate.test(value) {
                    violations.push(FieldViolation {
                        field: field.to_string(),
                        reason: predicate.describe(),
                    });
                }
            }
        }

        violations
    }

    /// Apply the schema in its mode.
    ///
    /// Strict failures become [`MiniAppError::Validation`]. Lenient failures
    /// produce a single warning and return `Ok`.
    pub fn enforce(
        &self,
        record: &Map<String, Value>,
        sink: &dyn WarningSink,
    ) -> Result<(), MiniAppError> {
        let violations = self.check(record);
        if violations.is_empty() {
            return Ok(());
        }

        match self.mode {
            Mode::Strict => Err(MiniAppError::Validation {
                operation: self.operation,
                violations,
            }),
            Mode::Lenient => {
                sink.warn(self.operation, &violations);
                Ok(())
            }
        }
    }
}

/// Serialize an option struct into the keyed record schemas operate on.
pub(crate) fn record_of<T: serde::Serialize>(options: &T) -> Result<Map<String, Value>, MiniAppError> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => {
            let mut map = Map::new();
            map.insert("value".into(), other);
            Ok(map)
        }
    }
}
