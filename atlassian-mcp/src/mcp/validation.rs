//! Argument validation for MCP tool calls
//!
//! Tool arguments arrive as an untyped JSON object. [`ArgumentReader`] pulls
//! typed fields out of it and records every violation instead of stopping at
//! the first one, so the caller sees all problems with a call at once.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// What was wrong with a single argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field was absent or null
    Missing,
    /// The field was present but not a string
    ExpectedString,
    /// The field was present but not a non-negative whole number
    ExpectedInteger,
    /// The field was present but not an array whose items are all strings
    ExpectedStringArray,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ViolationKind::Missing => "missing required field",
            ViolationKind::ExpectedString => "expected a string",
            ViolationKind::ExpectedInteger => "expected a non-negative integer",
            ViolationKind::ExpectedStringArray => "expected an array of strings",
        };
        f.write_str(text)
    }
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Argument name as it appears on the wire
    pub field: String,
    /// The constraint that was violated
    pub problem: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': {}", self.field, self.problem)
    }
}

/// Validation failure for one tool call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid arguments for '{tool}': {}", describe(.violations))]
pub struct ValidationError {
    /// Name of the tool whose arguments were rejected
    pub tool: String,
    /// Every violated field, in the order the fields were read
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Violations as a JSON value, suitable for MCP error data
    pub fn to_data(&self) -> Value {
        serde_json::json!({
            "tool": self.tool,
            "violations": self.violations,
        })
    }

    /// Whether a specific field was reported
    pub fn has_violation(&self, field: &str, problem: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.problem == problem)
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A request type that can be built from raw tool arguments
pub trait ToolRequest: Sized {
    /// Build the request, or report every violated field
    fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, Vec<FieldViolation>>;
}

/// Collects typed fields from a JSON argument object
pub struct ArgumentReader<'a> {
    arguments: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> ArgumentReader<'a> {
    /// Start reading the given arguments
    pub fn new(arguments: &'a Map<String, Value>) -> Self {
        Self {
            arguments,
            violations: Vec::new(),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.arguments.get(field).filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: &str, problem: ViolationKind) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            problem,
        });
    }

    /// Read a string that must be present
    pub fn required_string(&mut self, field: &str) -> Option<String> {
        if self.present(field).is_none() {
            self.reject(field, ViolationKind::Missing);
            return None;
        }
        self.optional_string(field)
    }

    /// Read a string that may be absent or null
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.present(field)? {
            Value::String(value) => Some(value.clone()),
            _ => {
                self.reject(field, ViolationKind::ExpectedString);
                None
            }
        }
    }

    /// Read a non-negative integer that may be absent or null
    ///
    /// Numeric strings such as `"10"` are rejected.
    pub fn optional_u32(&mut self, field: &str) -> Option<u32> {
        let value = self.present(field)?;
        let parsed = value.as_number().and_then(|number| {
            number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            })
        });

        match parsed.and_then(|n| u32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                self.reject(field, ViolationKind::ExpectedInteger);
                None
            }
        }
    }

    /// Read an array of strings that may be absent or null
    pub fn optional_string_list(&mut self, field: &str) -> Option<Vec<String>> {
        let items = match self.present(field)? {
            Value::Array(items) => items,
            _ => {
                self.reject(field, ViolationKind::ExpectedStringArray);
                return None;
            }
        };

        let strings: Option<Vec<String>> = items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect();
        if strings.is_none() {
            self.reject(field, ViolationKind::ExpectedStringArray);
        }
        strings
    }

    /// Finish reading; succeeds only if no field was rejected
    pub fn finish(self) -> Result<(), Vec<FieldViolation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }
}

/// Validate raw arguments into a typed request for the named tool
pub fn validate_arguments<T: ToolRequest>(
    tool: &str,
    arguments: &Map<String, Value>,
) -> Result<T, ValidationError> {
    T::from_arguments(arguments).map_err(|violations| ValidationError {
        tool: tool.to_string(),
        violations,
    })
}
