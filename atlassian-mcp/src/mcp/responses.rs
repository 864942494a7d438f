//! Result envelopes returned by every tool
//!
//! A tool never fails at the protocol level once its arguments are valid.
//! The upstream outcome is wrapped as `{"success": true, "<key>": payload}`
//! or `{"success": false, "error": message}`, where `<key>` depends on the
//! operation.

use rmcp::model::{CallToolResult, Content, RawContent};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Which operation produced a payload, and so which key it is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// A created Jira issue
    Issue,
    /// A page of Jira search results
    Issues,
    /// A created Confluence page
    Page,
    /// A page of Confluence search results
    Results,
}

impl PayloadKind {
    /// JSON key of the payload in the serialized envelope
    pub fn key(self) -> &'static str {
        match self {
            PayloadKind::Issue => "issue",
            PayloadKind::Issues => "issues",
            PayloadKind::Page => "page",
            PayloadKind::Results => "results",
        }
    }
}

/// Uniform outcome of one tool invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    kind: PayloadKind,
    outcome: Result<Value, String>,
}

impl ResultEnvelope {
    /// Successful call carrying the upstream body
    pub fn success(kind: PayloadKind, payload: Value) -> Self {
        Self {
            kind,
            outcome: Ok(payload),
        }
    }

    /// Failed call carrying a description of what went wrong
    pub fn failure(kind: PayloadKind, error: impl Display) -> Self {
        Self {
            kind,
            outcome: Err(error.to_string()),
        }
    }

    /// Wrap the result of an upstream call
    ///
    /// Failures are logged here, at the one place every handler passes through.
    pub fn from_result<E: Display>(kind: PayloadKind, result: Result<Value, E>, operation: &str) -> Self {
        match result {
            Ok(payload) => Self::success(kind, payload),
            Err(e) => {
                tracing::error!("Error {}: {}", operation, e);
                Self::failure(kind, e)
            }
        }
    }

    /// Whether the upstream call succeeded
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The operation this envelope belongs to
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Upstream body, on success
    pub fn payload(&self) -> Option<&Value> {
        self.outcome.as_ref().ok()
    }

    /// Failure description, on failure
    pub fn error(&self) -> Option<&str> {
        self.outcome.as_ref().err().map(String::as_str)
    }

    /// Serialized form sent to the caller
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("success".to_string(), Value::Bool(self.is_success()));
        match &self.outcome {
            Ok(payload) => {
                object.insert(self.kind.key().to_string(), payload.clone());
            }
            Err(error) => {
                object.insert("error".to_string(), Value::String(error.clone()));
            }
        }
        Value::Object(object)
    }

    /// Convert to an MCP tool result
    ///
    /// The envelope is the single text content; `is_error` mirrors `success`.
    pub fn into_call_tool_result(self) -> CallToolResult {
        let text = format!("{:#}", self.to_json());
        if self.is_success() {
            CallToolResult::success(vec![Content::text(text)])
        } else {
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}

/// Parse the envelope back out of a tool result
///
/// Returns `None` if the result has no text content or the text is not JSON.
pub fn envelope_json(result: &CallToolResult) -> Option<Value> {
    result.content.iter().find_map(|content| match &content.raw {
        RawContent::Text(text) => serde_json::from_str(&text.text).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_uses_operation_key() {
        let envelope = ResultEnvelope::success(PayloadKind::Issue, json!({"key": "PROJ-1"}));
        assert!(envelope.is_success());
        assert_eq!(envelope.error(), None);
        assert_eq!(
            envelope.to_json(),
            json!({"success": true, "issue": {"key": "PROJ-1"}})
        );
    }

    #[test]
    fn test_failure_envelope_has_no_payload() {
        let envelope = ResultEnvelope::failure(PayloadKind::Results, "HTTP error status 500");
        assert!(!envelope.is_success());
        assert_eq!(envelope.payload(), None);
        assert_eq!(
            envelope.to_json(),
            json!({"success": false, "error": "HTTP error status 500"})
        );
    }

    #[test]
    fn test_payload_keys() {
        assert_eq!(PayloadKind::Issue.key(), "issue");
        assert_eq!(PayloadKind::Issues.key(), "issues");
        assert_eq!(PayloadKind::Page.key(), "page");
        assert_eq!(PayloadKind::Results.key(), "results");
    }

    #[test]
    fn test_call_tool_result_round_trip() {
        let envelope = ResultEnvelope::success(PayloadKind::Page, json!({"id": "42"}));
        let result = envelope.clone().into_call_tool_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(envelope_json(&result), Some(envelope.to_json()));

        let failed = ResultEnvelope::failure(PayloadKind::Page, "boom").into_call_tool_result();
        assert_eq!(failed.is_error, Some(true));
        assert_eq!(envelope_json(&failed).unwrap()["error"], "boom");
    }
}
