//! Utility functions for MCP operations

use serde_json::Value;

/// Generate a JSON schema for a type that implements JsonSchema
pub fn generate_tool_schema<T>() -> Value
where
    T: schemars::JsonSchema,
{
    serde_json::to_value(schemars::schema_for!(T))
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

/// Names of the `required` entries of a generated schema
pub fn required_fields(schema: &Value) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::types::SearchJiraIssuesRequest;

    #[test]
    fn test_generate_tool_schema_is_object() {
        let schema = generate_tool_schema::<SearchJiraIssuesRequest>();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["maxResults"].is_object());
        assert_eq!(required_fields(&schema), vec!["jql"]);
    }
}
