//! Tests for MCP server functionality

use super::responses::envelope_json;
use super::server::{McpServer, SERVER_NAME};
use crate::test_utils::{FakeAtlassianClient, FakeOutcome};
use rmcp::model::ErrorCode;
use rmcp::ServerHandler;
use serde_json::{json, Map, Value};
use std::sync::Arc;

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test arguments must be an object"),
    }
}

fn server_with(outcome: FakeOutcome) -> (McpServer, Arc<FakeAtlassianClient>) {
    let client = Arc::new(FakeAtlassianClient::new(outcome));
    (McpServer::with_client(client.clone()), client)
}

#[tokio::test]
async fn test_mcp_server_info() {
    let (server, _) = server_with(FakeOutcome::Respond(json!({})));

    let info = server.get_info();
    assert_eq!(info.server_info.name, SERVER_NAME);
    assert_eq!(info.server_info.version, crate::VERSION);
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.prompts.is_none());
    assert!(info.instructions.is_some());
}

#[test]
fn test_mcp_server_lists_exactly_four_tools() {
    let (server, _) = server_with(FakeOutcome::Respond(json!({})));

    assert_eq!(
        server.tool_names(),
        vec![
            "create-confluence-page",
            "create-jira-issue",
            "search-confluence",
            "search-jira-issues",
        ]
    );

    let definitions = server.list_tool_definitions();
    let descriptions: Vec<_> = definitions
        .iter()
        .map(|tool| tool.description.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Create a new Confluence page",
            "Create a new Jira issue",
            "Search Confluence content using CQL",
            "Search Jira issues using JQL",
        ]
    );
}

#[tokio::test]
async fn test_each_tool_routes_to_its_operation() {
    let cases = [
        (
            "create-jira-issue",
            json!({"projectKey": "PROJ", "summary": "s", "issueType": "Task"}),
            "create_issue",
            "issue",
        ),
        (
            "search-jira-issues",
            json!({"jql": "project = PROJ"}),
            "search_issues",
            "issues",
        ),
        (
            "create-confluence-page",
            json!({"spaceKey": "DEV", "title": "t", "content": "<p>c</p>"}),
            "create_page",
            "page",
        ),
        (
            "search-confluence",
            json!({"cql": "type = page"}),
            "search_pages",
            "results",
        ),
    ];

    for (tool, arguments, operation, key) in cases {
        let (server, client) = server_with(FakeOutcome::Respond(json!({"ok": tool})));

        let result = server.call_tool_by_name(tool, args(arguments)).await.unwrap();

        assert_eq!(client.calls(), vec![operation], "tool {tool}");
        assert_eq!(result.is_error, Some(false));
        let envelope = envelope_json(&result).unwrap();
        assert_eq!(envelope["success"], true);
        assert_eq!(envelope[key], json!({"ok": tool}));
        assert_eq!(envelope.as_object().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_upstream_failure_becomes_failed_envelope() {
    let (server, client) = server_with(FakeOutcome::Status(401));

    let result = server
        .call_tool_by_name("search-jira-issues", args(json!({"jql": "project = PROJ"})))
        .await
        .unwrap();

    assert_eq!(client.call_count(), 1);
    assert_eq!(result.is_error, Some(true));
    let envelope = envelope_json(&result).unwrap();
    assert_eq!(envelope["success"], false);
    assert!(envelope["error"].as_str().unwrap().contains("401"));
    assert!(envelope.get("issues").is_none());
}

#[tokio::test]
async fn test_unknown_tool_is_rejected_without_upstream_call() {
    let (server, client) = server_with(FakeOutcome::Respond(json!({})));

    let error = server
        .call_tool_by_name("delete-jira-issue", args(json!({"issueKey": "PROJ-1"})))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::INVALID_REQUEST);
    assert!(error.message.contains("delete-jira-issue"));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_upstream() {
    let (server, client) = server_with(FakeOutcome::Respond(json!({})));

    let invalid = [
        ("create-jira-issue", json!({"projectKey": "PROJ", "summary": "s"})),
        ("create-jira-issue", json!({"projectKey": "PROJ", "summary": "s", "issueType": "Bug", "labels": [1, 2]})),
        ("search-jira-issues", json!({"jql": "x", "maxResults": "ten"})),
        ("search-jira-issues", json!({"jql": "x", "fields": "summary"})),
        ("create-confluence-page", json!({"spaceKey": "DEV", "title": 7, "content": "c"})),
        ("search-confluence", json!({})),
        ("search-confluence", json!({"cql": "x", "limit": 2.5})),
    ];

    for (tool, arguments) in invalid {
        let error = server
            .call_tool_by_name(tool, args(arguments.clone()))
            .await
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS, "{tool} {arguments}");
        assert!(error.data.is_some());
    }

    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_null_optional_arguments_are_absent() {
    let (server, client) = server_with(FakeOutcome::Respond(json!({})));

    server
        .call_tool_by_name(
            "create-confluence-page",
            args(json!({
                "spaceKey": "DEV",
                "title": "Runbook",
                "content": "<p>c</p>",
                "parentId": null,
                "labels": null,
                "unrelated": true
            })),
        )
        .await
        .unwrap();

    let forwarded = client.last_page_request().unwrap();
    assert_eq!(forwarded.parent_id, None);
    assert_eq!(forwarded.labels, None);
}
