//! Catalog and metadata tool schema definitions.

use serde_json::{Value, json};

/// Schema definition for the index schema lookup tool.
pub fn get_schema_tool() -> Value {
    json!({
        "name": "esql_get_schema",
        "description": "Get field information for a specific index pattern",
        "inputSchema": {
            "type": "object",
            "properties": {
                "index_pattern": {
                    "type": "string",
                    "description": "Index pattern to look up, e.g. 'logs-auth-*'"
                }
            },
            "required": ["index_pattern"]
        }
    })
}

/// Schema definition for the schema catalog listing tool.
pub fn list_schemas_tool() -> Value {
    json!({
        "name": "esql_list_schemas",
        "description": "List all queryable index patterns and their field schemas",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the hunting template listing tool.
pub fn list_templates_tool() -> Value {
    json!({
        "name": "esql_list_templates",
        "description": "List predefined hunting templates for common investigative scenarios",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the policy introspection tool.
pub fn get_policies_tool() -> Value {
    json!({
        "name": "esql_get_policies",
        "description": "Get the current security policy limits applied to every query",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the server information tool.
pub fn server_info_tool() -> Value {
    json!({
        "name": "esql_server_info",
        "description": "Get information about the translation server and its capabilities",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}
