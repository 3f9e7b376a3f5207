//! Catalog and metadata handlers for MCP integration.
//!
//! Read-only access to the index schema catalog, the hunting template
//! table, the policy limits, and server information.

use serde_json::{Value, json};

use super::super::core::{EsqlMcpServer, EsqlToolResult};
use crate::policy::ValidationPolicy;
use crate::templates::HUNTING_TEMPLATES;

/// Handle index schema lookup.
pub fn handle_get_schema(server: &EsqlMcpServer, arguments: Value) -> EsqlToolResult {
    let index_pattern = match arguments.get("index_pattern").and_then(|p| p.as_str()) {
        Some(pattern) => pattern,
        None => return EsqlToolResult::error("Missing index_pattern parameter"),
    };

    match server.translator.schemas().get_schema(index_pattern) {
        Some(schema) => EsqlToolResult {
            success: true,
            content: json!({
                "index": schema.index_pattern,
                "description": schema.description,
                "fields": schema.fields,
                "field_count": schema.fields.len(),
            }),
            metadata: Some(json!({"operation": "get_schema"})),
        },
        None => EsqlToolResult {
            success: false,
            content: json!({
                "error": format!("Index pattern '{index_pattern}' not found"),
                "available_indexes": server.translator.schemas().index_patterns(),
            }),
            metadata: None,
        },
    }
}

/// Handle schema catalog listing.
pub fn handle_list_schemas(server: &EsqlMcpServer, _arguments: Value) -> EsqlToolResult {
    let schemas = server.translator.schemas().schemas();
    EsqlToolResult {
        success: true,
        content: json!({
            "schemas": schemas,
            "schema_count": schemas.len(),
        }),
        metadata: Some(json!({"operation": "list_schemas"})),
    }
}

/// Handle hunting template listing.
pub fn handle_list_templates(_server: &EsqlMcpServer, _arguments: Value) -> EsqlToolResult {
    EsqlToolResult {
        success: true,
        content: json!({
            "templates": HUNTING_TEMPLATES,
            "template_count": HUNTING_TEMPLATES.len(),
        }),
        metadata: Some(json!({"operation": "list_templates"})),
    }
}

/// Handle policy introspection.
pub fn handle_get_policies(_server: &EsqlMcpServer, _arguments: Value) -> EsqlToolResult {
    EsqlToolResult {
        success: true,
        content: ValidationPolicy::snapshot(),
        metadata: Some(json!({"operation": "get_policies"})),
    }
}

/// Handle server information requests.
pub fn handle_server_info(server: &EsqlMcpServer, _arguments: Value) -> EsqlToolResult {
    let info = server.server_info();
    EsqlToolResult {
        success: true,
        content: json!({
            "name": info.name,
            "version": info.version,
            "description": info.description,
            "supported_index_patterns": info.supported_index_patterns,
            "tool_count": server.get_tools().len(),
        }),
        metadata: Some(json!({"operation": "server_info"})),
    }
}
