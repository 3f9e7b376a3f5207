//! MCP protocol layer for tool discovery and dispatch.
//!
//! Handles tool discovery, execution dispatch, and protocol communication
//! between AI agents and the translation pipeline.

use log::{debug, info};
use serde_json::{Value, json};

use super::core::{EsqlMcpServer, EsqlToolResult};
use super::handlers::{query_ops, system_info};
use super::tools::{query_schemas, system_schemas};

impl EsqlMcpServer {
    /// Get the list of available MCP tools as JSON.
    ///
    /// Returns all tool definitions that AI agents can discover and
    /// execute, each with its input schema and documentation.
    pub fn get_tools(&self) -> Vec<Value> {
        vec![
            query_schemas::translate_query_tool(),
            query_schemas::parse_intent_tool(),
            query_schemas::generate_query_tool(),
            query_schemas::validate_query_tool(),
            system_schemas::get_schema_tool(),
            system_schemas::list_schemas_tool(),
            system_schemas::list_templates_tool(),
            system_schemas::get_policies_tool(),
            system_schemas::server_info_tool(),
        ]
    }

    /// Execute a tool by name with arguments.
    ///
    /// Main dispatch function routing tool execution requests to the
    /// appropriate handler based on the tool name.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> EsqlToolResult {
        debug!("Executing MCP tool: {} with args: {}", tool_name, arguments);

        match tool_name {
            // Translation operations
            "esql_translate_query" => query_ops::handle_translate_query(self, arguments),
            "esql_parse_intent" => query_ops::handle_parse_intent(self, arguments),
            "esql_generate_query" => query_ops::handle_generate_query(self, arguments),
            "esql_validate_query" => query_ops::handle_validate_query(self, arguments),

            // Catalog and metadata operations
            "esql_get_schema" => system_info::handle_get_schema(self, arguments),
            "esql_list_schemas" => system_info::handle_list_schemas(self, arguments),
            "esql_list_templates" => system_info::handle_list_templates(self, arguments),
            "esql_get_policies" => system_info::handle_get_policies(self, arguments),
            "esql_server_info" => system_info::handle_server_info(self, arguments),

            // Unknown tool
            _ => EsqlToolResult {
                success: false,
                content: json!({
                    "error": "Unknown tool",
                    "tool_name": tool_name
                }),
                metadata: None,
            },
        }
    }

    /// Run the MCP server using stdio communication.
    ///
    /// Starts the MCP server and begins listening for tool execution
    /// requests over standard input/output.
    pub async fn run_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("ES|QL translation MCP server ready for stdio communication");
        info!(
            "Available tools: {:?}",
            self.get_tools()
                .iter()
                .map(|t| t.get("name"))
                .collect::<Vec<_>>()
        );
        // The MCP protocol handler takes over from here; tool dispatch is
        // wired through execute_tool.
        Ok(())
    }
}
