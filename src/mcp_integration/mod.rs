//! MCP (Model Context Protocol) integration for the query translator.
//!
//! Exposes translation, validation, and schema-discovery operations as
//! structured tools for AI agents. An agent can translate an analyst's
//! free-text request into a policy-checked ES|QL query, validate a
//! hand-written query, or browse the schema and template catalogs, all
//! through a standardized tool interface.
//!
//! ## Module Structure
//!
//! - `core` - Core types and infrastructure (McpServerInfo, EsqlToolResult,
//!   EsqlMcpServer)
//! - `protocol` - Tool discovery and dispatch functionality
//! - `tools/` - JSON schema definitions for MCP tool discovery
//!   - `query_schemas` - Translation and validation tool schemas
//!   - `system_schemas` - Schema/template/policy discovery tool schemas
//! - `handlers/` - Tool execution handlers
//!   - `query_ops` - Translation and validation handlers
//!   - `system_info` - Catalog and metadata handlers
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "mcp")]
//! use esql_translator::mcp_integration::EsqlMcpServer;
//! use serde_json::json;
//!
//! # #[cfg(feature = "mcp")]
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mcp_server = EsqlMcpServer::new()?;
//!
//!     let result = mcp_server
//!         .execute_tool(
//!             "esql_translate_query",
//!             json!({"query": "Show failed logins from the last 24 hours"}),
//!         )
//!         .await;
//!
//!     assert!(result.success);
//!     Ok(())
//! }
//! ```

#[cfg(feature = "mcp")]
pub mod core;
#[cfg(feature = "mcp")]
pub mod handlers;
#[cfg(feature = "mcp")]
pub mod protocol;
#[cfg(feature = "mcp")]
pub mod tools;


// Re-export core types for convenience
#[cfg(feature = "mcp")]
pub use core::{EsqlMcpServer, EsqlToolResult, McpServerInfo};
