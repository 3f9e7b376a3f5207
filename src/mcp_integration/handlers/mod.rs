//! Tool execution handlers for MCP integration.

pub mod query_ops;
pub mod system_info;
