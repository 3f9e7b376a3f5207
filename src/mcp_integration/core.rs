//! Core MCP integration infrastructure.
//!
//! Foundational types and constructors that the protocol and handler
//! modules depend on.

use serde_json::Value;

use crate::error::TranslateResult;
use crate::translator::QueryTranslator;

/// Information about the MCP server for AI agent discovery.
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Human-readable name of the translation server
    pub name: String,
    /// Version string for the server implementation
    pub version: String,
    /// Description of the server's purpose and capabilities
    pub description: String,
    /// Index patterns queries may target
    pub supported_index_patterns: Vec<String>,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "ES|QL Security Translator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Natural language to ES|QL translation for SOC analysts and threat hunters"
                .to_string(),
            supported_index_patterns: crate::policy::ValidationPolicy::ALLOWED_INDEXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Tool execution result for MCP clients.
///
/// Structured outcome of an AI agent's tool execution request: a success
/// flag, the main content (query, intent, catalog data, or error
/// information), and optional metadata for agent decision making.
#[derive(Debug, Clone)]
pub struct EsqlToolResult {
    /// Whether the tool execution was successful
    pub success: bool,
    /// The main result content
    pub content: Value,
    /// Optional metadata providing additional context about the operation
    pub metadata: Option<Value>,
}

impl EsqlToolResult {
    /// Build a failed result carrying a single error message.
    pub(super) fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: serde_json::json!({"error": message.into()}),
            metadata: None,
        }
    }
}

/// MCP server wrapper for the translation pipeline.
///
/// Main entry point for MCP integration: wraps a [`QueryTranslator`] and
/// exposes its operations as tools AI agents can discover and execute.
pub struct EsqlMcpServer {
    pub(crate) translator: QueryTranslator,
    pub(crate) server_info: McpServerInfo,
}

impl EsqlMcpServer {
    /// Create a new MCP server with default configuration.
    pub fn new() -> TranslateResult<Self> {
        Ok(Self {
            translator: QueryTranslator::new()?,
            server_info: McpServerInfo::default(),
        })
    }

    /// Create a new MCP server with custom server information.
    pub fn with_info(server_info: McpServerInfo) -> TranslateResult<Self> {
        Ok(Self {
            translator: QueryTranslator::new()?,
            server_info,
        })
    }

    /// Get server information for introspection.
    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }
}
