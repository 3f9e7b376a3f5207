//! Natural language to ES|QL translation library for security analysts.
//!
//! Translates free-text security questions into policy-checked ES|QL
//! queries through a three-stage pipeline: a rule-based parser producing a
//! structured [`QueryIntent`], a policy validator enforcing safety bounds,
//! and a deterministic generator rendering the query text with a
//! human-readable explanation.
//!
//! # Core Components
//!
//! - [`QueryTranslator`] - Chained parse/validate/generate pipeline
//! - [`NlParser`] - Rule-based natural language parser
//! - [`ValidationPolicy`] - Fixed safety policy (time bounds, limits,
//!   forbidden operations)
//! - [`SchemaRegistry`] - Index schema catalog for discovery tooling
//!
//! # Quick Start
//!
//! ```rust
//! use esql_translator::QueryTranslator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let translator = QueryTranslator::new()?;
//! let outcome = translator.translate("Show failed logins from the last 24 hours");
//! assert!(outcome.success);
//! println!("{}", outcome.query.unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! All pipeline stages are pure, synchronous, and reentrant: pattern and
//! policy tables are read-only statics, so a single translator can serve
//! concurrent in-flight requests without synchronization.

pub mod error;
pub mod generator;
pub mod intent;
/// Model Context Protocol integration for AI agents.
///
/// This module is only available when the `mcp` feature is enabled.
/// Add `features = ["mcp"]` to your Cargo.toml dependency to use this module.
#[cfg(feature = "mcp")]
pub mod mcp_integration;
pub mod parser;
pub mod policy;
pub mod schema;
pub mod templates;
pub mod translator;

// Re-export commonly used types for convenience
pub use error::{TranslateError, TranslateResult};
pub use generator::{WILDCARD_INDEX, explain, generate};
pub use intent::{Aggregation, FilterClause, QueryIntent, QueryIntentBuilder};
pub use parser::NlParser;
pub use policy::{
    DEFAULT_TIME_RANGE_HOURS, PolicyCheck, QueryCheck, ValidationPolicy, check_raw_query,
    parse_time_range, parse_time_range_strict, validate_intent,
};
pub use schema::{IndexSchema, SchemaRegistry};
pub use templates::{HUNTING_TEMPLATES, HuntingTemplate, find_template};
pub use translator::{QueryTranslator, TranslationOutcome};

// MCP integration re-exports (feature-gated)
#[cfg(feature = "mcp")]
pub use mcp_integration::{EsqlMcpServer, EsqlToolResult, McpServerInfo};
