//! Translation and validation tool schema definitions.
//!
//! Each schema carries the tool name, a description for AI agent
//! discovery, and an input schema in JSON Schema format with required
//! parameters marked.

use serde_json::{Value, json};

/// Schema definition for the full translation tool.
pub fn translate_query_tool() -> Value {
    json!({
        "name": "esql_translate_query",
        "description": "Translate a natural language security question into a validated ES|QL query with an explanation",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Natural language request, e.g. 'Show failed logins from the last 24 hours'"
                }
            },
            "required": ["query"]
        }
    })
}

/// Schema definition for the intent parsing tool.
pub fn parse_intent_tool() -> Value {
    json!({
        "name": "esql_parse_intent",
        "description": "Parse a natural language request into a structured, policy-checked query intent without generating ES|QL",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Natural language request to parse"
                }
            },
            "required": ["query"]
        }
    })
}

/// Schema definition for the intent-to-query generation tool.
pub fn generate_query_tool() -> Value {
    json!({
        "name": "esql_generate_query",
        "description": "Generate an ES|QL query from a structured intent supplied as JSON",
        "inputSchema": {
            "type": "object",
            "properties": {
                "intent": {
                    "type": "object",
                    "description": "Structured query intent",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Event category (authentication, process, network, file)"
                        },
                        "outcome": {
                            "type": "string",
                            "description": "Event outcome (success, failure)"
                        },
                        "time_range": {
                            "type": "string",
                            "description": "Canonical time range, e.g. 'last_24_hours'"
                        },
                        "filters": {
                            "type": "array",
                            "description": "Filter clauses with field, operator, value"
                        },
                        "aggregation": {
                            "type": "object",
                            "description": "Optional stats aggregation with group_by fields"
                        },
                        "index_pattern": {
                            "type": "string",
                            "description": "Target index pattern"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of result rows"
                        }
                    }
                }
            },
            "required": ["intent"]
        }
    })
}

/// Schema definition for the raw query validation tool.
pub fn validate_query_tool() -> Value {
    json!({
        "name": "esql_validate_query",
        "description": "Validate a raw ES|QL query string against the security policy, reporting errors and warnings",
        "inputSchema": {
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "ES|QL query text to check"
                }
            },
            "required": ["query"]
        }
    })
}
