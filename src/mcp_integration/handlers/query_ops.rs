//! Translation and validation operation handlers.
//!
//! Implements the tools that run the pipeline: full translation, intent
//! parsing, generation from a supplied intent, and raw query validation.
//! Every handler returns a structured result; no fault propagates past
//! this boundary.

use serde_json::{Value, json};

use super::super::core::{EsqlMcpServer, EsqlToolResult};

/// Minimum length of a natural language request after trimming.
const MIN_QUERY_LENGTH: usize = 3;

/// Extract and sanity-check the natural language argument.
fn nl_query_argument(arguments: &Value) -> Result<&str, EsqlToolResult> {
    let query = arguments
        .get("query")
        .and_then(|q| q.as_str())
        .ok_or_else(|| EsqlToolResult::error("Missing query parameter"))?;

    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LENGTH {
        return Err(EsqlToolResult::error(
            "Query must be at least 3 characters long",
        ));
    }
    Ok(trimmed)
}

/// Handle full natural-language-to-ES|QL translation.
///
/// Chains parse, validate, generate, and explain; policy rejections come
/// back as a failed result carrying the error list.
pub fn handle_translate_query(server: &EsqlMcpServer, arguments: Value) -> EsqlToolResult {
    let query_text = match nl_query_argument(&arguments) {
        Ok(text) => text,
        Err(result) => return result,
    };

    let outcome = server.translator.translate(query_text);
    if outcome.success {
        EsqlToolResult {
            success: true,
            content: json!({
                "query": outcome.query,
                "explanation": outcome.explanation,
                "intent": outcome.intent,
                "original_query": query_text,
            }),
            metadata: Some(json!({
                "operation": "translate_query",
                "request_id": outcome.request_id,
            })),
        }
    } else {
        EsqlToolResult {
            success: false,
            content: json!({
                "errors": outcome.errors,
                "original_query": query_text,
            }),
            metadata: Some(json!({
                "operation": "translate_query",
                "request_id": outcome.request_id,
                "error_code": "POLICY_REJECTED",
            })),
        }
    }
}

/// Handle natural language parsing into a validated intent.
pub fn handle_parse_intent(server: &EsqlMcpServer, arguments: Value) -> EsqlToolResult {
    let query_text = match nl_query_argument(&arguments) {
        Ok(text) => text,
        Err(result) => return result,
    };

    let intent = server.translator.parse(query_text);
    let check = server.translator.validate(&intent);

    if check.is_valid {
        EsqlToolResult {
            success: true,
            content: json!({
                "intent": intent,
                "original_query": query_text,
            }),
            metadata: Some(json!({"operation": "parse_intent"})),
        }
    } else {
        EsqlToolResult {
            success: false,
            content: json!({
                "errors": check.errors,
                "intent": Value::Null,
            }),
            metadata: Some(json!({
                "operation": "parse_intent",
                "error_code": "POLICY_REJECTED",
            })),
        }
    }
}

/// Handle ES|QL generation from a caller-supplied structured intent.
///
/// The intent may arrive as a JSON object or as a JSON-encoded string;
/// decoding failures are reported as a single error string.
pub fn handle_generate_query(server: &EsqlMcpServer, arguments: Value) -> EsqlToolResult {
    let intent_json = match arguments.get("intent") {
        Some(Value::String(raw)) => raw.clone(),
        Some(value) => value.to_string(),
        None => return EsqlToolResult::error("Missing intent parameter"),
    };

    match server.translator.generate_from_json(&intent_json) {
        Ok((intent, query)) => EsqlToolResult {
            success: true,
            content: json!({
                "query": query,
                "index_pattern": intent.index_pattern,
                "has_aggregation": intent.aggregation.is_some(),
                "has_time_filter": intent.time_range.is_some(),
            }),
            metadata: Some(json!({"operation": "generate_query"})),
        },
        Err(error) => EsqlToolResult::error(error.to_string()),
    }
}

/// Handle raw ES|QL validation against the security policy.
///
/// Warnings do not block execution; only errors do.
pub fn handle_validate_query(server: &EsqlMcpServer, arguments: Value) -> EsqlToolResult {
    let query = match arguments.get("query").and_then(|q| q.as_str()) {
        Some(query) => query,
        None => return EsqlToolResult::error("Missing query parameter"),
    };

    let check = server.translator.check_raw_query(query);
    EsqlToolResult {
        success: check.is_valid(),
        content: json!({
            "valid": check.is_valid(),
            "errors": check.errors,
            "warnings": check.warnings,
            "error_count": check.errors.len(),
            "warning_count": check.warnings.len(),
        }),
        metadata: Some(json!({"operation": "validate_query"})),
    }
}
