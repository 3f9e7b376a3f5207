//! Raw query string checking.
//!
//! Operates directly on ES|QL text rather than a structured intent, so it
//! also covers hand-written or externally produced queries. Errors block
//! execution; warnings do not.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::ValidationPolicy;

static FROM_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)FROM\s+([\w\-\*]+)").expect("Invalid regex"));
static TIME_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NOW\(\)\s*-\s*(\d+)h").expect("Invalid regex"));
static LIMIT_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)LIMIT\s+(\d+)").expect("Invalid regex"));

/// Outcome of checking a raw query string against the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryCheck {
    /// Violations that block execution
    pub errors: Vec<String>,
    /// Advisory findings that do not block execution
    pub warnings: Vec<String>,
}

impl QueryCheck {
    /// Whether the query may be executed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a raw ES|QL string against the safety policy.
///
/// Extracts the source pattern from the leading FROM clause and checks it
/// against the allow-list, scans for forbidden operations, and bounds-checks
/// any relative time expression and trailing LIMIT value.
///
/// # Examples
///
/// ```rust
/// use esql_translator::policy::check_raw_query;
///
/// let check = check_raw_query("FROM logs-auth-* | WHERE @timestamp >= NOW() - 24h | LIMIT 100");
/// assert!(check.is_valid());
///
/// let check = check_raw_query("FROM logs-auth-* | ENRICH policy | LIMIT 100");
/// assert!(!check.is_valid());
/// ```
pub fn check_raw_query(query: &str) -> QueryCheck {
    let mut check = QueryCheck::default();

    match FROM_CLAUSE.captures(query) {
        None => check.errors.push("No FROM clause found".to_string()),
        Some(captures) => {
            let index_pattern = &captures[1];
            if !ValidationPolicy::ALLOWED_INDEXES.contains(&index_pattern) {
                check
                    .errors
                    .push(format!("Index '{index_pattern}' not in allowed list"));
            }
        }
    }

    let query_upper = query.to_uppercase();
    for operation in ValidationPolicy::FORBIDDEN_OPERATIONS {
        if query_upper.contains(operation) {
            check
                .errors
                .push(format!("Operation '{operation}' is not allowed"));
        }
    }

    match TIME_BOUND.captures(query) {
        Some(captures) => {
            // The capture is all digits; saturate when it exceeds u64 so an
            // oversized bound is rejected rather than ignored.
            let hours = super::parse_saturating(&captures[1]).unwrap_or(u64::MAX);
            if hours > ValidationPolicy::MAX_TIME_RANGE_HOURS {
                check
                    .errors
                    .push(format!("Time range {hours}h exceeds maximum"));
            }
        }
        // Aggregating queries are tolerated without a time filter.
        None => {
            if !query_upper.contains("STATS") {
                check
                    .warnings
                    .push("No time filter detected".to_string());
            }
        }
    }

    if let Some(captures) = LIMIT_CLAUSE.captures(query) {
        let limit = super::parse_saturating(&captures[1]).unwrap_or(u64::MAX);
        if limit > u64::from(ValidationPolicy::MAX_LIMIT) {
            check.errors.push(format!(
                "LIMIT {limit} exceeds maximum {}",
                ValidationPolicy::MAX_LIMIT
            ));
        }
    }

    check
}
