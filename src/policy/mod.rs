//! Safety policy enforcement for query intents and raw queries.
//!
//! Policy rejections are data, not errors: validation collects every
//! violated rule into a list of human-readable messages and never raises.
//! The same fixed policy backs both the intent validator (applied before
//! generation) and the raw-query check (applied to generated or externally
//! supplied query strings as defense in depth).
//!
//! # Key Types
//!
//! - [`ValidationPolicy`] - Read-only policy constants
//! - [`PolicyCheck`] - Outcome of validating a structured intent
//! - [`QueryCheck`] - Outcome of checking a raw query string

mod query_check;

pub use query_check::{QueryCheck, check_raw_query};

use serde::Serialize;
use serde_json::{Value, json};

use crate::intent::QueryIntent;

/// Hours assumed when a time range string cannot be decoded.
///
/// Silent defaulting is a deliberate availability-over-strictness choice
/// carried over for compatibility; use [`parse_time_range_strict`] when the
/// distinction matters.
pub const DEFAULT_TIME_RANGE_HOURS: u64 = 24;

/// Fixed safety policy applied to every query before it is considered
/// safe to run. All constants are read-only; there is no runtime mutation.
pub struct ValidationPolicy;

impl ValidationPolicy {
    /// Index patterns a query may read from.
    pub const ALLOWED_INDEXES: [&'static str; 3] =
        ["logs-auth-*", "logs-endpoint-*", "logs-network-*"];

    /// Maximum time window, 7 days.
    pub const MAX_TIME_RANGE_HOURS: u64 = 168;

    /// Maximum result limit.
    pub const MAX_LIMIT: u32 = 1000;

    /// Operations never allowed in a query.
    pub const FORBIDDEN_OPERATIONS: [&'static str; 2] = ["JOIN", "ENRICH"];

    /// Protocol names recognized in filters.
    pub const ALLOWED_PROTOCOLS: [&'static str; 6] = ["ssh", "rdp", "http", "https", "ftp", "smb"];

    /// Policy constants as a JSON document, for the policies tool.
    pub fn snapshot() -> Value {
        json!({
            "allowed_indexes": Self::ALLOWED_INDEXES,
            "max_time_range_hours": Self::MAX_TIME_RANGE_HOURS,
            "max_limit": Self::MAX_LIMIT,
            "forbidden_operations": Self::FORBIDDEN_OPERATIONS,
            "allowed_protocols": Self::ALLOWED_PROTOCOLS,
        })
    }
}

/// Outcome of validating a structured intent against the policy.
///
/// A request is valid iff the error list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyCheck {
    /// Whether every policy rule passed
    pub is_valid: bool,
    /// Human-readable descriptions of each violated rule
    pub errors: Vec<String>,
}

/// Validate a query intent against the safety policy.
///
/// Pure function; rules are evaluated independently and all violations are
/// collected rather than short-circuiting on the first.
///
/// # Examples
///
/// ```rust
/// use esql_translator::intent::QueryIntent;
/// use esql_translator::policy::validate_intent;
///
/// // No time range and no aggregation: rejected as unbounded.
/// let check = validate_intent(&QueryIntent::new());
/// assert!(!check.is_valid);
/// assert_eq!(check.errors.len(), 1);
/// ```
pub fn validate_intent(intent: &QueryIntent) -> PolicyCheck {
    let mut errors = Vec::new();

    // Primary defense against unbounded or vague queries: anything the
    // parser could not pin to a time window (and that does not aggregate)
    // is rejected here.
    if intent.time_range.is_none() && intent.aggregation.is_none() {
        errors.push("Time range required for safety".to_string());
    }

    if let Some(range) = &intent.time_range {
        let hours = parse_time_range(range);
        if hours > ValidationPolicy::MAX_TIME_RANGE_HOURS {
            errors.push(format!(
                "Time range {hours}h exceeds maximum {}h",
                ValidationPolicy::MAX_TIME_RANGE_HOURS
            ));
        }
    }

    if intent.limit > ValidationPolicy::MAX_LIMIT {
        errors.push(format!(
            "Limit {} exceeds maximum {}",
            intent.limit,
            ValidationPolicy::MAX_LIMIT
        ));
    }

    PolicyCheck {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Decode a canonical `last_<N>_hours` string to hours, defaulting to
/// [`DEFAULT_TIME_RANGE_HOURS`] on any malformed input.
pub fn parse_time_range(range: &str) -> u64 {
    parse_time_range_strict(range).unwrap_or(DEFAULT_TIME_RANGE_HOURS)
}

/// Decode a canonical `last_<N>_hours` string to hours, reporting malformed
/// input as `None` instead of defaulting. Useful for audits and tests that
/// need to distinguish a genuine 24h window from the fallback.
///
/// Hour counts too large to represent saturate rather than defaulting, so
/// an absurd caller-supplied window is still seen (and rejected) by the
/// validator instead of silently shrinking to 24h.
pub fn parse_time_range_strict(range: &str) -> Option<u64> {
    parse_saturating(range.split('_').nth(1)?)
}

/// Decode a decimal digit string, saturating at `u64::MAX` when the value
/// does not fit. Non-digit input is `None`.
pub(crate) fn parse_saturating(digits: &str) -> Option<u64> {
    match digits.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            Some(u64::MAX)
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests;
