//! Pattern tables for the natural language parser.
//!
//! All tables are read-only statics initialized once; pattern order inside
//! each table is semantically significant and must not be reordered, since
//! the parser takes the first match and stops scanning.

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Category patterns
// ============================================================================

static AUTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"auth|login|logon|sign").expect("Invalid regex"));
static PROCESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"process|spawn|exec|run").expect("Invalid regex"));
static NETWORK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"network|connection|traffic").expect("Invalid regex"));
static FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"file|create|delete|modify").expect("Invalid regex"));

/// A category detection rule: pattern, category name, and the index pattern
/// the category implies (the file category has no dedicated index, so the
/// generator falls back to the wildcard source).
pub(super) struct CategoryRule {
    pub pattern: &'static LazyLock<Regex>,
    pub category: &'static str,
    pub index_pattern: Option<&'static str>,
}

pub(super) static CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        pattern: &AUTH_PATTERN,
        category: "authentication",
        index_pattern: Some("logs-auth-*"),
    },
    CategoryRule {
        pattern: &PROCESS_PATTERN,
        category: "process",
        index_pattern: Some("logs-endpoint-*"),
    },
    CategoryRule {
        pattern: &NETWORK_PATTERN,
        category: "network",
        index_pattern: Some("logs-network-*"),
    },
    CategoryRule {
        pattern: &FILE_PATTERN,
        category: "file",
        index_pattern: None,
    },
];

// ============================================================================
// Time range patterns
// ============================================================================

static LAST_N_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"last (\d+) hours?").expect("Invalid regex"));
static PAST_N_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"past (\d+) hours?").expect("Invalid regex"));
static LAST_N_DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"last (\d+) days?").expect("Invalid regex"));
static LAST_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"last day").expect("Invalid regex"));
static LAST_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"last hour").expect("Invalid regex"));
static TODAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"today").expect("Invalid regex"));

/// A time range detection rule. Captured numbers are scaled to hours.
pub(super) enum TimeRule {
    /// Pattern capturing a number of hours
    CaptureHours(&'static LazyLock<Regex>),
    /// Pattern capturing a number of days, converted to hours
    CaptureDays(&'static LazyLock<Regex>),
    /// Pattern implying a fixed number of hours
    Fixed(&'static LazyLock<Regex>, u64),
}

pub(super) static TIME_RULES: [TimeRule; 6] = [
    TimeRule::CaptureHours(&LAST_N_HOURS),
    TimeRule::CaptureHours(&PAST_N_HOURS),
    TimeRule::CaptureDays(&LAST_N_DAYS),
    TimeRule::Fixed(&LAST_DAY, 24),
    TimeRule::Fixed(&LAST_HOUR, 1),
    TimeRule::Fixed(&TODAY, 24),
];

// ============================================================================
// Outcome patterns
// ============================================================================

static SUCCESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"success(?:ful|es)?").expect("Invalid regex"));
static FAILURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fail(?:ed|ure)s?").expect("Invalid regex"));
static BLOCKED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"block(?:ed)?").expect("Invalid regex"));
static ALLOWED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"allow(?:ed)?").expect("Invalid regex"));

/// Outcome rules; blocked and allowed map onto failure and success.
pub(super) static OUTCOME_RULES: [(&LazyLock<Regex>, &str); 4] = [
    (&SUCCESS_PATTERN, "success"),
    (&FAILURE_PATTERN, "failure"),
    (&BLOCKED_PATTERN, "failure"),
    (&ALLOWED_PATTERN, "success"),
];

// ============================================================================
// Substring vocabularies
// ============================================================================

/// Countries recognized for the geographic filter, scanned in order.
pub(super) const COUNTRIES: [&str; 7] =
    ["china", "russia", "iran", "usa", "uk", "germany", "france"];

/// Phrasings that request a per-user aggregation.
pub(super) const GROUP_BY_USER_PHRASES: [&str; 3] = ["by user", "per user", "group by user"];

// ============================================================================
// Process parent patterns (only applied when category == process)
// ============================================================================

static SPAWNED_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"spawned by (\w+)").expect("Invalid regex"));
static FROM_EXE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"from (\w+\.exe)").expect("Invalid regex"));
static NAMED_PROCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+) process").expect("Invalid regex"));

pub(super) static PARENT_RULES: [&LazyLock<Regex>; 3] = [&SPAWNED_BY, &FROM_EXE, &NAMED_PROCESS];
