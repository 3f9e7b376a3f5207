//! Tests for policy validation, time decoding, and raw query checks.

use super::{
    DEFAULT_TIME_RANGE_HOURS, PolicyCheck, ValidationPolicy, check_raw_query, parse_time_range,
    parse_time_range_strict, validate_intent,
};
use crate::intent::{Aggregation, QueryIntent, QueryIntentBuilder};

#[test]
fn test_missing_time_range_and_aggregation_rejected() {
    let check = validate_intent(&QueryIntent::new());
    assert!(!check.is_valid);
    assert_eq!(check.errors, vec!["Time range required for safety"]);
}

#[test]
fn test_time_range_alone_is_sufficient() {
    let intent = QueryIntentBuilder::new().time_range_hours(24).build();
    assert!(validate_intent(&intent).is_valid);
}

#[test]
fn test_aggregation_alone_is_sufficient() {
    let intent = QueryIntentBuilder::new()
        .aggregation(Aggregation::count_by(["user.name"]))
        .build();
    assert!(validate_intent(&intent).is_valid);
}

#[test]
fn test_time_range_over_maximum_rejected_with_both_values() {
    let intent = QueryIntentBuilder::new().time_range_hours(720).build();
    let check = validate_intent(&intent);
    assert!(!check.is_valid);
    assert_eq!(check.errors.len(), 1);
    assert!(check.errors[0].contains("720h"));
    assert!(check.errors[0].contains("168h"));
}

#[test]
fn test_time_range_beyond_u32_rejected_with_requested_value() {
    let mut intent = QueryIntent::new();
    intent.time_range = Some("last_99999999999_hours".to_string());
    let check = validate_intent(&intent);
    assert!(!check.is_valid);
    assert!(check.errors[0].contains("99999999999h"));
    assert!(check.errors[0].contains("168h"));
}

#[test]
fn test_time_range_at_maximum_accepted() {
    let intent = QueryIntentBuilder::new().time_range_hours(168).build();
    assert!(validate_intent(&intent).is_valid);
}

#[test]
fn test_limit_over_maximum_rejected() {
    let intent = QueryIntentBuilder::new()
        .time_range_hours(24)
        .limit(5000)
        .build();
    let check = validate_intent(&intent);
    assert!(!check.is_valid);
    assert!(check.errors[0].contains("5000"));
    assert!(check.errors[0].contains("1000"));
}

#[test]
fn test_violations_are_collected_not_short_circuited() {
    let intent = QueryIntentBuilder::new()
        .time_range_hours(720)
        .limit(5000)
        .build();
    let check = validate_intent(&intent);
    assert_eq!(check.errors.len(), 2);
}

#[test]
fn test_policy_check_equality() {
    let intent = QueryIntentBuilder::new().time_range_hours(1).build();
    assert_eq!(
        validate_intent(&intent),
        PolicyCheck {
            is_valid: true,
            errors: Vec::new()
        }
    );
}

#[test]
fn test_parse_time_range_canonical() {
    assert_eq!(parse_time_range("last_6_hours"), 6);
    assert_eq!(parse_time_range("last_168_hours"), 168);
    assert_eq!(parse_time_range("last_720_hours"), 720);
}

#[test]
fn test_parse_time_range_malformed_defaults() {
    assert_eq!(parse_time_range("yesterday"), DEFAULT_TIME_RANGE_HOURS);
    assert_eq!(parse_time_range("last_x_hours"), DEFAULT_TIME_RANGE_HOURS);
    assert_eq!(parse_time_range(""), DEFAULT_TIME_RANGE_HOURS);
}

#[test]
fn test_parse_time_range_strict_reports_malformed() {
    assert_eq!(parse_time_range_strict("last_6_hours"), Some(6));
    assert_eq!(parse_time_range_strict("yesterday"), None);
    assert_eq!(parse_time_range_strict("last_x_hours"), None);
}

#[test]
fn test_parse_time_range_saturates_instead_of_defaulting() {
    assert_eq!(
        parse_time_range_strict("last_99999999999_hours"),
        Some(99_999_999_999)
    );
    assert_eq!(
        parse_time_range_strict("last_99999999999999999999999_hours"),
        Some(u64::MAX)
    );
}

#[test]
fn test_policy_snapshot_shape() {
    let snapshot = ValidationPolicy::snapshot();
    assert_eq!(snapshot["max_time_range_hours"], 168);
    assert_eq!(snapshot["max_limit"], 1000);
    assert_eq!(snapshot["allowed_indexes"].as_array().unwrap().len(), 3);
    assert_eq!(snapshot["forbidden_operations"].as_array().unwrap().len(), 2);
    assert_eq!(snapshot["allowed_protocols"].as_array().unwrap().len(), 6);
}

// ============================================================================
// Raw query checks
// ============================================================================

#[test]
fn test_raw_query_valid() {
    let check = check_raw_query(
        "FROM logs-auth-* | WHERE @timestamp >= NOW() - 24h AND event.outcome == \"failure\" | LIMIT 100",
    );
    assert!(check.is_valid());
    assert!(check.warnings.is_empty());
}

#[test]
fn test_raw_query_missing_from_clause() {
    let check = check_raw_query("SHOW TABLES");
    assert!(check.errors.contains(&"No FROM clause found".to_string()));
}

#[test]
fn test_raw_query_disallowed_index() {
    let check = check_raw_query("FROM secret-index | LIMIT 10");
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("'secret-index' not in allowed list"))
    );
}

#[test]
fn test_raw_query_forbidden_operation() {
    let check = check_raw_query("FROM logs-auth-* | WHERE @timestamp >= NOW() - 1h | ENRICH geo");
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("Operation 'ENRICH' is not allowed"))
    );
}

#[test]
fn test_raw_query_forbidden_join_detected_case_insensitively() {
    let check = check_raw_query("FROM logs-auth-* | join other ON id | LIMIT 10");
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("Operation 'JOIN' is not allowed"))
    );
}

#[test]
fn test_raw_query_time_bound_over_maximum() {
    let check = check_raw_query("FROM logs-auth-* | WHERE @timestamp >= NOW() - 720h | LIMIT 10");
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("Time range 720h exceeds maximum"))
    );
}

#[test]
fn test_raw_query_time_bound_beyond_u32_rejected() {
    let check = check_raw_query(
        "FROM logs-auth-* | WHERE @timestamp >= NOW() - 99999999999h | LIMIT 10",
    );
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("Time range 99999999999h exceeds maximum"))
    );
}

#[test]
fn test_raw_query_no_time_filter_warns_without_blocking() {
    let check = check_raw_query("FROM logs-auth-* | LIMIT 10");
    assert!(check.is_valid());
    assert_eq!(check.warnings, vec!["No time filter detected"]);
}

#[test]
fn test_raw_query_aggregation_suppresses_time_warning() {
    let check = check_raw_query("FROM logs-auth-* | STATS count() BY user.name | LIMIT 10");
    assert!(check.is_valid());
    assert!(check.warnings.is_empty());
}

#[test]
fn test_raw_query_limit_over_maximum() {
    let check = check_raw_query("FROM logs-auth-* | WHERE @timestamp >= NOW() - 1h | LIMIT 5000");
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("LIMIT 5000 exceeds maximum 1000"))
    );
}

#[test]
fn test_raw_query_limit_beyond_u32_rejected() {
    let check = check_raw_query(
        "FROM logs-auth-* | WHERE @timestamp >= NOW() - 1h | LIMIT 99999999999",
    );
    assert!(
        check
            .errors
            .iter()
            .any(|e| e.contains("LIMIT 99999999999 exceeds maximum 1000"))
    );
}
