//! Tests for the intent data model.
//!
//! Covers JSON round-tripping, serde defaults for partial payloads, and
//! builder construction.

use super::{Aggregation, FilterClause, QueryIntent, QueryIntentBuilder};
use serde_json::json;

#[test]
fn test_default_intent() {
    let intent = QueryIntent::new();
    assert!(intent.category.is_none());
    assert!(intent.outcome.is_none());
    assert!(intent.time_range.is_none());
    assert!(intent.filters.is_empty());
    assert!(intent.aggregation.is_none());
    assert!(intent.index_pattern.is_none());
    assert_eq!(intent.limit, 100);
}

#[test]
fn test_json_round_trip_preserves_all_fields() {
    let intent = QueryIntentBuilder::new()
        .category("authentication")
        .outcome("failure")
        .time_range_hours(6)
        .filter_equals("source.geo.country_name", "China")
        .filter_equals("network.protocol", "ssh")
        .aggregation(Aggregation::count_by(["user.name"]))
        .index_pattern("logs-auth-*")
        .limit(250)
        .build();

    let encoded = serde_json::to_string(&intent).expect("Failed to encode intent");
    let decoded: QueryIntent = serde_json::from_str(&encoded).expect("Failed to decode intent");
    assert_eq!(intent, decoded);
}

#[test]
fn test_partial_json_payload_gets_defaults() {
    let payload = json!({
        "category": "network",
        "time_range": "last_12_hours"
    });

    let intent: QueryIntent =
        serde_json::from_value(payload).expect("Failed to decode partial intent");
    assert_eq!(intent.category.as_deref(), Some("network"));
    assert_eq!(intent.time_range.as_deref(), Some("last_12_hours"));
    assert!(intent.filters.is_empty());
    assert_eq!(intent.limit, 100);
}

#[test]
fn test_aggregation_type_serializes_as_type_key() {
    let aggregation = Aggregation::count_by(["user.name"]);
    let encoded = serde_json::to_value(&aggregation).expect("Failed to encode aggregation");

    assert_eq!(encoded.get("type"), Some(&json!("stats")));
    assert_eq!(encoded.get("function"), Some(&json!("count()")));
    assert_eq!(encoded.get("group_by"), Some(&json!(["user.name"])));
}

#[test]
fn test_aggregation_function_defaults_on_decode() {
    let payload = json!({
        "type": "stats",
        "group_by": ["user.name", "source.ip"]
    });

    let aggregation: Aggregation =
        serde_json::from_value(payload).expect("Failed to decode aggregation");
    assert_eq!(aggregation.function, "count()");
    assert_eq!(aggregation.group_by.len(), 2);
}

#[test]
fn test_filter_operator_defaults_to_equality() {
    let payload = json!({
        "field": "network.protocol",
        "value": "ssh"
    });

    let filter: FilterClause =
        serde_json::from_value(payload).expect("Failed to decode filter");
    assert_eq!(filter.operator, "==");
}

#[test]
fn test_has_filter_on() {
    let intent = QueryIntentBuilder::new()
        .filter_equals("network.protocol", "rdp")
        .build();

    assert!(intent.has_filter_on("network.protocol"));
    assert!(!intent.has_filter_on("source.geo.country_name"));
}

#[test]
fn test_filter_order_is_preserved() {
    let intent = QueryIntentBuilder::new()
        .filter_equals("source.geo.country_name", "Russia")
        .filter_equals("network.protocol", "smb")
        .build();

    assert_eq!(intent.filters[0].field, "source.geo.country_name");
    assert_eq!(intent.filters[1].field, "network.protocol");
}
