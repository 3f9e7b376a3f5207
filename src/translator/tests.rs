//! Tests for the chained translation pipeline.

use super::QueryTranslator;
use serde_json::json;

fn translator() -> QueryTranslator {
    QueryTranslator::new().expect("Failed to create translator")
}

#[test]
fn test_successful_translation_scenario() {
    let outcome = translator().translate("Show authentication successes from the last 24 hours");
    assert!(outcome.success);
    assert!(outcome.errors.is_empty());

    let intent = outcome.intent.expect("Expected intent");
    assert_eq!(intent.category.as_deref(), Some("authentication"));
    assert_eq!(intent.outcome.as_deref(), Some("success"));
    assert_eq!(intent.time_range.as_deref(), Some("last_24_hours"));
    assert_eq!(intent.index_pattern.as_deref(), Some("logs-auth-*"));

    let query = outcome.query.expect("Expected query");
    let category_pos = query.find("event.category == \"authentication\"").unwrap();
    let outcome_pos = query.find("event.outcome == \"success\"").unwrap();
    assert!(query.contains("NOW() - 24h"));
    assert!(category_pos < outcome_pos);

    let explanation = outcome.explanation.expect("Expected explanation");
    assert_eq!(
        explanation,
        "Searching authentication events with success outcome from the last 1 days"
    );
}

#[test]
fn test_vague_request_rejected_by_policy() {
    let outcome = translator().translate("Show risky logins");
    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec!["Time range required for safety"]);
    assert!(outcome.query.is_none());
    assert!(outcome.explanation.is_none());
    assert!(outcome.intent.is_none());
}

#[test]
fn test_oversized_window_rejected_with_values() {
    let outcome = translator().translate("Authentication events from the last 30 days");
    assert!(!outcome.success);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("720h"));
    assert!(outcome.errors[0].contains("168h"));
}

#[test]
fn test_request_ids_are_unique() {
    let translator = translator();
    let first = translator.translate("Logins today");
    let second = translator.translate("Logins today");
    assert_ne!(first.request_id, second.request_id);
}

#[test]
fn test_generate_from_json_round_trip() {
    let payload = json!({
        "category": "network",
        "time_range": "last_4_hours",
        "index_pattern": "logs-network-*",
        "limit": 50
    })
    .to_string();

    let (intent, query) = translator()
        .generate_from_json(&payload)
        .expect("Failed to generate from JSON");
    assert_eq!(intent.category.as_deref(), Some("network"));
    assert_eq!(
        query,
        "FROM logs-network-* | WHERE @timestamp >= NOW() - 4h AND event.category == \"network\" | LIMIT 50"
    );
}

#[test]
fn test_generate_from_malformed_json_is_an_error() {
    assert!(translator().generate_from_json("{not json").is_err());
}

#[test]
fn test_generated_queries_pass_raw_check() {
    let translator = translator();
    for text in [
        "Show failed SSH logins from China in the last 6 hours",
        "Network traffic from the last day",
        "Failed logins by user in the past 12 hours",
    ] {
        let outcome = translator.translate(text);
        assert!(outcome.success, "Translation failed for: {text}");
        let check = translator.check_raw_query(&outcome.query.unwrap());
        assert!(check.is_valid(), "Raw check failed for: {text}");
    }
}

#[test]
fn test_outcome_serializes_with_stable_keys() {
    let outcome = translator().translate("Logins from the last hour");
    let encoded = serde_json::to_value(&outcome).expect("Failed to encode outcome");
    assert!(encoded.get("success").is_some());
    assert!(encoded.get("query").is_some());
    assert!(encoded.get("explanation").is_some());
    assert!(encoded.get("intent").is_some());
    assert!(encoded.get("errors").is_some());
    assert!(encoded.get("request_id").is_some());
}
