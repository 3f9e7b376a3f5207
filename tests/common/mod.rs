//! Shared fixtures for integration tests.
#![allow(dead_code)]

use esql_translator::intent::{Aggregation, QueryIntent, QueryIntentBuilder};
use esql_translator::translator::QueryTranslator;

/// Create a translator with test logging wired up, panicking on catalog
/// failure.
pub fn translator() -> QueryTranslator {
    let _ = env_logger::builder().is_test(true).try_init();
    QueryTranslator::new().expect("Failed to create translator")
}

/// A fully populated intent touching every field.
pub fn full_intent() -> QueryIntent {
    QueryIntentBuilder::new()
        .category("authentication")
        .outcome("failure")
        .time_range_hours(6)
        .filter_equals("source.geo.country_name", "China")
        .filter_equals("network.protocol", "ssh")
        .aggregation(Aggregation::count_by(["user.name"]))
        .index_pattern("logs-auth-*")
        .limit(50)
        .build()
}

/// Natural language requests that must translate successfully.
pub const VALID_REQUESTS: [&str; 5] = [
    "Show authentication successes from the last 24 hours",
    "Show failed SSH logins from China in the last 6 hours",
    "Failed logins by user today",
    "Network traffic from germany in the past 12 hours",
    "Processes spawned by winword in the last day",
];
