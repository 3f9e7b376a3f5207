//! Deterministic ES|QL rendering.
//!
//! Renders a validated intent into query text with a fixed clause order:
//! source, WHERE conditions, aggregation, limit. The same intent always
//! yields byte-identical output; nothing here mutates the intent.
//!
//! [`explain`] is a second, parallel formatter over the same input that
//! produces the human-readable sentence shown alongside the query.

use crate::intent::QueryIntent;
use crate::policy::parse_time_range;

/// Wildcard source used when an intent names no index pattern.
pub const WILDCARD_INDEX: &str = "logs-*";

/// Render an intent into an ES|QL query string.
///
/// WHERE conditions are appended in a fixed order: timestamp lower bound,
/// category, outcome, then each filter clause in stored order. The limit
/// clause is always present.
///
/// # Examples
///
/// ```rust
/// use esql_translator::intent::QueryIntentBuilder;
/// use esql_translator::generator::generate;
///
/// let intent = QueryIntentBuilder::new()
///     .category("authentication")
///     .time_range_hours(24)
///     .index_pattern("logs-auth-*")
///     .build();
///
/// assert_eq!(
///     generate(&intent),
///     "FROM logs-auth-* | WHERE @timestamp >= NOW() - 24h AND event.category == \"authentication\" | LIMIT 100"
/// );
/// ```
pub fn generate(intent: &QueryIntent) -> String {
    let mut parts = vec![format!(
        "FROM {}",
        intent.index_pattern.as_deref().unwrap_or(WILDCARD_INDEX)
    )];

    let mut conditions = Vec::new();

    if let Some(range) = &intent.time_range {
        let hours = parse_time_range(range);
        conditions.push(format!("@timestamp >= NOW() - {hours}h"));
    }

    if let Some(category) = &intent.category {
        conditions.push(format!("event.category == \"{category}\""));
    }

    if let Some(outcome) = &intent.outcome {
        conditions.push(format!("event.outcome == \"{outcome}\""));
    }

    for filter in &intent.filters {
        conditions.push(format!(
            "{} {} \"{}\"",
            filter.field, filter.operator, filter.value
        ));
    }

    if !conditions.is_empty() {
        parts.push(format!("| WHERE {}", conditions.join(" AND ")));
    }

    if let Some(aggregation) = &intent.aggregation {
        if aggregation.agg_type == "stats" {
            if aggregation.group_by.is_empty() {
                parts.push(format!("| STATS {}", aggregation.function));
            } else {
                parts.push(format!(
                    "| STATS {} BY {}",
                    aggregation.function,
                    aggregation.group_by.join(", ")
                ));
            }
        }
    }

    parts.push(format!("| LIMIT {}", intent.limit));

    parts.join(" ")
}

/// Produce the human-readable explanation for an intent.
///
/// Stays consistent with [`generate`] but is an independent rendering pass:
/// category, outcome, time window (in days when at least 24 hours), and
/// whether grouping was requested.
pub fn explain(intent: &QueryIntent) -> String {
    let mut explanation = format!(
        "Searching {} events",
        intent.category.as_deref().unwrap_or("all")
    );

    if let Some(outcome) = &intent.outcome {
        explanation.push_str(&format!(" with {outcome} outcome"));
    }

    if let Some(range) = &intent.time_range {
        let hours = parse_time_range(range);
        if hours < 24 {
            explanation.push_str(&format!(" from the last {hours} hours"));
        } else {
            explanation.push_str(&format!(" from the last {} days", hours / 24));
        }
    }

    if intent.aggregation.is_some() {
        explanation.push_str(" grouped by user");
    }

    explanation
}
