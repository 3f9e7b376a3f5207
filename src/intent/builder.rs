//! Fluent builder for programmatic intent construction.
//!
//! Callers that already know what they want to ask (hunting playbooks,
//! scheduled checks) can build an intent directly instead of round-tripping
//! through the natural language parser.

use super::types::{Aggregation, FilterClause, QueryIntent};

/// Builder for [`QueryIntent`] values.
///
/// # Examples
///
/// ```rust
/// use esql_translator::intent::QueryIntentBuilder;
///
/// let intent = QueryIntentBuilder::new()
///     .category("authentication")
///     .outcome("failure")
///     .time_range_hours(24)
///     .filter_equals("source.geo.country_name", "China")
///     .limit(50)
///     .build();
///
/// assert_eq!(intent.time_range.as_deref(), Some("last_24_hours"));
/// assert_eq!(intent.limit, 50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryIntentBuilder {
    intent: QueryIntent,
}

impl QueryIntentBuilder {
    /// Start building an intent with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.intent.category = Some(category.into());
        self
    }

    /// Set the event outcome.
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.intent.outcome = Some(outcome.into());
        self
    }

    /// Set the time range in hours, using the canonical encoding.
    pub fn time_range_hours(mut self, hours: u32) -> Self {
        self.intent.time_range = Some(format!("last_{hours}_hours"));
        self
    }

    /// Append a filter clause, preserving insertion order.
    pub fn filter(mut self, filter: FilterClause) -> Self {
        self.intent.filters.push(filter);
        self
    }

    /// Append an equality filter on a field.
    pub fn filter_equals(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(FilterClause::equals(field, value))
    }

    /// Set the aggregation.
    pub fn aggregation(mut self, aggregation: Aggregation) -> Self {
        self.intent.aggregation = Some(aggregation);
        self
    }

    /// Set the target index pattern.
    pub fn index_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.intent.index_pattern = Some(pattern.into());
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.intent.limit = limit;
        self
    }

    /// Finish building and return the intent.
    pub fn build(self) -> QueryIntent {
        self.intent
    }
}
