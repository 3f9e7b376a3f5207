//! Core intent type definitions.
//!
//! These structures mirror the JSON shape exchanged with callers: every key
//! is snake_case except the aggregation discriminator, which serializes as
//! `type`. All fields default so a partial JSON payload decodes cleanly.

use serde::{Deserialize, Serialize};

/// Structured representation of a security query request.
///
/// Produced by the parser from free text, or supplied directly by a caller
/// as JSON. The intent is treated as immutable once generation begins; the
/// generator never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryIntent {
    /// Event category (authentication, process, network, file)
    #[serde(default)]
    pub category: Option<String>,
    /// Event outcome (success, failure)
    #[serde(default)]
    pub outcome: Option<String>,
    /// Canonical time range encoding, `last_<hours>_hours`
    #[serde(default)]
    pub time_range: Option<String>,
    /// Filter conditions in insertion order
    #[serde(default)]
    pub filters: Vec<FilterClause>,
    /// Optional stats aggregation
    #[serde(default)]
    pub aggregation: Option<Aggregation>,
    /// Target index pattern; generator falls back to `logs-*` when absent
    #[serde(default)]
    pub index_pattern: Option<String>,
    /// Maximum number of result rows
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl Default for QueryIntent {
    fn default() -> Self {
        Self {
            category: None,
            outcome: None,
            time_range: None,
            filters: Vec::new(),
            aggregation: None,
            index_pattern: None,
            limit: default_limit(),
        }
    }
}

impl QueryIntent {
    /// Create an empty intent with default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this intent carries a filter on the given field.
    pub fn has_filter_on(&self, field: &str) -> bool {
        self.filters.iter().any(|f| f.field == field)
    }
}

/// A single filter condition applied in the WHERE clause.
///
/// Field and operator are drawn from a known vocabulary (ECS field names,
/// equality operator); values are rendered quoted in the generated query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    /// ECS field name (e.g., `source.geo.country_name`)
    pub field: String,
    /// Comparison operator, `==` unless stated otherwise
    #[serde(default = "default_operator")]
    pub operator: String,
    /// Comparison value, rendered as a quoted string
    pub value: String,
}

fn default_operator() -> String {
    "==".to_string()
}

impl FilterClause {
    /// Create an equality filter on a field.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: default_operator(),
            value: value.into(),
        }
    }
}

/// Aggregation request attached to an intent.
///
/// Only the `stats` aggregation type is rendered; the function defaults to
/// `count()` when a payload omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Aggregation type discriminator, serialized as `type`
    #[serde(rename = "type")]
    pub agg_type: String,
    /// Stats function to apply
    #[serde(default = "default_function")]
    pub function: String,
    /// Fields to group results by
    #[serde(default)]
    pub group_by: Vec<String>,
}

fn default_function() -> String {
    "count()".to_string()
}

impl Aggregation {
    /// Create a `stats count()` aggregation grouped by the given fields.
    pub fn count_by<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agg_type: "stats".to_string(),
            function: default_function(),
            group_by: fields.into_iter().map(Into::into).collect(),
        }
    }
}
