//! Schema type definitions for index patterns.

use serde::{Deserialize, Serialize};

/// Schema of a single queryable index pattern.
///
/// Lists the ECS fields available for filtering and aggregation in that
/// index, along with a short description for discovery tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSchema {
    /// Index pattern this schema describes (e.g., `logs-auth-*`)
    pub index_pattern: String,
    /// Human-readable description of the data source
    pub description: String,
    /// ECS field names available in this index
    pub fields: Vec<String>,
}

impl IndexSchema {
    /// Whether the schema exposes the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}
