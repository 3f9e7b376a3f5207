//! Schema registry for loading and accessing index schemas.

use std::collections::HashMap;

use crate::error::TranslateResult;

use super::embedded;
use super::types::IndexSchema;

/// Registry of index schemas keyed by index pattern.
///
/// Built once from the embedded definitions; read-only afterwards, so it
/// may be shared freely across concurrent callers.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<String, IndexSchema>,
}

impl SchemaRegistry {
    /// Create a registry from the embedded schema definitions.
    pub fn new() -> TranslateResult<Self> {
        let mut schemas = HashMap::new();
        for content in [
            embedded::auth_index_schema(),
            embedded::endpoint_index_schema(),
            embedded::network_index_schema(),
        ] {
            let schema: IndexSchema = serde_json::from_str(content)?;
            schemas.insert(schema.index_pattern.clone(), schema);
        }
        Ok(Self { schemas })
    }

    /// Get the schema for a specific index pattern.
    pub fn get_schema(&self, index_pattern: &str) -> Option<&IndexSchema> {
        self.schemas.get(index_pattern)
    }

    /// All registered schemas, ordered by index pattern for stable output.
    pub fn schemas(&self) -> Vec<&IndexSchema> {
        let mut schemas: Vec<_> = self.schemas.values().collect();
        schemas.sort_by_key(|s| s.index_pattern.as_str());
        schemas
    }

    /// All registered index patterns, sorted.
    pub fn index_patterns(&self) -> Vec<&str> {
        let mut patterns: Vec<_> = self.schemas.keys().map(String::as_str).collect();
        patterns.sort_unstable();
        patterns
    }

    /// Number of registered schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
