//! Index schema catalog for the security log sources.
//!
//! Describes the ECS field surface of each queryable index pattern. The
//! catalog is embedded in the library and parsed once at registry
//! construction; it backs the schema-discovery tool and documents the field
//! vocabulary the parser and generator draw from.

mod embedded;
mod registry;
mod types;

pub use registry::SchemaRegistry;
pub use types::IndexSchema;
