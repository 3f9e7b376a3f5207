//! JSON schema definitions for MCP tool discovery.
//!
//! These schemas are consumed by the protocol layer to advertise tools to
//! AI agents; they are not intended for direct use by application code.

pub mod query_schemas;
pub mod system_schemas;
