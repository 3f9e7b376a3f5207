//! Embedded index schema definitions.
//!
//! JSON documents describing each queryable index pattern, compiled into
//! the library so the catalog works without file dependencies.

/// Authentication log schema.
pub(super) fn auth_index_schema() -> &'static str {
    r#"{
        "index_pattern": "logs-auth-*",
        "description": "Authentication logs with ECS fields",
        "fields": [
            "@timestamp", "event.category", "event.action", "event.outcome",
            "user.name", "user.domain", "source.ip", "source.geo.country_name",
            "destination.ip", "network.protocol", "network.transport",
            "user_agent.original"
        ]
    }"#
}

/// Endpoint/process log schema.
pub(super) fn endpoint_index_schema() -> &'static str {
    r#"{
        "index_pattern": "logs-endpoint-*",
        "description": "Endpoint/process logs with ECS fields",
        "fields": [
            "@timestamp", "event.category", "event.action", "process.name",
            "process.parent.name", "process.command_line", "process.pid",
            "process.parent.pid", "user.name", "host.name", "file.path",
            "file.name", "network.direction"
        ]
    }"#
}

/// Network traffic log schema.
pub(super) fn network_index_schema() -> &'static str {
    r#"{
        "index_pattern": "logs-network-*",
        "description": "Network traffic logs with ECS fields",
        "fields": [
            "@timestamp", "event.category", "source.ip", "destination.ip",
            "source.port", "destination.port", "network.protocol",
            "network.transport", "network.bytes", "network.packets",
            "source.geo.country_name", "destination.geo.country_name"
        ]
    }"#
}
