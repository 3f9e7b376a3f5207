//! Predefined hunting templates.
//!
//! Parameterized query skeletons for common investigative scenarios,
//! exposed through the template listing tool. This is a static lookup
//! table; templates are rendered by substituting the `{hours}` and
//! `{parent}` placeholders, not by the query generator.

use serde::Serialize;

/// A predefined, parameterized hunting query skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HuntingTemplate {
    /// Stable identifier for lookup
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// What the template hunts for
    pub description: &'static str,
    /// Event category the template targets
    pub category: &'static str,
    /// ES|QL skeleton with `{hours}` / `{parent}` placeholders
    pub query_template: &'static str,
}

impl HuntingTemplate {
    /// Render the template, substituting the time window and, where the
    /// skeleton uses one, the parent process name.
    pub fn render(&self, hours: u32, parent: Option<&str>) -> String {
        let mut query = self.query_template.replace("{hours}", &hours.to_string());
        if let Some(parent) = parent {
            query = query.replace("{parent}", parent);
        }
        query
    }
}

/// The built-in hunting template catalog.
pub const HUNTING_TEMPLATES: [HuntingTemplate; 3] = [
    HuntingTemplate {
        id: "auth_failures",
        name: "Authentication Failures Analysis",
        description: "Detect failed authentication attempts and potential brute force",
        category: "authentication",
        query_template: "FROM logs-auth-* | WHERE @timestamp >= NOW() - {hours}h AND event.category == \"authentication\" AND event.outcome == \"failure\" | STATS count() BY user.name, source.ip | LIMIT 100",
    },
    HuntingTemplate {
        id: "process_spawning",
        name: "Suspicious Process Spawning",
        description: "Track processes spawned by suspicious parents",
        category: "process",
        query_template: "FROM logs-endpoint-* | WHERE @timestamp >= NOW() - {hours}h AND event.category == \"process\" AND process.parent.name == \"{parent}\" | STATS count() BY process.name, user.name | LIMIT 100",
    },
    HuntingTemplate {
        id: "geographic_anomalies",
        name: "Geographic Authentication Anomalies",
        description: "Detect authentication from unusual locations",
        category: "authentication",
        query_template: "FROM logs-auth-* | WHERE @timestamp >= NOW() - {hours}h AND event.category == \"authentication\" | STATS count() BY user.name, source.geo.country_name | WHERE count > 1 | LIMIT 50",
    },
];

/// Look up a template by identifier.
pub fn find_template(id: &str) -> Option<&'static HuntingTemplate> {
    HUNTING_TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::{HUNTING_TEMPLATES, find_template};
    use crate::policy::check_raw_query;

    #[test]
    fn test_template_lookup() {
        assert!(find_template("auth_failures").is_some());
        assert!(find_template("process_spawning").is_some());
        assert!(find_template("geographic_anomalies").is_some());
        assert!(find_template("nonexistent").is_none());
    }

    #[test]
    fn test_render_substitutes_hours() {
        let template = find_template("auth_failures").unwrap();
        let query = template.render(24, None);
        assert!(query.contains("NOW() - 24h"));
        assert!(!query.contains("{hours}"));
    }

    #[test]
    fn test_render_substitutes_parent() {
        let template = find_template("process_spawning").unwrap();
        let query = template.render(12, Some("winword.exe"));
        assert!(query.contains("process.parent.name == \"winword.exe\""));
        assert!(!query.contains("{parent}"));
    }

    #[test]
    fn test_rendered_templates_pass_policy_checks() {
        for template in &HUNTING_TEMPLATES {
            let query = template.render(24, Some("explorer.exe"));
            let check = check_raw_query(&query);
            assert!(
                check.is_valid(),
                "Template '{}' failed policy check: {:?}",
                template.id,
                check.errors
            );
        }
    }
}
