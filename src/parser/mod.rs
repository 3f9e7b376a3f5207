//! Natural language parser producing structured query intents.
//!
//! The parser is a best-effort translator, not a full NL understanding
//! system: each signal category (event category, time range, outcome,
//! geography, protocol, aggregation, process parent) is scanned once in a
//! fixed order and the first matching pattern wins. Absence of a match
//! leaves the corresponding intent field unset; parsing never fails.
//! Vague phrasing is not detected here; it is rejected downstream by the
//! policy validator when no time bound was extracted.

mod patterns;

use log::debug;

use crate::intent::{Aggregation, FilterClause, QueryIntent};

use patterns::{
    CATEGORY_RULES, COUNTRIES, GROUP_BY_USER_PHRASES, OUTCOME_RULES, PARENT_RULES, TIME_RULES,
    TimeRule,
};

/// Rule-based natural language parser.
///
/// Stateless and reentrant; all pattern tables are read-only statics, so a
/// single parser may be shared freely across concurrent callers.
///
/// # Examples
///
/// ```rust
/// use esql_translator::parser::NlParser;
///
/// let parser = NlParser::new();
/// let intent = parser.parse("Show failed logins from the last 24 hours");
///
/// assert_eq!(intent.category.as_deref(), Some("authentication"));
/// assert_eq!(intent.outcome.as_deref(), Some("failure"));
/// assert_eq!(intent.time_range.as_deref(), Some("last_24_hours"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NlParser;

impl NlParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse free text into a structured intent. Never fails.
    pub fn parse(&self, text: &str) -> QueryIntent {
        let lowered = text.to_lowercase();
        let mut intent = QueryIntent::new();

        self.detect_category(&lowered, &mut intent);
        self.detect_time_range(&lowered, &mut intent);
        self.detect_outcome(&lowered, &mut intent);
        self.extract_geography(&lowered, &mut intent);
        self.extract_protocol(&lowered, &mut intent);
        self.detect_aggregation(&lowered, &mut intent);
        self.extract_process_parent(&lowered, &mut intent);

        debug!("Parsed intent from text: {:?}", intent);
        intent
    }

    /// Set category and implied index pattern from the first matching rule.
    /// Later categories are not checked even if also present in the text.
    fn detect_category(&self, text: &str, intent: &mut QueryIntent) {
        for rule in &CATEGORY_RULES {
            if rule.pattern.is_match(text) {
                intent.category = Some(rule.category.to_string());
                intent.index_pattern = rule.index_pattern.map(str::to_string);
                break;
            }
        }
    }

    /// Extract the time window, encoding it canonically as
    /// `last_<hours>_hours`. First matching temporal pattern wins. Absurd
    /// hour or day counts saturate rather than overflowing; the policy
    /// validator rejects them downstream.
    fn detect_time_range(&self, text: &str, intent: &mut QueryIntent) {
        for rule in &TIME_RULES {
            let hours = match rule {
                TimeRule::CaptureHours(pattern) => pattern
                    .captures(text)
                    .and_then(|c| crate::policy::parse_saturating(&c[1])),
                TimeRule::CaptureDays(pattern) => pattern
                    .captures(text)
                    .and_then(|c| crate::policy::parse_saturating(&c[1]))
                    .map(|days| days.saturating_mul(24)),
                TimeRule::Fixed(pattern, hours) => pattern.is_match(text).then_some(*hours),
            };
            if let Some(hours) = hours {
                intent.time_range = Some(format!("last_{hours}_hours"));
                break;
            }
        }
    }

    fn detect_outcome(&self, text: &str, intent: &mut QueryIntent) {
        for (pattern, outcome) in &OUTCOME_RULES {
            if pattern.is_match(text) {
                intent.outcome = Some(outcome.to_string());
                break;
            }
        }
    }

    /// Append at most one geographic filter. Only a single geography per
    /// request is supported; the scan stops on the first hit.
    fn extract_geography(&self, text: &str, intent: &mut QueryIntent) {
        for country in COUNTRIES {
            if text.contains(country) {
                intent.filters.push(FilterClause::equals(
                    "source.geo.country_name",
                    title_case(country),
                ));
                break;
            }
        }
    }

    /// Append at most one protocol filter from the allowed protocol list.
    fn extract_protocol(&self, text: &str, intent: &mut QueryIntent) {
        for protocol in crate::policy::ValidationPolicy::ALLOWED_PROTOCOLS {
            if text.contains(protocol) {
                intent
                    .filters
                    .push(FilterClause::equals("network.protocol", protocol));
                break;
            }
        }
    }

    fn detect_aggregation(&self, text: &str, intent: &mut QueryIntent) {
        if GROUP_BY_USER_PHRASES
            .iter()
            .any(|phrase| text.contains(phrase))
        {
            intent.aggregation = Some(Aggregation::count_by(["user.name"]));
        }
    }

    /// Extract a parent process name, only meaningful for process queries.
    fn extract_process_parent(&self, text: &str, intent: &mut QueryIntent) {
        if intent.category.as_deref() != Some("process") {
            return;
        }
        for pattern in PARENT_RULES {
            if let Some(captures) = pattern.captures(text) {
                intent
                    .filters
                    .push(FilterClause::equals("process.parent.name", &captures[1]));
                break;
            }
        }
    }
}

/// Capitalize the first letter of a lowercase vocabulary word.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
