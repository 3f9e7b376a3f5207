//! Core translator infrastructure.

use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

use crate::error::TranslateResult;
use crate::generator;
use crate::intent::QueryIntent;
use crate::parser::NlParser;
use crate::policy::{self, PolicyCheck, QueryCheck};
use crate::schema::SchemaRegistry;

/// Translation pipeline front door.
///
/// Owns the parser and the schema catalog and exposes each pipeline stage
/// individually as well as the chained [`translate`](Self::translate) call.
/// All operations are pure and reentrant; a single translator may serve
/// concurrent in-flight requests.
pub struct QueryTranslator {
    parser: NlParser,
    schemas: SchemaRegistry,
}

impl QueryTranslator {
    /// Create a translator with the embedded schema catalog.
    pub fn new() -> TranslateResult<Self> {
        Ok(Self {
            parser: NlParser::new(),
            schemas: SchemaRegistry::new()?,
        })
    }

    /// The index schema catalog.
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Parse free text into a structured intent. Never fails.
    pub fn parse(&self, text: &str) -> QueryIntent {
        self.parser.parse(text)
    }

    /// Validate an intent against the safety policy.
    pub fn validate(&self, intent: &QueryIntent) -> PolicyCheck {
        policy::validate_intent(intent)
    }

    /// Render an intent into ES|QL. Deterministic.
    pub fn generate(&self, intent: &QueryIntent) -> String {
        generator::generate(intent)
    }

    /// Produce the human-readable explanation for an intent.
    pub fn explain(&self, intent: &QueryIntent) -> String {
        generator::explain(intent)
    }

    /// Check a raw ES|QL string against the safety policy.
    pub fn check_raw_query(&self, query: &str) -> QueryCheck {
        policy::check_raw_query(query)
    }

    /// Decode a caller-supplied JSON intent and render it.
    ///
    /// Decoding failures surface as a single
    /// [`TranslateError::Json`](crate::error::TranslateError::Json) for the
    /// tool boundary to report.
    pub fn generate_from_json(&self, intent_json: &str) -> TranslateResult<(QueryIntent, String)> {
        let intent: QueryIntent = serde_json::from_str(intent_json)?;
        let query = self.generate(&intent);
        Ok((intent, query))
    }

    /// Full translation: parse, validate, generate, explain.
    ///
    /// Policy rejections come back as a failed outcome carrying the error
    /// list; they are not Rust errors.
    pub fn translate(&self, text: &str) -> TranslationOutcome {
        let request_id = Uuid::new_v4().to_string();
        debug!("[{}] Translating: {}", request_id, text);

        let intent = self.parse(text);
        let check = self.validate(&intent);
        if !check.is_valid {
            debug!("[{}] Rejected by policy: {:?}", request_id, check.errors);
            return TranslationOutcome::rejected(check.errors, request_id);
        }

        let query = self.generate(&intent);
        let explanation = self.explain(&intent);
        info!("[{}] Generated query: {}", request_id, query);

        TranslationOutcome {
            success: true,
            query: Some(query),
            explanation: Some(explanation),
            intent: Some(intent),
            errors: Vec::new(),
            request_id,
        }
    }
}

/// Uniform result envelope for a full translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationOutcome {
    /// Whether the request passed policy and produced a query
    pub success: bool,
    /// The generated ES|QL query on success
    pub query: Option<String>,
    /// Human-readable explanation on success
    pub explanation: Option<String>,
    /// The parsed intent on success
    pub intent: Option<QueryIntent>,
    /// Policy violation messages on rejection
    pub errors: Vec<String>,
    /// Correlation id for tracing
    pub request_id: String,
}

impl TranslationOutcome {
    /// Build a rejection outcome from a policy error list.
    pub fn rejected(errors: Vec<String>, request_id: String) -> Self {
        Self {
            success: false,
            query: None,
            explanation: None,
            intent: None,
            errors,
            request_id,
        }
    }
}
