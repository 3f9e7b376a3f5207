//! Transport-agnostic translation pipeline.
//!
//! Chains parse, validate, generate, and explain into one call and wraps
//! every result in a uniform [`TranslationOutcome`] envelope: a success
//! flag, the payload on success, and the policy error list on rejection.
//! No unhandled fault crosses this boundary.
//!
//! # Examples
//!
//! ```rust
//! use esql_translator::translator::QueryTranslator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let translator = QueryTranslator::new()?;
//! let outcome = translator.translate("Show failed logins from the last 24 hours");
//! assert!(outcome.success);
//! assert!(outcome.query.unwrap().starts_with("FROM logs-auth-*"));
//! # Ok(())
//! # }
//! ```

mod core;

pub use core::{QueryTranslator, TranslationOutcome};

#[cfg(test)]
mod tests;
