//! Structured query intent model.
//!
//! A [`QueryIntent`] is the intermediate representation between a free-text
//! request and a rendered ES|QL string. It is rebuilt per request, carries
//! no cross-request state, and serializes to a stable snake_case JSON shape
//! so callers can supply intents directly as structured input.
//!
//! # Key Types
//!
//! - [`QueryIntent`] - The intent itself (category, outcome, time range,
//!   filters, aggregation, index pattern, limit)
//! - [`FilterClause`] - A single `field operator value` condition
//! - [`Aggregation`] - Optional stats aggregation with group-by fields
//! - [`QueryIntentBuilder`] - Fluent construction for programmatic callers

mod builder;
mod types;

pub use builder::QueryIntentBuilder;
pub use types::{Aggregation, FilterClause, QueryIntent};

#[cfg(test)]
mod tests;
