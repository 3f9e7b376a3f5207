//! # ES|QL Query Lint
//!
//! A command-line utility for checking raw ES|QL query strings against the
//! security policy before they are run against a cluster.
//!
//! ## Overview
//!
//! Each argument is checked for:
//! - A leading FROM clause naming an allowed index pattern
//! - Forbidden operations (JOIN, ENRICH)
//! - Relative time bounds within the policy maximum
//! - LIMIT values within the policy maximum
//!
//! Warnings (such as a missing time filter on a non-aggregating query) are
//! printed but do not fail the run; errors do.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin query-lint 'FROM logs-auth-* | WHERE @timestamp >= NOW() - 24h | LIMIT 100'
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Checking query 1...
//!   ✓ Query passes policy checks
//!
//! Lint Summary:
//!   Valid queries: 1
//!   Invalid queries: 0
//! ```
//!
//! ```text
//! Checking query 1...
//!   ❌ Operation 'ENRICH' is not allowed
//!   ⚠ No time filter detected
//! ```

use std::env;
use std::process;

use esql_translator::policy::check_raw_query;

fn main() {
    let queries: Vec<String> = env::args().skip(1).collect();
    if queries.is_empty() {
        eprintln!("Usage: query-lint '<esql-query>' [...]");
        process::exit(2);
    }

    let mut valid = 0usize;
    let mut invalid = 0usize;

    for (position, query) in queries.iter().enumerate() {
        println!("Checking query {}...", position + 1);
        let check = check_raw_query(query);

        if check.is_valid() {
            valid += 1;
            println!("  ✓ Query passes policy checks");
        } else {
            invalid += 1;
            for error in &check.errors {
                println!("  ❌ {error}");
            }
        }
        for warning in &check.warnings {
            println!("  ⚠ {warning}");
        }
        println!();
    }

    println!("Lint Summary:");
    println!("  Valid queries: {valid}");
    println!("  Invalid queries: {invalid}");

    if invalid > 0 {
        process::exit(1);
    }
}
