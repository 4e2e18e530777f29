//! Error types and error handling for the highlighter.
//!
//! Tokenizing never fails, so errors come from the edges:
//!
//! - Grammar construction (bad patterns, duplicate or empty rules)
//! - Language registry lookups and registration
//! - The command-line front end (reading input, output formats)

pub mod errors;
