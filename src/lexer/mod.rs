//! Tokenizing engine.
//!
//! Applies a grammar to source text and partitions it into labeled tokens:
//!
//! - Rules are tried in declared order at every position, first match wins
//! - Lookbehind patterns check the character before the cursor as context
//! - Greedy matches are rescanned for nested tokens
//! - Text no rule claims becomes `plain`, merged into runs

pub mod lexer;
pub mod tokens;
