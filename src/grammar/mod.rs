//! Grammar tables for the highlighter.
//!
//! A grammar is an ordered list of token rules. Each rule is a single
//! pattern or a composite of named patterns; earlier rules win when more
//! than one could start a token at the same position. Tables are built once
//! and shared read-only.
//!
//! - `grammar` - pattern, rule and grammar types plus the builder
//! - `moonli` - the moonli token table
//! - `registry` - grammars keyed by language id

pub mod grammar;
pub mod moonli;
pub mod registry;

#[cfg(test)]
mod tests;
