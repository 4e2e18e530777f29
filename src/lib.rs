#![allow(clippy::module_inception)]

use serde::Serialize;

pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod output;

pub use grammar::{
    grammar::{Grammar, Pattern, Rule},
    moonli::MOONLI,
    registry::{get_language, Registry},
};
pub use lexer::{
    lexer::{tokenize, tokenize_with, TokenizeOptions},
    tokens::{Token, TokenKind},
};

/// Byte range into the tokenized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the line's text and the byte column of
/// `position` within it.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}
