//! Token table for moonli, a Lisp with Julia-flavoured surface syntax.
//!
//! Comments, strings, characters and numbers follow Julia's lexical rules;
//! the keywords are the Common Lisp definition and control forms moonli
//! exposes.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::{errors::errors::Error, lexer::tokens::TokenKind, MK_PATTERN};

use super::grammar::{Grammar, Pattern, RawMatch, Rule};

pub const LANGUAGE: &str = "moonli";

// Word boundaries and word characters are ASCII only, so a letter such as
// `é` separates words the way punctuation does.

const COMMENT_LINE: &str = r"(^|[^\\])#[^\n\r\x{2028}\x{2029}]*";

const REGEX: &str = r#"r"(?:\\[^\n\r\x{2028}\x{2029}]|[^"\\\r\n])*"[imsx]{0,4}"#;

const STRING_TRIPLE: &str = r##""""[\s\S]+?""""##;
const STRING_PREFIXED: &str = r#"(?:(?-u:\b)[0-9A-Za-z_]+)?"(?:\\[^\n\r\x{2028}\x{2029}]|[^"\\\r\n])*""#;
const STRING_COMMAND: &str = r"`(?:[^\\`\r\n]|\\[^\n\r\x{2028}\x{2029}])*`";

const CHAR: &str = r"(^|[^0-9A-Za-z_'])'(?:\\[^\r\n][^'\r\n]*|[^\\\r\n])'";

const KEYWORD: &str = r"((?-u:\b)|:)(?:defparameter|defvar|defun|let|let\+|defconstant|loop|do|else|elif|declare|type|declaim|optimize|ifelse|end|in-package|finally|for|if|locally|defmacro|print|format|quote|return|defstruct|lambda|lm|inline|&values|&optional|&rest|&key)(?-u:\b)";

const BOOLEAN: &str = r"(?-u:\b)(?:nil|t)(?-u:\b)";

// Either a word boundary before a digit (optionally a 0b/0o/0x prefix), or a
// non-boundary before a leading dot.
const NUMBER: &str = concat!(
    r"(?i)(?:",
    r"(?-u:\b)(?:0[box](?:[0-9a-f]+(?:_[0-9a-f]+)*(?:\.(?:[0-9]+(?:_[0-9]+)*)?)?|\.[0-9]+(?:_[0-9]+)*)",
    r"|[0-9][0-9a-f]*(?:_[0-9a-f]+)*(?:\.(?:[0-9]+(?:_[0-9]+)*)?)?)",
    r"|(?-u:\B)\.[0-9]+(?:_[0-9]+)*",
    r")(?:[efp][+-]?[0-9]+(?:_[0-9]+)*)?j?",
);

const OPERATOR: &str = r"(?-u:\b)[-+*/^&|<>]|==(?-u:\b)";

const PUNCTUATION: &str = r"[{}\[\]():;,]";

const CONSTANT: &str = r"(?-u:\b)(?:(?:Inf|NaN)(?:16|32|64)?|im|pi)(?-u:\b)|[πℯ]";

lazy_static! {
    pub static ref MOONLI: Arc<Grammar> =
        Arc::new(grammar().expect("moonli patterns are valid regular expressions"));
}

pub fn grammar() -> Result<Grammar, Error> {
    let comment = Rule::Composite(vec![
        ("block", Pattern::scanner(block_comment).with_lookbehind()),
        ("line", MK_PATTERN!(TokenKind::Comment, COMMENT_LINE, lookbehind)),
    ]);

    let string = Rule::Composite(vec![
        ("triple-quoted", MK_PATTERN!(TokenKind::String, STRING_TRIPLE, greedy)),
        ("prefixed", MK_PATTERN!(TokenKind::String, STRING_PREFIXED, greedy)),
        ("command", MK_PATTERN!(TokenKind::String, STRING_COMMAND, greedy)),
    ]);

    Ok(Grammar::builder(LANGUAGE)
        .rule(TokenKind::Comment, comment)?
        .rule(TokenKind::Regex, Rule::Simple(MK_PATTERN!(TokenKind::Regex, REGEX, greedy)))?
        .rule(TokenKind::String, string)?
        .rule(
            TokenKind::Char,
            Rule::Simple(MK_PATTERN!(TokenKind::Char, CHAR, lookbehind, greedy)),
        )?
        .rule(TokenKind::Keyword, Rule::Simple(MK_PATTERN!(TokenKind::Keyword, KEYWORD)))?
        .rule(TokenKind::Boolean, Rule::Simple(MK_PATTERN!(TokenKind::Boolean, BOOLEAN)))?
        .rule(TokenKind::Number, Rule::Simple(MK_PATTERN!(TokenKind::Number, NUMBER)))?
        .rule(TokenKind::Operator, Rule::Simple(MK_PATTERN!(TokenKind::Operator, OPERATOR)))?
        .rule(
            TokenKind::Punctuation,
            Rule::Simple(MK_PATTERN!(TokenKind::Punctuation, PUNCTUATION)),
        )?
        .rule(TokenKind::Constant, Rule::Simple(MK_PATTERN!(TokenKind::Constant, CONSTANT)))?
        .build())
}

/// `#= ... =#` not preceded by a backslash. The context is either the start
/// of input or the single character at `start`.
fn block_comment(source: &str, start: usize) -> Option<RawMatch> {
    let bytes = source.as_bytes();

    if start == 0 {
        if let Some(end) = scan_block(bytes, 0, true) {
            return Some(RawMatch {
                start,
                context_end: 0,
                end,
            });
        }
    }

    let context = source.get(start..)?.chars().next()?;
    if context == '\\' {
        return None;
    }

    let context_end = start + context.len_utf8();
    let end = scan_block(bytes, context_end, true)?;

    Some(RawMatch {
        start,
        context_end,
        end,
    })
}

/// Returns the end of the block opened at `at`. Inside a block, `#=` opens
/// one nested block; a second level of nesting fails the whole match.
fn scan_block(bytes: &[u8], at: usize, allow_nested: bool) -> Option<usize> {
    if !bytes.get(at..)?.starts_with(b"#=") {
        return None;
    }

    let mut i = at + 2;
    loop {
        match (bytes.get(i), bytes.get(i + 1)) {
            (None, _) => return None,
            (Some(b'='), Some(b'#')) => return Some(i + 2),
            (Some(b'#'), Some(b'=')) => {
                if !allow_nested {
                    return None;
                }
                i = scan_block(bytes, i, false)?;
            }
            _ => i += 1,
        }
    }
}
