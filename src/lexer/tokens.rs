use std::fmt::Display;

use serde::Serialize;

use crate::Span;

/// Token categories a grammar can assign. `Plain` is reserved for text no
/// rule claimed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Plain,

    Comment,
    Regex,
    String,
    Char,
    Keyword,
    Boolean,
    Number,
    Operator,
    Punctuation,
    Constant,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Plain => "plain",
            TokenKind::Comment => "comment",
            TokenKind::Regex => "regex",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Keyword => "keyword",
            TokenKind::Boolean => "boolean",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Constant => "constant",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Name of the composite sub-pattern that produced this token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<&'static str>,
    pub value: String,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.alias {
            Some(alias) => write!(f, "{}/{} {:?}", self.kind, alias, self.value),
            None => write!(f, "{} {:?}", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn is_plain(&self) -> bool {
        self.kind == TokenKind::Plain
    }

    /// Innermost tokens under this one, depth-first. Children partition
    /// their parent, so the leaves cover exactly `self.value`.
    pub fn leaves(&self) -> Vec<&Token> {
        if self.children.is_empty() {
            return vec![self];
        }

        self.children.iter().flat_map(|child| child.leaves()).collect()
    }
}

/// Innermost tokens of a whole token stream, in source order.
pub fn flatten(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter().flat_map(|token| token.leaves()).collect()
}
