use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

/// Hand-written matcher for shapes the `regex` crate cannot express.
/// Must only report a match that starts exactly at `start`.
pub type ScanFn = fn(source: &str, start: usize) -> Option<RawMatch>;

/// A match in byte offsets. `start..context_end` is lookbehind context,
/// `context_end..end` is the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    pub start: usize,
    pub context_end: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(Regex),
    Scan(ScanFn),
}

#[derive(Debug, Clone)]
pub struct Pattern {
    pub matcher: Matcher,
    /// Capture group 1 is context preceding the token, not part of it.
    pub lookbehind: bool,
    /// The matched span is rescanned for nested tokens.
    pub greedy: bool,
}

impl Pattern {
    pub fn regex(rule: &str, source: &str) -> Result<Pattern, Error> {
        let regex = Regex::new(source).map_err(|err| ErrorImpl::InvalidPattern {
            rule: rule.to_string(),
            message: err.to_string(),
        })?;

        Ok(Pattern {
            matcher: Matcher::Regex(regex),
            lookbehind: false,
            greedy: false,
        })
    }

    pub fn scanner(scan: ScanFn) -> Pattern {
        Pattern {
            matcher: Matcher::Scan(scan),
            lookbehind: false,
            greedy: false,
        }
    }

    pub fn with_lookbehind(mut self) -> Self {
        self.lookbehind = true;
        self
    }

    /// Regex patterns return the leftmost match at or after `from`; scanners
    /// only ever look at `from` itself.
    pub fn find_from(&self, source: &str, from: usize) -> Option<RawMatch> {
        match &self.matcher {
            Matcher::Regex(regex) => {
                let captures = regex.captures_at(source, from)?;
                let whole = captures.get(0)?;
                let context_end = if self.lookbehind {
                    captures.get(1).map_or(whole.start(), |context| context.end())
                } else {
                    whole.start()
                };

                Some(RawMatch {
                    start: whole.start(),
                    context_end,
                    end: whole.end(),
                })
            }
            Matcher::Scan(scan) => scan(source, from),
        }
    }

    pub fn is_cacheable(&self) -> bool {
        matches!(self.matcher, Matcher::Regex(_))
    }

    fn validate(&self, rule: &str) -> Result<(), Error> {
        if let Matcher::Regex(regex) = &self.matcher {
            if self.lookbehind && regex.captures_len() < 2 {
                return Err(ErrorImpl::InvalidPattern {
                    rule: rule.to_string(),
                    message: String::from("lookbehind pattern needs a capture group for its context"),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    Simple(Pattern),
    /// Named alternatives, tried in order.
    Composite(Vec<(&'static str, Pattern)>),
}

impl Rule {
    pub fn patterns(&self) -> Vec<(Option<&'static str>, &Pattern)> {
        match self {
            Rule::Simple(pattern) => vec![(None, pattern)],
            Rule::Composite(patterns) => patterns
                .iter()
                .map(|(name, pattern)| (Some(*name), pattern))
                .collect(),
        }
    }
}

/// A pattern together with the rule it belongs to, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct PatternEntry<'g> {
    pub kind: TokenKind,
    pub alias: Option<&'static str>,
    pub pattern: &'g Pattern,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    language: String,
    rules: Vec<(TokenKind, Rule)>,
}

impl Grammar {
    pub fn builder(language: &str) -> GrammarBuilder {
        GrammarBuilder {
            language: language.to_string(),
            rules: vec![],
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get(&self, kind: TokenKind) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(rule_kind, _)| *rule_kind == kind)
            .map(|(_, rule)| rule)
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.rules.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn patterns(&self) -> Vec<PatternEntry<'_>> {
        self.rules
            .iter()
            .flat_map(|(kind, rule)| {
                rule.patterns()
                    .into_iter()
                    .map(move |(alias, pattern)| PatternEntry {
                        kind: *kind,
                        alias,
                        pattern,
                    })
            })
            .collect()
    }
}

pub struct GrammarBuilder {
    language: String,
    rules: Vec<(TokenKind, Rule)>,
}

impl GrammarBuilder {
    pub fn rule(mut self, kind: TokenKind, rule: Rule) -> Result<Self, Error> {
        if kind == TokenKind::Plain {
            return Err(ErrorImpl::InvalidPattern {
                rule: kind.to_string(),
                message: String::from("plain is reserved for unmatched text"),
            }
            .into());
        }

        if self.rules.iter().any(|(existing, _)| *existing == kind) {
            return Err(ErrorImpl::DuplicateRule {
                rule: kind.to_string(),
            }
            .into());
        }

        if let Rule::Composite(patterns) = &rule {
            if patterns.is_empty() {
                return Err(ErrorImpl::EmptyRule {
                    rule: kind.to_string(),
                }
                .into());
            }
        }

        for (_, pattern) in rule.patterns() {
            pattern.validate(kind.as_str())?;
        }

        self.rules.push((kind, rule));
        Ok(self)
    }

    pub fn build(self) -> Grammar {
        debug!(
            "built grammar {:?} with {} rules",
            self.language,
            self.rules.len()
        );

        Grammar {
            language: self.language,
            rules: self.rules,
        }
    }
}
