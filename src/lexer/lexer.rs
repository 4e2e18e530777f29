use log::{debug, trace};

use crate::{
    grammar::grammar::{Grammar, PatternEntry, RawMatch},
    Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Rescan greedy matches for nested tokens.
    pub rescan_greedy: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TokenizeOptions {
            rescan_greedy: true,
        }
    }
}

/// Last search result of a regex pattern: searched from `.0`, found `.1`.
type CachedMatch = Option<(usize, Option<RawMatch>)>;

pub struct Lexer<'a> {
    grammar: &'a Grammar,
    patterns: Vec<PatternEntry<'a>>,
    cache: Vec<CachedMatch>,
    /// Rules already matched by an enclosing greedy token.
    excluded: Vec<TokenKind>,
    options: TokenizeOptions,
    tokens: Vec<Token>,
    source: &'a str,
    base: usize,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(grammar: &'a Grammar, source: &'a str, options: TokenizeOptions) -> Lexer<'a> {
        Lexer::nested(grammar, source, options, 0, vec![])
    }

    fn nested(
        grammar: &'a Grammar,
        source: &'a str,
        options: TokenizeOptions,
        base: usize,
        excluded: Vec<TokenKind>,
    ) -> Lexer<'a> {
        let patterns = grammar
            .patterns()
            .into_iter()
            .filter(|entry| !excluded.contains(&entry.kind))
            .collect::<Vec<_>>();

        Lexer {
            grammar,
            cache: vec![None; patterns.len()],
            patterns,
            excluded,
            options,
            tokens: vec![],
            source,
            base,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Appends a token, merging adjacent plain text.
    pub fn push(&mut self, token: Token) {
        if token.is_plain() {
            if let Some(last) = self.tokens.last_mut() {
                if last.is_plain() && last.span.end == token.span.start {
                    last.value.push_str(&token.value);
                    last.span.end = token.span.end;
                    return;
                }
            }
        }

        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: self.base + start,
            end: self.base + end,
        }
    }

    /// Start of the character before the cursor, where a lookbehind context
    /// would begin.
    fn previous_boundary(&self) -> Option<usize> {
        self.source[..self.pos]
            .chars()
            .next_back()
            .map(|ch| self.pos - ch.len_utf8())
    }

    /// Match of pattern `index` starting exactly at `start`. Regex patterns
    /// remember their leftmost match, so positions before it are answered
    /// without searching again.
    fn match_at(&mut self, index: usize, start: usize) -> Option<RawMatch> {
        let pattern = self.patterns[index].pattern;

        if !pattern.is_cacheable() {
            return pattern.find_from(self.source, start);
        }

        if let Some((from, found)) = self.cache[index] {
            if from <= start {
                match found {
                    None => return None,
                    Some(found) if found.start > start => return None,
                    Some(found) if found.start == start => return Some(found),
                    Some(_) => {}
                }
            }
        }

        let found = pattern.find_from(self.source, start);
        self.cache[index] = Some((start, found));
        found.filter(|found| found.start == start)
    }

    /// A token of pattern `index` beginning at the cursor.
    fn token_here(&mut self, index: usize) -> Option<RawMatch> {
        let pos = self.pos;
        let mut starts = vec![];
        if self.patterns[index].pattern.lookbehind {
            starts.extend(self.previous_boundary());
        }
        starts.push(pos);

        starts
            .into_iter()
            .filter_map(|start| self.match_at(index, start))
            .find(|found| found.context_end == pos && found.end > pos)
    }

    fn emit(&mut self, index: usize, found: RawMatch) {
        let entry = self.patterns[index];
        let value = &self.source[found.context_end..found.end];

        trace!(
            "{} matched {:?} at {}",
            entry.kind,
            value,
            self.base + found.context_end
        );

        let children = if entry.pattern.greedy && self.options.rescan_greedy {
            let mut excluded = self.excluded.clone();
            excluded.push(entry.kind);
            let mut inner = Lexer::nested(
                self.grammar,
                value,
                self.options,
                self.base + found.context_end,
                excluded,
            );
            inner.run();
            inner.tokens
        } else {
            vec![]
        };

        let span = self.span(found.context_end, found.end);
        debug_assert!(!span.is_empty());
        self.push(MK_TOKEN!(
            entry.kind,
            String::from(value),
            span,
            entry.alias,
            children
        ));
        self.advance_n(span.len());
    }

    fn run(&mut self) {
        while let Some(ch) = self.at() {
            let matched = (0..self.patterns.len())
                .find_map(|index| self.token_here(index).map(|found| (index, found)));

            match matched {
                Some((index, found)) => self.emit(index, found),
                None => {
                    let span = self.span(self.pos, self.pos + ch.len_utf8());
                    self.push(MK_TOKEN!(TokenKind::Plain, ch.to_string(), span));
                    self.advance_n(ch.len_utf8());
                }
            }
        }
    }

    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

pub fn tokenize(grammar: &Grammar, source: &str) -> Vec<Token> {
    tokenize_with(grammar, source, TokenizeOptions::default())
}

pub fn tokenize_with(grammar: &Grammar, source: &str, options: TokenizeOptions) -> Vec<Token> {
    let mut lex = Lexer::new(grammar, source, options);
    lex.run();

    debug!(
        "tokenized {} bytes of {} into {} tokens",
        source.len(),
        grammar.language(),
        lex.tokens.len()
    );

    lex.finish()
}
