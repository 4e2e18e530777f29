//! Unit tests for grammar construction and the language registry.

use std::sync::Arc;

use super::{
    grammar::{Grammar, Pattern, RawMatch, Rule},
    moonli,
    registry::{get_language, Registry},
};
use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

fn punctuation_grammar(language: &str) -> Grammar {
    Grammar::builder(language)
        .rule(
            TokenKind::Punctuation,
            Rule::Simple(Pattern::regex("punctuation", "[();]").unwrap()),
        )
        .unwrap()
        .build()
}

#[test]
fn test_invalid_regex_names_the_rule() {
    let error = Pattern::regex("number", "(0x").unwrap_err();

    match error.kind() {
        ErrorImpl::InvalidPattern { rule, .. } => assert_eq!(rule, "number"),
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
}

#[test]
fn test_duplicate_rule_rejected() {
    let result = Grammar::builder("dup")
        .rule(
            TokenKind::Keyword,
            Rule::Simple(Pattern::regex("keyword", r"\bif\b").unwrap()),
        )
        .unwrap()
        .rule(
            TokenKind::Keyword,
            Rule::Simple(Pattern::regex("keyword", r"\belse\b").unwrap()),
        );

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "DuplicateRule");
}

#[test]
fn test_empty_composite_rejected() {
    let result = Grammar::builder("empty").rule(TokenKind::String, Rule::Composite(vec![]));

    assert_eq!(result.err().unwrap().get_error_name(), "EmptyRule");
}

#[test]
fn test_plain_is_reserved() {
    let result = Grammar::builder("plain").rule(
        TokenKind::Plain,
        Rule::Simple(Pattern::regex("plain", ".").unwrap()),
    );

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidPattern");
}

#[test]
fn test_lookbehind_needs_capture_group() {
    let pattern = Pattern::regex("char", "'.'").unwrap().with_lookbehind();
    let result = Grammar::builder("lb").rule(TokenKind::Char, Rule::Simple(pattern));

    assert_eq!(result.err().unwrap().get_error_name(), "InvalidPattern");
}

#[test]
fn test_find_from_reports_lookbehind_context() {
    let pattern = Pattern::regex("char", r"(^|\s)'.'").unwrap().with_lookbehind();

    assert_eq!(
        pattern.find_from("x 'a'", 0),
        Some(RawMatch {
            start: 1,
            context_end: 2,
            end: 5
        })
    );
    assert_eq!(
        pattern.find_from("'a'", 0),
        Some(RawMatch {
            start: 0,
            context_end: 0,
            end: 3
        })
    );
}

#[test]
fn test_find_from_without_lookbehind_keeps_group() {
    let pattern = Pattern::regex("keyword", r"(\b|:)for\b").unwrap();

    assert_eq!(
        pattern.find_from(":for", 0),
        Some(RawMatch {
            start: 0,
            context_end: 0,
            end: 4
        })
    );
}

#[test]
fn test_moonli_static_matches_fresh_build() {
    let fresh = moonli::grammar().unwrap();

    assert_eq!(moonli::MOONLI.kinds(), fresh.kinds());
    assert_eq!(moonli::MOONLI.patterns().len(), fresh.patterns().len());
}

#[test]
fn test_moonli_pattern_entries() {
    let entries = moonli::MOONLI.patterns();

    // comment has two alternatives and string three
    assert_eq!(entries.len(), 13);
    assert_eq!(entries[0].kind, TokenKind::Comment);
    assert_eq!(entries[0].alias, Some("block"));
    assert!(!entries[0].pattern.is_cacheable());
    assert_eq!(entries[1].alias, Some("line"));
    assert_eq!(entries[2].kind, TokenKind::Regex);
    assert_eq!(entries[2].alias, None);
}

#[test]
fn test_registry_with_builtin() {
    let registry = Registry::with_builtin();

    assert!(registry.contains("moonli"));
    assert_eq!(registry.languages(), vec!["moonli"]);
    assert!(Arc::ptr_eq(
        &registry.get("moonli").unwrap(),
        &get_language("moonli").unwrap()
    ));
}

#[test]
fn test_registry_unknown_language() {
    let registry = Registry::new();
    let error = registry.get("moonli").unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownLanguage");
}

#[test]
fn test_registry_register_and_list() {
    let mut registry = Registry::with_builtin();
    registry.register(punctuation_grammar("parens")).unwrap();

    assert_eq!(registry.languages(), vec!["moonli", "parens"]);
    assert_eq!(registry.get("parens").unwrap().language(), "parens");
}

#[test]
fn test_registry_rejects_duplicate_language() {
    let mut registry = Registry::with_builtin();
    let error = registry.register(punctuation_grammar("moonli")).unwrap_err();

    assert_eq!(error.get_error_name(), "LanguageAlreadyRegistered");
}
