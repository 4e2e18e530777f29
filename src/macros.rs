//! Utility macros for the highlighter.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Compiles a regex pattern and sets its flags
//!
//! These macros reduce boilerplate in the lexer and the grammar tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text
/// * `$span` - The source span
/// * `$alias` - Optional composite sub-pattern name
/// * `$children` - Nested tokens of a greedy match
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            alias: None,
            value: $value,
            span: $span,
            children: vec![],
        }
    };
    ($kind:expr, $value:expr, $span:expr, $alias:expr, $children:expr) => {
        Token {
            kind: $kind,
            alias: $alias,
            value: $value,
            span: $span,
            children: $children,
        }
    };
}

/// Compiles a regex into a `Pattern`, returning early with the rule name on
/// a compile error, and turns on the listed flags.
///
/// # Example
///
/// ```ignore
/// let char_literal = MK_PATTERN!(TokenKind::Char, CHAR, lookbehind, greedy);
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $source:expr $(, $flag:ident)*) => {{
        #[allow(unused_mut)]
        let mut pattern = Pattern::regex($kind.as_str(), $source)?;
        $( pattern.$flag = true; )*
        pattern
    }};
}
