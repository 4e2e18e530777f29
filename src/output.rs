//! Rendering token streams for the command line.
//!
//! The listing prints one line per top-level token, with the non-plain
//! children of greedy tokens indented beneath their parent.

use std::{
    fs::read_to_string,
    io::Read,
    str::FromStr,
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    get_line_at_position,
    lexer::tokens::Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Listing,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "listing" => Ok(Format::Listing),
            "json" => Ok(Format::Json),
            other => Err(ErrorImpl::UnknownFormat {
                format: other.to_string(),
            }
            .into()),
        }
    }
}

pub fn render(format: Format, source: &str, tokens: &[Token]) -> Result<String, Error> {
    match format {
        Format::Listing => Ok(listing(source, tokens)),
        Format::Json => serde_json::to_string_pretty(tokens).map_err(|err| {
            ErrorImpl::SerializeError {
                message: err.to_string(),
            }
            .into()
        }),
    }
}

/// `line:column kind[/alias] "value"` per token. Whitespace-only plain runs
/// are skipped; nested lines show only non-plain children.
pub fn listing(source: &str, tokens: &[Token]) -> String {
    let mut lines = vec![];

    for token in tokens {
        if token.is_plain() && token.value.trim().is_empty() {
            continue;
        }
        push_lines(source, token, 0, &mut lines);
    }

    lines.join("\n")
}

fn push_lines(source: &str, token: &Token, depth: usize, lines: &mut Vec<String>) {
    let (line, _, column) =
        get_line_at_position(source, token.span.start).unwrap_or((0, String::new(), 0));
    lines.push(format!("{}{}:{} {}", "  ".repeat(depth), line, column + 1, token));

    for child in token.children.iter().filter(|child| !child.is_plain()) {
        push_lines(source, child, depth + 1, lines);
    }
}

/// Reads `path`, or `stdin` when no path or `-` is given.
pub fn read_source<R: Read>(path: Option<&str>, mut stdin: R) -> Result<String, Error> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            stdin
                .read_to_string(&mut source)
                .map_err(|err| ErrorImpl::ReadError {
                    path: String::from("<stdin>"),
                    message: err.to_string(),
                })?;
            Ok(source)
        }
        Some(path) => read_to_string(path).map_err(|err| {
            ErrorImpl::ReadError {
                path: path.to_string(),
                message: err.to_string(),
            }
            .into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        grammar::moonli::MOONLI,
        lexer::lexer::{tokenize, tokenize_with, TokenizeOptions},
    };

    const MIXED: &str = "(print \"for\" x) # done\n'a' r\"ab\"im";

    #[test]
    fn test_listing_reports_outer_kinds() {
        let source = "\"hello\" 'a' r\"ab\"im";
        let listed = listing(source, &tokenize(&MOONLI, source));

        assert_eq!(
            listed,
            [
                r#"1:1 string/prefixed "\"hello\"""#,
                r#"1:9 char "'a'""#,
                r#"1:13 regex "r\"ab\"im""#,
                r#"  1:13 string/prefixed "r\"ab\"""#,
                r#"  1:18 constant "im""#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_listing_mixed_input() {
        let listed = listing(MIXED, &tokenize(&MOONLI, MIXED));

        assert_eq!(
            listed,
            [
                r#"1:1 punctuation "(""#,
                r#"1:2 keyword "print""#,
                r#"1:8 string/prefixed "\"for\"""#,
                r#"  1:9 keyword "for""#,
                r#"1:13 plain " x""#,
                r#"1:15 punctuation ")""#,
                r##"1:17 comment/line "# done""##,
                r#"2:1 char "'a'""#,
                r#"2:5 regex "r\"ab\"im""#,
                r#"  2:5 string/prefixed "r\"ab\"""#,
                r#"  2:10 constant "im""#,
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_listing_skips_whitespace_runs() {
        let source = "  nil \n\t t  ";
        let listed = listing(source, &tokenize(&MOONLI, source));

        assert_eq!(listed, "1:3 boolean \"nil\"\n2:3 boolean \"t\"");
    }

    #[test]
    fn test_flat_listing_has_no_nested_lines() {
        let tokens = tokenize_with(
            &MOONLI,
            MIXED,
            TokenizeOptions {
                rescan_greedy: false,
            },
        );
        let listed = listing(MIXED, &tokens);

        assert!(listed.lines().all(|line| !line.starts_with(' ')));
        assert!(listed.contains(r#"2:5 regex "r\"ab\"im""#));
    }

    #[test]
    fn test_json_includes_children() {
        let source = "\"t\"";
        let rendered = render(Format::Json, source, &tokenize(&MOONLI, source)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "kind": "string",
                    "alias": "prefixed",
                    "value": "\"t\"",
                    "span": { "start": 0, "end": 3 },
                    "children": [
                        { "kind": "plain", "value": "\"", "span": { "start": 0, "end": 1 } },
                        { "kind": "boolean", "value": "t", "span": { "start": 1, "end": 2 } },
                        { "kind": "plain", "value": "\"", "span": { "start": 2, "end": 3 } },
                    ]
                }
            ])
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("listing".parse::<Format>().unwrap(), Format::Listing);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);

        let error = "html".parse::<Format>().unwrap_err();
        assert_eq!(error.get_error_name(), "UnknownFormat");
    }

    #[test]
    fn test_read_source_from_stdin() {
        assert_eq!(read_source(None, Cursor::new("(let)")).unwrap(), "(let)");
        assert_eq!(read_source(Some("-"), Cursor::new("nil")).unwrap(), "nil");
    }

    #[test]
    fn test_read_source_missing_file() {
        let error = read_source(Some("does/not/exist.moonli"), Cursor::new("")).unwrap_err();

        assert_eq!(error.get_error_name(), "ReadError");
    }
}
