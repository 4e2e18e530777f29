//! Command-line front end for the highlighter.
//!
//! Usage:
//!   moonli-highlight [PATH] [--language ID] [--format listing|json] [--flat]
//!   moonli-highlight --list-languages
//!
//! Reads stdin when PATH is absent or `-`. Set `RUST_LOG=debug` for engine logs.

use std::{
    io::{self, Read},
    process,
};

use clap::Parser;
use log::debug;
use moonli_highlight::{
    errors::errors::{Error, ErrorTip},
    output::{read_source, render, Format},
    tokenize_with, Registry, TokenizeOptions,
};

#[derive(Parser, Debug)]
#[command(name = "moonli-highlight", version, about = "Tokenize source text with a highlighting grammar")]
struct Args {
    /// File to tokenize, `-` or nothing for stdin
    path: Option<String>,

    /// Language id of the grammar to use
    #[arg(short, long, default_value = "moonli")]
    language: String,

    /// Output format: listing or json
    #[arg(short, long, default_value = "listing")]
    format: String,

    /// Do not rescan greedy matches for nested tokens
    #[arg(long)]
    flat: bool,

    /// List registered languages and exit
    #[arg(long)]
    list_languages: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let registry = Registry::with_builtin();

    if args.list_languages {
        for language in registry.languages() {
            println!("{}", language);
        }
        return;
    }

    match run(&args, &registry, io::stdin()) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            display_error(&error);
            process::exit(1);
        }
    }
}

fn run<R: Read>(args: &Args, registry: &Registry, stdin: R) -> Result<String, Error> {
    let format = args.format.parse::<Format>()?;
    let grammar = registry.get(&args.language)?;
    let source = read_source(args.path.as_deref(), stdin)?;
    let options = TokenizeOptions {
        rescan_greedy: !args.flat,
    };

    debug!("tokenizing with {:?}", options);
    let tokens = tokenize_with(&grammar, &source, options);

    render(format, &source, &tokens)
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
}
