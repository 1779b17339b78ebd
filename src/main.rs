//! Read-print loop and script runner for snake-lisp.
//!
//! Run interactively with `snake-lisp`, or evaluate a file with
//! `snake-lisp path/to/file.lisp`. Logging is controlled through RUST_LOG.

use clap::{App, Arg};
use colored::*;
use log::LevelFilter;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::fs;
use std::process;

use snake_lisp::ast::Node;
use snake_lisp::error::Error;
use snake_lisp::parser::ParseIter;
use snake_lisp::token::{TokenKind, Tokenizer};
use snake_lisp::{evaluate, make_global_environment, tokenize, Environment};

mod cli_helper;

use self::cli_helper::CliHelper;


const PROMPT: &str = "snake-lisp> ";

#[derive(Clone, Copy)]
enum Mode {
    Evaluate,
    DumpTokens,
    DumpAst,
}


fn main() -> Result<(), String> {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("snake-lisp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimal S-expression interpreter")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Source file to evaluate instead of starting the loop"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Don't print the banner and goodbye text"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .takes_value(true)
                .possible_values(["tokens", "ast"])
                .help("Print tokens or syntax trees instead of evaluating"),
        )
        .get_matches();

    let mode = match matches.value_of("dump") {
        Some("tokens") => Mode::DumpTokens,
        Some("ast") => Mode::DumpAst,
        _ => Mode::Evaluate,
    };
    let env = make_global_environment();

    match matches.value_of("file") {
        Some(path) => file_run(path, mode, &env),
        None => {
            interactive_loop(mode, &env, matches.is_present("quiet"));
            Ok(())
        }
    }
}

fn file_run(path: &str, mode: Mode, env: &Environment) -> Result<(), String> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => return Err(format!("Reading {} failed: {}", path, err)),
    };

    let nodes = match read_forms(&source) {
        Ok(nodes) => nodes,
        Err(err) => {
            print_error(&err);
            process::exit(1);
        }
    };
    if let Err(err) = process_forms(&source, nodes, mode, env) {
        print_error(&err);
        process::exit(1);
    }
    Ok(())
}

fn interactive_loop(mode: Mode, env: &Environment, quiet: bool) {
    let mut editor = Editor::<CliHelper>::new();
    editor.set_helper(Some(CliHelper::new(env)));

    if !quiet {
        println!(
            "{} {} {}",
            "snake-lisp".bold(),
            env!("CARGO_PKG_VERSION"),
            "(Ctrl-D to exit)".dimmed()
        );
    }

    let mut pending = String::new();
    loop {
        let prompt = if pending.is_empty() {
            PROMPT.to_string()
        } else {
            format!("..{}", "  ".repeat(depth(&pending)))
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                if pending.is_empty() && line.trim().is_empty() {
                    continue;
                }
                if !pending.is_empty() {
                    pending.push('\n');
                }
                pending.push_str(&line);

                let nodes = match read_forms(&pending) {
                    Ok(nodes) => nodes,
                    // Keep reading until the entry is balanced.
                    Err(err) if err.is_incomplete() => continue,
                    Err(err) => {
                        editor.add_history_entry(pending.as_str());
                        pending.clear();
                        print_error(&err);
                        continue;
                    }
                };
                editor.add_history_entry(pending.as_str());
                let entry = std::mem::take(&mut pending);
                if let Err(err) = process_forms(&entry, nodes, mode, env) {
                    print_error(&err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                if pending.is_empty() {
                    break;
                }
                // Enable ^C to cancel an entry mid-form.
                pending.clear();
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("{} {}", "Error:".red().bold(), err);
                break;
            }
        }
    }

    if !quiet {
        println!("{}", "Goodbye.".dimmed());
    }
}


// All top-level forms of |source|, or the first tokenize/parse failure.
fn read_forms(source: &str) -> Result<Vec<Node>, Error> {
    let tokens = tokenize(source)?;
    let nodes = ParseIter::from_tokens(&tokens).collect::<Result<Vec<_>, _>>()?;
    Ok(nodes)
}

fn process_forms(
    source: &str,
    nodes: Vec<Node>,
    mode: Mode,
    env: &Environment,
) -> Result<(), Error> {
    match mode {
        Mode::DumpTokens => {
            for token in tokenize(source)? {
                println!("{}", token);
            }
        }
        Mode::DumpAst => {
            for node in nodes {
                println!("{}", node);
            }
        }
        Mode::Evaluate => {
            for node in nodes {
                let value = evaluate(&node, env)?;
                if !value.is_absent() {
                    println!("{} {}", "⇒".green(), value);
                }
            }
        }
    }
    Ok(())
}

fn print_error(err: &Error) {
    println!("{} {}", "Error:".red().bold(), err);
}

// Unclosed parens in |source|, for the continuation prompt.
fn depth(source: &str) -> usize {
    let mut depth: usize = 0;
    for token in Tokenizer::new(source).filter_map(Result::ok) {
        match token.kind() {
            TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depth
}
