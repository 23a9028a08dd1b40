//! Command-line interface for clindent
//! This binary computes Clojure indentation for a file or stdin.
//!
//! Usage:
//!   clindent at `<path>` [--cursor `<offset>`] [--format `<format>`]  - Indentation at a cursor
//!   clindent reindent `<path>`                                     - Re-indent a whole document
//!   clindent forms                                                - List built-in body forms

use clap::{Arg, Command};
use clindent::editor::{indentation_at, newline_edit, reindent};
use clindent::indent::forms::BODY_FORMS;
use std::io::Read;

fn main() {
    let matches = Command::new("clindent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for computing Clojure indentation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("at")
                .about("Compute the indentation for a line break at a cursor")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("cursor")
                        .long("cursor")
                        .short('c')
                        .help("Byte offset of the cursor (defaults to the end of the file)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'text', 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("reindent")
                .about("Re-indent a whole document to stdout")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or - for stdin")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("forms").about("List the built-in body-form symbols"))
        .get_matches();

    match matches.subcommand() {
        Some(("at", at_matches)) => {
            let path = at_matches.get_one::<String>("path").unwrap();
            let cursor = at_matches.get_one::<String>("cursor").map(|raw| {
                raw.parse::<usize>().unwrap_or_else(|e| {
                    eprintln!("Invalid cursor offset '{}': {}", raw, e);
                    std::process::exit(1);
                })
            });
            let format = at_matches.get_one::<String>("format").unwrap();
            handle_at_command(path, cursor, format);
        }
        Some(("reindent", reindent_matches)) => {
            let path = reindent_matches.get_one::<String>("path").unwrap();
            handle_reindent_command(path);
        }
        Some(("forms", _)) => {
            handle_forms_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the at command
fn handle_at_command(path: &str, cursor: Option<usize>, format: &str) {
    let source = read_source(path);
    let cursor = cursor.unwrap_or(source.len());

    match format {
        "text" => {
            let indentation = indentation_at(&source, cursor).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", indentation.chars().count());
        }
        "json" => {
            let edit = newline_edit(&source, cursor).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            let output = serde_json::to_string(&edit).unwrap_or_else(|e| {
                eprintln!("Error serializing edit: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the reindent command
fn handle_reindent_command(path: &str) {
    let source = read_source(path);
    print!("{}", reindent(&source));
}

/// Handle the forms command
fn handle_forms_command() {
    let mut forms: Vec<&str> = BODY_FORMS.iter().copied().collect();
    forms.sort_unstable();
    for form in forms {
        println!("{}", form);
    }
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        buffer
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}
