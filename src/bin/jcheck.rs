//! Command-line interface for jcheck
//!
//! Reads one JSON document from a file, checks its syntax, and prints the
//! verdict `true` or `false` on stdout. The reason for a rejection goes to
//! stderr, never mixed into the verdict stream.
//!
//! Usage:
//!   jcheck `<path>`                      - Check a document, print the verdict
//!   jcheck `<path>` --format tokens      - Dump the token stream as JSON

use clap::{Arg, Command};

fn main() {
    let matches = Command::new("jcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A syntax checker for JSON documents")
        .arg(
            Arg::new("path")
                .help("Path to the document to check")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format ('verdict' or 'tokens')")
                .default_value("verdict"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match format.as_str() {
        "verdict" => {
            let tokens = jcheck::tokenize(&source);
            match jcheck::check(&tokens) {
                Ok(()) => println!("true"),
                Err(rejection) => {
                    eprintln!("{}", rejection);
                    println!("false");
                }
            }
        }
        "tokens" => {
            let tokens = jcheck::tokenize(&source);
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error serializing tokens: {}", e);
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
