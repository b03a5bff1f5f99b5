//! The Padlock Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands. It reads the
//! program text, hands it to the parser, and prints the result.

use clap::Parser;
use std::io::{self, Read};
use std::path::Path;
use std::{fs, process};
use termcolor::ColorChoice;

use crate::cli::args::{parse_options, Command, PadlockArgs};
use crate::observer::{Level, NullObserver, ParseObserver, TraceObserver};
use crate::parser::parse_with;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = PadlockArgs::parse();

    match args.command {
        Command::Parse {
            file,
            symbols,
            unrestricted_names,
            json,
            trace,
            verbose,
        } => {
            let source = read_source_or_exit(&file);
            let options = parse_options(symbols, unrestricted_names);

            let mut tracer;
            let mut silent = NullObserver;
            let observer: &mut dyn ParseObserver = if trace {
                let level = if verbose { Level::Debug } else { Level::Info };
                tracer = TraceObserver::new(level, ColorChoice::Auto);
                &mut tracer
            } else {
                &mut silent
            };

            match parse_with(&source, &options, observer) {
                Ok(ast) => {
                    if let Err(e) = output::print_ast(&ast, options.charset, json) {
                        eprintln!("Error writing output: {}", e);
                        process::exit(1);
                    }
                }
                Err(e) => {
                    output::print_error(e.with_source(file.display().to_string(), source));
                    process::exit(1);
                }
            }
        }

        Command::Symbols { symbols } => {
            let table = crate::symbols::SymbolTable::new(symbols.charset());
            if let Err(e) = output::print_symbols(&table) {
                eprintln!("Error writing output: {}", e);
                process::exit(1);
            }
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn read_source_or_exit(path: &Path) -> String {
    let result = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path.display(), e);
        process::exit(1);
    })
}
