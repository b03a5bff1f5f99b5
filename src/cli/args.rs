//! Defines the command-line arguments and subcommands for the Padlock CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{NameMode, ParseOptions};
use crate::symbols::CharSet;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "padlock",
    version,
    about = "Parse Padlock programs into their fork/join syntax tree."
)]
pub struct PadlockArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Character-set switch shared by subcommands.
#[derive(Debug, Clone, Copy, Args)]
pub struct SymbolFlags {
    /// Use single-letter ASCII symbols (N S K P E R) instead of lock glyphs.
    #[arg(long)]
    pub plain: bool,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a program and print its AST.
    Parse {
        /// The Padlock source file, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
        #[command(flatten)]
        symbols: SymbolFlags,
        /// Allow any non-whitespace character inside names.
        #[arg(long)]
        unrestricted_names: bool,
        /// Print the AST as JSON instead of the indented rendering.
        #[arg(long)]
        json: bool,
        /// Trace tokenizer decisions to stderr.
        #[arg(long)]
        trace: bool,
        /// With --trace, include per-character debug events.
        #[arg(long, requires = "trace")]
        verbose: bool,
    },
    /// Print the active symbol table.
    Symbols {
        #[command(flatten)]
        symbols: SymbolFlags,
    },
}

impl SymbolFlags {
    pub fn charset(&self) -> CharSet {
        if self.plain {
            CharSet::Plain
        } else {
            CharSet::Visual
        }
    }
}

/// Build parse options from the `parse` subcommand flags.
pub fn parse_options(symbols: SymbolFlags, unrestricted_names: bool) -> ParseOptions {
    let names = if unrestricted_names {
        NameMode::Unrestricted
    } else {
        NameMode::Restricted
    };
    ParseOptions::new()
        .with_charset(symbols.charset())
        .with_names(names)
}
