//! Handles all user-facing output for the CLI.
//!
//! Colorized tables, AST rendering, and miette error reports live here so
//! every command prints the same way.

use miette::Report;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::Ast;
use crate::errors::PadlockError;
use crate::symbols::{CharSet, SymbolTable};

/// Print the symbol table as aligned rows.
pub fn print_symbols(table: &SymbolTable) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    writeln!(stdout, "{:<8} {:<10} {:>4} {:>8}", "symbol", "instruction", "args", "branches")?;
    stdout.reset()?;
    for (symbol, instruction) in table.entries() {
        writeln!(
            stdout,
            "{:<8} {:<10} {:>4} {:>8}",
            symbol,
            instruction.identifier(),
            instruction.arity(),
            instruction.branches()
        )?;
    }
    Ok(())
}

/// Print the AST, either indented with the given glyphs or as JSON.
pub fn print_ast(ast: &Ast, charset: CharSet, json: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, ast)?;
        writeln!(stdout)
    } else {
        writeln!(stdout, "{}", ast.render(charset))
    }
}

/// Prints a PadlockError with full miette diagnostics
pub fn print_error(error: PadlockError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
