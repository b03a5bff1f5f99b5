//! Padlock
//!
//! Front-end parser for Padlock, a six-instruction language describing a tree
//! of forking, named, communicating process branches. Parsing turns a flat
//! character stream into an [`Ast`] recording the fork/join topology.
//!
//! ```
//! use padlock::{parse, ParseOptions};
//!
//! let ast = parse("S N N", &ParseOptions::plain()).unwrap();
//! assert_eq!(ast.render(padlock::CharSet::Plain), "S \n  N \n  N ");
//! ```

pub mod ast;
pub mod cli;
pub mod config;
pub mod errors;
pub mod observer;
pub mod parser;
pub mod symbols;

pub use crate::ast::{Ast, Branch, Directive, Element};
pub use crate::config::{NameMode, ParseOptions};
pub use crate::errors::{EofContext, ErrorKind, PadlockError, ParseResult};
pub use crate::observer::{EventLog, Level, NullObserver, ParseEvent, ParseObserver, Region};
pub use crate::parser::{parse, parse_with, Parser, State};
pub use crate::symbols::{CharSet, Instruction, SymbolTable};
