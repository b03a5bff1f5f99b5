//! Padlock Parser
//!
//! A single-pass, character-at-a-time state machine. The tokenizer classifies
//! each character against the active symbol table and places instructions and
//! names into the AST through a cursor path of `Directive`s. Closing a branch
//! walks the cursor upward past every finished sibling pair, which visits the
//! binary fork tree in post-order without any parent links.

use miette::SourceSpan;

use crate::ast::{Ast, Branch, Directive, Element};
use crate::config::ParseOptions;
use crate::errors::{EofContext, PadlockError, ParseResult};
use crate::observer::{NullObserver, ParseEvent, ParseObserver, Region};
use crate::symbols::{Instruction, SymbolTable};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse Padlock source into an AST.
pub fn parse(input: &str, options: &ParseOptions) -> ParseResult<Ast> {
    parse_with(input, options, &mut NullObserver)
}

/// Parse Padlock source, reporting every tokenizer step to `observer`.
pub fn parse_with(
    input: &str,
    options: &ParseOptions,
    observer: &mut dyn ParseObserver,
) -> ParseResult<Ast> {
    let mut parser = Parser::new(*options, observer);
    for ch in input.chars() {
        parser.feed(ch)?;
    }
    parser.finish()
}

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Expecting an instruction symbol.
    AwaitInstruction,
    /// Inside the name arguments of the current instruction.
    CollectingName,
    /// Every branch is closed; only ignorable characters may follow.
    PostProgram,
}

/// An in-progress parse. Owns the AST under construction along with the
/// cursor path and name buffer, none of which outlive the parse.
pub struct Parser<'o> {
    options: ParseOptions,
    table: SymbolTable,
    state: State,
    ast: Ast,
    cursor: Vec<Directive>,
    name: String,
    name_count: usize,
    instruction: Instruction,
    offset: usize,
    byte: usize,
    failed: Option<PadlockError>,
    observer: &'o mut dyn ParseObserver,
}

impl<'o> Parser<'o> {
    pub fn new(options: ParseOptions, observer: &'o mut dyn ParseObserver) -> Self {
        observer.event(&ParseEvent::Start);
        Self {
            options,
            table: options.symbol_table(),
            state: State::AwaitInstruction,
            ast: Ast::new(),
            cursor: Vec::new(),
            name: String::new(),
            name_count: 0,
            instruction: Instruction::Nil,
            offset: 0,
            byte: 0,
            failed: None,
            observer,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The directives locating the branch currently receiving elements.
    pub fn cursor(&self) -> &[Directive] {
        &self.cursor
    }

    /// Characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Consume one character. After the first error every call returns
    /// that same error.
    pub fn feed(&mut self, ch: char) -> ParseResult<()> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        let result = match self.state {
            State::AwaitInstruction => self.await_instruction(ch),
            State::CollectingName => self.collect_name(ch),
            State::PostProgram => self.post_program(ch),
        };
        self.offset += 1;
        self.byte += ch.len_utf8();
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    /// End of input. Succeeds only once the program has terminated.
    pub fn finish(self) -> ParseResult<Ast> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        match self.state {
            State::PostProgram => Ok(self.ast),
            State::AwaitInstruction => Err(PadlockError::unexpected_eof(
                EofContext::AwaitingInstruction,
                self.offset,
                self.byte,
            )),
            State::CollectingName => Err(PadlockError::unexpected_eof(
                EofContext::InName,
                self.offset,
                self.byte,
            )),
        }
    }

    // ------------------------------------------------------------------------
    // State handlers
    // ------------------------------------------------------------------------

    fn await_instruction(&mut self, ch: char) -> ParseResult<()> {
        let Some(instruction) = self.table.resolve(ch) else {
            self.ignore(ch, Region::ProgramBody);
            return Ok(());
        };

        self.emit(ParseEvent::Instruction {
            offset: self.offset,
            instruction,
        });
        self.append(instruction, ch)?;
        self.instruction = instruction;
        self.name_count = 0;

        if instruction.arity() > 0 {
            self.state = State::CollectingName;
        }
        if instruction.is_split() {
            self.emit(ParseEvent::Branching {
                offset: self.offset,
            });
            self.append(Branch::new(), ch)?;
            self.append(Branch::new(), ch)?;
            self.cursor.push(Directive::FirstBranch);
        } else if instruction.is_terminator() {
            self.close_branch();
        }
        Ok(())
    }

    fn collect_name(&mut self, ch: char) -> ParseResult<()> {
        if ch != self.table.delimiter() {
            if self.options.accepts_name_char(ch) {
                self.emit(ParseEvent::NameChar {
                    offset: self.offset,
                    ch,
                });
                self.name.push(ch);
            } else {
                self.ignore(ch, Region::Name);
            }
            return Ok(());
        }

        self.name_count += 1;
        let arity = self.instruction.arity();
        if self.name_count > arity {
            return Err(PadlockError::invalid_argument_count(
                self.instruction,
                self.name_count,
                self.offset,
                self.char_span(ch),
            ));
        }

        let name = std::mem::take(&mut self.name);
        let last = self.name_count == arity;
        self.emit(ParseEvent::NamePushed {
            offset: self.offset,
            name: name.clone(),
            last,
        });
        self.append(Element::Name(name), ch)?;
        if last {
            self.state = State::AwaitInstruction;
        }
        Ok(())
    }

    fn post_program(&mut self, ch: char) -> ParseResult<()> {
        match self.table.resolve(ch) {
            Some(instruction) => Err(PadlockError::invalid_symbol(
                ch,
                instruction,
                self.offset,
                self.byte,
            )),
            None => {
                self.ignore(ch, Region::AfterProgram);
                Ok(())
            }
        }
    }

    /// Close the current branch after a terminator.
    ///
    /// Pops every trailing `SecondBranch` (finished pairs), then either ends
    /// the program or moves the innermost open split into its second branch.
    fn close_branch(&mut self) {
        while self.cursor.last() == Some(&Directive::SecondBranch) {
            self.cursor.pop();
        }
        match self.cursor.last_mut() {
            None => {
                self.state = State::PostProgram;
                self.emit(ParseEvent::ProgramEnd {
                    offset: self.offset,
                });
            }
            Some(last) => {
                *last = Directive::SecondBranch;
                self.emit(ParseEvent::EnterSecondBranch {
                    offset: self.offset,
                });
            }
        }
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn append(&mut self, value: impl Into<Element>, ch: char) -> ParseResult<()> {
        let (offset, span) = (self.offset, self.char_span(ch));
        self.ast
            .push(value, &self.cursor)
            .map_err(|e| e.at(offset, span))
    }

    fn char_span(&self, ch: char) -> SourceSpan {
        (self.byte, ch.len_utf8()).into()
    }

    fn ignore(&mut self, ch: char, region: Region) {
        self.emit(ParseEvent::Ignored {
            offset: self.offset,
            ch,
            region,
        });
    }

    fn emit(&mut self, event: ParseEvent) {
        self.observer.event(&event);
    }
}
