//! Padlock Error Handling
//!
//! Every failure is fatal: a parse either yields a complete AST or exactly one
//! `PadlockError`. Errors carry the 0-based character offset of the offending
//! character plus the matching byte span, so they render as miette reports
//! once source text is attached.

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::symbols::Instruction;

// ============================================================================
// ERROR KINDS
// ============================================================================

/// What the parser was waiting for when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofContext {
    /// Between instructions, inside a still-open branch.
    AwaitingInstruction,
    /// In the middle of an instruction's name arguments.
    InName,
}

impl fmt::Display for EofContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EofContext::AwaitingInstruction => f.write_str("while waiting for an instruction"),
            EofContext::InName => f.write_str("while parsing names"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A recognized symbol appeared after the program terminated.
    #[error("unexpected symbol '{symbol}' ({instruction}) after the end of the program")]
    InvalidSymbol {
        symbol: char,
        instruction: Instruction,
    },

    /// More name delimiters than the instruction's arity.
    #[error("{instruction} expects {expected} name arguments, got {found}")]
    InvalidArgumentCount {
        instruction: Instruction,
        expected: usize,
        found: usize,
    },

    /// Input ended before the program closed.
    #[error("unexpected end of input {context}")]
    UnexpectedEof { context: EofContext },

    /// A cursor path that does not reach a branch. Only a broken cursor
    /// invariant can produce this.
    #[error("cursor path does not address a branch")]
    DetachedCursor,
}

impl ErrorKind {
    /// Stable diagnostic code suffix.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSymbol { .. } => "invalid_symbol",
            ErrorKind::InvalidArgumentCount { .. } => "invalid_argument_count",
            ErrorKind::UnexpectedEof { .. } => "unexpected_eof",
            ErrorKind::DetachedCursor => "internal",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSymbol { .. } => "program already ended",
            ErrorKind::InvalidArgumentCount { .. } => "one name too many",
            ErrorKind::UnexpectedEof { .. } => "input ends here",
            ErrorKind::DetachedCursor => "while appending here",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            ErrorKind::InvalidSymbol { .. } => Some(
                "every branch has already been closed by a nil; remove the trailing instructions"
                    .into(),
            ),
            ErrorKind::InvalidArgumentCount { expected, .. } => {
                Some(format!("close exactly {} name(s) with the name delimiter", expected))
            }
            ErrorKind::UnexpectedEof {
                context: EofContext::AwaitingInstruction,
            } => Some("each open branch must end with a nil instruction".into()),
            ErrorKind::UnexpectedEof {
                context: EofContext::InName,
            } => Some("terminate the name with the name delimiter".into()),
            ErrorKind::DetachedCursor => None,
        }
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// A fatal parse error.
#[derive(Debug, Clone, Error)]
#[error("{kind} (at offset {offset})")]
pub struct PadlockError {
    pub kind: ErrorKind,
    /// 0-based character offset. Equals the input's character count for
    /// end-of-input errors.
    pub offset: usize,
    /// Byte span of the offending character within the input.
    pub span: SourceSpan,
    source_code: Option<Arc<NamedSource<String>>>,
}

pub type ParseResult<T> = std::result::Result<T, PadlockError>;

impl PadlockError {
    pub fn new(kind: ErrorKind, offset: usize, span: SourceSpan) -> Self {
        Self {
            kind,
            offset,
            span,
            source_code: None,
        }
    }

    pub fn invalid_symbol(
        symbol: char,
        instruction: Instruction,
        offset: usize,
        byte: usize,
    ) -> Self {
        Self::new(
            ErrorKind::InvalidSymbol {
                symbol,
                instruction,
            },
            offset,
            (byte, symbol.len_utf8()).into(),
        )
    }

    pub fn invalid_argument_count(
        instruction: Instruction,
        found: usize,
        offset: usize,
        span: SourceSpan,
    ) -> Self {
        Self::new(
            ErrorKind::InvalidArgumentCount {
                instruction,
                expected: instruction.arity(),
                found,
            },
            offset,
            span,
        )
    }

    pub fn unexpected_eof(context: EofContext, offset: usize, byte_len: usize) -> Self {
        Self::new(
            ErrorKind::UnexpectedEof { context },
            offset,
            (byte_len, 0).into(),
        )
    }

    /// Relocate the error to the character that triggered it.
    pub fn at(mut self, offset: usize, span: SourceSpan) -> Self {
        self.offset = offset;
        self.span = span;
        self
    }

    /// Attach the parsed text so the error renders with a source snippet.
    pub fn with_source(mut self, name: impl AsRef<str>, content: impl Into<String>) -> Self {
        self.source_code = Some(Arc::new(NamedSource::new(name, content.into())));
        self
    }

    pub fn has_source(&self) -> bool {
        self.source_code.is_some()
    }
}

impl Diagnostic for PadlockError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("padlock::{}", self.kind.code())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.label().to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source_code
            .as_deref()
            .map(|s| s as &dyn miette::SourceCode)
    }
}
