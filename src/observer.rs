//! Parse observers.
//!
//! Diagnostics are not written to a global logger. Each parse call takes a
//! `ParseObserver` and reports what the tokenizer does with every character,
//! so concurrent parses with separate observers never interleave.

use std::fmt;
use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::symbols::Instruction;

/// Severity of a parse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
}

/// Where an ignored character was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ProgramBody,
    Name,
    AfterProgram,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::ProgramBody => f.write_str("within program body"),
            Region::Name => f.write_str("within name"),
            Region::AfterProgram => f.write_str("after program body"),
        }
    }
}

/// Something the tokenizer did. Offsets are 0-based character indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Start,
    Instruction {
        offset: usize,
        instruction: Instruction,
    },
    Branching {
        offset: usize,
    },
    EnterSecondBranch {
        offset: usize,
    },
    ProgramEnd {
        offset: usize,
    },
    NameChar {
        offset: usize,
        ch: char,
    },
    NamePushed {
        offset: usize,
        name: String,
        last: bool,
    },
    Ignored {
        offset: usize,
        ch: char,
        region: Region,
    },
}

impl ParseEvent {
    pub fn level(&self) -> Level {
        match self {
            ParseEvent::Start | ParseEvent::ProgramEnd { .. } | ParseEvent::Ignored { .. } => {
                Level::Info
            }
            _ => Level::Debug,
        }
    }
}

impl fmt::Display for ParseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEvent::Start => write!(f, "trying to parse the program"),
            ParseEvent::Instruction {
                offset,
                instruction,
            } => write!(f, "{} instruction at position {}", instruction, offset),
            ParseEvent::Branching { offset } => write!(f, "branching at position {}", offset),
            ParseEvent::EnterSecondBranch { offset } => write!(
                f,
                "entering second branch of split instruction at position {}",
                offset
            ),
            ParseEvent::ProgramEnd { offset } => {
                write!(f, "reached end of program at position {}", offset)
            }
            ParseEvent::NameChar { offset, ch } => {
                write!(f, "pushing character '{}' to name, position {}", ch, offset)
            }
            ParseEvent::NamePushed { offset, name, last } => write!(
                f,
                "pushing {}name '{}' to AST, position {}",
                if *last { "final " } else { "" },
                name,
                offset
            ),
            ParseEvent::Ignored { offset, ch, region } => write!(
                f,
                "ignoring invalid character {:?} {}, position {}",
                ch, region, offset
            ),
        }
    }
}

/// Receives events from one parse call.
pub trait ParseObserver {
    fn event(&mut self, event: &ParseEvent);
}

/// Discards every event.
pub struct NullObserver;

impl ParseObserver for NullObserver {
    fn event(&mut self, _event: &ParseEvent) {}
}

/// Collects events in order, for inspection after the parse.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<ParseEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &ParseEvent> {
        self.events.iter().filter(move |e| e.level() == level)
    }
}

impl ParseObserver for EventLog {
    fn event(&mut self, event: &ParseEvent) {
        self.events.push(event.clone());
    }
}

/// Writes events at or above `min_level` to stderr.
pub struct TraceObserver {
    stream: StandardStream,
    min_level: Level,
}

impl TraceObserver {
    pub fn new(min_level: Level, color: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stderr(color),
            min_level,
        }
    }
}

impl ParseObserver for TraceObserver {
    fn event(&mut self, event: &ParseEvent) {
        let level = event.level();
        if level < self.min_level {
            return;
        }
        let (tag, color) = match level {
            Level::Info => ("info", Color::Cyan),
            Level::Debug => ("debug", Color::Magenta),
        };
        let _ = self
            .stream
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.stream, "{:>5}", tag);
        let _ = self.stream.reset();
        let _ = writeln!(self.stream, " padlock: {}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_follow_event_kind() {
        assert_eq!(ParseEvent::Start.level(), Level::Info);
        assert_eq!(ParseEvent::Branching { offset: 0 }.level(), Level::Debug);
        assert!(Level::Debug < Level::Info);
    }

    #[test]
    fn test_event_log_filters_by_level() {
        let mut log = EventLog::new();
        log.event(&ParseEvent::Start);
        log.event(&ParseEvent::Branching { offset: 1 });
        log.event(&ParseEvent::ProgramEnd { offset: 2 });
        assert_eq!(log.at_level(Level::Info).count(), 2);
        assert_eq!(log.at_level(Level::Debug).count(), 1);
    }

    #[test]
    fn test_event_messages() {
        let event = ParseEvent::NamePushed {
            offset: 3,
            name: "ab".into(),
            last: true,
        };
        assert_eq!(event.to_string(), "pushing final name 'ab' to AST, position 3");
        let event = ParseEvent::Ignored {
            offset: 0,
            ch: ' ',
            region: Region::AfterProgram,
        };
        assert_eq!(
            event.to_string(),
            "ignoring invalid character ' ' after program body, position 0"
        );
    }
}
