//! Padlock Symbol Table
//!
//! Maps the six instruction identities onto the characters of the active
//! character set, in both directions.

use serde::{Deserialize, Serialize};

// ============================================================================
// INSTRUCTIONS
// ============================================================================

/// One of the six Padlock instructions.
///
/// The descriptor data (arity and spawned-branch count) is fixed per variant
/// and independent of the character set used to spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instruction {
    /// Terminator: ends the current branch.
    Nil,
    /// Fork into two sibling branches.
    Split,
    /// Decrypt the first name into the second and replicate.
    Decrypt,
    /// Create a name. Its symbol doubles as the name delimiter.
    Name,
    /// Encrypt the first name and send it to the second.
    Send,
    /// Receive from the first name and bind to the second.
    Receive,
}

impl Instruction {
    /// All instructions in canonical table order.
    pub const ALL: [Instruction; 6] = [
        Instruction::Nil,
        Instruction::Split,
        Instruction::Decrypt,
        Instruction::Name,
        Instruction::Send,
        Instruction::Receive,
    ];

    /// Lowercase identifier, e.g. `"split"`.
    pub fn identifier(&self) -> &'static str {
        match self {
            Instruction::Nil => "nil",
            Instruction::Split => "split",
            Instruction::Decrypt => "decrypt",
            Instruction::Name => "name",
            Instruction::Send => "send",
            Instruction::Receive => "receive",
        }
    }

    /// Number of name arguments the instruction consumes.
    pub fn arity(&self) -> usize {
        match self {
            Instruction::Nil | Instruction::Split => 0,
            Instruction::Name => 1,
            Instruction::Decrypt | Instruction::Send | Instruction::Receive => 2,
        }
    }

    /// Number of branches the instruction spawns.
    pub fn branches(&self) -> usize {
        match self {
            Instruction::Nil => 0,
            Instruction::Split => 2,
            _ => 1,
        }
    }

    pub fn is_terminator(&self) -> bool {
        self.branches() == 0
    }

    pub fn is_split(&self) -> bool {
        self.branches() == 2
    }

    fn index(&self) -> usize {
        match self {
            Instruction::Nil => 0,
            Instruction::Split => 1,
            Instruction::Decrypt => 2,
            Instruction::Name => 3,
            Instruction::Send => 4,
            Instruction::Receive => 5,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

// ============================================================================
// CHARACTER SETS
// ============================================================================

/// Which glyphs spell the instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    /// Lock pictographs (default).
    #[default]
    Visual,
    /// Single uppercase ASCII letters.
    Plain,
}

/// Visual glyphs, indexed like `Instruction::ALL`.
static VISUAL: [char; 6] = [
    '\u{1F512}', // LOCK
    '\u{1F513}', // OPEN LOCK
    '\u{1F511}', // KEY
    '\u{1F58B}', // LOWER LEFT FOUNTAIN PEN
    '\u{1F510}', // CLOSED LOCK WITH KEY
    '\u{1F50F}', // LOCK WITH INK PEN
];

static PLAIN: [char; 6] = ['N', 'S', 'K', 'P', 'E', 'R'];

impl CharSet {
    fn glyphs(&self) -> &'static [char; 6] {
        match self {
            CharSet::Visual => &VISUAL,
            CharSet::Plain => &PLAIN,
        }
    }
}

// ============================================================================
// SYMBOL TABLE
// ============================================================================

/// Character <-> instruction resolution for one character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolTable {
    charset: CharSet,
}

impl SymbolTable {
    pub fn new(charset: CharSet) -> Self {
        Self { charset }
    }

    pub fn charset(&self) -> CharSet {
        self.charset
    }

    /// Resolve a character to the instruction it spells, if any.
    pub fn resolve(&self, ch: char) -> Option<Instruction> {
        self.charset
            .glyphs()
            .iter()
            .position(|&g| g == ch)
            .map(|i| Instruction::ALL[i])
    }

    /// The character spelling `instruction` in this set.
    pub fn symbol(&self, instruction: Instruction) -> char {
        self.charset.glyphs()[instruction.index()]
    }

    /// The six recognized characters, in canonical order.
    pub fn active_symbols(&self) -> [char; 6] {
        *self.charset.glyphs()
    }

    pub fn is_symbol(&self, ch: char) -> bool {
        self.resolve(ch).is_some()
    }

    /// The in-name delimiter: the `name` instruction's own symbol.
    pub fn delimiter(&self) -> char {
        self.symbol(Instruction::Name)
    }

    /// Iterate `(symbol, instruction)` pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (char, Instruction)> + '_ {
        Instruction::ALL.into_iter().map(move |i| (self.symbol(i), i))
    }
}
