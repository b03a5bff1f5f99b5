//! Parse configuration: the two independent switches that select how input
//! characters are classified.

use serde::{Deserialize, Serialize};

use crate::symbols::{CharSet, SymbolTable};

/// Which characters may appear inside a name literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMode {
    /// Only the six recognized symbols.
    #[default]
    Restricted,
    /// Any non-whitespace character, plus the six symbols.
    Unrestricted,
}

/// Options for a single parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    pub charset: CharSet,
    pub names: NameMode,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charset(mut self, charset: CharSet) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_names(mut self, names: NameMode) -> Self {
        self.names = names;
        self
    }

    /// Shorthand for the plain ASCII character set.
    pub fn plain() -> Self {
        Self::default().with_charset(CharSet::Plain)
    }

    pub fn symbol_table(&self) -> SymbolTable {
        SymbolTable::new(self.charset)
    }

    /// Whether `ch` may be buffered into a name under these options.
    pub fn accepts_name_char(&self, ch: char) -> bool {
        (self.names == NameMode::Unrestricted && !ch.is_whitespace())
            || self.symbol_table().is_symbol(ch)
    }
}
