//! Case-folded symbols and the sequence types built from them.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single character, stored in lowercase.
///
/// All comparisons between symbols are therefore case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "char")]
pub struct Symbol(char);

impl Symbol {
    pub fn new(c: char) -> Self {
        // Characters like 'İ' lowercase to several chars; keep the first so
        // that one input char is always one symbol.
        Symbol(c.to_lowercase().next().unwrap_or(c))
    }

    pub fn char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::new(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An owned sequence.
pub type Sequence = Vec<Symbol>;
/// A sequence slice.
pub type Seq<'a> = &'a [Symbol];

pub fn to_sequence(s: &str) -> Sequence {
    s.chars().map(Symbol::new).collect()
}

pub fn to_string(seq: Seq) -> String {
    seq.iter().map(|s| s.char()).collect()
}
