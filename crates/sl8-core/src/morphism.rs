use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::BASIS_SIZE;

/// One element of the fixed eight-morphism basis.
///
/// Three morphisms play distinguished algebraic roles in the interaction
/// table: `Identity` is the neutral element (and the boolean `true`
/// encoding), `Not` is the negation element (and the boolean `false`
/// encoding), `Void` is the absorbing element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Morphism {
    /// I - the neutral element, represents data or a no-op.
    Identity,
    /// @ - application, applies a function to an argument.
    Apply,
    /// λ - abstraction, creates a function.
    Lambda,
    /// ∧ - conjunction, boolean AND.
    And,
    /// ¬ - negation, boolean NOT.
    Not,
    /// ? - conditional marker, ternary if/else.
    Cond,
    /// ⊗ - pairing, forms a data structure.
    Pair,
    /// ∅ - the empty glyph, absorbs interactions.
    Void,
}

impl Morphism {
    /// All morphisms in basis order. The order fixes table indexing.
    pub const ALL: [Morphism; BASIS_SIZE] = [
        Morphism::Identity,
        Morphism::Apply,
        Morphism::Lambda,
        Morphism::And,
        Morphism::Not,
        Morphism::Cond,
        Morphism::Pair,
        Morphism::Void,
    ];

    /// Position in the basis, used as a field and table index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-glyph display name.
    pub fn glyph(self) -> &'static str {
        match self {
            Morphism::Identity => "I",
            Morphism::Apply => "@",
            Morphism::Lambda => "λ",
            Morphism::And => "∧",
            Morphism::Not => "¬",
            Morphism::Cond => "?",
            Morphism::Pair => "⊗",
            Morphism::Void => "∅",
        }
    }

    /// Parse a glyph or an ASCII name. Returns None for anything else.
    pub fn from_name(name: &str) -> Option<Morphism> {
        match name {
            "I" | "i" | "identity" => Some(Morphism::Identity),
            "@" | "apply" => Some(Morphism::Apply),
            "λ" | "lambda" => Some(Morphism::Lambda),
            "∧" | "and" => Some(Morphism::And),
            "¬" | "not" => Some(Morphism::Not),
            "?" | "cond" => Some(Morphism::Cond),
            "⊗" | "pair" => Some(Morphism::Pair),
            "∅" | "void" | "_" => Some(Morphism::Void),
            _ => None,
        }
    }
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.glyph())
    }
}

/// Error returned when a string names no morphism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMorphism(pub String);

impl fmt::Display for UnknownMorphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown morphism: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMorphism {}

impl FromStr for Morphism {
    type Err = UnknownMorphism;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Morphism::from_name(s).ok_or_else(|| UnknownMorphism(s.to_string()))
    }
}
