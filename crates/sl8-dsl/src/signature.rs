//! Signature and rule interpretation.
//!
//! A signature is an ordered, possibly nested record description. Its
//! interpretation is a deterministic field: hashed name and key weights
//! spread over a handful of morphisms, nested signatures folded in at
//! reduced scale, the whole thing normalized to sum 1. A rule carries a
//! transform expression; its interpretation is the compiled derivation.

use serde::{Deserialize, Serialize};

use sl8_core::{Derivation, Field, Morphism};

use crate::compile::compile;
use crate::expr::Expr;

/// Type of one signature field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Blob,
    Nested(Signature),
}

impl FieldType {
    fn tag(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Blob => "blob",
            FieldType::Nested(_) => "nested",
        }
    }
}

/// One keyed field of a signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub key: String,
    pub ty: FieldType,
}

/// An ordered record description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// A named transformation between signatures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub inputs: Vec<Signature>,
    pub outputs: Vec<Signature>,
    pub transform: Expr,
}

impl Rule {
    /// The rule's executable form: its transform lowered to a
    /// derivation.
    pub fn derivation(&self) -> Derivation {
        compile(&self.transform)
    }
}

/// Map a signature to its field embedding.
///
/// Deterministic by construction: equal signatures always interpret to
/// equal fields. A signature with no weight contributions at all (empty
/// name, no fields) collapses to pure Identity through normalization.
pub fn interpret(signature: &Signature) -> Field {
    let mut field = Field::zero();

    let name_hash = additive_hash(&signature.name);
    field[Morphism::Identity] += (name_hash % 100) as f64 / 1000.0;
    field[Morphism::Apply] += (name_hash % 70) as f64 / 1000.0;

    for (index, def) in signature.fields.iter().enumerate() {
        let key_hash = additive_hash(&def.key);
        field[Morphism::Lambda] += (key_hash % 50) as f64 / 1000.0;

        match &def.ty {
            FieldType::Nested(nested) => {
                let nested_field = interpret(nested);
                for m in Morphism::ALL {
                    field[m] += nested_field[m] * 0.1;
                }
            }
            flat => {
                let type_hash = additive_hash(flat.tag());
                field[Morphism::And] += (type_hash % 40) as f64 / 1000.0;
            }
        }

        // Field position leaves its own mark.
        field[Morphism::Not] += (index % 7) as f64 / 1000.0;
    }

    field.normalize_or(Morphism::Identity)
}

/// 32-bit additive string hash over UTF-16 code units, folded to a
/// non-negative value.
fn additive_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}
