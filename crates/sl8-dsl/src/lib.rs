//! Expression DSL for the Σλ⁸ engine.
//!
//! An upstream producer: a small expression language lowered to
//! derivations the processor can fold, plus signature and rule
//! interpretation mapping structured descriptions to fields and
//! derivations. Everything here runs strictly before evaluation; the
//! engine only ever sees the resulting `Derivation` values.

pub mod compile;
pub mod expr;
pub mod signature;

pub use compile::compile;
pub use expr::{Expr, Value};
pub use signature::{FieldDef, FieldType, Rule, Signature, interpret};
