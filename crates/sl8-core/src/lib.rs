//! Σλ⁸ symbolic rewriting engine.
//!
//! A fixed basis of eight morphisms, a continuous weight field over that
//! basis, a precomputed 8×8×8 interaction table built under layered rule
//! precedence, and a processor that folds derivations (sequences of
//! morphisms and nested blocks) into a final field while carrying a
//! two-morphism rolling history as interaction context.
//!
//! Zero I/O - pure math engine with no opinions about transport,
//! persistence, or where trace events go.

pub mod constants;
pub mod constraint;
pub mod derivation;
pub mod field;
pub mod morphism;
pub mod processor;
pub mod table;
pub mod trace;

pub use constants::{BASIS_SIZE, EPSILON, FIELD_TOLERANCE};
pub use constraint::{Constraint, check_all};
pub use derivation::{Derivation, Primitive};
pub use field::Field;
pub use morphism::{Morphism, UnknownMorphism};
pub use processor::Processor;
pub use table::InteractionTable;
pub use trace::{InteractionEvent, NoTrace, TraceSink};
