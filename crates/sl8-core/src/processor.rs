use crate::derivation::{Derivation, Primitive};
use crate::field::Field;
use crate::morphism::Morphism;
use crate::table::InteractionTable;
use crate::trace::{InteractionEvent, NoTrace, TraceSink};

/// The stateful evaluator: a current field plus a two-morphism rolling
/// history consulted as `(context, operator)` on every incoming
/// morphism.
///
/// A processor starts at pure Identity with history `[I, I]` and is
/// mutated in place by each evaluation call. Processors share the
/// read-only interaction table and nothing else; independent instances
/// never observe each other's state.
pub struct Processor<'t> {
    table: &'t InteractionTable,
    field: Field,
    history: [Morphism; 2],
    steps: u64,
}

impl<'t> Processor<'t> {
    pub fn new(table: &'t InteractionTable) -> Self {
        Self {
            table,
            field: Field::pure(Morphism::Identity),
            history: [Morphism::Identity, Morphism::Identity],
            steps: 0,
        }
    }

    /// Current field. The reference tracks the processor's live state;
    /// callers that need it preserved past further evaluation calls must
    /// copy it out.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Rolling history window, older slot first.
    pub fn history(&self) -> [Morphism; 2] {
        self.history
    }

    /// Applied interaction count. Diagnostic only.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Fold a derivation into the field, left to right, recursing into
    /// blocks on this same processor. Blocks are grouping only: no
    /// scoping, no branching. A conditional compiled as
    /// `[cond-block, ?, then-block, else-block]` evaluates all four
    /// primitives in sequence; selecting a branch is a contract of the
    /// surrounding notation, not of this evaluator.
    pub fn evaluate(&mut self, derivation: &Derivation) -> &Field {
        self.evaluate_traced(derivation, &mut NoTrace)
    }

    /// Like [`evaluate`](Self::evaluate), reporting every applied
    /// interaction to `sink`.
    pub fn evaluate_traced(&mut self, derivation: &Derivation, sink: &mut dyn TraceSink) -> &Field {
        for primitive in derivation {
            match primitive {
                Primitive::Morphism(m) => self.apply_interaction(*m, sink),
                Primitive::Block(inner) => {
                    self.evaluate_traced(inner, sink);
                }
            }
        }
        &self.field
    }

    /// One interaction step: look up `[history[0]][history[1]][incoming]`,
    /// install a copy of the table entry as the new field, then shift the
    /// history window.
    ///
    /// The miss branch is defensive. `InteractionTable::build` asserts
    /// totality, so it is unreachable through public construction; were a
    /// cell ever absent, the incoming morphism's weight grows by one and
    /// the field renormalizes, collapsing to pure Identity on a zero sum.
    /// The history shifts the same way on both branches.
    fn apply_interaction(&mut self, incoming: Morphism, sink: &mut dyn TraceSink) {
        let [context, operator] = self.history;

        let entry = self.table.get(context, operator, incoming);
        let table_hit = entry.is_some();
        match entry {
            Some(entry) => self.field = *entry,
            None => {
                self.field[incoming] += 1.0;
                self.field = self.field.normalize_or(Morphism::Identity);
            }
        }

        self.history = [operator, incoming];
        self.steps += 1;

        sink.record(&InteractionEvent {
            step: self.steps,
            context,
            operator,
            operand: incoming,
            table_hit,
            field: self.field,
        });
    }
}
