//! Structured observation of processor steps.
//!
//! The engine never prints. Collaborators that want per-interaction
//! visibility pass a [`TraceSink`] to `Processor::evaluate_traced` and
//! route the events wherever they like (a log channel, a buffer, a
//! terminal).

use crate::field::Field;
use crate::morphism::Morphism;

/// One applied interaction, emitted after the field and history update.
#[derive(Clone, Copy, Debug)]
pub struct InteractionEvent {
    /// Step counter value after this interaction.
    pub step: u64,
    /// Older history slot at lookup time.
    pub context: Morphism,
    /// Newer history slot at lookup time.
    pub operator: Morphism,
    /// The incoming morphism.
    pub operand: Morphism,
    /// Whether the table held the cell. False only for the defensive
    /// fallback path, which a fully built table never takes.
    pub table_hit: bool,
    /// The field after the update.
    pub field: Field,
}

/// Observer callback for applied interactions.
pub trait TraceSink {
    fn record(&mut self, event: &InteractionEvent);
}

/// Sink that discards every event.
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: &InteractionEvent) {}
}

/// Buffering sink for tests and diagnostics.
impl TraceSink for Vec<InteractionEvent> {
    fn record(&mut self, event: &InteractionEvent) {
        self.push(*event);
    }
}
