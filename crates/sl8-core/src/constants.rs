/// Number of primitive morphisms in the basis.
pub const BASIS_SIZE: usize = 8;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;

/// Base weight on the pair morphism itself in a synthesized pairing cell.
pub const PAIR_BASE_WEIGHT: f64 = 1.0;

/// Weight contributed by each participant of a synthesized pairing cell.
pub const PAIR_BLEND_WEIGHT: f64 = 0.5;

/// Tolerance for approximate field comparison in diagnostics and tests.
pub const FIELD_TOLERANCE: f64 = 1e-4;
