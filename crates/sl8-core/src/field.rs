use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::constants::{BASIS_SIZE, EPSILON};
use crate::morphism::Morphism;

/// Continuous state vector over the basis: one non-negative weight per
/// morphism.
///
/// A field at rest is normalized to sum 1. Fields are plain values and
/// `Copy`; every read from the interaction table hands the caller an
/// independent copy, so a processor can never mutate a table entry
/// through a shared reference.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Field {
    weights: [f64; BASIS_SIZE],
}

impl Field {
    /// All-zero field.
    pub fn zero() -> Self {
        Self {
            weights: [0.0; BASIS_SIZE],
        }
    }

    /// Field with the entire weight on a single morphism.
    pub fn pure(m: Morphism) -> Self {
        let mut field = Self::zero();
        field.weights[m.index()] = 1.0;
        field
    }

    /// Raw weights in basis order.
    pub fn weights(&self) -> &[f64; BASIS_SIZE] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Scale so weights sum to 1. A near-zero sum collapses to the pure
    /// `fallback` field instead of dividing by zero.
    pub fn normalize_or(self, fallback: Morphism) -> Self {
        let sum = self.sum();
        if sum < EPSILON {
            return Self::pure(fallback);
        }
        let mut field = self;
        for w in &mut field.weights {
            *w /= sum;
        }
        field
    }

    /// The maximal-weight morphism, or None if every weight is zero.
    /// Ties resolve to the earliest morphism in basis order.
    pub fn dominant(&self) -> Option<Morphism> {
        let max = self.max_weight();
        if max <= 0.0 {
            return None;
        }
        Morphism::ALL
            .into_iter()
            .find(|m| self.weights[m.index()] == max)
    }

    /// Whether `m` carries the field's maximum weight and that maximum is
    /// positive. Tied maximizers all count as dominant.
    pub fn is_dominated_by(&self, m: Morphism) -> bool {
        let max = self.max_weight();
        self.weights[m.index()] == max && max > 0.0
    }

    /// Boolean decoding: true when the Identity morphism dominates.
    pub fn is_true(&self) -> bool {
        self.is_dominated_by(Morphism::Identity)
    }

    /// Boolean decoding: false when the Not morphism dominates.
    pub fn is_false(&self) -> bool {
        self.is_dominated_by(Morphism::Not)
    }

    /// Elementwise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Field, tolerance: f64) -> bool {
        self.weights
            .iter()
            .zip(other.weights.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn max_weight(&self) -> f64 {
        self.weights.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

impl Index<Morphism> for Field {
    type Output = f64;

    fn index(&self, m: Morphism) -> &f64 {
        &self.weights[m.index()]
    }
}

impl IndexMut<Morphism> for Field {
    fn index_mut(&mut self, m: Morphism) -> &mut f64 {
        &mut self.weights[m.index()]
    }
}
