use crate::field::Field;
use crate::morphism::Morphism;

/// A named predicate over fields, checked against evaluation results by
/// external harnesses.
pub struct Constraint {
    pub name: String,
    predicate: Box<dyn Fn(&Field) -> bool>,
}

impl Constraint {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&Field) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    /// The dominance check: satisfied when `m` carries the field's
    /// positive maximum weight.
    pub fn dominance(m: Morphism) -> Self {
        Self::new(format!("dominance_{}", m.glyph()), move |field| {
            field.is_dominated_by(m)
        })
    }

    pub fn check(&self, field: &Field) -> bool {
        (self.predicate)(field)
    }
}

/// Whether every constraint holds for the field.
pub fn check_all(field: &Field, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| c.check(field))
}
