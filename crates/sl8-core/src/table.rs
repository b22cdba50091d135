use crate::constants::{BASIS_SIZE, PAIR_BASE_WEIGHT, PAIR_BLEND_WEIGHT};
use crate::field::Field;
use crate::morphism::Morphism;

/// Precomputed interaction table: a total map from ordered morphism
/// triples `(context, operator, operand)` to result fields.
///
/// Built once by [`InteractionTable::build`] through four rule layers in
/// strict precedence order. A later layer never overwrites a cell an
/// earlier layer has set:
///
/// 1. specific semantic rules (negation, conjunction, beta reduction,
///    pair formation, directed conditionals),
/// 2. generic pairing cells for the ⊗ operator,
/// 3. the three ∅ absorption sweeps,
/// 4. the identity fallback over every remaining cell.
///
/// After construction every one of the 8³ cells holds a field; `build`
/// panics otherwise, since an unset cell is a defect in the layering
/// itself. The table is immutable from then on and may be shared freely
/// across processors.
pub struct InteractionTable {
    cells: Vec<Option<Field>>,
}

impl InteractionTable {
    /// Run all rule layers and assert totality.
    pub fn build() -> Self {
        let mut table = Self::unset();
        table.specific_rules();
        table.pairing_rules();
        table.void_rules();
        table.identity_fallback();
        table.assert_total();
        table
    }

    /// Defensive lookup. After `build` this is `Some` for every triple.
    pub fn get(&self, context: Morphism, operator: Morphism, operand: Morphism) -> Option<&Field> {
        self.cells[Self::cell_index(context, operator, operand)].as_ref()
    }

    /// Total lookup for inspection and tests. Panics on an unset cell,
    /// which `build` has already ruled out.
    pub fn lookup(&self, context: Morphism, operator: Morphism, operand: Morphism) -> &Field {
        self.get(context, operator, operand)
            .expect("interaction table is total after build")
    }

    /// Table with every cell unset. Only rule layers and processor
    /// fallback tests start from here.
    #[cfg(test)]
    pub(crate) fn unset_for_tests() -> Self {
        Self::unset()
    }

    fn unset() -> Self {
        Self {
            cells: vec![None; BASIS_SIZE * BASIS_SIZE * BASIS_SIZE],
        }
    }

    fn cell_index(context: Morphism, operator: Morphism, operand: Morphism) -> usize {
        (context.index() * BASIS_SIZE + operator.index()) * BASIS_SIZE + operand.index()
    }

    /// Set a cell unless an earlier rule already claimed it.
    fn define(&mut self, context: Morphism, operator: Morphism, operand: Morphism, field: Field) {
        let cell = &mut self.cells[Self::cell_index(context, operator, operand)];
        if cell.is_none() {
            *cell = Some(field);
        }
    }

    /// Layer 1: hand-enumerated semantic cells.
    fn specific_rules(&mut self) {
        use Morphism::{And, Apply, Cond, Identity, Lambda, Not, Pair};

        let tru = Field::pure(Identity);
        let fls = Field::pure(Not);

        // Double negation resolves to Identity.
        self.define(Not, Not, Identity, tru);
        self.define(Not, Not, Not, tru);

        // Boolean NOT over the {I, ¬} sub-alphabet.
        self.define(Identity, Not, Identity, fls);
        self.define(Identity, Not, Not, tru);

        // Conjunction truth table: only I ∧ I stays true.
        for context in [Identity, Not] {
            for operand in [Identity, Not] {
                let result = if context == Identity && operand == Identity {
                    tru
                } else {
                    fls
                };
                self.define(context, And, operand, result);
            }
        }

        // Beta reduction: (λ I @) collapses to Identity.
        self.define(Lambda, Identity, Apply, tru);

        // Pair formation between two identities yields a pure pair.
        self.define(Identity, Pair, Identity, Field::pure(Pair));

        // Directed conditionals: a true condition selects abstraction,
        // a false condition selects application.
        self.define(Cond, Identity, Lambda, Field::pure(Lambda));
        self.define(Cond, Not, Apply, Field::pure(Apply));
    }

    /// Layer 2: every remaining cell with ⊗ as operator blends the
    /// context and operand into a pair-dominated field.
    fn pairing_rules(&mut self) {
        for context in Morphism::ALL {
            for operand in Morphism::ALL {
                let mut blend = Field::zero();
                blend[Morphism::Pair] = PAIR_BASE_WEIGHT;
                blend[context] += PAIR_BLEND_WEIGHT;
                blend[operand] += PAIR_BLEND_WEIGHT;
                let blend = blend.normalize_or(Morphism::Pair);
                self.define(context, Morphism::Pair, operand, blend);
            }
        }
    }

    /// Layer 3: the three ∅ absorption sweeps. Each skips cells claimed
    /// by layers 1 and 2; their mutual order is immaterial because they
    /// agree on every triple they share.
    fn void_rules(&mut self) {
        let void = Field::pure(Morphism::Void);

        // ∅ as context passes the operand through under the Identity
        // operator and absorbs under any other.
        for operator in Morphism::ALL {
            for operand in Morphism::ALL {
                let result = if operator == Morphism::Identity {
                    Field::pure(operand)
                } else {
                    void
                };
                self.define(Morphism::Void, operator, operand, result);
            }
        }

        // ∅ as operator absorbs.
        for context in Morphism::ALL {
            for operand in Morphism::ALL {
                self.define(context, Morphism::Void, operand, void);
            }
        }

        // ∅ as operand absorbs.
        for context in Morphism::ALL {
            for operator in Morphism::ALL {
                self.define(context, operator, Morphism::Void, void);
            }
        }
    }

    /// Layer 4: identity fallback for every still-unset cell. The check
    /// order is a tie-break policy: context-Identity wins over
    /// operator-Identity wins over operand-Identity; anything without
    /// identity structure absorbs into ∅.
    fn identity_fallback(&mut self) {
        for context in Morphism::ALL {
            for operator in Morphism::ALL {
                for operand in Morphism::ALL {
                    let result = if context == Morphism::Identity {
                        Field::pure(operand)
                    } else if operator == Morphism::Identity {
                        Field::pure(context)
                    } else if operand == Morphism::Identity {
                        Field::pure(context)
                    } else {
                        Field::pure(Morphism::Void)
                    };
                    self.define(context, operator, operand, result);
                }
            }
        }
    }

    fn assert_total(&self) {
        for context in Morphism::ALL {
            for operator in Morphism::ALL {
                for operand in Morphism::ALL {
                    assert!(
                        self.get(context, operator, operand).is_some(),
                        "interaction table cell [{context}][{operator}][{operand}] left unset after construction"
                    );
                }
            }
        }
    }
}
