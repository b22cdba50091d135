//! Integration tests exercising the full engine pipeline:
//! build table → construct derivations → evaluate → decode fields.

use proptest::prelude::*;
use sl8_core::{Constraint, Derivation, InteractionTable, Morphism, Processor, check_all};

use Morphism::{And, Apply, Cond, Identity, Lambda, Not, Pair, Void};

/// Documented scenario: from the initial state, ¬ ¬ must decode true.
#[test]
fn double_negation_decodes_true() {
    let table = InteractionTable::build();
    let mut processor = Processor::new(&table);
    let result = processor.evaluate(&Derivation::from_morphisms(&[Not, Not]));
    assert!(result.is_true());
    assert!(!result.is_false());
}

/// A single ¬ from the initial state decodes false, so the boolean
/// encoding survives a negation round trip.
#[test]
fn negation_round_trip() {
    let table = InteractionTable::build();

    let mut one = Processor::new(&table);
    assert!(one.evaluate(&Derivation::from_morphisms(&[Not])).is_false());

    let mut two = Processor::new(&table);
    assert!(two.evaluate(&Derivation::from_morphisms(&[Not, Not])).is_true());
}

/// The compiled conditional shape evaluates all four primitives without
/// branching: condition block, ?, then block, else block.
#[test]
fn conditional_shape_evaluates_unconditionally() {
    let table = InteractionTable::build();

    let mut conditional = Derivation::new();
    conditional.push_block(Derivation::from_morphisms(&[Identity]));
    conditional.push_morphism(Cond);
    conditional.push_block(Derivation::from_morphisms(&[Lambda]));
    conditional.push_block(Derivation::from_morphisms(&[Apply]));

    let mut nested = Processor::new(&table);
    nested.evaluate(&conditional);

    // Identical to the flattened sequence: blocks are grouping only.
    let mut flat = Processor::new(&table);
    flat.evaluate(&Derivation::from_morphisms(&[Identity, Cond, Lambda, Apply]));

    assert_eq!(*nested.field(), *flat.field());
    assert_eq!(nested.steps(), 4);
}

/// Constraints compose over evaluation results.
#[test]
fn constraints_over_results() {
    let table = InteractionTable::build();
    let mut processor = Processor::new(&table);
    let result = *processor.evaluate(&Derivation::from_morphisms(&[Not, Not]));

    assert!(check_all(&result, &[Constraint::dominance(Identity)]));
    assert!(!check_all(
        &result,
        &[Constraint::dominance(Identity), Constraint::dominance(Not)]
    ));
}

/// Two processors over one shared table stay fully isolated.
#[test]
fn processor_isolation() {
    let table = InteractionTable::build();
    let mut a = Processor::new(&table);
    let mut b = Processor::new(&table);

    a.evaluate(&Derivation::from_morphisms(&[Not]));
    b.evaluate(&Derivation::from_morphisms(&[Not, Not]));
    a.evaluate(&Derivation::from_morphisms(&[And]));

    assert!(b.field().is_true());
    assert_eq!(b.steps(), 2);
    assert_eq!(a.steps(), 2);
    assert_eq!(a.history(), [Not, And]);
}

/// The table reference is shared read-only state; processors can run
/// from separate threads without coordination.
#[test]
fn processors_run_concurrently() {
    let table = InteractionTable::build();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let table = &table;
                scope.spawn(move || {
                    let mut p = Processor::new(table);
                    let program = if i % 2 == 0 {
                        Derivation::from_morphisms(&[Not, Not])
                    } else {
                        Derivation::from_morphisms(&[Not])
                    };
                    p.evaluate(&program);
                    (i, p.field().is_true(), p.field().is_false())
                })
            })
            .collect();

        for handle in handles {
            let (i, is_true, is_false) = handle.join().unwrap();
            if i % 2 == 0 {
                assert!(is_true);
            } else {
                assert!(is_false);
            }
        }
    });
}

fn morphism_strategy() -> impl Strategy<Value = Morphism> {
    prop::sample::select(Morphism::ALL.to_vec())
}

proptest! {
    /// Normalization invariant: every evaluated sequence leaves the
    /// field summing to 1, and steps match the symbol count.
    #[test]
    fn field_normalized_after_any_sequence(
        symbols in prop::collection::vec(morphism_strategy(), 1..64)
    ) {
        let table = InteractionTable::build();
        let mut processor = Processor::new(&table);
        let result = processor.evaluate(&Derivation::from_morphisms(&symbols));
        prop_assert!((result.sum() - 1.0).abs() < 1e-9);
        prop_assert_eq!(processor.steps(), symbols.len() as u64);
    }

    /// Sequential-block equivalence: grouping an arbitrary contiguous
    /// span into a block never changes the outcome.
    #[test]
    fn block_grouping_is_transparent(
        symbols in prop::collection::vec(morphism_strategy(), 2..32),
        split in any::<prop::sample::Index>(),
    ) {
        let table = InteractionTable::build();
        let at = split.index(symbols.len());

        let mut flat = Processor::new(&table);
        flat.evaluate(&Derivation::from_morphisms(&symbols));

        let mut grouped = Derivation::from_morphisms(&symbols[..at]);
        grouped.push_block(Derivation::from_morphisms(&symbols[at..]));
        let mut nested = Processor::new(&table);
        nested.evaluate(&grouped);

        prop_assert_eq!(*nested.field(), *flat.field());
        prop_assert_eq!(nested.history(), flat.history());
    }

    /// History update law: after any sequence the window holds the last
    /// two symbols (or Identity padding for short sequences).
    #[test]
    fn history_tracks_last_two_symbols(
        symbols in prop::collection::vec(morphism_strategy(), 1..16)
    ) {
        let table = InteractionTable::build();
        let mut processor = Processor::new(&table);
        processor.evaluate(&Derivation::from_morphisms(&symbols));

        let newest = *symbols.last().unwrap();
        let older = if symbols.len() >= 2 {
            symbols[symbols.len() - 2]
        } else {
            Identity
        };
        prop_assert_eq!(processor.history(), [older, newest]);
    }

    /// Every triple resolves, and the result is dominated by something.
    #[test]
    fn lookup_is_total(
        context in morphism_strategy(),
        operator in morphism_strategy(),
        operand in morphism_strategy(),
    ) {
        let table = InteractionTable::build();
        let cell = table.lookup(context, operator, operand);
        prop_assert!(cell.dominant().is_some());
    }
}

/// Once ∅ enters the history it keeps absorbing until a ⊗ blend
/// dilutes it.
#[test]
fn void_absorbs_until_paired() {
    let table = InteractionTable::build();

    let mut absorbed = Processor::new(&table);
    absorbed.evaluate(&Derivation::from_morphisms(&[Lambda, Void, And]));
    assert!(absorbed.field().is_dominated_by(Void));

    // Continuing with ⊗ as operator synthesizes a pair blend again.
    let mut diluted = Processor::new(&table);
    diluted.evaluate(&Derivation::from_morphisms(&[Lambda, Void, And, Pair, Cond]));
    assert!(diluted.field().is_dominated_by(Pair));
}
