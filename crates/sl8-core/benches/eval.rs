use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sl8_core::{Derivation, InteractionTable, Morphism, Processor};

fn bench_build_table(c: &mut Criterion) {
    c.bench_function("build_table", |b| {
        b.iter(|| black_box(InteractionTable::build()));
    });
}

fn bench_evaluate_flat(c: &mut Criterion) {
    let table = InteractionTable::build();
    let symbols: Vec<Morphism> = Morphism::ALL.iter().copied().cycle().take(1024).collect();
    let derivation = Derivation::from_morphisms(&symbols);

    c.bench_function("evaluate_flat_1024", |b| {
        b.iter(|| {
            let mut processor = Processor::new(&table);
            black_box(*processor.evaluate(&derivation));
        });
    });
}

fn bench_evaluate_nested(c: &mut Criterion) {
    let table = InteractionTable::build();

    // 128 levels of block nesting, each level contributing 4 symbols.
    let mut derivation = Derivation::from_morphisms(&[
        Morphism::Lambda,
        Morphism::Identity,
        Morphism::Apply,
        Morphism::Not,
    ]);
    for _ in 0..128 {
        let mut outer = Derivation::from_morphisms(&[
            Morphism::Lambda,
            Morphism::Identity,
            Morphism::Apply,
            Morphism::Not,
        ]);
        outer.push_block(derivation);
        derivation = outer;
    }

    c.bench_function("evaluate_nested_128", |b| {
        b.iter(|| {
            let mut processor = Processor::new(&table);
            black_box(*processor.evaluate(&derivation));
        });
    });
}

criterion_group!(
    benches,
    bench_build_table,
    bench_evaluate_flat,
    bench_evaluate_nested
);
criterion_main!(benches);
