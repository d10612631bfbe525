use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textsync_reconcile::{DiffToken, LocatedPatch, MutationRecorder, Reconciler};

fn base_document() -> String {
    "lorem ipsum dolor sit amet, consectetur adipiscing elit\n".repeat(200)
}

fn record_character_edits(c: &mut Criterion) {
    c.bench_function("record_character_edits", |b| {
        b.iter(|| {
            let mut recorder = MutationRecorder::new();
            for i in 0..500 {
                recorder.delete(black_box(i), i + 1).unwrap();
                recorder.insert(black_box(i), "x").unwrap();
            }
            recorder.extract_simplified_diff()
        })
    });
}

fn reconcile_character_patches(c: &mut Criterion) {
    let base = base_document();
    let patches: Vec<LocatedPatch> = (0..200)
        .map(|line| {
            LocatedPatch::located(
                line * 56 + 6,
                vec![
                    DiffToken::delete("i"),
                    DiffToken::delete("p"),
                    DiffToken::insert("I"),
                    DiffToken::insert("P"),
                ],
            )
        })
        .collect();
    let reconciler = Reconciler::default();

    c.bench_function("reconcile_character_patches", |b| {
        b.iter(|| reconciler.reconcile(black_box(&base), black_box(&patches)))
    });
}

criterion_group!(benches, record_character_edits, reconcile_character_patches);
criterion_main!(benches);
