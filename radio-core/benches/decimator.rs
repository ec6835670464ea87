use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radio_core::signal::decimator::Decimator;

fn bench_decimator(c: &mut Criterion) {
    let input: Vec<f32> = (0..48_000).map(|i| (i as f32 * 0.01).sin()).collect();

    c.bench_function("decimator_ratio4_48000samples", |b| {
        b.iter(|| {
            let mut decimator: Decimator<f32> = Decimator::new(4);
            let mut out = Vec::with_capacity(input.len() / 4 + 1);
            for &x in black_box(&input) {
                if let Some(y) = decimator.push(x) {
                    out.push(y);
                }
            }
            out
        })
    });
}

criterion_group!(benches, bench_decimator);
criterion_main!(benches);
