use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radio_core::signal::fir_filter::FirFilter;
use radio_core::signal::filter_design::design_low_pass_filter;
use radio_core::signal::window::Window;

fn bench_fir(c: &mut Criterion) {
    let mut kernel = vec![0.0f32; 127];
    design_low_pass_filter(&mut kernel, Window::Hamming, 0.1, 1.0);
    let mut filter = FirFilter::owned(kernel);

    let input: Vec<f32> = (0..4096)
        .map(|i| (i as f32 * 0.05).sin())
        .collect();
    let mut output = vec![0.0f32; input.len()];

    c.bench_function("fir_filter_127tap_4096samples", |b| {
        b.iter(|| filter.process(black_box(&input), black_box(&mut output)))
    });
}

criterion_group!(benches, bench_fir);
criterion_main!(benches);
