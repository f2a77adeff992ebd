use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use qbloch_state::{analyze, measure, reduced_bloch, Qubit, StateVector};

fn sample_states() -> Vec<(&'static str, StateVector)> {
    let one = Complex64::new(1.0, 0.0);
    let product = StateVector::from_alpha_beta(
        Complex64::new(0.6, 0.0),
        Complex64::new(0.0, 0.8),
        one,
        Complex64::new(-1.0, 1.0),
    )
    .unwrap();
    let generic = StateVector::normalize([
        Complex64::new(0.3, 0.1),
        Complex64::new(-0.2, 0.5),
        Complex64::new(0.0, -0.4),
        Complex64::new(0.6, 0.0),
    ])
    .unwrap();
    vec![
        ("basis", StateVector::default()),
        ("product", product),
        ("bell", StateVector::bell_phi_plus()),
        ("generic", generic),
    ]
}

fn benchmark_normalize(c: &mut Criterion) {
    let raw = [
        Complex64::new(3.0, 1.0),
        Complex64::new(-2.0, 5.0),
        Complex64::new(0.0, -4.0),
        Complex64::new(6.0, 0.0),
    ];
    c.bench_function("normalize", |b| {
        b.iter(|| black_box(StateVector::normalize(black_box(raw))))
    });
}

fn benchmark_separability(c: &mut Criterion) {
    let mut group = c.benchmark_group("separability");
    for (name, state) in sample_states() {
        group.bench_with_input(BenchmarkId::new("analyze", name), &state, |b, state| {
            b.iter(|| black_box(analyze(state)));
        });
    }
    group.finish();
}

fn benchmark_reduced_bloch(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduced_bloch");
    for (name, state) in sample_states() {
        group.bench_with_input(BenchmarkId::new("projection", name), &state, |b, state| {
            b.iter(|| black_box(reduced_bloch(&state.to_density_matrix())));
        });
        group.bench_with_input(BenchmarkId::new("partial_trace", name), &state, |b, state| {
            b.iter(|| black_box(state.to_density_matrix().reduced(Qubit::Q0)));
        });
    }
    group.finish();
}

fn benchmark_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");
    for (name, state) in sample_states() {
        group.bench_with_input(BenchmarkId::new("measure_q0", name), &state, |b, state| {
            let mut counter = 0u32;
            let mut rng = move || {
                counter = counter.wrapping_add(1);
                f64::from(counter % 100) / 100.0
            };
            b.iter(|| black_box(measure(state, Qubit::Q0, &mut rng)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_separability,
    benchmark_reduced_bloch,
    benchmark_measurement
);
criterion_main!(benches);
