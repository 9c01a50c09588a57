use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cheb_kernel::{
    ChebConfig, adaptive_degree, barycentric_evaluate, barycentric_weights, chebyshev_points,
    clenshaw_evaluate, multiply_coefficients, roots_on_canonical_domain, standard_chop,
    values_to_coefficients,
};

fn sample_coeffs(n: usize) -> Vec<f64> {
    let x = chebyshev_points(n);
    let v: Vec<f64> = x.iter().map(|&t| (12.0 * t).sin() + (3.0 * t).exp()).collect();
    values_to_coefficients(&v)
}

fn transform_bench(c: &mut Criterion) {
    let x = chebyshev_points(1025);
    let v: Vec<f64> = x.iter().map(|&t| (8.0 * t).cos()).collect();

    let mut group = c.benchmark_group("transform");
    group.bench_function("values_to_coefficients_1025", |b| {
        b.iter(|| values_to_coefficients(black_box(&v)))
    });
    group.finish();
}

fn evaluate_bench(c: &mut Criterion) {
    let n = 65;
    let coeffs = sample_coeffs(n);
    let nodes = chebyshev_points(n);
    let weights = barycentric_weights(n);
    let values: Vec<f64> = nodes.iter().map(|&t| (12.0 * t).sin() + (3.0 * t).exp()).collect();
    let xs: Vec<f64> = (0..1000).map(|k| -1.0 + 0.002 * k as f64).collect();

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("clenshaw_65x1000", |b| {
        b.iter(|| clenshaw_evaluate(black_box(&xs), black_box(&coeffs)))
    });
    group.bench_function("barycentric_65x1000", |b| {
        b.iter(|| barycentric_evaluate(black_box(&xs), &values, &nodes, &weights))
    });
    group.finish();
}

fn construct_bench(c: &mut Criterion) {
    let coeffs = sample_coeffs(257);

    let mut group = c.benchmark_group("construct");
    group.bench_function("standard_chop_257", |b| {
        b.iter(|| standard_chop(black_box(&coeffs), f64::EPSILON))
    });
    group.bench_function("adaptive_sin_exp", |b| {
        b.iter(|| {
            adaptive_degree(
                |xs: &[f64]| xs.iter().map(|&t| (12.0 * t).sin() + (3.0 * t).exp()).collect::<Vec<f64>>(),
                16,
                f64::EPSILON,
            )
        })
    });
    group.bench_function("multiply_64", |b| {
        let a = sample_coeffs(64);
        b.iter(|| multiply_coefficients(black_box(&a), black_box(&a)))
    });
    group.finish();
}

fn roots_bench(c: &mut Criterion) {
    let cfg = ChebConfig::default();
    let small = sample_coeffs(40);
    let large = {
        let x = chebyshev_points(257);
        let v: Vec<f64> = x.iter().map(|&t| (60.0 * t).cos()).collect();
        values_to_coefficients(&v)
    };

    let mut group = c.benchmark_group("roots");
    group.sample_size(20);
    group.bench_function("colleague_40", |b| {
        b.iter(|| roots_on_canonical_domain(black_box(&small), cfg.default_htol(), &cfg))
    });
    group.bench_function("subdivide_cos60", |b| {
        b.iter(|| roots_on_canonical_domain(black_box(&large), cfg.default_htol(), &cfg))
    });
    group.finish();
}

criterion_group!(
    benches,
    transform_bench,
    evaluate_bench,
    construct_bench,
    roots_bench
);
criterion_main!(benches);
