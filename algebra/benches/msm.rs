#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};

use algebra::{
    curves::{bls12_381, bn254},
    msm::VariableBaseMSM,
    PrimeField, ProjectiveCurve, UniformRand,
};

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const LOG_SIZES: [usize; 4] = [8, 10, 12, 14];

fn load_data<G: ProjectiveCurve>(
    samples: usize,
) -> (Vec<<G::ScalarField as PrimeField>::BigInt>, Vec<G::Affine>) {
    let mut rng = XorShiftRng::seed_from_u64(234872845u64);

    let v = (0..samples)
        .map(|_| G::ScalarField::rand(&mut rng).into_repr())
        .collect::<Vec<_>>();
    let g = (0..samples)
        .map(|_| G::rand(&mut rng))
        .collect::<Vec<_>>();
    (v, G::batch_normalization_into_affine(&g))
}

fn bench_msm<G: ProjectiveCurve>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for log_size in LOG_SIZES.iter() {
        let (v, g) = load_data::<G>(1 << log_size);
        group.bench_with_input(BenchmarkId::from_parameter(1 << log_size), &(v, g), |b, (v, g)| {
            b.iter(|| VariableBaseMSM::multi_scalar_mul::<G::Affine>(g.as_slice(), v.as_slice()))
        });
    }
    group.finish();
}

fn variable_msm_bn254(c: &mut Criterion) {
    bench_msm::<bn254::G1Projective>(c, "Variable MSM BN254 G1");
}

fn variable_msm_bls12_381(c: &mut Criterion) {
    bench_msm::<bls12_381::G1Projective>(c, "Variable MSM BLS12-381 G1");
    bench_msm::<bls12_381::G2Projective>(c, "Variable MSM BLS12-381 G2");
}

fn variable_msm_window_sizes(c: &mut Criterion) {
    let (v, g) = load_data::<bn254::G1Projective>(1 << 12);
    let mut group = c.benchmark_group("Variable MSM BN254 G1 by window");
    for window in 8..=14 {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| VariableBaseMSM::multi_scalar_mul_c(g.as_slice(), v.as_slice(), window))
        });
    }
    group.finish();
}

criterion_group! {
    name = variable_msm_eval;
    config = Criterion::default().sample_size(10);
    targets = variable_msm_bn254, variable_msm_bls12_381, variable_msm_window_sizes
}

criterion_main!(variable_msm_eval);
