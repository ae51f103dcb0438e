#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use algebra::{
    fields::{bls12_381, bn254},
    Field, SquareRootField, UniformRand,
};

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const SAMPLES: usize = 1000;

macro_rules! field_bench {
    ($bench_name:ident, $name:expr, $field:ty) => {
        fn $bench_name(c: &mut Criterion) {
            let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
            let v: Vec<($field, $field)> = (0..SAMPLES)
                .map(|_| (<$field>::rand(&mut rng), <$field>::rand(&mut rng)))
                .collect();

            let mut group = c.benchmark_group($name);

            let mut count = 0;
            group.bench_function("mul", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(v[count].0 * &v[count].1)
                })
            });

            let mut count = 0;
            group.bench_function("square", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(v[count].0.square())
                })
            });

            let mut count = 0;
            group.bench_function("inverse", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(v[count].0.inverse())
                })
            });

            let squares: Vec<$field> = v.iter().map(|(a, _)| a.square()).collect();
            let mut count = 0;
            group.bench_function("sqrt", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(squares[count].sqrt())
                })
            });

            group.finish();
        }
    };
}

macro_rules! extension_bench {
    ($bench_name:ident, $name:expr, $field:ty) => {
        fn $bench_name(c: &mut Criterion) {
            let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
            let v: Vec<($field, $field)> = (0..SAMPLES)
                .map(|_| (<$field>::rand(&mut rng), <$field>::rand(&mut rng)))
                .collect();

            let mut group = c.benchmark_group($name);

            let mut count = 0;
            group.bench_function("mul", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(v[count].0 * &v[count].1)
                })
            });

            let mut count = 0;
            group.bench_function("square", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(v[count].0.square())
                })
            });

            let mut count = 0;
            group.bench_function("inverse", |b| {
                b.iter(|| {
                    count = (count + 1) % SAMPLES;
                    black_box(v[count].0.inverse())
                })
            });

            group.finish();
        }
    };
}

field_bench!(bench_bn254_fq, "BN254 Fq", bn254::Fq);
field_bench!(bench_bn254_fr, "BN254 Fr", bn254::Fr);
extension_bench!(bench_bn254_fq12, "BN254 Fq12", bn254::Fq12);
field_bench!(bench_bls12_381_fq, "BLS12-381 Fq", bls12_381::Fq);
field_bench!(bench_bls12_381_fr, "BLS12-381 Fr", bls12_381::Fr);
extension_bench!(bench_bls12_381_fq2, "BLS12-381 Fq2", bls12_381::Fq2);
extension_bench!(bench_bls12_381_fq12, "BLS12-381 Fq12", bls12_381::Fq12);

criterion_group!(
    field_arithmetic,
    bench_bn254_fq,
    bench_bn254_fr,
    bench_bn254_fq12,
    bench_bls12_381_fq,
    bench_bls12_381_fr,
    bench_bls12_381_fq2,
    bench_bls12_381_fq12
);

criterion_main!(field_arithmetic);
