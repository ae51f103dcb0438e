use crate::{
    biginteger::{BigInteger, BigInteger256},
    fields::{
        bn254::{fq::Fq, fq12::Fq12, fq2::Fq2, fq6::Fq6, fr::Fr, Fq6Parameters},
        fp6_3over2::Fp6Parameters,
        Field, FieldEncoding, FpParameters, LegendreSymbol, PrimeField, SquareRootField,
    },
    tests::fields::{
        encoding_test, field_test, frobenius_test, prime_field_encoding_test, primefield_test,
        sqrt_field_test,
    },
    UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::str::FromStr;

#[test]
fn test_bn254_fr() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: Fr = UniformRand::rand(&mut rng);
    let b: Fr = UniformRand::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(b);
    primefield_test::<Fr>();
    prime_field_encoding_test::<Fr>();
}

#[test]
fn test_bn254_fq() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: Fq = UniformRand::rand(&mut rng);
    let b: Fq = UniformRand::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fq>();
    prime_field_encoding_test::<Fq>();
}

#[test]
fn test_bn254_fq2() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: Fq2 = UniformRand::rand(&mut rng);
    let b: Fq2 = UniformRand::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    frobenius_test::<Fq2, _>(Fq::characteristic(), 13);
    encoding_test::<Fq2>();
}

#[test]
fn test_bn254_fq6() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let g: Fq6 = UniformRand::rand(&mut rng);
    let h: Fq6 = UniformRand::rand(&mut rng);
    field_test(g, h);
    frobenius_test::<Fq6, _>(Fq::characteristic(), 13);
    encoding_test::<Fq6>();
}

#[test]
fn test_bn254_fq12() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let g: Fq12 = UniformRand::rand(&mut rng);
    let h: Fq12 = UniformRand::rand(&mut rng);
    field_test(g, h);
    frobenius_test::<Fq12, _>(Fq::characteristic(), 13);
    encoding_test::<Fq12>();
}

#[test]
fn test_fq_repr_known_values() {
    // The Montgomery form of one is R mod q.
    assert_eq!(
        Fq::one().montgomery_repr(),
        BigInteger256([
            0xd35d438dc58f0d9d,
            0x0a78eb28f5c70b3d,
            0x666ea36f7879462c,
            0x0e0a77c19a07df2f,
        ])
    );
    let minus_one = -Fq::one();
    let mut q_minus_one = <Fq as PrimeField>::Params::MODULUS;
    q_minus_one.sub_noborrow(&BigInteger256::from(1));
    assert_eq!(minus_one.into_repr(), q_minus_one);
    assert!(minus_one.is_negative());
    assert!(!Fq::one().is_negative());
    assert_eq!(
        Fq::from_str(
            "21888242871839275222246405745257275088696311157297823662689037894645226208582"
        )
        .unwrap(),
        minus_one
    );
}

#[test]
fn test_fq_sqrt_known_values() {
    // 4 has the two roots 2 and q - 2; the non-negative one is returned.
    let four = Fq::from(4u64);
    assert_eq!(four.sqrt().unwrap(), Fq::from(2u64));
    // q = 3 mod 4, so -1 is not a square.
    assert_eq!((-Fq::one()).legendre(), LegendreSymbol::QuadraticNonResidue);
    assert!((-Fq::one()).sqrt().is_none());
    // 3 is the multiplicative generator, hence a non-residue.
    assert!(Fq::from(3u64).sqrt().is_none());
}

#[test]
fn test_fq2_sqrt_of_minus_one() {
    // u^2 = -1
    let u = Fq2::new(Fq::zero(), Fq::one());
    let root = (-Fq2::one()).sqrt().unwrap();
    assert!(root == u || root == -u);
    assert!(!root.is_lexicographically_largest());
    // Every element of the base field is a square in Fq2.
    let three = Fq2::new(Fq::from(3u64), Fq::zero());
    let root = three.sqrt().unwrap();
    assert_eq!(root.square(), three);
    // The cubic non-residue 9 + u is not a square.
    assert!(!Fq6Parameters::NONRESIDUE.is_square());
    assert!(Fq6Parameters::NONRESIDUE.sqrt().is_none());
}

#[test]
fn test_fq2_encoding_layout() {
    let a = Fq2::new(Fq::from(1u64), Fq::from(2u64));
    let le = a.to_le_bytes();
    let be = a.to_be_bytes();
    assert_eq!(le.len(), 64);
    assert_eq!(le[0], 1);
    assert_eq!(le[32], 2);
    assert_eq!(be[31], 2);
    assert_eq!(be[63], 1);
}

#[test]
fn test_fq6_and_fq12_tower_relations() {
    // v^3 = 9 + u
    let v = Fq6::new(Fq2::zero(), Fq2::one(), Fq2::zero());
    let v3 = v * &v * &v;
    assert_eq!(v3, Fq6::new(Fq6Parameters::NONRESIDUE, Fq2::zero(), Fq2::zero()));
    assert_eq!(
        Fq6Parameters::mul_fp2_by_nonresidue(&Fq2::one()),
        Fq6Parameters::NONRESIDUE
    );

    // w^2 = v
    let w = Fq12::new(Fq6::zero(), Fq6::one());
    assert_eq!(w.square(), Fq12::new(v, Fq6::zero()));
}

#[test]
fn test_fq6_sparse_multiplication() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..10 {
        let a: Fq6 = UniformRand::rand(&mut rng);
        let c0: Fq2 = UniformRand::rand(&mut rng);
        let c1: Fq2 = UniformRand::rand(&mut rng);
        let c2: Fq2 = UniformRand::rand(&mut rng);

        let mut b = a;
        b.mul_by_1(&c1);
        assert_eq!(b, a * &Fq6::new(Fq2::zero(), c1, Fq2::zero()));

        let mut b = a;
        b.mul_by_01(&c0, &c1);
        assert_eq!(b, a * &Fq6::new(c0, c1, Fq2::zero()));

        let mut b = a;
        b.mul_by_02(&c0, &c2);
        assert_eq!(b, a * &Fq6::new(c0, Fq2::zero(), c2));
    }
}

#[test]
fn test_fq12_sparse_multiplication() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..10 {
        let a: Fq12 = UniformRand::rand(&mut rng);
        let c0: Fq2 = UniformRand::rand(&mut rng);
        let c1: Fq2 = UniformRand::rand(&mut rng);
        let c2: Fq2 = UniformRand::rand(&mut rng);

        let mut b = a;
        b.mul_by_014(&c0, &c1, &c2);
        let sparse = Fq12::new(
            Fq6::new(c0, c1, Fq2::zero()),
            Fq6::new(Fq2::zero(), c2, Fq2::zero()),
        );
        assert_eq!(b, a * &sparse);

        let mut b = a;
        b.mul_by_024(&c0, &c1, &c2);
        let sparse = Fq12::new(
            Fq6::new(c0, Fq2::zero(), c2),
            Fq6::new(Fq2::zero(), c1, Fq2::zero()),
        );
        assert_eq!(b, a * &sparse);
    }
}

#[test]
fn test_fq12_cyclotomic_arithmetic() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..5 {
        let f: Fq12 = UniformRand::rand(&mut rng);

        // f^((q^6 - 1)(q^2 + 1)) lies in the cyclotomic subgroup.
        let mut g = f.unitary_inverse() * &f.inverse().unwrap();
        let mut g_q2 = g;
        g_q2.frobenius_map(2);
        g *= &g_q2;
        assert_eq!(f.to_cyclotomic_subgroup().unwrap(), g);

        assert_eq!(g.cyclotomic_square(), g.square());
        assert_eq!(g * &g.unitary_inverse(), Fq12::one());

        let e = [0x44e992b44a6909f1u64];
        assert_eq!(g.cyclotomic_exp(&e), g.pow(&e));
        let e = Fr::characteristic();
        assert_eq!(g.cyclotomic_exp(e), g.pow(e));

        let mut conj = g;
        conj.conjugate();
        let mut g_q6 = g;
        g_q6.frobenius_map(6);
        assert_eq!(conj, g_q6);
    }
    assert!(Fq12::zero().to_cyclotomic_subgroup().is_none());
}
