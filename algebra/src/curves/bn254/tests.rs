use crate::{
    biginteger::BigInteger256,
    curves::{
        bn254::{
            g1::{Bn254G1Parameters, G1_GENERATOR_X, G1_GENERATOR_Y},
            g2::Bn254G2Parameters,
            Bn254, Bn254Parameters, G1Affine, G1Prepared, G1Projective, G2Affine, G2Prepared, G2Projective,
        },
        encoding::PointEncoding,
        bn::BnParameters,
        models::SWModelParameters,
        AffineCurve, PairingEngine, ProjectiveCurve,
    },
    error::AlgebraError,
    fields::{
        bn254::{Fq, Fq12, Fq2, Fr},
        Field, FieldEncoding, PrimeField, SquareRootField,
    },
    tests::{
        curves::{curve_tests, pairing_tests, sw_tests},
        groups::group_test,
    },
    UniformRand,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

#[test]
fn test_g1_projective_curve() {
    curve_tests::<G1Projective>();
    sw_tests::<Bn254G1Parameters>();
}

#[test]
fn test_g1_projective_group() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: G1Projective = rng.gen();
    let b: G1Projective = rng.gen();
    group_test(a, b);
}

#[test]
fn test_g1_generator() {
    let generator = G1Affine::prime_subgroup_generator();
    assert!(generator.is_on_curve());
    assert!(generator.is_in_correct_subgroup_assuming_on_curve());
    assert_eq!(generator.x, Fq::from(1u64));
    assert_eq!(generator.y, Fq::from(2u64));
    assert_eq!(G1_GENERATOR_X, Fq::one());
    assert_eq!(G1_GENERATOR_Y, Fq::one().double());
    assert_eq!(Bn254G1Parameters::COEFF_B, Fq::from(3u64));
}

#[test]
fn test_g1_doubling_scenario() {
    let generator = G1Projective::prime_subgroup_generator();
    let two = generator.mul(Fr::from(2u64));
    assert_eq!(two, generator.double());
    assert!(two != generator);

    let mut g = generator;
    g *= Fr::from(2u64);
    assert_eq!(g, two);

    let affine = two.into_affine();
    assert!(affine.is_on_curve());
    assert_eq!(affine, generator.into_affine().add_affine(&generator.into_affine()));
}

#[test]
fn test_g1_generator_encoding() {
    let generator = G1Affine::prime_subgroup_generator();

    let mut expected = vec![0u8; 32];
    expected[31] = 1;
    assert_eq!(generator.to_compressed(), expected);

    expected.extend(vec![0u8; 32]);
    expected[63] = 2;
    assert_eq!(generator.to_uncompressed(), expected);

    // (1, -2) has the lexicographically largest y.
    let negated = (-generator).to_compressed();
    assert_eq!(negated[0], 0x80);
    assert_eq!(&negated[1..], &generator.to_compressed()[1..]);
}

#[test]
fn test_g1_decompression_not_on_curve() {
    // 4^3 + 3 = 67 is not a square mod q.
    let x = Fq::from(4u64);
    assert!((x.square() * &x + &Fq::from(3u64)).sqrt().is_none());

    let bytes = x.to_be_bytes();
    match G1Affine::from_compressed(&bytes) {
        Err(AlgebraError::NotOnCurve) => {}
        other => panic!("unexpected decoding result {:?}", other),
    }
}

#[test]
fn test_g2_projective_curve() {
    curve_tests::<G2Projective>();
    sw_tests::<Bn254G2Parameters>();
}

#[test]
fn test_g2_projective_group() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a: G2Projective = rng.gen();
    let b: G2Projective = rng.gen();
    group_test(a, b);
}

#[test]
fn test_g2_generator() {
    let generator = G2Affine::prime_subgroup_generator();
    assert!(generator.is_on_curve());
    assert!(generator.is_in_correct_subgroup_assuming_on_curve());

    // b' = 3/(9 + u)
    let xi = Fq2::new(Fq::from(9u64), Fq::one());
    assert_eq!(Bn254G2Parameters::COEFF_B * &xi, Fq2::from(3u64));
}

#[test]
fn test_g2_cofactor_points_rejected() {
    // The twist has a large cofactor, so a point built from an arbitrary
    // x-coordinate lies outside G2.
    let mut x = Fq2::new(Fq::one(), Fq::one());
    let point = loop {
        if let Some(p) = G2Affine::get_point_from_x(x, false) {
            break p;
        }
        x += &Fq2::one();
    };
    assert!(point.is_on_curve());
    assert!(!point.is_in_correct_subgroup_assuming_on_curve());
    match point.check() {
        Err(AlgebraError::NotInSubgroup) => {}
        other => panic!("unexpected check result {:?}", other),
    }

    let g1 = G1Affine::prime_subgroup_generator();
    assert!(!Bn254::pairing_equation(&[(g1, point)], &Fq12::one()));
}

#[test]
fn test_two_inv() {
    let half = Bn254Parameters::TWO_INV;
    assert!(half.double().is_one());
    assert_eq!(half, Fq::one().double().inverse().unwrap());
}

#[test]
fn test_prepared_points() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();

    let p = G1Prepared::from(g1);
    assert!(!p.is_zero());
    assert_eq!(p, G1Prepared::default());
    assert!(G1Prepared::from(G1Affine::zero()).is_zero());

    // 64 doublings, 36 additions and the two closing lines of the 65 bit loop count 6u + 2.
    let q = G2Prepared::from(g2);
    assert!(!q.is_zero());
    assert_eq!(q.ell_coeffs.len(), 64 + 36 + 2);
    assert_eq!(q, G2Prepared::default());

    let zero = G2Prepared::from(G2Affine::zero());
    assert!(zero.is_zero());
    assert!(zero.ell_coeffs.is_empty());
}

#[test]
fn test_bilinearity() {
    pairing_tests::<Bn254>();
}

#[test]
fn test_final_exponentiation_matches_naive() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..2 {
        let p: G1Projective = rng.gen();
        let q: G2Projective = rng.gen();
        let f = Bn254::miller_loop(&[(
            G1Prepared::from(p.into_affine()),
            G2Prepared::from(q.into_affine()),
        )]);

        assert_eq!(
            Bn254::final_exponentiation(&f).unwrap(),
            Bn254::final_exponentiation_naive(&f).unwrap()
        );
    }

    // Also for an arbitrary element of Fq12.
    let f = Fq12::rand(&mut rng);
    assert_eq!(
        Bn254::final_exponentiation(&f).unwrap(),
        Bn254::final_exponentiation_naive(&f).unwrap()
    );

    assert!(Bn254::final_exponentiation(&Fq12::zero()).is_none());
    assert!(Bn254::final_exponentiation_naive(&Fq12::zero()).is_none());
}

#[test]
fn test_pairing_equation_rejects_invalid_points() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    let e = Bn254::pairing(g1, g2);

    assert!(Bn254::pairing_equation(&[(g1, g2)], &e));

    // (1, 3) is not on the curve.
    let off_curve = G1Affine::new(Fq::one(), Fq::from(3u64), false);
    assert!(!off_curve.is_on_curve());
    assert!(!Bn254::pairing_equation(&[(off_curve, g2)], &e));

    // An empty product is one.
    assert!(Bn254::pairing_equation(&[], &Fq12::one()));
}

#[test]
fn test_field_sizes() {
    assert_eq!(Fq::encoded_size(), 32);
    assert_eq!(Fr::encoded_size(), 32);
    assert_eq!(Fq2::encoded_size(), 64);
    assert_eq!(Fq12::encoded_size(), 384);
    assert_eq!(G1Affine::uncompressed_size(), 64);
    assert_eq!(G2Affine::compressed_size(), 64);
    assert_eq!(G2Projective::le_montgomery_size(), 192);
    assert_eq!(Fr::characteristic(), BigInteger256([
        0x43e1f593f0000001,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]).as_ref());
}
