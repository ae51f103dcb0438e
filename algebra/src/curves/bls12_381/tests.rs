use crate::{
    curves::{
        bls12_381::{
            g1::{Bls12_381G1Parameters, BETA},
            g2::Bls12_381G2Parameters,
            Bls12_381, Bls12_381Parameters, G1Affine, G1Prepared, G1Projective, G2Affine, G2Prepared, G2Projective,
        },
        bls12::Bls12Parameters,
        encoding::PointEncoding,
        models::SWModelParameters,
        AffineCurve, PairingEngine, ProjectiveCurve,
    },
    error::AlgebraError,
    fields::{
        bls12_381::{Fq, Fq12, Fq2, Fr},
        BitIterator, Field, FieldEncoding, SquareRootField,
    },
    tests::{
        curves::{curve_tests, pairing_tests, sw_tests},
        groups::group_test,
    },
    UniformRand,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn in_subgroup_by_order<P: SWModelParameters>(
    p: &crate::curves::models::GroupAffine<P>,
) -> bool {
    p.mul_bits(BitIterator::new(Fr::characteristic())).is_zero()
}

#[test]
fn test_g1_projective_curve() {
    curve_tests::<G1Projective>();
    sw_tests::<Bls12_381G1Parameters>();
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
    assert!(in_subgroup_by_order(&generator));
    assert_eq!(Bls12_381G1Parameters::COEFF_B, Fq::from(4u64));
}

#[test]
fn test_g1_generator_encoding() {
    let generator = G1Affine::prime_subgroup_generator();

    // The y-coordinate of the generator is not the largest root, so the
    // compressed form is the plain big endian x-coordinate.
    let compressed = generator.to_compressed();
    assert_eq!(compressed.len(), 48);
    assert_eq!(
        compressed[..8],
        [0x17, 0xf1, 0xd3, 0xa7, 0x31, 0x97, 0xd7, 0x94]
    );
    assert_eq!(compressed[40..], [0xfb, 0x3a, 0xf0, 0x0a, 0xdb, 0x22, 0xc6, 0xbb]);
    assert_eq!(compressed, generator.x.to_be_bytes());
    assert_eq!(G1Affine::from_compressed(&compressed).unwrap(), generator);

    let negated = (-generator).to_compressed();
    assert_eq!(negated[0], 0x80 | 0x17);
}

#[test]
fn test_g1_decompression_not_on_curve() {
    // 1 + 4 = 5 is not a square mod q.
    let x = Fq::one();
    assert!((x.square() * &x + &Fq::from(4u64)).sqrt().is_none());

    match G1Affine::from_compressed(&x.to_be_bytes()) {
        Err(AlgebraError::NotOnCurve) => {}
        other => panic!("unexpected decoding result {:?}", other),
    }
}

#[test]
fn test_g1_endomorphism_subgroup_check() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    // beta is a primitive cube root of unity.
    assert!(!BETA.is_one());
    assert!((BETA.square() * &BETA).is_one());

    for _ in 0..5 {
        let p: G1Affine = rng.gen();
        assert!(p.is_in_correct_subgroup_assuming_on_curve());
        assert!(in_subgroup_by_order(&p));
    }

    // Points built from an arbitrary x-coordinate carry a cofactor component.
    let mut x = Fq::from(2u64);
    let mut found = 0;
    while found < 5 {
        if let Some(p) = G1Affine::get_point_from_x(x, true) {
            assert!(p.is_on_curve());
            assert!(!in_subgroup_by_order(&p));
            assert!(!p.is_in_correct_subgroup_assuming_on_curve());
            match p.check() {
                Err(AlgebraError::NotInSubgroup) => {}
                other => panic!("unexpected check result {:?}", other),
            }
            found += 1;
        }
        x += &Fq::one();
    }

    assert!(G1Affine::zero().is_in_correct_subgroup_assuming_on_curve());
}

#[test]
fn test_g2_projective_curve() {
    curve_tests::<G2Projective>();
    sw_tests::<Bls12_381G2Parameters>();
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
    assert!(in_subgroup_by_order(&generator));

    // b' = 4(1 + u)
    assert_eq!(
        Bls12_381G2Parameters::COEFF_B,
        Fq2::new(Fq::from(4u64), Fq::from(4u64))
    );
}

#[test]
fn test_g2_endomorphism_subgroup_check() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..3 {
        let q: G2Affine = rng.gen();
        assert!(q.is_in_correct_subgroup_assuming_on_curve());
        assert!(in_subgroup_by_order(&q));
    }

    let mut x = Fq2::new(Fq::one(), Fq::one());
    let mut found = 0;
    while found < 3 {
        if let Some(q) = G2Affine::get_point_from_x(x, false) {
            assert!(q.is_on_curve());
            assert!(!in_subgroup_by_order(&q));
            assert!(!q.is_in_correct_subgroup_assuming_on_curve());
            found += 1;
        }
        x += &Fq2::one();
    }

    assert!(G2Affine::zero().is_in_correct_subgroup_assuming_on_curve());
}

#[test]
fn test_two_inv() {
    let half = Bls12_381Parameters::TWO_INV;
    assert!(half.double().is_one());
    assert_eq!(half, Fq::one().double().inverse().unwrap());
}

#[test]
fn test_prepared_points() {
    let g2 = G2Affine::prime_subgroup_generator();

    // 63 doublings and 5 additions for |x| = 0xd201000000010000.
    let q = G2Prepared::from(g2);
    assert_eq!(q.ell_coeffs.len(), 63 + 5);
    assert_eq!(q, G2Prepared::default());
    assert!(G2Prepared::from(G2Affine::zero()).is_zero());
    assert!(G1Prepared::from(G1Affine::zero()).is_zero());
}

#[test]
fn test_bilinearity() {
    pairing_tests::<Bls12_381>();
}

#[test]
fn test_final_exponentiation_is_cube_of_naive() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    let p: G1Projective = rng.gen();
    let q: G2Projective = rng.gen();
    let f = Bls12_381::miller_loop(&[(
        G1Prepared::from(p.into_affine()),
        G2Prepared::from(q.into_affine()),
    )]);

    let naive = Bls12_381::final_exponentiation_naive(&f).unwrap();
    assert_eq!(
        Bls12_381::final_exponentiation(&f).unwrap(),
        naive.pow([3u64])
    );
    assert!(Bls12_381::final_exponentiation(&Fq12::zero()).is_none());
}

#[test]
fn test_pairing_equation_rejects_invalid_points() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    let e = Bls12_381::pairing(g1, g2);
    assert!(Bls12_381::pairing_equation(&[(g1, g2)], &e));

    let off_curve = G1Affine::new(Fq::one(), Fq::one(), false);
    assert!(!Bls12_381::pairing_equation(&[(off_curve, g2)], &e));

    let mut x = Fq::from(2u64);
    let outside = loop {
        if let Some(p) = G1Affine::get_point_from_x(x, false) {
            break p;
        }
        x += &Fq::one();
    };
    assert!(!Bls12_381::pairing_equation(&[(outside, g2)], &e));
}

#[test]
fn test_field_sizes() {
    assert_eq!(Fq::encoded_size(), 48);
    assert_eq!(Fr::encoded_size(), 32);
    assert_eq!(Fq12::encoded_size(), 576);
    assert_eq!(G1Affine::compressed_size(), 48);
    assert_eq!(G2Affine::uncompressed_size(), 192);
    assert_eq!(G1Projective::le_montgomery_size(), 144);
    assert_eq!(Fq12::rand(&mut XorShiftRng::seed_from_u64(1231275789u64)).to_le_bytes().len(), 576);
}
