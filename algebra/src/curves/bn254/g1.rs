use crate::{
    biginteger::BigInteger256 as BigInteger,
    curves::models::{GroupAffine, ModelParameters, SWModelParameters},
    fields::bn254::{Fq, Fr},
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bn254G1Parameters;

impl ModelParameters for Bn254G1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Bn254G1Parameters {
    /// COEFF_B = 3
    const COEFF_B: Fq = field_new!(Fq, BigInteger([
        0x7a17caa950ad28d7,
        0x1f6ac17ae15521b9,
        0x334bea4e696bd284,
        0x2a1f6744ce179d8e,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G1_GENERATOR_X, G1_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G1_GENERATOR_X, G1_GENERATOR_Y);

    /// The curve has prime order, every point on it lies in G1.
    fn is_in_correct_subgroup_assuming_on_curve(_: &GroupAffine<Self>) -> bool {
        true
    }
}

/// G1_GENERATOR_X = 1
pub const G1_GENERATOR_X: Fq = field_new!(Fq, BigInteger([
    0xd35d438dc58f0d9d,
    0x0a78eb28f5c70b3d,
    0x666ea36f7879462c,
    0x0e0a77c19a07df2f,
]));

/// G1_GENERATOR_Y = 2
pub const G1_GENERATOR_Y: Fq = field_new!(Fq, BigInteger([
    0xa6ba871b8b1e1b3a,
    0x14f1d651eb8e167b,
    0xccdd46def0f28c58,
    0x1c14ef83340fbe5e,
]));
