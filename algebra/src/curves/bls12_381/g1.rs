use crate::{
    biginteger::BigInteger384 as BigInteger,
    curves::{
        models::{GroupAffine, ModelParameters, SWModelParameters},
        AffineCurve,
    },
    fields::{
        bls12_381::{Fq, Fr},
        BitIterator,
    },
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bls12_381G1Parameters;

impl ModelParameters for Bls12_381G1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Bls12_381G1Parameters {
    /// COEFF_B = 4
    const COEFF_B: Fq = field_new!(Fq, BigInteger([
        0xaa270000000cfff3,
        0x53cc0032fc34000a,
        0x478fe97a6b0a807f,
        0xb1d37ebee6ba24d7,
        0x8ec9733bbf78ab2f,
        0x09d645513d83de7e,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G1_GENERATOR_X, G1_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G1_GENERATOR_X, G1_GENERATOR_Y);

    /// Bowe's check [ePrint 2019/814](https://eprint.iacr.org/2019/814.pdf):
    /// on G1 the endomorphism `sigma(x, y) = (beta * x, y)` acts as
    /// multiplication by `-x^2`.
    fn is_in_correct_subgroup_assuming_on_curve(p: &GroupAffine<Self>) -> bool {
        if p.is_zero() {
            return true;
        }
        let sigma = GroupAffine::<Self>::new(p.x * &BETA, p.y, false);
        let x_square_p = p.mul_bits(BitIterator::new(X_SQUARE));
        -x_square_p == sigma
    }
}

/// x^2 = 228988810152649578064853576960394133504
const X_SQUARE: [u64; 2] = [0x0000000100000000, 0xac45a4010001a402];

/// BETA = 793479390729215512621379701633421447060886740281060493010456487427281649075476305620758731620350,
/// a primitive cube root of unity in Fq.
pub const BETA: Fq = field_new!(Fq, BigInteger([
    0x30f1361b798a64e8,
    0xf3b8ddab7ece5a2a,
    0x16a8ca3ac61577f7,
    0xc26a2ff874fd029b,
    0x3636b76660701c6e,
    0x051ba4ab241b6160,
]));

/// G1_GENERATOR_X =
/// 3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507
pub const G1_GENERATOR_X: Fq = field_new!(Fq, BigInteger([
    0x5cb38790fd530c16,
    0x7817fc679976fff5,
    0x154f95c7143ba1c1,
    0xf0ae6acdf3d0e747,
    0xedce6ecc21dbf440,
    0x120177419e0bfb75,
]));

/// G1_GENERATOR_Y =
/// 1339506544944476473020471379941921221584933875938349620426543736416511423956333506472724655353366534992391756441569
pub const G1_GENERATOR_Y: Fq = field_new!(Fq, BigInteger([
    0xbaac93d50ce72271,
    0x8c22631a7918fd8e,
    0xdd595f13570725ce,
    0x51ac582950405194,
    0x0e1c8c3fad0059c0,
    0x0bbc3efc5008a26a,
]));
