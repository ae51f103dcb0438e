use crate::{
    biginteger::BigInteger384 as BigInteger,
    curves::{
        bls12::Bls12Parameters,
        bls12_381::{g1, Bls12_381Parameters},
        models::{GroupAffine, ModelParameters, SWModelParameters},
        AffineCurve,
    },
    fields::{
        bls12_381::{Fq, Fq2, Fr},
        BitIterator,
    },
};

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Bls12_381G2Parameters;

impl ModelParameters for Bls12_381G2Parameters {
    type BaseField = Fq2;
    type ScalarField = Fr;
}

impl SWModelParameters for Bls12_381G2Parameters {
    /// COEFF_B = 4 * (1 + u)
    const COEFF_B: Fq2 = field_new!(
        Fq2,
        <g1::Bls12_381G1Parameters as SWModelParameters>::COEFF_B,
        <g1::Bls12_381G1Parameters as SWModelParameters>::COEFF_B,
    );

    /// AFFINE_GENERATOR_COEFFS = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G2_GENERATOR_X, G2_GENERATOR_Y);

    /// The untwist-Frobenius-twist endomorphism `psi` acts on G2 as
    /// multiplication by `x` ([ePrint 2021/1130](https://eprint.iacr.org/2021/1130.pdf)).
    fn is_in_correct_subgroup_assuming_on_curve(p: &GroupAffine<Self>) -> bool {
        if p.is_zero() {
            return true;
        }
        let mut x_times_p = p.mul_bits(BitIterator::new(Bls12_381Parameters::X));
        if Bls12_381Parameters::X_IS_NEGATIVE {
            x_times_p = -x_times_p;
        }
        x_times_p == psi(p)
    }
}

/// `psi(x, y) = (conj(x) * PSI_X, conj(y) * PSI_Y)`.
fn psi(p: &GroupAffine<Bls12_381G2Parameters>) -> GroupAffine<Bls12_381G2Parameters> {
    let mut x = p.x;
    let mut y = p.y;
    x.conjugate();
    y.conjugate();
    GroupAffine::new(x * &PSI_X, y * &PSI_Y, false)
}

/// PSI_X = 1/(1 + u)^((q - 1)/3)
const PSI_X: Fq2 = field_new!(
    Fq2,
    field_new!(Fq, BigInteger([0x0, 0x0, 0x0, 0x0, 0x0, 0x0])),
    field_new!(Fq, BigInteger([
        0x890dc9e4867545c3,
        0x2af322533285a5d5,
        0x50880866309b7e2c,
        0xa20d1b8c7e881024,
        0x14e4f04fe2db9068,
        0x14e56d3f1564853a,
    ])),
);

/// PSI_Y = 1/(1 + u)^((q - 1)/2)
const PSI_Y: Fq2 = field_new!(
    Fq2,
    field_new!(Fq, BigInteger([
        0x3e2f585da55c9ad1,
        0x4294213d86c18183,
        0x382844c88b623732,
        0x92ad2afd19103e18,
        0x1d794e4fac7cf0b9,
        0x0bd592fc7d825ec8,
    ])),
    field_new!(Fq, BigInteger([
        0x7bcfa7a25aa30fda,
        0xdc17dec12a927e7c,
        0x2f088dd86b4ebef1,
        0xd1ca2087da74d4a7,
        0x2da2596696cebc1d,
        0x0e2b7eedbbfd87d2,
    ])),
);

pub const G2_GENERATOR_X: Fq2 = field_new!(Fq2, G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
pub const G2_GENERATOR_Y: Fq2 = field_new!(Fq2, G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

/// G2_GENERATOR_X_C0 =
/// 352701069587466618187139116011060144890029952792775240219908644239793785735715026873347600343865175952761926303160
pub const G2_GENERATOR_X_C0: Fq = field_new!(Fq, BigInteger([
    0xf5f28fa202940a10,
    0xb3f5fb2687b4961a,
    0xa1a893b53e2ae580,
    0x9894999d1a3caee9,
    0x6f67b7631863366b,
    0x058191924350bcd7,
]));

/// G2_GENERATOR_X_C1 =
/// 3059144344244213709971259814753781636986470325476647558659373206291635324768958432433509563104347017837885763365758
pub const G2_GENERATOR_X_C1: Fq = field_new!(Fq, BigInteger([
    0xa5a9c0759e23f606,
    0xaaa0c59dbccd60c3,
    0x3bb17e18e2867806,
    0x1b1ab6cc8541b367,
    0xc2b6ed0ef2158547,
    0x11922a097360edf3,
]));

/// G2_GENERATOR_Y_C0 =
/// 1985150602287291935568054521177171638300868978215655730859378665066344726373823718423869104263333984641494340347905
pub const G2_GENERATOR_Y_C0: Fq = field_new!(Fq, BigInteger([
    0x4c730af860494c4a,
    0x597cfa1f5e369c5a,
    0xe7e6856caa0a635a,
    0xbbefb5e96e0d495f,
    0x07d3a975f0ef25a2,
    0x0083fd8e7e80dae5,
]));

/// G2_GENERATOR_Y_C1 =
/// 927553665492332455747201965776037880757740193453592970025027978793976877002675564980949289727957565575433344219582
pub const G2_GENERATOR_Y_C1: Fq = field_new!(Fq, BigInteger([
    0xadc0fc92df64b05d,
    0x18aa270a2b1461dc,
    0x86adac6a3be4eba0,
    0x79495c4ec93da33a,
    0xe7175850a43ccaed,
    0x0b2bc2a163de1bf2,
]));
