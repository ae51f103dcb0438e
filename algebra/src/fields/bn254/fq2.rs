use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{
        bn254::fq::{Fq, FQ_ONE, FQ_ZERO},
        fp2::{Fp2, Fp2Parameters},
    },
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -1
    const NONRESIDUE: Fq = field_new!(Fq, BigInteger([
        0x68c3488912edefaa,
        0x8d087f6872aabf4f,
        0x51e1a24709081231,
        0x2259d6b14729c0fa,
    ]));

    /// Coefficients for the Frobenius automorphism, NONRESIDUE^((q^i - 1)/2) for i = 0, 1.
    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        // 1
        field_new!(Fq, BigInteger([
            0xd35d438dc58f0d9d,
            0x0a78eb28f5c70b3d,
            0x666ea36f7879462c,
            0x0e0a77c19a07df2f,
        ])),
        // -1
        field_new!(Fq, BigInteger([
            0x68c3488912edefaa,
            0x8d087f6872aabf4f,
            0x51e1a24709081231,
            0x2259d6b14729c0fa,
        ])),
    ];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        -(*fe)
    }
}

pub const FQ2_ZERO: Fq2 = field_new!(Fq2, FQ_ZERO, FQ_ZERO);
pub const FQ2_ONE: Fq2 = field_new!(Fq2, FQ_ONE, FQ_ZERO);
