use crate::{
    biginteger::BigInteger384 as BigInteger,
    fields::{
        bls12_381::fq::{Fq, FQ_ONE, FQ_ZERO},
        fp2::{Fp2, Fp2Parameters},
    },
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = -1
    const NONRESIDUE: Fq = field_new!(Fq, BigInteger([
        0x43f5fffffffcaaae,
        0x32b7fff2ed47fffd,
        0x07e83a49a2e99d69,
        0xeca8f3318332bb7a,
        0xef148d1ea0f4c069,
        0x040ab3263eff0206,
    ]));

    /// Coefficients for the Frobenius automorphism, NONRESIDUE^((q^i - 1)/2) for i = 0, 1.
    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        // 1
        field_new!(Fq, BigInteger([
            0x760900000002fffd,
            0xebf4000bc40c0002,
            0x5f48985753c758ba,
            0x77ce585370525745,
            0x5c071a97a256ec6d,
            0x15f65ec3fa80e493,
        ])),
        // -1
        field_new!(Fq, BigInteger([
            0x43f5fffffffcaaae,
            0x32b7fff2ed47fffd,
            0x07e83a49a2e99d69,
            0xeca8f3318332bb7a,
            0xef148d1ea0f4c069,
            0x040ab3263eff0206,
        ])),
    ];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        -(*fe)
    }
}

pub const FQ2_ZERO: Fq2 = field_new!(Fq2, FQ_ZERO, FQ_ZERO);
pub const FQ2_ONE: Fq2 = field_new!(Fq2, FQ_ONE, FQ_ZERO);
