//! The BN254 curve (also known as alt_bn128 or BN128), a Barreto-Naehrig curve
//! `y^2 = x^3 + 3` over a 254 bit prime field with embedding degree 12.
//!
//! Its security against the special tower number field sieve is estimated around
//! 100 bit by [BD 2019](https://eprint.iacr.org/2017/334.pdf).

use crate::{
    curves::bn::{
        Bn, BnParameters, G1Affine as BnG1Affine, G1Prepared as BnG1Prepared,
        G1Projective as BnG1Projective, G2Affine as BnG2Affine, G2Prepared as BnG2Prepared,
        G2Projective as BnG2Projective, TwistType,
    },
    fields::bn254::{Fq, Fq12Parameters, Fq2, Fq2Parameters, Fq6Parameters},
};
use crate::biginteger::BigInteger256 as BigInteger;

pub mod g1;
pub mod g2;
#[cfg(test)]
mod tests;

use self::{g1::Bn254G1Parameters, g2::Bn254G2Parameters};

pub struct Bn254Parameters;

impl BnParameters for Bn254Parameters {
    /// BN parameter u = 4965661367192848881
    const X: &'static [u64] = &[0x44e992b44a6909f1];
    /// `u` is positive.
    const X_IS_NEGATIVE: bool = false;
    /// 6u + 2 = 29793968203157093288
    const ATE_LOOP_COUNT: &'static [u64] = &[0x9d797039be763ba8, 0x1];
    const TWIST_TYPE: TwistType = TwistType::D;

    /// (9 + u)^((q - 1)/3)
    const TWIST_MUL_BY_Q_X: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0xb5773b104563ab30,
            0x347f91c8a9aa6454,
            0x7a007127242e0991,
            0x1956bcd8118214ec,
        ])),
        field_new!(Fq, BigInteger([
            0x6e849f1ea0aa4757,
            0xaa1c7b6d89f89141,
            0xb6e713cdfae0ca3a,
            0x26694fbb4e82ebc3,
        ])),
    );

    /// (9 + u)^((q - 1)/2)
    const TWIST_MUL_BY_Q_Y: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0xe4bbdd0c2936b629,
            0xbb30f162e133bacb,
            0x31a9d1b6f9645366,
            0x253570bea500f8dd,
        ])),
        field_new!(Fq, BigInteger([
            0xa1d77ce45ffe77c7,
            0x07affd117826d1db,
            0x6d16bd27bb7edc6b,
            0x2c87200285defecc,
        ])),
    );

    /// (q + 1)/2
    const TWO_INV: Fq = field_new!(Fq, BigInteger([
        0x87bee7d24f060572,
        0xd0fd2add2f1c6ae5,
        0x8f5f7492fcfd4f44,
        0x1f37631a3d9cbfac,
    ]));

    type Fp = Fq;
    type Fp2Params = Fq2Parameters;
    type Fp6Params = Fq6Parameters;
    type Fp12Params = Fq12Parameters;
    type G1Parameters = Bn254G1Parameters;
    type G2Parameters = Bn254G2Parameters;
}

pub type Bn254 = Bn<Bn254Parameters>;

pub type G1Affine = BnG1Affine<Bn254Parameters>;
pub type G1Projective = BnG1Projective<Bn254Parameters>;
pub type G1Prepared = BnG1Prepared<Bn254Parameters>;
pub type G2Affine = BnG2Affine<Bn254Parameters>;
pub type G2Projective = BnG2Projective<Bn254Parameters>;
pub type G2Prepared = BnG2Prepared<Bn254Parameters>;
