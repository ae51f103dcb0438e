//! The BLS12-381 curve of [Bowe 2017](https://electriccoin.co/blog/new-snark-curve/),
//! a BLS curve `y^2 = x^3 + 4` with embedding degree 12 over a 381 bit prime field.
//!
//! Its security against the special tower number field sieve is estimated as 117 to
//! 120 bit by [GMT 2019](https://eprint.iacr.org/2019/885.pdf).

use crate::{
    curves::bls12::{
        Bls12, Bls12Parameters, G1Affine as Bls12G1Affine, G1Prepared as Bls12G1Prepared,
        G1Projective as Bls12G1Projective, G2Affine as Bls12G2Affine,
        G2Prepared as Bls12G2Prepared, G2Projective as Bls12G2Projective, TwistType,
    },
    fields::bls12_381::{Fq, Fq12Parameters, Fq2Parameters, Fq6Parameters},
};
use crate::biginteger::BigInteger384 as BigInteger;

pub mod g1;
pub mod g2;
#[cfg(test)]
mod tests;

use self::{g1::Bls12_381G1Parameters, g2::Bls12_381G2Parameters};

pub struct Bls12_381Parameters;

impl Bls12Parameters for Bls12_381Parameters {
    /// BLS parameter x = -15132376222941642752
    const X: &'static [u64] = &[0xd201000000010000];
    /// `x` is negative.
    const X_IS_NEGATIVE: bool = true;
    const TWIST_TYPE: TwistType = TwistType::M;
    /// (q + 1)/2
    const TWO_INV: Fq = field_new!(Fq, BigInteger([
        0x1804000000015554,
        0x855000053ab00001,
        0x633cb57c253c276f,
        0x6e22d1ec31ebb502,
        0xd3916126f2d14ca2,
        0x17fbb8571a006596,
    ]));
    type Fp = Fq;
    type Fp2Params = Fq2Parameters;
    type Fp6Params = Fq6Parameters;
    type Fp12Params = Fq12Parameters;
    type G1Parameters = Bls12_381G1Parameters;
    type G2Parameters = Bls12_381G2Parameters;
}

pub type Bls12_381 = Bls12<Bls12_381Parameters>;

pub type G1Affine = Bls12G1Affine<Bls12_381Parameters>;
pub type G1Projective = Bls12G1Projective<Bls12_381Parameters>;
pub type G1Prepared = Bls12G1Prepared<Bls12_381Parameters>;
pub type G2Affine = Bls12G2Affine<Bls12_381Parameters>;
pub type G2Projective = Bls12G2Projective<Bls12_381Parameters>;
pub type G2Prepared = Bls12G2Prepared<Bls12_381Parameters>;
