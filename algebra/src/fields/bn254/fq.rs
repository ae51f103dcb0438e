//! The BN254 base field, a 254 bit prime field with duadicity 1.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fq = Fp256<FqParameters>;

pub struct FqParameters;

impl Fp256Parameters for FqParameters {}
impl FpParameters for FqParameters {
    type BigInt = BigInteger;

    /// MODULUS =
    /// 2188824287183927522224640574525727508869631115729782366268903789464522\
    /// 6208583
    const MODULUS: BigInteger = BigInteger([
        0x3c208c16d87cfd47,
        0x97816a916871ca8d,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]);

    const MODULUS_BITS: u32 = 254;

    const CAPACITY: u32 = Self::MODULUS_BITS - 1;

    /// Montgomery constant =
    /// 6350874878119819312338956282401532409788428879151445726012394534686998\
    /// 597021
    const R: BigInteger = BigInteger([
        0xd35d438dc58f0d9d,
        0x0a78eb28f5c70b3d,
        0x666ea36f7879462c,
        0x0e0a77c19a07df2f,
    ]);

    /// Montgomery constant squared mod fq =
    /// 3096616502983703923843567936837374451735540968419076528771170197431451\
    /// 843209
    const R2: BigInteger = BigInteger([
        0xf32cfc5b538afa89,
        0xb5e71911d44501fb,
        0x47ab1eff0a417ff6,
        0x06d89f71cab8351f,
    ]);

    const INV: u64 = 0x87d20782e4866389;

    /// GENERATOR = 3
    const GENERATOR: BigInteger = BigInteger([
        0x7a17caa950ad28d7,
        0x1f6ac17ae15521b9,
        0x334bea4e696bd284,
        0x2a1f6744ce179d8e,
    ]);

    const TWO_ADICITY: u32 = 1;

    /// 2^TWO_ADICITY-th root of unity =
    /// 2188824287183927522224640574525727508869631115729782366268903789464522\
    /// 6208582
    const ROOT_OF_UNITY: BigInteger = BigInteger([
        0x68c3488912edefaa,
        0x8d087f6872aabf4f,
        0x51e1a24709081231,
        0x2259d6b14729c0fa,
    ]);

    /// (MODULUS - 1)/2 =
    /// 1094412143591963761112320287262863754434815557864891183134451894732261\
    /// 3104291
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x9e10460b6c3e7ea3,
        0xcbc0b548b438e546,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    // T and T_MINUS_ONE_DIV_TWO, where MODULUS - 1 = 2^S * T

    /// T = (MODULUS - 1) / 2^S =
    /// 1094412143591963761112320287262863754434815557864891183134451894732261\
    /// 3104291
    const T: BigInteger = BigInteger([
        0x9e10460b6c3e7ea3,
        0xcbc0b548b438e546,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    /// (T - 1) / 2 =
    /// 5472060717959818805561601436314318772174077789324455915672259473661306\
    /// 552145
    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x4f082305b61f3f51,
        0x65e05aa45a1c72a3,
        0x6e14116da0605617,
        0x0c19139cb84c680a,
    ]);
}

pub const FQ_ZERO: Fq = field_new!(Fq, BigInteger([
    0x0000000000000000,
    0x0000000000000000,
    0x0000000000000000,
    0x0000000000000000,
]));
pub const FQ_ONE: Fq = field_new!(Fq, BigInteger([
    0xd35d438dc58f0d9d,
    0x0a78eb28f5c70b3d,
    0x666ea36f7879462c,
    0x0e0a77c19a07df2f,
]));
