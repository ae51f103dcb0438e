//! The BN254 scalar field, a 254 bit prime field with duadicity 28.

use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{Fp256, Fp256Parameters, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl Fp256Parameters for FrParameters {}
impl FpParameters for FrParameters {
    type BigInt = BigInteger;

    /// MODULUS =
    /// 2188824287183927522224640574525727508854836440041603434369820418657580\
    /// 8495617
    const MODULUS: BigInteger = BigInteger([
        0x43e1f593f0000001,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]);

    const MODULUS_BITS: u32 = 254;

    const CAPACITY: u32 = Self::MODULUS_BITS - 1;

    /// Montgomery constant =
    /// 6350874878119819312338956282401532410528162663560392320966563075034087\
    /// 161851
    const R: BigInteger = BigInteger([
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0x0e0a77c19a07df2f,
    ]);

    /// Montgomery constant squared mod fr =
    /// 9449366811492084466516642542697455484907668517294429246177928590731259\
    /// 03783
    const R2: BigInteger = BigInteger([
        0x1bb8e645ae216da7,
        0x53fe3ab1e35c59e3,
        0x8c49833d53bb8085,
        0x0216d0b17f4e44a5,
    ]);

    const INV: u64 = 0xc2e1f593efffffff;

    /// GENERATOR = 5
    const GENERATOR: BigInteger = BigInteger([
        0x1b0d0ef99fffffe6,
        0xeaba68a3a32a913f,
        0x47d8eb76d8dd0689,
        0x15d0085520f5bbc3,
    ]);

    const TWO_ADICITY: u32 = 28;

    /// 2^TWO_ADICITY-th root of unity =
    /// 1910321906792171394429139282769207003614565195732928631530564200482146\
    /// 2161904
    const ROOT_OF_UNITY: BigInteger = BigInteger([
        0x636e735580d13d9c,
        0xa22bf3742445ffd6,
        0x56452ac01eb203d8,
        0x1860ef942963f9e7,
    ]);

    /// (MODULUS - 1)/2 =
    /// 1094412143591963761112320287262863754427418220020801717184910209328790\
    /// 4247808
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0xa1f0fac9f8000000,
        0x9419f4243cdcb848,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    // T and T_MINUS_ONE_DIV_TWO, where MODULUS - 1 = 2^S * T

    /// T = (MODULUS - 1) / 2^S =
    /// 81540058820840996586704275553141814055101440848469862132140264610111
    const T: BigInteger = BigInteger([
        0x9b9709143e1f593f,
        0x181585d2833e8487,
        0x131a029b85045b68,
        0x000000030644e72e,
    ]);

    /// (T - 1) / 2 =
    /// 40770029410420498293352137776570907027550720424234931066070132305055
    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0xcdcb848a1f0fac9f,
        0x0c0ac2e9419f4243,
        0x098d014dc2822db4,
        0x0000000183227397,
    ]);
}

pub const FR_ZERO: Fr = field_new!(Fr, BigInteger([
    0x0000000000000000,
    0x0000000000000000,
    0x0000000000000000,
    0x0000000000000000,
]));
pub const FR_ONE: Fr = field_new!(Fr, BigInteger([
    0xac96341c4ffffffb,
    0x36fc76959f60cd29,
    0x666ea36f7879462e,
    0x0e0a77c19a07df2f,
]));
