use crate::{
    biginteger::BigInteger256 as BigInteger,
    fields::{
        bn254::{fq::Fq, fq2::{Fq2, Fq2Parameters}},
        fp6_3over2::{Fp6, Fp6Parameters},
        Field,
    },
};

pub type Fq6 = Fp6<Fq6Parameters>;

#[derive(Clone, Copy)]
pub struct Fq6Parameters;

impl Fp6Parameters for Fq6Parameters {
    type Fp2Params = Fq2Parameters;

    /// NONRESIDUE = 9 + u
    const NONRESIDUE: Fq2 = field_new!(
        Fq2,
        field_new!(Fq, BigInteger([
            0xf60647ce410d7ff7,
            0x2f3d6f4dd31bd011,
            0x2943337e3940c6d1,
            0x1d9598e8a7e39857,
        ])),
        field_new!(Fq, BigInteger([
            0xd35d438dc58f0d9d,
            0x0a78eb28f5c70b3d,
            0x666ea36f7879462c,
            0x0e0a77c19a07df2f,
        ])),
    );

    /// NONRESIDUE^((q^i - 1)/3) for i = 0, ..., 5
    const FROBENIUS_COEFF_FP6_C1: &'static [Fq2] = &[
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0xd35d438dc58f0d9d,
                0x0a78eb28f5c70b3d,
                0x666ea36f7879462c,
                0x0e0a77c19a07df2f,
            ])),
            field_new!(Fq, BigInteger([
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
            ])),
        ),
        field_new!(
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
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x3350c88e13e80b9c,
                0x7dce557cdb5e56b9,
                0x6001b4b8b615564a,
                0x2682e617020217e0,
            ])),
            field_new!(Fq, BigInteger([
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0xc9af22f716ad6bad,
                0xb311782a4aa662b2,
                0x19eeaf64e248c7f4,
                0x20273e77e3439f82,
            ])),
            field_new!(Fq, BigInteger([
                0xacc02860f7ce93ac,
                0x3933d5817ba76b4c,
                0x69e6188b446c8467,
                0x0a46036d4417cc55,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x71930c11d782e155,
                0xa6bb947cffbe3323,
                0xaa303344d4741444,
                0x2c3b3f0d26594943,
            ])),
            field_new!(Fq, BigInteger([
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0xf91aba2654e8e3b1,
                0x4771cb2fdc92ce12,
                0xdcb16ae0fc8bdf35,
                0x274aa195cd9d8be4,
            ])),
            field_new!(Fq, BigInteger([
                0x5cfc50ae18811f8b,
                0x4bb28433cb43988c,
                0x4fd35f13c3b56219,
                0x301949bd2fc8883a,
            ])),
        ),
    ];

    /// NONRESIDUE^((2*q^i - 2)/3) for i = 0, ..., 5
    const FROBENIUS_COEFF_FP6_C2: &'static [Fq2] = &[
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0xd35d438dc58f0d9d,
                0x0a78eb28f5c70b3d,
                0x666ea36f7879462c,
                0x0e0a77c19a07df2f,
            ])),
            field_new!(Fq, BigInteger([
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x7361d77f843abe92,
                0xa5bb2bd3273411fb,
                0x9c941f314b3e2399,
                0x15df9cddbb9fd3ec,
            ])),
            field_new!(Fq, BigInteger([
                0x5dddfd154bd8c949,
                0x62cb29a5a4445b60,
                0x37bc870a0c7dd2b9,
                0x24830a9d3171f0fd,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x71930c11d782e155,
                0xa6bb947cffbe3323,
                0xaa303344d4741444,
                0x2c3b3f0d26594943,
            ])),
            field_new!(Fq, BigInteger([
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x448a93a57b6762df,
                0xbfd62df528fdeadf,
                0xd858f5d00e9bd47a,
                0x06b03d4d3476ec58,
            ])),
            field_new!(Fq, BigInteger([
                0x2b19daf4bcc936d1,
                0xa1a54e7a56f4299f,
                0xb533eee05adeaef1,
                0x170c812b84dda0b2,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x3350c88e13e80b9c,
                0x7dce557cdb5e56b9,
                0x6001b4b8b615564a,
                0x2682e617020217e0,
            ])),
            field_new!(Fq, BigInteger([
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
                0x0000000000000000,
            ])),
        ),
        field_new!(
            Fq2,
            field_new!(Fq, BigInteger([
                0x843420f1d8dadbd6,
                0x31f010c9183fcdb2,
                0x436330b527a76049,
                0x13d47447f11adfe4,
            ])),
            field_new!(Fq, BigInteger([
                0xef494023a857fa74,
                0x2a925d02d5ab101a,
                0x83b015829ba62f10,
                0x2539111d0c13aea3,
            ])),
        ),
    ];

    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fq2) -> Fq2 {
        // (c0 + c1 * u) * (9 + u) = (9 * c0 - c1) + (c0 + 9 * c1) * u
        let mut c0 = fe.c0;
        c0.double_in_place().double_in_place().double_in_place();
        c0 += &fe.c0;
        let mut c1 = fe.c1;
        c1.double_in_place().double_in_place().double_in_place();
        c1 += &fe.c1;
        Fq2::new(c0 - &fe.c1, c1 + &fe.c0)
    }
}
