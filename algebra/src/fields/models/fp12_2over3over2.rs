use super::{
    fp6_3over2::{Fp6, Fp6Parameters},
    Fp2, Fp2Parameters,
};
use crate::{
    biginteger::arithmetic::find_naf,
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    fields::{Field, FieldEncoding},
    UniformRand,
};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

type Fp2Params<P> = <<P as Fp12Parameters>::Fp6Params as Fp6Parameters>::Fp2Params;

/// Parameters of the quadratic extension `Fp12 = Fp6[w]/(w^2 - v)`.
pub trait Fp12Parameters: 'static + Send + Sync + Copy {
    type Fp6Params: Fp6Parameters;

    /// Coefficients for the Frobenius automorphism.
    const FROBENIUS_COEFF_FP12_C1: &'static [Fp2<Fp2Params<Self>>];
}

/// An element of Fp12, represented by c0 + c1 * w.
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp12Parameters"),
    Hash(bound = "P: Fp12Parameters"),
    Clone(bound = "P: Fp12Parameters"),
    Copy(bound = "P: Fp12Parameters"),
    Debug(bound = "P: Fp12Parameters"),
    PartialEq(bound = "P: Fp12Parameters"),
    Eq(bound = "P: Fp12Parameters")
)]
pub struct Fp12<P: Fp12Parameters> {
    pub c0: Fp6<P::Fp6Params>,
    pub c1: Fp6<P::Fp6Params>,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: Fp12Parameters> Fp12<P> {
    pub fn new(c0: Fp6<P::Fp6Params>, c1: Fp6<P::Fp6Params>) -> Self {
        Self {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    fn mul_fp6_by_nonresidue(fe: &Fp6<P::Fp6Params>) -> Fp6<P::Fp6Params> {
        let mut res = *fe;
        res.mul_by_nonresidue();
        res
    }

    pub fn mul_by_fp(&mut self, element: &<Fp2Params<P> as Fp2Parameters>::Fp) {
        self.c0.mul_by_fp(element);
        self.c1.mul_by_fp(element);
    }

    /// The automorphism `c0 + c1 * w -> c0 - c1 * w`, which is the `p^6`-th
    /// power map.
    pub fn conjugate(&mut self) {
        self.c1 = self.c1.neg();
    }

    /// Inverse of an element of the cyclotomic subgroup, i.e. its conjugate.
    pub fn unitary_inverse(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Multiplication by the sparse element `c0 + c1 * v + c4 * v * w`, the
    /// shape of a line function on an M-type twist.
    pub fn mul_by_014(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c1: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let mut aa = self.c0;
        aa.mul_by_01(c0, c1);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let mut o = *c1;
        o.add_assign(c4);
        self.c1.add_assign(&self.c0);
        self.c1.mul_by_01(c0, &o);
        self.c1.sub_assign(&aa);
        self.c1.sub_assign(&bb);
        self.c0 = bb;
        self.c0.mul_by_nonresidue();
        self.c0.add_assign(&aa);
    }

    /// Multiplication by the sparse element `c0 + c4 * v * w + c2 * v^2`,
    /// the shape of a line function on a D-type twist.
    pub fn mul_by_024(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
        c2: &Fp2<Fp2Params<P>>,
    ) {
        let mut aa = self.c0;
        aa.mul_by_02(c0, c2);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let sparse = Fp6::new(*c0, *c4, *c2);
        self.c1.add_assign(&self.c0);
        self.c1.mul_assign(&sparse);
        self.c1.sub_assign(&aa);
        self.c1.sub_assign(&bb);
        self.c0 = bb;
        self.c0.mul_by_nonresidue();
        self.c0.add_assign(&aa);
    }

    /// Squaring in the cyclotomic subgroup of order `p^4 - p^2 + 1`.
    /// Granger and Scott, "Faster squaring in the cyclotomic subgroup of
    /// sixth degree extensions", Section 3.2.
    pub fn cyclotomic_square(&self) -> Self {
        let fp2_nr = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        let mut z0 = self.c0.c0;
        let mut z4 = self.c0.c1;
        let mut z3 = self.c0.c2;
        let mut z2 = self.c1.c0;
        let mut z1 = self.c1.c1;
        let mut z5 = self.c1.c2;

        // Squares in Fp4 = Fp2[y]/(y^2 - NONRESIDUE).
        let fp4_square = |a: Fp2<Fp2Params<P>>, b: Fp2<Fp2Params<P>>| {
            let tmp = a * &b;
            let even = (a + &b) * &(a + &fp2_nr(&b)) - &tmp - &fp2_nr(&tmp);
            (even, tmp.double())
        };

        let (t0, t1) = fp4_square(z0, z1);
        let (t2, t3) = fp4_square(z2, z3);
        let (t4, t5) = fp4_square(z4, z5);

        // z0 = 3 * t0 - 2 * z0
        z0 = (t0 - &z0).double() + &t0;
        // z1 = 3 * t1 + 2 * z1
        z1 = (t1 + &z1).double() + &t1;

        let tmp = fp2_nr(&t5);
        // z2 = 3 * (NONRESIDUE * t5) + 2 * z2
        z2 = (tmp + &z2).double() + &tmp;
        // z3 = 3 * t4 - 2 * z3
        z3 = (t4 - &z3).double() + &t4;

        // z4 = 3 * t2 - 2 * z4
        z4 = (t2 - &z4).double() + &t2;
        // z5 = 3 * t3 + 2 * z5
        z5 = (t3 + &z5).double() + &t3;

        Self::new(Fp6::new(z0, z4, z3), Fp6::new(z2, z1, z5))
    }

    /// Maps `self` into the cyclotomic subgroup by raising it to
    /// `(p^6 - 1)(p^2 + 1)`, the easy part of a final exponentiation.
    /// Returns `None` for zero.
    pub fn to_cyclotomic_subgroup(&self) -> Option<Self> {
        // self^(p^6 - 1) = conj(self) / self
        let mut unitary = self.unitary_inverse() * &self.inverse()?;
        let frobenius = {
            let mut t = unitary;
            t.frobenius_map(2);
            t
        };
        unitary *= &frobenius;
        Some(unitary)
    }

    /// Exponentiation of an element of the cyclotomic subgroup, scanning the
    /// non-adjacent form of `exponent` and using conjugation for negative digits.
    pub fn cyclotomic_exp<S: AsRef<[u64]>>(&self, exponent: S) -> Self {
        let mut res = Self::one();
        let self_inverse = self.unitary_inverse();

        let mut found_nonzero = false;
        let naf = find_naf(exponent.as_ref());

        for &value in naf.iter().rev() {
            if found_nonzero {
                res = res.cyclotomic_square();
            }

            if value != 0 {
                found_nonzero = true;

                if value > 0 {
                    res.mul_assign(self);
                } else {
                    res.mul_assign(&self_inverse);
                }
            }
        }

        res
    }
}

impl<P: Fp12Parameters> Field for Fp12<P> {
    fn zero() -> Self {
        Self::new(Fp6::zero(), Fp6::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn one() -> Self {
        Self::new(Fp6::one(), Fp6::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        Fp6::<P::Fp6Params>::characteristic()
    }

    fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    fn square(&self) -> Self {
        let mut copy = *self;
        copy.square_in_place();
        copy
    }

    fn square_in_place(&mut self) -> &mut Self {
        let mut ab = self.c0;
        ab.mul_assign(&self.c1);
        let mut c0c1 = self.c0;
        c0c1.add_assign(&self.c1);
        let mut c0 = Self::mul_fp6_by_nonresidue(&self.c1);
        c0.add_assign(&self.c0);
        c0.mul_assign(&c0c1);
        c0.sub_assign(&ab);
        self.c1 = ab;
        self.c1.add_assign(&ab);
        ab = Self::mul_fp6_by_nonresidue(&ab);
        c0.sub_assign(&ab);
        self.c0 = c0;
        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guide to Pairing-based Cryptography, Algorithm 5.16.
            let mut c0s = self.c0;
            c0s.square_in_place();
            let mut c1s = self.c1;
            c1s.square_in_place();
            c1s = Self::mul_fp6_by_nonresidue(&c1s);
            c0s.sub_assign(&c1s);

            c0s.inverse().map(|t| {
                let mut tmp = Self::new(t, t);
                tmp.c0.mul_assign(&self.c0);
                tmp.c1.mul_assign(&self.c1);
                tmp.c1 = tmp.c1.neg();

                tmp
            })
        }
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inverse) = self.inverse() {
            *self = inverse;
            Some(self)
        } else {
            None
        }
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);

        self.c1.c0.mul_assign(&P::FROBENIUS_COEFF_FP12_C1[power % 12]);
        self.c1.c1.mul_assign(&P::FROBENIUS_COEFF_FP12_C1[power % 12]);
        self.c1.c2.mul_assign(&P::FROBENIUS_COEFF_FP12_C1[power % 12]);
    }
}

impl<P: Fp12Parameters> FieldEncoding for Fp12<P> {
    fn encoded_size() -> usize {
        2 * Fp6::<P::Fp6Params>::encoded_size()
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        [self.c0.to_le_bytes(), self.c1.to_le_bytes()].concat()
    }

    fn to_be_bytes(&self) -> Vec<u8> {
        [self.c1.to_be_bytes(), self.c0.to_be_bytes()].concat()
    }

    fn to_le_bytes_montgomery(&self) -> Vec<u8> {
        [self.c0.to_le_bytes_montgomery(), self.c1.to_le_bytes_montgomery()].concat()
    }

    fn to_be_bytes_montgomery(&self) -> Vec<u8> {
        [self.c1.to_be_bytes_montgomery(), self.c0.to_be_bytes_montgomery()].concat()
    }

    fn from_le_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (lo, hi) = split_halves::<P>(bytes)?;
        Ok(Self::new(Fp6::from_le_bytes(lo)?, Fp6::from_le_bytes(hi)?))
    }

    fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (hi, lo) = split_halves::<P>(bytes)?;
        Ok(Self::new(Fp6::from_be_bytes(lo)?, Fp6::from_be_bytes(hi)?))
    }

    fn from_le_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (lo, hi) = split_halves::<P>(bytes)?;
        Ok(Self::new(
            Fp6::from_le_bytes_montgomery(lo)?,
            Fp6::from_le_bytes_montgomery(hi)?,
        ))
    }

    fn from_be_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (hi, lo) = split_halves::<P>(bytes)?;
        Ok(Self::new(
            Fp6::from_be_bytes_montgomery(lo)?,
            Fp6::from_be_bytes_montgomery(hi)?,
        ))
    }
}

fn split_halves<P: Fp12Parameters>(bytes: &[u8]) -> Result<(&[u8], &[u8]), AlgebraError> {
    let size = Fp6::<P::Fp6Params>::encoded_size();
    AlgebraError::check_buffer_length(2 * size, bytes.len())?;
    Ok(bytes.split_at(size))
}

impl<P: Fp12Parameters> From<u64> for Fp12<P> {
    fn from(other: u64) -> Self {
        Self::new(other.into(), Fp6::zero())
    }
}

impl<P: Fp12Parameters> ToBytes for Fp12<P> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c0.write(&mut writer)?;
        self.c1.write(writer)
    }
}

impl<P: Fp12Parameters> FromBytes for Fp12<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c0 = Fp6::read(&mut reader)?;
        let c1 = Fp6::read(reader)?;
        Ok(Fp12::new(c0, c1))
    }
}

impl<P: Fp12Parameters> Neg for Fp12<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut copy = Self::zero();
        copy.c0 = self.c0.neg();
        copy.c1 = self.c1.neg();
        copy
    }
}

impl<P: Fp12Parameters> Distribution<Fp12<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp12<P> {
        Fp12::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<'a, P: Fp12Parameters> Add<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp12Parameters> Sub<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp12Parameters> Mul<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp12Parameters> Div<&'a Fp12<P>> for Fp12<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().expect("division by zero"));
        result
    }
}

impl_additive_ops_from_ref!(Fp12, Fp12Parameters);
impl_multiplicative_ops_from_ref!(Fp12, Fp12Parameters);

impl<'a, P: Fp12Parameters> AddAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }
}

impl<'a, P: Fp12Parameters> SubAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }
}

impl<'a, P: Fp12Parameters> MulAssign<&'a Self> for Fp12<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;
        self.c1 = (self.c0 + &self.c1) * &(other.c0 + &other.c1) - &v0 - &v1;
        self.c0 = v0 + &Self::mul_fp6_by_nonresidue(&v1);
    }
}

impl<'a, P: Fp12Parameters> DivAssign<&'a Self> for Fp12<P> {
    /// Panics if `other` is zero.
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().expect("division by zero"));
    }
}

impl<P: Fp12Parameters> Display for Fp12<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp12({} + {} * w)", self.c0, self.c1)
    }
}
