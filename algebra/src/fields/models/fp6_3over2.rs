use crate::{
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    fields::{Field, FieldEncoding, Fp2, Fp2Parameters},
    UniformRand,
};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Parameters of a cubic extension `Fp6 = Fp2[v]/(v^3 - NONRESIDUE)`.
pub trait Fp6Parameters: 'static + Send + Sync + Copy {
    type Fp2Params: Fp2Parameters;

    const NONRESIDUE: Fp2<Self::Fp2Params>;

    /// Coefficients for the Frobenius automorphism.
    const FROBENIUS_COEFF_FP6_C1: &'static [Fp2<Self::Fp2Params>];
    const FROBENIUS_COEFF_FP6_C2: &'static [Fp2<Self::Fp2Params>];

    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Self::NONRESIDUE * fe
    }
}

/// An element of Fp6, represented by c0 + c1 * v + c2 * v^(2).
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp6Parameters"),
    Hash(bound = "P: Fp6Parameters"),
    Clone(bound = "P: Fp6Parameters"),
    Copy(bound = "P: Fp6Parameters"),
    Debug(bound = "P: Fp6Parameters"),
    PartialEq(bound = "P: Fp6Parameters"),
    Eq(bound = "P: Fp6Parameters")
)]
pub struct Fp6<P: Fp6Parameters> {
    pub c0: Fp2<P::Fp2Params>,
    pub c1: Fp2<P::Fp2Params>,
    pub c2: Fp2<P::Fp2Params>,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: Fp6Parameters> Fp6<P> {
    pub fn new(c0: Fp2<P::Fp2Params>, c1: Fp2<P::Fp2Params>, c2: Fp2<P::Fp2Params>) -> Self {
        Self {
            c0,
            c1,
            c2,
            _parameters: PhantomData,
        }
    }

    pub fn mul_by_fp(&mut self, element: &<P::Fp2Params as Fp2Parameters>::Fp) {
        self.c0.mul_by_fp(element);
        self.c1.mul_by_fp(element);
        self.c2.mul_by_fp(element);
    }

    pub fn mul_by_fp2(&mut self, element: &Fp2<P::Fp2Params>) {
        self.c0.mul_assign(element);
        self.c1.mul_assign(element);
        self.c2.mul_assign(element);
    }

    /// Multiplication by `v`: `(c0, c1, c2) -> (NONRESIDUE * c2, c0, c1)`.
    pub fn mul_by_nonresidue(&mut self) {
        let old_c1 = self.c1;
        self.c1 = self.c0;
        self.c0 = P::mul_fp2_by_nonresidue(&self.c2);
        self.c2 = old_c1;
    }

    /// Multiplication by the sparse element `c1 * v`.
    pub fn mul_by_1(&mut self, c1: &Fp2<P::Fp2Params>) {
        let mut b_b = self.c1;
        b_b.mul_assign(c1);

        let mut t1 = *c1;
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1 = P::mul_fp2_by_nonresidue(&t1);
        }

        let mut t2 = *c1;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&b_b);
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = b_b;
    }

    /// Multiplication by the sparse element `c0 + c1 * v`.
    pub fn mul_by_01(&mut self, c0: &Fp2<P::Fp2Params>, c1: &Fp2<P::Fp2Params>) {
        let mut a_a = self.c0;
        let mut b_b = self.c1;
        a_a.mul_assign(c0);
        b_b.mul_assign(c1);

        let mut t1 = *c1;
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1 = P::mul_fp2_by_nonresidue(&t1);
            t1.add_assign(&a_a);
        }

        let mut t3 = *c0;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c2);

            t3.mul_assign(&tmp);
            t3.sub_assign(&a_a);
            t3.add_assign(&b_b);
        }

        let mut t2 = *c0;
        t2.add_assign(c1);
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&a_a);
            t2.sub_assign(&b_b);
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    /// Multiplication by the sparse element `c0 + c2 * v^2`.
    pub fn mul_by_02(&mut self, c0: &Fp2<P::Fp2Params>, c2: &Fp2<P::Fp2Params>) {
        let a_a = self.c0 * c0;
        let c_c = self.c2 * c2;

        let t0 = P::mul_fp2_by_nonresidue(&(self.c1 * c2)) + &a_a;
        let t1 = self.c1 * c0 + &P::mul_fp2_by_nonresidue(&c_c);
        let t2 = (*c0 + c2) * &(self.c0 + &self.c2) - &a_a - &c_c;

        self.c0 = t0;
        self.c1 = t1;
        self.c2 = t2;
    }
}

impl<P: Fp6Parameters> Field for Fp6<P> {
    fn zero() -> Self {
        Self::new(Fp2::zero(), Fp2::zero(), Fp2::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn one() -> Self {
        Self::new(Fp2::one(), Fp2::zero(), Fp2::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        Fp2::<P::Fp2Params>::characteristic()
    }

    fn double(&self) -> Self {
        let mut result = self.clone();
        result.double_in_place();
        result
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
        self
    }

    fn square(&self) -> Self {
        let mut result = self.clone();
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self {
        // Devegili OhEig Scott Dahab --- Multiplication and Squaring on
        // Pairing-Friendly
        // Fields.pdf; Section 4 (CH-SQR2)
        let s0 = self.c0.square();
        let s1 = (self.c0 * &self.c1).double();
        let s2 = (self.c0 - &self.c1 + &self.c2).square();
        let s3 = (self.c1 * &self.c2).double();
        let s4 = self.c2.square();

        self.c0 = s0 + &P::mul_fp2_by_nonresidue(&s3);
        self.c1 = s1 + &P::mul_fp2_by_nonresidue(&s4);
        self.c2 = s1 + &s2 + &s3 - &s0 - &s4;

        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guide to Pairing-based Cryptography, Algorithm 5.23.
            let mut c0 = self.c2;
            c0 = P::mul_fp2_by_nonresidue(&c0);
            c0.mul_assign(&self.c1);
            c0 = c0.neg();
            {
                let mut c0s = self.c0;
                c0s.square_in_place();
                c0.add_assign(&c0s);
            }
            let mut c1 = self.c2;
            c1.square_in_place();
            c1 = P::mul_fp2_by_nonresidue(&c1);
            {
                let mut c01 = self.c0;
                c01.mul_assign(&self.c1);
                c1.sub_assign(&c01);
            }
            let mut c2 = self.c1;
            c2.square_in_place();
            {
                let mut c02 = self.c0;
                c02.mul_assign(&self.c2);
                c2.sub_assign(&c02);
            }

            let mut tmp1 = self.c2;
            tmp1.mul_assign(&c1);
            let mut tmp2 = self.c1;
            tmp2.mul_assign(&c2);
            tmp1.add_assign(&tmp2);
            tmp1 = P::mul_fp2_by_nonresidue(&tmp1);
            tmp2 = self.c0;
            tmp2.mul_assign(&c0);
            tmp1.add_assign(&tmp2);

            tmp1.inverse().map(|t| Self::new(t * &c0, t * &c1, t * &c2))
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
        self.c2.frobenius_map(power);

        self.c1.mul_assign(&P::FROBENIUS_COEFF_FP6_C1[power % 6]);
        self.c2.mul_assign(&P::FROBENIUS_COEFF_FP6_C2[power % 6]);
    }
}

impl<P: Fp6Parameters> FieldEncoding for Fp6<P> {
    fn encoded_size() -> usize {
        3 * Fp2::<P::Fp2Params>::encoded_size()
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        [self.c0.to_le_bytes(), self.c1.to_le_bytes(), self.c2.to_le_bytes()].concat()
    }

    fn to_be_bytes(&self) -> Vec<u8> {
        [self.c2.to_be_bytes(), self.c1.to_be_bytes(), self.c0.to_be_bytes()].concat()
    }

    fn to_le_bytes_montgomery(&self) -> Vec<u8> {
        [
            self.c0.to_le_bytes_montgomery(),
            self.c1.to_le_bytes_montgomery(),
            self.c2.to_le_bytes_montgomery(),
        ]
        .concat()
    }

    fn to_be_bytes_montgomery(&self) -> Vec<u8> {
        [
            self.c2.to_be_bytes_montgomery(),
            self.c1.to_be_bytes_montgomery(),
            self.c0.to_be_bytes_montgomery(),
        ]
        .concat()
    }

    fn from_le_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let c = split_thirds::<P>(bytes)?;
        Ok(Self::new(
            Fp2::from_le_bytes(c[0])?,
            Fp2::from_le_bytes(c[1])?,
            Fp2::from_le_bytes(c[2])?,
        ))
    }

    fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let c = split_thirds::<P>(bytes)?;
        Ok(Self::new(
            Fp2::from_be_bytes(c[2])?,
            Fp2::from_be_bytes(c[1])?,
            Fp2::from_be_bytes(c[0])?,
        ))
    }

    fn from_le_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let c = split_thirds::<P>(bytes)?;
        Ok(Self::new(
            Fp2::from_le_bytes_montgomery(c[0])?,
            Fp2::from_le_bytes_montgomery(c[1])?,
            Fp2::from_le_bytes_montgomery(c[2])?,
        ))
    }

    fn from_be_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let c = split_thirds::<P>(bytes)?;
        Ok(Self::new(
            Fp2::from_be_bytes_montgomery(c[2])?,
            Fp2::from_be_bytes_montgomery(c[1])?,
            Fp2::from_be_bytes_montgomery(c[0])?,
        ))
    }
}

fn split_thirds<P: Fp6Parameters>(bytes: &[u8]) -> Result<Vec<&[u8]>, AlgebraError> {
    let size = Fp2::<P::Fp2Params>::encoded_size();
    AlgebraError::check_buffer_length(3 * size, bytes.len())?;
    Ok(bytes.chunks(size).collect())
}

/// `Fp6` elements are ordered lexicographically.
impl<P: Fp6Parameters> Ord for Fp6<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        let c2_cmp = self.c2.cmp(&other.c2);
        let c1_cmp = self.c1.cmp(&other.c1);
        let c0_cmp = self.c0.cmp(&other.c0);
        if c2_cmp == Ordering::Equal {
            if c1_cmp == Ordering::Equal {
                c0_cmp
            } else {
                c1_cmp
            }
        } else {
            c2_cmp
        }
    }
}

impl<P: Fp6Parameters> PartialOrd for Fp6<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp6Parameters> From<u64> for Fp6<P> {
    fn from(other: u64) -> Self {
        Self::new(other.into(), Fp2::zero(), Fp2::zero())
    }
}

impl<P: Fp6Parameters> ToBytes for Fp6<P> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c0.write(&mut writer)?;
        self.c1.write(&mut writer)?;
        self.c2.write(writer)
    }
}

impl<P: Fp6Parameters> FromBytes for Fp6<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c0 = Fp2::read(&mut reader)?;
        let c1 = Fp2::read(&mut reader)?;
        let c2 = Fp2::read(reader)?;
        Ok(Fp6::new(c0, c1, c2))
    }
}

impl<P: Fp6Parameters> Neg for Fp6<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut copy = Self::zero();
        copy.c0 = self.c0.neg();
        copy.c1 = self.c1.neg();
        copy.c2 = self.c2.neg();
        copy
    }
}

impl<P: Fp6Parameters> Distribution<Fp6<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp6<P> {
        Fp6::new(
            UniformRand::rand(rng),
            UniformRand::rand(rng),
            UniformRand::rand(rng),
        )
    }
}

impl<'a, P: Fp6Parameters> Add<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp6Parameters> Sub<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp6Parameters> Mul<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp6Parameters> Div<&'a Fp6<P>> for Fp6<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().expect("division by zero"));
        result
    }
}

impl_additive_ops_from_ref!(Fp6, Fp6Parameters);
impl_multiplicative_ops_from_ref!(Fp6, Fp6Parameters);

impl<'a, P: Fp6Parameters> AddAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
        self.c2.add_assign(&other.c2);
    }
}

impl<'a, P: Fp6Parameters> SubAssign<&'a Self> for Fp6<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
        self.c2.sub_assign(&other.c2);
    }
}

impl<'a, P: Fp6Parameters> MulAssign<&'a Self> for Fp6<P> {
    /// Devegili OhEig Scott Dahab --- Multiplication and Squaring on
    /// Pairing-Friendly Fields.pdf; Section 4 (Karatsuba)
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let a_a = self.c0 * &other.c0;
        let b_b = self.c1 * &other.c1;
        let c_c = self.c2 * &other.c2;

        let mut t1 = other.c1;
        t1.add_assign(&other.c2);
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1.sub_assign(&c_c);
            t1 = P::mul_fp2_by_nonresidue(&t1);
            t1.add_assign(&a_a);
        }

        let mut t3 = other.c0;
        t3.add_assign(&other.c2);
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c2);

            t3.mul_assign(&tmp);
            t3.sub_assign(&a_a);
            t3.add_assign(&b_b);
            t3.sub_assign(&c_c);
        }

        let mut t2 = other.c0;
        t2.add_assign(&other.c1);
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&a_a);
            t2.sub_assign(&b_b);
            t2.add_assign(&P::mul_fp2_by_nonresidue(&c_c));
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }
}

impl<'a, P: Fp6Parameters> DivAssign<&'a Self> for Fp6<P> {
    /// Panics if `other` is zero.
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().expect("division by zero"));
    }
}

impl<P: Fp6Parameters> Display for Fp6<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp6_3over2({} + {} * v + {} * v^2)", self.c0, self.c1, self.c2)
    }
}
