use crate::{
    biginteger::BigInteger,
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    fields::{Field, FieldEncoding, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
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

/// Parameters of a quadratic extension `Fp2 = Fp[u]/(u^2 - NONRESIDUE)`.
pub trait Fp2Parameters: 'static + Send + Sync {
    type Fp: PrimeField + SquareRootField;

    /// A quadratic non-residue of the base field.
    const NONRESIDUE: Self::Fp;

    /// `NONRESIDUE^((p^i - 1)/2)` for `i = 0, 1`.
    const FROBENIUS_COEFF_FP2_C1: &'static [Self::Fp];

    #[inline(always)]
    fn mul_fp_by_nonresidue(fe: &Self::Fp) -> Self::Fp {
        Self::NONRESIDUE * fe
    }
}

/// Square root algorithm of a quadratic extension, determined by `p mod 4`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fp2SqrtAlgorithm {
    /// Adj and Rodriguez-Henriquez, Algorithm 9, for `p = 3 mod 4`.
    Adj9,
    /// Adj and Rodriguez-Henriquez, Algorithm 10, for `p = 1 mod 4`.
    Adj10,
}

impl Fp2SqrtAlgorithm {
    pub const fn for_modulus(low_limb: u64) -> Self {
        if low_limb % 4 == 3 {
            Fp2SqrtAlgorithm::Adj9
        } else {
            Fp2SqrtAlgorithm::Adj10
        }
    }
}

#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp2Parameters"),
    Hash(bound = "P: Fp2Parameters"),
    Clone(bound = "P: Fp2Parameters"),
    Copy(bound = "P: Fp2Parameters"),
    Debug(bound = "P: Fp2Parameters"),
    PartialEq(bound = "P: Fp2Parameters"),
    Eq(bound = "P: Fp2Parameters")
)]
pub struct Fp2<P: Fp2Parameters> {
    pub c0: P::Fp,
    pub c1: P::Fp,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: Fp2Parameters> Fp2<P> {
    pub fn new(c0: P::Fp, c1: P::Fp) -> Self {
        Fp2 {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// Norm of Fp2 over Fp: Norm(a) = a.x^2 - beta * a.y^2
    pub fn norm(&self) -> P::Fp {
        let t0 = self.c0.square();
        let mut t1 = self.c1.square();
        t1 = -P::mul_fp_by_nonresidue(&t1);
        t1.add_assign(&t0);
        t1
    }

    /// The non-trivial automorphism `c0 + c1 * u -> c0 - c1 * u`.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    pub fn mul_by_fp(&mut self, element: &P::Fp) {
        self.c0.mul_assign(element);
        self.c1.mul_assign(element);
    }

    fn sqrt_adj9(&self) -> Option<Self> {
        // Adj and Rodriguez-Henriquez, "Square root computation over even extension fields",
        // Algorithm 9, with the exponents (p - 3)/4 and (p - 1)/2.
        let mut e34 = <P::Fp as PrimeField>::Params::MODULUS;
        e34.divn(2);
        let e12 = <P::Fp as PrimeField>::Params::MODULUS_MINUS_ONE_DIV_TWO;

        let a1 = self.pow(e34);
        let alpha = a1.square() * self;
        let mut alpha_conj = alpha;
        alpha_conj.frobenius_map(1);
        let a0 = alpha_conj * &alpha;

        let minus_one = -Self::one();
        if a0 == minus_one {
            return None;
        }

        let x0 = a1 * self;
        let root = if alpha == minus_one {
            // u * x0
            Self::new(P::mul_fp_by_nonresidue(&x0.c1), x0.c0)
        } else {
            let b = (Self::one() + &alpha).pow(e12);
            b * &x0
        };
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }
}

impl<P: Fp2Parameters> Field for Fp2<P> {
    fn zero() -> Self {
        Fp2::new(P::Fp::zero(), P::Fp::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn one() -> Self {
        Fp2::new(P::Fp::one(), P::Fp::zero())
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    #[inline]
    fn characteristic<'a>() -> &'a [u64] {
        P::Fp::characteristic()
    }

    fn double(&self) -> Self {
        let mut result = self.clone();
        result.double_in_place();
        result
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    fn square_in_place(&mut self) -> &mut Self {
        // Devegili OhEig Scott Dahab --- Multiplication and Squaring on
        // Pairing-Friendly
        // Fields.pdf; Section 3 (Complex squaring)
        let mut v0 = self.c0 - &self.c1;
        let v3 = self.c0 - &P::mul_fp_by_nonresidue(&self.c1);
        let v2 = self.c0 * &self.c1;

        v0 *= &v3;
        v0 += &v2;

        self.c1 = v2.double();
        self.c0 = v0 + &P::mul_fp_by_nonresidue(&v2);

        self
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guide to Pairing-based Cryptography, Algorithm 5.19.
            // v0 = c0.square()
            let mut v0 = self.c0.square();
            // v1 = c1.square()
            let v1 = self.c1.square();
            // v0 = v0 - beta * v1
            v0 -= &P::mul_fp_by_nonresidue(&v1);
            v0.inverse().map(|v1| {
                let c0 = self.c0 * &v1;
                let c1 = -(self.c1 * &v1);
                Self::new(c0, c1)
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
        self.c1.mul_assign(&P::FROBENIUS_COEFF_FP2_C1[power % 2]);
    }
}

impl<P: Fp2Parameters> SquareRootField for Fp2<P> {
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        let low_limb = <P::Fp as PrimeField>::Params::MODULUS.as_ref()[0];
        let root = match Fp2SqrtAlgorithm::for_modulus(low_limb) {
            Fp2SqrtAlgorithm::Adj9 => self.sqrt_adj9(),
            Fp2SqrtAlgorithm::Adj10 => unimplemented!("square root in Fp2 for p = 1 mod 4"),
        };
        root.map(|r| if r.is_lexicographically_largest() { -r } else { r })
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        (*self).sqrt().map(|sqrt| {
            *self = sqrt;
            self
        })
    }

    fn is_lexicographically_largest(&self) -> bool {
        self.c1.is_lexicographically_largest()
            || (self.c1.is_zero() && self.c0.is_lexicographically_largest())
    }
}

impl<P: Fp2Parameters> FieldEncoding for Fp2<P> {
    fn encoded_size() -> usize {
        2 * P::Fp::encoded_size()
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c0.to_le_bytes();
        bytes.extend(self.c1.to_le_bytes());
        bytes
    }

    fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = self.c1.to_be_bytes();
        bytes.extend(self.c0.to_be_bytes());
        bytes
    }

    fn to_le_bytes_montgomery(&self) -> Vec<u8> {
        let mut bytes = self.c0.to_le_bytes_montgomery();
        bytes.extend(self.c1.to_le_bytes_montgomery());
        bytes
    }

    fn to_be_bytes_montgomery(&self) -> Vec<u8> {
        let mut bytes = self.c1.to_be_bytes_montgomery();
        bytes.extend(self.c0.to_be_bytes_montgomery());
        bytes
    }

    fn from_le_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (lo, hi) = split_halves::<P::Fp>(bytes)?;
        Ok(Self::new(P::Fp::from_le_bytes(lo)?, P::Fp::from_le_bytes(hi)?))
    }

    fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (hi, lo) = split_halves::<P::Fp>(bytes)?;
        Ok(Self::new(P::Fp::from_be_bytes(lo)?, P::Fp::from_be_bytes(hi)?))
    }

    fn from_le_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (lo, hi) = split_halves::<P::Fp>(bytes)?;
        Ok(Self::new(
            P::Fp::from_le_bytes_montgomery(lo)?,
            P::Fp::from_le_bytes_montgomery(hi)?,
        ))
    }

    fn from_be_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (hi, lo) = split_halves::<P::Fp>(bytes)?;
        Ok(Self::new(
            P::Fp::from_be_bytes_montgomery(lo)?,
            P::Fp::from_be_bytes_montgomery(hi)?,
        ))
    }
}

fn split_halves<F: FieldEncoding>(bytes: &[u8]) -> Result<(&[u8], &[u8]), AlgebraError> {
    AlgebraError::check_buffer_length(2 * F::encoded_size(), bytes.len())?;
    Ok(bytes.split_at(F::encoded_size()))
}

/// `Fp2` elements are ordered lexicographically.
impl<P: Fp2Parameters> Ord for Fp2<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.c1.cmp(&other.c1) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            Ordering::Equal => self.c0.cmp(&other.c0),
        }
    }
}

impl<P: Fp2Parameters> PartialOrd for Fp2<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Fp2Parameters> From<u64> for Fp2<P> {
    fn from(other: u64) -> Self {
        Self::new(other.into(), P::Fp::zero())
    }
}

impl<P: Fp2Parameters> ToBytes for Fp2<P> {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c0.write(&mut writer)?;
        self.c1.write(writer)
    }
}

impl<P: Fp2Parameters> FromBytes for Fp2<P> {
    #[inline]
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c0 = P::Fp::read(&mut reader)?;
        let c1 = P::Fp::read(reader)?;
        Ok(Fp2::new(c0, c1))
    }
}

impl<P: Fp2Parameters> Neg for Fp2<P> {
    type Output = Self;
    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        let mut res = self.clone();
        res.c0 = res.c0.neg();
        res.c1 = res.c1.neg();
        res
    }
}

impl<P: Fp2Parameters> Distribution<Fp2<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp2<P> {
        Fp2::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<'a, P: Fp2Parameters> Add<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp2Parameters> Sub<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp2Parameters> Mul<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp2Parameters> Div<&'a Fp2<P>> for Fp2<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(&other.inverse().expect("division by zero"));
        result
    }
}

impl_additive_ops_from_ref!(Fp2, Fp2Parameters);
impl_multiplicative_ops_from_ref!(Fp2, Fp2Parameters);

impl<'a, P: Fp2Parameters> AddAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }
}

impl<'a, P: Fp2Parameters> SubAssign<&'a Self> for Fp2<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }
}

impl<'a, P: Fp2Parameters> MulAssign<&'a Self> for Fp2<P> {
    /// Karatsuba multiplication;
    /// Guide to Pairing-based cryprography, Algorithm 5.16.
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0 * &other.c0;
        let v1 = self.c1 * &other.c1;

        self.c1 += &self.c0;
        self.c1 *= &(other.c0 + &other.c1);
        self.c1 -= &v0;
        self.c1 -= &v1;
        self.c0 = v0 + &P::mul_fp_by_nonresidue(&v1);
    }
}

impl<'a, P: Fp2Parameters> DivAssign<&'a Self> for Fp2<P> {
    /// Panics if `other` is zero.
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        self.mul_assign(&other.inverse().expect("division by zero"));
    }
}

impl<P: Fp2Parameters> Display for Fp2<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp2({} + {} * u)", self.c0, self.c1)
    }
}
