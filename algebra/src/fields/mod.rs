use crate::{
    biginteger::BigInteger,
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    UniformRand,
};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::Hash,
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
    },
    str::FromStr,
};

#[macro_use]
mod macros;

pub mod models;
pub use self::models::*;

#[cfg(feature = "bn254")]
pub mod bn254;

#[cfg(feature = "bls12_381")]
pub mod bls12_381;

/// The interface for a generic field.
pub trait Field:
    ToBytes
    + FromBytes
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Eq
    + Hash
    + Neg<Output = Self>
    + UniformRand
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + std::iter::Sum<Self>
    + for<'a> std::iter::Sum<&'a Self>
    + std::iter::Product<Self>
    + for<'a> std::iter::Product<&'a Self>
{
    /// Returns the zero element of the field, the additive identity.
    fn zero() -> Self;

    /// Returns true if and only if `self == Self::zero()`.
    fn is_zero(&self) -> bool;

    /// Returns the one element of the field, a field generator.
    fn one() -> Self;

    /// Returns true if and only if `self == Self::one()`.
    fn is_one(&self) -> bool;

    /// Returns the characteristic of the field, as little endian limbs.
    fn characteristic<'a>() -> &'a [u64];

    /// Returns `self + self`.
    #[must_use]
    fn double(&self) -> Self;

    /// Doubles `self` in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Returns `self * self`.
    #[must_use]
    fn square(&self) -> Self;

    /// Squares `self` in place.
    fn square_in_place(&mut self) -> &mut Self;

    /// Computes the multiplicative inverse of `self` if `self` is nonzero.
    #[must_use]
    fn inverse(&self) -> Option<Self>;

    /// Sets `self` to `self`'s inverse if it exists. Otherwise it is a no-op.
    fn inverse_in_place(&mut self) -> Option<&mut Self>;

    /// Like `inverse`, but reports a zero input as `AlgebraError::DivisionByZero`.
    fn try_inverse(&self) -> Result<Self, AlgebraError> {
        self.inverse().ok_or(AlgebraError::DivisionByZero)
    }

    /// Exponentiates this element by a power of the base prime modulus via
    /// the Frobenius automorphism.
    fn frobenius_map(&mut self, power: usize);

    /// Exponentiates this element by a number represented with `u64` limbs,
    /// least significant limb first. Every exponent bit costs one squaring.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();

        for i in BitIterator::new(exp) {
            res.square_in_place();
            if i {
                res *= self;
            }
        }
        res
    }

    /// Exponentiates this element by a big endian byte string of arbitrary length.
    #[must_use]
    fn pow_be_bytes(&self, exp: &[u8]) -> Self {
        let mut res = Self::one();

        for byte in exp {
            for i in (0..8).rev() {
                res.square_in_place();
                if (byte >> i) & 1 == 1 {
                    res *= self;
                }
            }
        }
        res
    }
}

/// Fixed size byte encodings of field elements, both of the integer value and
/// of the raw Montgomery representation. Extension field elements are
/// encoded coefficient by coefficient: lowest degree first in little endian,
/// highest degree first in big endian.
pub trait FieldEncoding: Field {
    /// Length in bytes of one encoded element.
    fn encoded_size() -> usize;

    fn to_le_bytes(&self) -> Vec<u8>;

    fn to_be_bytes(&self) -> Vec<u8>;

    fn to_le_bytes_montgomery(&self) -> Vec<u8>;

    fn to_be_bytes_montgomery(&self) -> Vec<u8>;

    /// Fails on a wrong length or a coefficient which is not reduced.
    fn from_le_bytes(bytes: &[u8]) -> Result<Self, AlgebraError>;

    fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError>;

    fn from_le_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError>;

    fn from_be_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError>;
}

/// A trait that defines parameters for a prime field.
pub trait FpParameters: 'static + Send + Sync + Sized {
    type BigInt: BigInteger;

    /// The modulus of the field.
    const MODULUS: Self::BigInt;

    /// The number of bits needed to represent the `Self::MODULUS`.
    const MODULUS_BITS: u32;

    /// The number of bits that can be reliably stored.
    /// (Should equal `SELF::MODULUS_BITS - 1`)
    const CAPACITY: u32;

    /// Let `M` be the power of 2^64 nearest to `Self::MODULUS_BITS`. Then
    /// `R = M % Self::MODULUS`.
    const R: Self::BigInt;

    /// R2 = R^2 % Self::MODULUS
    const R2: Self::BigInt;

    /// INV = -(MODULUS^{-1} mod 2^64) mod 2^64
    const INV: u64;

    /// A multiplicative generator that is also a quadratic nonresidue.
    /// `Self::GENERATOR` is an element having multiplicative order
    /// `Self::MODULUS - 1`.
    const GENERATOR: Self::BigInt;

    /// The 2-adicity `S` of `MODULUS - 1 = 2^S * T`.
    const TWO_ADICITY: u32;

    /// 2^s root of unity computed by GENERATOR^T
    const ROOT_OF_UNITY: Self::BigInt;

    /// (Self::MODULUS - 1) / 2
    const MODULUS_MINUS_ONE_DIV_TWO: Self::BigInt;

    /// t for 2^s * t = MODULUS - 1
    const T: Self::BigInt;

    /// (t - 1) / 2
    const T_MINUS_ONE_DIV_TWO: Self::BigInt;
}

/// The interface for a prime field.
pub trait PrimeField:
    Field + FieldEncoding + FromStr<Err = AlgebraError> + From<u64> + Ord + PartialOrd
{
    type Params: FpParameters<BigInt = Self::BigInt>;
    type BigInt: BigInteger;

    /// Returns a prime field element from its canonical integer representation,
    /// or `None` if `repr` is not smaller than the modulus.
    fn from_repr(repr: Self::BigInt) -> Option<Self>;

    /// Returns the canonical integer representation of the element.
    fn into_repr(&self) -> Self::BigInt;

    /// Wraps an already Montgomery-encoded representation, or returns `None`
    /// if it is not reduced.
    fn from_montgomery_repr(repr: Self::BigInt) -> Option<Self>;

    /// Returns the stored Montgomery representation `self * R mod p`.
    fn montgomery_repr(&self) -> Self::BigInt;

    /// Returns the multiplicative generator of `char()` - 1 order.
    fn multiplicative_generator() -> Self;

    /// Returns the 2^s root of unity.
    fn root_of_unity() -> Self;

    /// Returns the field size in bits.
    fn size_in_bits() -> usize {
        Self::Params::MODULUS_BITS as usize
    }

    /// Returns the trace.
    fn trace() -> Self::BigInt {
        Self::Params::T
    }

    /// Returns the trace minus one divided by two.
    fn trace_minus_one_div_two() -> Self::BigInt {
        Self::Params::T_MINUS_ONE_DIV_TWO
    }

    /// Returns the modulus minus one divided by two.
    fn modulus_minus_one_div_two() -> Self::BigInt {
        Self::Params::MODULUS_MINUS_ONE_DIV_TWO
    }

    /// Returns `[w_0, ..., w_s]` where `w_s` is the fixed primitive `2^s`-th
    /// root of unity and `w_i = w_{i+1}^2`, so that `w_0 = 1`.
    fn root_of_unity_table() -> Vec<Self> {
        let s = Self::Params::TWO_ADICITY as usize;
        let mut table = vec![Self::one(); s + 1];
        table[s] = Self::root_of_unity();
        for i in (0..s).rev() {
            table[i] = table[i + 1].square();
        }
        table
    }

    /// An element is negative if its canonical integer exceeds `(p - 1)/2`.
    fn is_negative(&self) -> bool {
        self.into_repr() > Self::Params::MODULUS_MINUS_ONE_DIV_TWO
    }

    /// Compares the elements as signed integers in `(-p/2, p/2]`.
    fn signed_cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.into_repr().cmp(&other.into_repr()),
        }
    }
}

/// The interface for a field that supports an efficient square-root operation.
pub trait SquareRootField: Field {
    /// Returns the Legendre symbol.
    fn legendre(&self) -> LegendreSymbol;

    /// Returns a square root of self, if it exists. The root is the one which
    /// is not lexicographically largest.
    #[must_use]
    fn sqrt(&self) -> Option<Self>;

    /// Sets `self` to be the square root of `self`, if it exists.
    fn sqrt_in_place(&mut self) -> Option<&mut Self>;

    /// Euler's criterion, without computing a root.
    fn is_square(&self) -> bool {
        !self.legendre().is_qnr()
    }

    /// Whether `self` is the larger of `{self, -self}`: as integers for prime
    /// fields, comparing the highest degree coefficient first for extensions.
    fn is_lexicographically_largest(&self) -> bool;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LegendreSymbol {
    Zero = 0,
    QuadraticResidue = 1,
    QuadraticNonResidue = -1,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        *self == LegendreSymbol::Zero
    }

    pub fn is_qnr(&self) -> bool {
        *self == LegendreSymbol::QuadraticNonResidue
    }

    pub fn is_qr(&self) -> bool {
        *self == LegendreSymbol::QuadraticResidue
    }
}

/// Square root algorithm of a prime field, determined by the residue of the
/// modulus mod 16.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SqrtAlgorithm {
    /// `p = 3 mod 4`: `a^((p+1)/4)`.
    ThreeModFour,
    /// `p = 5 mod 8`.
    Atkin,
    /// `p = 9 mod 16`.
    Kong,
    /// `p = 1 mod 16`.
    TonelliShanks,
}

impl SqrtAlgorithm {
    pub const fn for_modulus(low_limb: u64) -> Self {
        if low_limb % 4 == 3 {
            SqrtAlgorithm::ThreeModFour
        } else if low_limb % 8 == 5 {
            SqrtAlgorithm::Atkin
        } else if low_limb % 16 == 9 {
            SqrtAlgorithm::Kong
        } else {
            SqrtAlgorithm::TonelliShanks
        }
    }
}

/// Iterates over the bits of a little endian limb sequence, most significant
/// bit first (leading zeros included).
#[derive(Debug)]
pub struct BitIterator<E> {
    t: E,
    n: usize,
}

impl<E: AsRef<[u64]>> BitIterator<E> {
    pub fn new(t: E) -> Self {
        let n = t.as_ref().len() * 64;

        BitIterator { t, n }
    }

    /// Skips the leading zeros and the leading one.
    pub fn without_leading_one(t: E) -> std::iter::Skip<std::iter::SkipWhile<Self, fn(&bool) -> bool>> {
        let not_set: fn(&bool) -> bool = |b| !*b;
        Self::new(t).skip_while(not_set).skip(1)
    }
}

impl<E: AsRef<[u64]>> Iterator for BitIterator<E> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);

            Some(self.t.as_ref()[part] & (1 << bit) > 0)
        }
    }
}

/// Given a vector of field elements {v_i}, compute the vector {v_i^(-1)}.
/// Zero entries are left untouched.
pub fn batch_inversion<F: Field>(v: &mut [F]) {
    // Montgomery's Trick and Fast Implementation of Masked AES
    // Genelle, Prouff and Quisquater
    // Section 3.2

    // First pass: compute [a, ab, abc, ...]
    let mut prod = Vec::with_capacity(v.len());
    let mut tmp = F::one();
    for f in v.iter().filter(|f| !f.is_zero()) {
        tmp.mul_assign(f);
        prod.push(tmp);
    }

    // Invert `tmp`; it is the product of non-zero elements only and hence non-zero.
    tmp = match tmp.inverse() {
        Some(inv) => inv,
        None => return,
    };

    // Second pass: iterate backwards to compute inverses
    for (f, s) in v
        .iter_mut()
        // Backwards
        .rev()
        // Ignore normalized elements
        .filter(|f| !f.is_zero())
        // Backwards, skip last element, fill in one for last term.
        .zip(prod.into_iter().rev().skip(1).chain(Some(F::one())))
    {
        // tmp := tmp * f; f := tmp * s = 1/f
        let newtmp = tmp * &*f;
        *f = tmp * &s;
        tmp = newtmp;
    }
}

/// Like `batch_inversion`, but refuses zero entries.
pub fn try_batch_inversion<F: Field>(v: &mut [F]) -> Result<(), AlgebraError> {
    if v.iter().any(|f| f.is_zero()) {
        return Err(AlgebraError::DivisionByZero);
    }
    batch_inversion(v);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::BitIterator;

    #[test]
    fn test_bit_iterator() {
        let mut a = BitIterator::new([0xa953d79b83f6ab59, 0x6dea2059e200bd39]);
        let expected = "01101101111010100010000001011001111000100000000010111101001110011010100101010011110101111001101110000011111101101010101101011001";

        for e in expected.chars() {
            assert!(a.next().unwrap() == (e == '1'));
        }

        assert!(a.next().is_none());

        let expected = "1010010101111110101010000101101011101000011101110101001000011001100100100011011010001011011011010001011011101100110100111011010010110001000011110100110001100110011101101000101100011100100100100100001010011101010111110011101011000011101000111011011101011001";

        let mut a = BitIterator::new([
            0x429d5f3ac3a3b759,
            0xb10f4c66768b1c92,
            0x92368b6d16ecd3b4,
            0xa57ea85ae8775219,
        ]);

        for e in expected.chars() {
            assert!(a.next().unwrap() == (e == '1'));
        }

        assert!(a.next().is_none());
    }

    #[test]
    fn test_bit_iterator_without_leading_one() {
        let bits: Vec<bool> = BitIterator::without_leading_one([0b1011u64, 0]).collect();
        assert_eq!(bits, vec![false, true, true]);
    }
}
