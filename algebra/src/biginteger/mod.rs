//! Fixed width little endian limb integers used as the canonical representation of
//! prime field elements, and arbitrary precision helpers on top of `num-bigint`.

use crate::{
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    fields::BitIterator,
    UniformRand,
};
use byteorder::{ByteOrder, LittleEndian};
use num_bigint::BigUint;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Debug, Display},
    io::{Read, Result as IoResult, Write},
};

#[macro_use]
mod macros;

pub(crate) mod arithmetic;

pub mod biguint;

bigint_impl!(BigInteger256, 4);
bigint_impl!(BigInteger384, 6);


/// This defines a `BigInteger`, a smart wrapper around a
/// sequence of `u64` limbs, least-significant digit first.
pub trait BigInteger:
    ToBytes
    + FromBytes
    + Copy
    + Clone
    + Debug
    + Default
    + Display
    + Eq
    + Ord
    + Send
    + Sized
    + Sync
    + 'static
    + UniformRand
    + AsMut<[u64]>
    + AsRef<[u64]>
    + From<u64>
{
    /// Number of 64 bit limbs.
    const NUM_LIMBS: usize;

    /// Add another representation to this one, returning the carry bit.
    fn add_nocarry(&mut self, other: &Self) -> bool;

    /// Subtract another representation from this one, returning the borrow bit.
    fn sub_noborrow(&mut self, other: &Self) -> bool;

    /// Performs a leftwise bitshift of this number, effectively multiplying
    /// it by 2. Overflow is ignored.
    fn mul2(&mut self);

    /// Performs a leftwise bitshift of this number by some amount.
    fn muln(&mut self, amt: u32);

    /// Performs a rightwise bitshift of this number, effectively dividing
    /// it by 2.
    fn div2(&mut self);

    /// Performs a rightwise bitshift of this number by some amount.
    fn divn(&mut self, amt: u32);

    /// Returns true iff this number is odd.
    fn is_odd(&self) -> bool;

    /// Returns true iff this number is even.
    fn is_even(&self) -> bool;

    /// Returns true iff this number is zero.
    fn is_zero(&self) -> bool;

    /// Compute the number of bits needed to encode this number. Always a
    /// multiple of 64.
    fn num_bits(&self) -> u32;

    /// Compute the `i`-th bit of `self`.
    fn get_bit(&self, i: usize) -> bool;

    /// Returns the big integer representation of a given big endian boolean
    /// array.
    fn from_bits(bits: &[bool]) -> Self;

    /// Returns the bit representation in a big endian boolean array,
    /// including leading zeros.
    fn to_bits(&self) -> Vec<bool>;

    /// Returns the non-adjacent form of `self`, least significant digit first.
    /// Every digit is in {-1, 0, 1} and no two consecutive digits are non-zero.
    fn find_naf(&self) -> Vec<i8>;

    /// Little endian bytes, `8 * NUM_LIMBS` of them.
    fn to_bytes_le(&self) -> Vec<u8>;

    /// Big endian bytes, `8 * NUM_LIMBS` of them.
    fn to_bytes_be(&self) -> Vec<u8>;

    /// Reads exactly `8 * NUM_LIMBS` little endian bytes.
    fn from_bytes_le(bytes: &[u8]) -> Result<Self, AlgebraError>;

    /// Reads exactly `8 * NUM_LIMBS` big endian bytes.
    fn from_bytes_be(bytes: &[u8]) -> Result<Self, AlgebraError>;

    fn to_biguint(&self) -> BigUint;

    /// Returns `None` if `n` does not fit into `NUM_LIMBS` limbs.
    fn from_biguint(n: &BigUint) -> Option<Self>;
}
