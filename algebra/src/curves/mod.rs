//! Elliptic curve groups and pairings.
//!
//! Groups are accessed through the [`AffineCurve`] and [`ProjectiveCurve`] traits,
//! pairings through the [`PairingEngine`] trait. Concrete curves live in the
//! [`bn254`] and [`bls12_381`] modules, the generic models in [`models`].

use crate::{
    biginteger::biguint,
    bytes::{FromBytes, ToBytes},
    error::AlgebraError,
    fields::{BitIterator, Field, FieldEncoding, PrimeField, SquareRootField},
    UniformRand,
};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, MulAssign, Neg, Sub, SubAssign},
};

pub mod models;
pub use self::models::*;

pub mod encoding;
pub use self::encoding::*;

#[cfg(feature = "bn254")]
pub mod bn254;

#[cfg(feature = "bls12_381")]
pub mod bls12_381;

pub mod registry;

/// A bilinear map `e: G1 x G2 -> GT` on pairing-friendly curves.
pub trait PairingEngine: Sized + 'static + Copy + Debug + Sync + Send {
    /// This is the scalar field of the G1/G2 groups.
    type Fr: PrimeField + SquareRootField + Into<<Self::Fr as PrimeField>::BigInt>;

    /// The projective representation of an element in G1.
    type G1Projective: ProjectiveCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Affine = Self::G1Affine>
        + From<Self::G1Affine>
        + Into<Self::G1Affine>
        + MulAssign<Self::Fr>;

    /// The affine representation of an element in G1.
    type G1Affine: AffineCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Projective = Self::G1Projective>
        + From<Self::G1Projective>
        + Into<Self::G1Projective>
        + Into<Self::G1Prepared>;

    /// A G1 element that has been preprocessed for use in a pairing.
    type G1Prepared: Default + Clone + Send + Sync + Debug + From<Self::G1Affine>;

    /// The projective representation of an element in G2.
    type G2Projective: ProjectiveCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Affine = Self::G2Affine>
        + From<Self::G2Affine>
        + Into<Self::G2Affine>
        + MulAssign<Self::Fr>;

    /// The affine representation of an element in G2.
    type G2Affine: AffineCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Projective = Self::G2Projective>
        + From<Self::G2Projective>
        + Into<Self::G2Projective>
        + Into<Self::G2Prepared>;

    /// A G2 element that has been preprocessed for use in a pairing.
    type G2Prepared: Default + Clone + Send + Sync + Debug + From<Self::G2Affine>;

    /// The base field that hosts G1.
    type Fq: PrimeField + SquareRootField;

    /// The extension field that hosts G2.
    type Fqe: SquareRootField + FieldEncoding;

    /// The extension field that hosts the target group of the pairing.
    type Fqk: Field + FieldEncoding;

    /// Degree of `Fqk` over `Fq`.
    const EMBEDDING_DEGREE: u32;

    /// Perform a miller loop with some number of (G1, G2) pairs.
    #[must_use]
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>;

    /// Perform final exponentiation of the result of a miller loop.
    #[must_use]
    fn final_exponentiation(_: &Self::Fqk) -> Option<Self::Fqk>;

    /// Raises `f` to `(q^k - 1)/r` by plain square and multiply.
    fn final_exponentiation_naive(f: &Self::Fqk) -> Option<Self::Fqk> {
        if f.is_zero() {
            return None;
        }
        let q = biguint::from_limbs(Self::Fq::characteristic());
        let r = biguint::from_limbs(Self::Fr::characteristic());
        let exp = (q.pow(Self::EMBEDDING_DEGREE) - 1u32) / r;
        Some(f.pow_be_bytes(&exp.to_bytes_be()))
    }

    /// Computes a product of pairings.
    #[must_use]
    fn product_of_pairings<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        Self::final_exponentiation(&Self::miller_loop(i)).unwrap_or_else(Self::Fqk::one)
    }

    /// Performs multiple pairing operations
    #[must_use]
    fn pairing<G1, G2>(p: G1, q: G2) -> Self::Fqk
    where
        G1: Into<Self::G1Affine>,
        G2: Into<Self::G2Affine>,
    {
        let g1_prep = Self::G1Prepared::from(p.into());
        let g2_prep = Self::G2Prepared::from(q.into());
        Self::product_of_pairings(std::iter::once(&(g1_prep, g2_prep)))
    }

    /// Checks `prod_i e(P_i, Q_i) == expected` with a single final exponentiation.
    /// Points that are off the curve or outside the prime order subgroup make the
    /// equation fail.
    fn pairing_equation(pairs: &[(Self::G1Affine, Self::G2Affine)], expected: &Self::Fqk) -> bool {
        let timer = start_timer!(|| format!("Pairing equation with {} pairs", pairs.len()));
        let mut prepared = Vec::with_capacity(pairs.len());
        for (p, q) in pairs {
            if let Err(e) = p.check().and_then(|_| q.check()) {
                debug!("pairing equation rejected an input point: {}", e);
                end_timer!(timer);
                return false;
            }
            prepared.push((Self::G1Prepared::from(*p), Self::G2Prepared::from(*q)));
        }
        let result = Self::final_exponentiation(&Self::miller_loop(prepared.iter()));
        end_timer!(timer);
        result.map_or(false, |r| &r == expected)
    }
}

/// Projective representation of an elliptic curve point guaranteed to be
/// in the correct prime order subgroup.
pub trait ProjectiveCurve:
    Eq
    + Sized
    + ToBytes
    + FromBytes
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + UniformRand
    + 'static
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + PartialEq<Self::Affine>
    + std::iter::Sum<Self>
    + for<'a> std::iter::Sum<&'a Self>
{
    type ScalarField: PrimeField + SquareRootField + Into<<Self::ScalarField as PrimeField>::BigInt>;
    type BaseField: Field;
    type Affine: AffineCurve<Projective = Self, ScalarField = Self::ScalarField>;

    /// Returns the additive identity.
    #[must_use]
    fn zero() -> Self;

    /// Returns a fixed generator of unknown exponent.
    #[must_use]
    fn prime_subgroup_generator() -> Self;

    /// Determines if this point is the point at infinity.
    #[must_use]
    fn is_zero(&self) -> bool;

    /// Normalizes a slice of projective elements so that
    /// conversion to affine is cheap.
    fn batch_normalization(v: &mut [Self]);

    /// Normalizes a slice of projective elements and outputs a vector
    /// containing the affine equivalents.
    fn batch_normalization_into_affine(v: &[Self]) -> Vec<Self::Affine> {
        let mut v = v.to_vec();
        Self::batch_normalization(&mut v);
        v.into_iter().map(|v| v.into_affine()).collect()
    }

    /// Checks if the point is already "normalized" so that
    /// cheap affine conversion is possible.
    #[must_use]
    fn is_normalized(&self) -> bool;

    /// Doubles this element.
    #[must_use]
    fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    /// Doubles this element in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Set `self` to be `self + other`, where `other: Self::Affine`.
    /// This is usually faster than adding `other` in projective form.
    fn add_mixed(mut self, other: &Self::Affine) -> Self {
        self.add_assign_mixed(other);
        self
    }

    /// Set `self` to be `self + other`, where `other: Self::Affine`.
    fn add_assign_mixed(&mut self, other: &Self::Affine);

    /// Performs scalar multiplication of this element.
    #[must_use]
    fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(&self, other: S) -> Self;

    /// Converts this element into its affine representation.
    #[must_use]
    fn into_affine(&self) -> Self::Affine;
}

/// Affine representation of an elliptic curve point guaranteed to be
/// in the correct prime order subgroup.
pub trait AffineCurve:
    Eq
    + Sized
    + ToBytes
    + FromBytes
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + UniformRand
    + Neg<Output = Self>
    + PartialEq<Self::Projective>
    + 'static
{
    type ScalarField: PrimeField + SquareRootField + Into<<Self::ScalarField as PrimeField>::BigInt>;
    type BaseField: Field + SquareRootField + FieldEncoding;
    type Projective: ProjectiveCurve<Affine = Self, ScalarField = Self::ScalarField>;

    /// Returns the additive identity.
    #[must_use]
    fn zero() -> Self;

    /// Returns a fixed generator of unknown exponent.
    #[must_use]
    fn prime_subgroup_generator() -> Self;

    /// Determines if this point represents the point at infinity; the
    /// additive identity.
    #[must_use]
    fn is_zero(&self) -> bool;

    /// Performs scalar multiplication of this element with mixed addition.
    #[must_use]
    fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(&self, other: S)
        -> Self::Projective;

    /// Multiplies by the bits of an exponent, most significant first.
    #[must_use]
    fn mul_bits<S: AsRef<[u64]>>(&self, bits: BitIterator<S>) -> Self::Projective;

    /// Converts this element into its projective representation.
    #[must_use]
    fn into_projective(&self) -> Self::Projective;

    /// Adds two affine points, with the result in projective form.
    #[must_use]
    fn add_affine(&self, other: &Self) -> Self::Projective;

    /// Checks that the point satisfies the curve equation.
    #[must_use]
    fn is_on_curve(&self) -> bool;

    /// Checks that a point on the curve lies in the prime order subgroup.
    #[must_use]
    fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool;

    /// Curve and subgroup membership, as an error.
    fn check(&self) -> Result<(), AlgebraError> {
        if !self.is_on_curve() {
            Err(AlgebraError::NotOnCurve)
        } else if !self.is_in_correct_subgroup_assuming_on_curve() {
            Err(AlgebraError::NotInSubgroup)
        } else {
            Ok(())
        }
    }
}

