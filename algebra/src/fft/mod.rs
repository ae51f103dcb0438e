//! Radix-2 number theoretic transforms over the multiplicative subgroups of a
//! prime field, for vectors of field elements as well as of curve points.

use crate::fields::PrimeField;
use std::{
    fmt::Debug,
    ops::{AddAssign, MulAssign, SubAssign},
};

mod domain;
pub use self::domain::*;

/// Types that can be transformed over an evaluation domain of `F`, i.e. that
/// form an `F`-vector space. Covers the field itself and the Jacobian points
/// of a curve with scalar field `F`.
pub trait DomainCoeff<F: PrimeField>:
    Copy + Send + Sync + Debug + PartialEq + AddAssign<Self> + SubAssign<Self> + MulAssign<F>
{
}

impl<F, T> DomainCoeff<F> for T
where
    F: PrimeField,
    T: Copy + Send + Sync + Debug + PartialEq + AddAssign<T> + SubAssign<T> + MulAssign<F>,
{
}
