use crate::{
    curves::{AffineCurve, ProjectiveCurve},
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp6_3over2::Fp6Parameters,
        BitIterator, Field, FieldEncoding, Fp2, Fp2Parameters, PrimeField, SquareRootField,
    },
};

pub mod bls12;
pub mod bn;
pub mod short_weierstrass_jacobian;

pub use self::short_weierstrass_jacobian::{GroupAffine, GroupProjective};

/// Shape of the sextic twist carrying G2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwistType {
    M, //  E': y^2 = x^3 + b/i^5 which is isomorphic to y^2=x^3 + i*b
    D, // E': y^2 = x^3 + b/i
}

/// Multiplies the Miller loop accumulator `f` by the line with coefficients
/// `(c0, c1, c2)` evaluated at the affine G1 point `(px, py)`.
///
/// An M-type line is `c0 + c1 * px * v + c2 * py * v * w`, a D-type line
/// `c0 + c1 * py * v * w + c2 * px * v^2`; only the last two coefficients
/// depend on the point.
pub(crate) fn mul_by_line<P2, P12>(
    f: &mut Fp12<P12>,
    twist: TwistType,
    coeffs: &(Fp2<P2>, Fp2<P2>, Fp2<P2>),
    px: &P2::Fp,
    py: &P2::Fp,
) where
    P2: Fp2Parameters,
    P12: Fp12Parameters,
    P12::Fp6Params: Fp6Parameters<Fp2Params = P2>,
{
    let (c0, mut c1, mut c2) = *coeffs;
    match twist {
        TwistType::M => {
            c1.mul_by_fp(px);
            c2.mul_by_fp(py);
            f.mul_by_014(&c0, &c1, &c2);
        }
        TwistType::D => {
            c1.mul_by_fp(py);
            c2.mul_by_fp(px);
            f.mul_by_024(&c0, &c1, &c2);
        }
    }
}

pub trait ModelParameters: Send + Sync + 'static {
    type BaseField: Field + SquareRootField + FieldEncoding;
    type ScalarField: PrimeField + SquareRootField + Into<<Self::ScalarField as PrimeField>::BigInt>;
}

/// Parameters of a short Weierstrass curve `y^2 = x^3 + b` (the `a = 0` case used by
/// pairing-friendly curves).
pub trait SWModelParameters: ModelParameters + Sized {
    const COEFF_B: Self::BaseField;
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField);

    #[inline(always)]
    fn mul_by_b(elem: &Self::BaseField) -> Self::BaseField {
        let mut copy = *elem;
        copy *= &Self::COEFF_B;
        copy
    }

    /// Membership in the prime order subgroup, by default checked as `[r]P = 0`.
    fn is_in_correct_subgroup_assuming_on_curve(p: &GroupAffine<Self>) -> bool {
        p.mul_bits(BitIterator::new(Self::ScalarField::characteristic()))
            .is_zero()
    }
}
