use crate::{
    bytes::ToBytes,
    curves::{
        bls12::Bls12Parameters,
        models::{
            short_weierstrass_jacobian::{GroupAffine, GroupProjective},
            SWModelParameters, TwistType,
        },
        AffineCurve,
    },
    fields::{fp6_3over2::Fp6Parameters, BitIterator, Field, Fp2},
};
use std::io::{Result as IoResult, Write};

pub type G2Affine<P> = GroupAffine<<P as Bls12Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as Bls12Parameters>::G2Parameters>;

/// Coefficients `(ell_0, ell_VW, ell_VV)` of a line function.
pub type EllCoeff<F> = (F, F, F);

/// Bits of `|x|` after the most significant one.
pub(crate) fn x_bits<P: Bls12Parameters>() -> impl Iterator<Item = bool> {
    BitIterator::without_leading_one(P::X)
}

/// The line functions of the Miller loop for a fixed G2 point: one per doubling
/// and one per addition step.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bls12Parameters"),
    Debug(bound = "P: Bls12Parameters"),
    PartialEq(bound = "P: Bls12Parameters"),
    Eq(bound = "P: Bls12Parameters")
)]
pub struct G2Prepared<P: Bls12Parameters> {
    pub ell_coeffs: Vec<EllCoeff<Fp2<P::Fp2Params>>>,
    pub infinity: bool,
}

/// A point on the twist in homogeneous projective coordinates, `(x, y) = (X/Z, Y/Z)`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bls12Parameters"),
    Copy(bound = "P: Bls12Parameters"),
    Debug(bound = "P: Bls12Parameters")
)]
struct G2HomProjective<P: Bls12Parameters> {
    x: Fp2<P::Fp2Params>,
    y: Fp2<P::Fp2Params>,
    z: Fp2<P::Fp2Params>,
}

impl<P: Bls12Parameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self::from(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: Bls12Parameters> ToBytes for G2Prepared<P> {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        for coeff in &self.ell_coeffs {
            coeff.0.write(&mut writer)?;
            coeff.1.write(&mut writer)?;
            coeff.2.write(&mut writer)?;
        }
        self.infinity.write(writer)
    }
}

impl<P: Bls12Parameters> From<G2Affine<P>> for G2Prepared<P> {
    fn from(q: G2Affine<P>) -> Self {
        if q.is_zero() {
            return Self {
                ell_coeffs: vec![],
                infinity: true,
            };
        }

        let mut ell_coeffs = vec![];
        let mut r = G2HomProjective::<P> {
            x: q.x,
            y: q.y,
            z: Fp2::one(),
        };

        for bit in x_bits::<P>() {
            ell_coeffs.push(doubling_step::<P>(&mut r, &P::TWO_INV));

            if bit {
                ell_coeffs.push(addition_step::<P>(&mut r, &q));
            }
        }

        Self {
            ell_coeffs,
            infinity: false,
        }
    }
}

impl<P: Bls12Parameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}

fn mul_by_twist<P: Bls12Parameters>(fe: &Fp2<P::Fp2Params>) -> Fp2<P::Fp2Params> {
    <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue(fe)
}

fn doubling_step<P: Bls12Parameters>(
    r: &mut G2HomProjective<P>,
    two_inv: &P::Fp,
) -> EllCoeff<Fp2<P::Fp2Params>> {
    // Formula for line function when working with
    // homogeneous projective coordinates.

    let mut a = r.x * &r.y;
    a.mul_by_fp(two_inv);
    let b = r.y.square();
    let c = r.z.square();
    let e = P::G2Parameters::mul_by_b(&(c.double() + &c));
    let f = e.double() + &e;
    let mut g = b + &f;
    g.mul_by_fp(two_inv);
    let h = (r.y + &r.z).square() - &(b + &c);
    let i = e - &b;
    let j = r.x.square();
    let e_square = e.square();

    r.x = a * &(b - &f);
    r.y = g.square() - &(e_square.double() + &e_square);
    r.z = b * &h;
    match P::TWIST_TYPE {
        TwistType::M => (i, j.double() + &j, -h),
        TwistType::D => (mul_by_twist::<P>(&i), -h, j.double() + &j),
    }
}

fn addition_step<P: Bls12Parameters>(
    r: &mut G2HomProjective<P>,
    q: &G2Affine<P>,
) -> EllCoeff<Fp2<P::Fp2Params>> {
    // Formula for line function when working with
    // homogeneous projective coordinates.
    let theta = r.y - &(q.y * &r.z);
    let lambda = r.x - &(q.x * &r.z);
    let c = theta.square();
    let d = lambda.square();
    let e = lambda * &d;
    let f = r.z * &c;
    let g = r.x * &d;
    let h = e + &f - &g.double();
    r.x = lambda * &h;
    r.y = theta * &(g - &h) - &(e * &r.y);
    r.z *= &e;
    let j = theta * &q.x - &(lambda * &q.y);

    match P::TWIST_TYPE {
        TwistType::M => (j, -theta, lambda),
        TwistType::D => (mul_by_twist::<P>(&j), lambda, -theta),
    }
}
