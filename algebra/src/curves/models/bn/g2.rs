use crate::{
    bytes::ToBytes,
    curves::{
        bn::BnParameters,
        models::{
            short_weierstrass_jacobian::{GroupAffine, GroupProjective},
            SWModelParameters, TwistType,
        },
        AffineCurve,
    },
    fields::{fp6_3over2::Fp6Parameters, BitIterator, Field, Fp2},
};
use std::io::{Result as IoResult, Write};

pub type G2Affine<P> = GroupAffine<<P as BnParameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as BnParameters>::G2Parameters>;

/// Coefficients `(ell_0, ell_VW, ell_VV)` of a line function.
pub type EllCoeff<F> = (F, F, F);

/// Bits of the Ate loop count after the most significant one.
pub(crate) fn ate_loop_bits<P: BnParameters>() -> impl Iterator<Item = bool> {
    BitIterator::without_leading_one(P::ATE_LOOP_COUNT)
}

/// The line functions of the Miller loop for a fixed G2 point: one per doubling,
/// one per addition, and two closing lines through Frobenius images of Q.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters")
)]
pub struct G2Prepared<P: BnParameters> {
    pub ell_coeffs: Vec<EllCoeff<Fp2<P::Fp2Params>>>,
    pub infinity: bool,
}

/// A point on the twist in homogeneous projective coordinates, `(x, y) = (X/Z, Y/Z)`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Copy(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters")
)]
struct G2HomProjective<P: BnParameters> {
    x: Fp2<P::Fp2Params>,
    y: Fp2<P::Fp2Params>,
    z: Fp2<P::Fp2Params>,
}

impl<P: BnParameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self::from(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: BnParameters> ToBytes for G2Prepared<P> {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        for coeff in &self.ell_coeffs {
            coeff.0.write(&mut writer)?;
            coeff.1.write(&mut writer)?;
            coeff.2.write(&mut writer)?;
        }
        self.infinity.write(writer)
    }
}

impl<P: BnParameters> From<G2Affine<P>> for G2Prepared<P> {
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

        for bit in ate_loop_bits::<P>() {
            ell_coeffs.push(doubling_step::<P>(&mut r, &P::TWO_INV));

            if bit {
                ell_coeffs.push(addition_step::<P>(&mut r, &q));
            }
        }

        let q1 = mul_by_char::<P>(q);
        let mut q2 = mul_by_char::<P>(q1);

        if P::X_IS_NEGATIVE {
            r.y = -r.y;
        }

        q2.y = -q2.y;

        ell_coeffs.push(addition_step::<P>(&mut r, &q1));
        ell_coeffs.push(addition_step::<P>(&mut r, &q2));

        Self {
            ell_coeffs,
            infinity: false,
        }
    }
}

impl<P: BnParameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}

/// The untwist-Frobenius-twist endomorphism `(x, y) -> (x^p * xi^((p-1)/3), y^p * xi^((p-1)/2))`.
pub(crate) fn mul_by_char<P: BnParameters>(r: G2Affine<P>) -> G2Affine<P> {
    let mut s = r;
    s.x.frobenius_map(1);
    s.x *= &P::TWIST_MUL_BY_Q_X;
    s.y.frobenius_map(1);
    s.y *= &P::TWIST_MUL_BY_Q_Y;
    s
}

fn mul_by_twist<P: BnParameters>(fe: &Fp2<P::Fp2Params>) -> Fp2<P::Fp2Params> {
    <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue(fe)
}

fn doubling_step<P: BnParameters>(
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

fn addition_step<P: BnParameters>(
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
