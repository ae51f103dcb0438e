//! Model for BN curves and their optimal Ate pairing.
//!
//! As for BLS12 curves, G2 is represented on a sextic twist over Fp2, the Miller loop
//! consumes precomputed line coefficients and the final exponentiation uses the
//! Frobenius operator together with cyclotomic squarings. The loop runs over the bits
//! of `6u + 2` and is closed by two additions of Frobenius images of Q.

use crate::{
    curves::{
        models::{mul_by_line, ModelParameters, SWModelParameters},
        PairingEngine,
    },
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp2::Fp2Parameters,
        fp6_3over2::Fp6Parameters,
        Field, Fp2, PrimeField, SquareRootField,
    },
};

use std::marker::PhantomData;

pub use crate::curves::models::TwistType;

/// Parameters of a BN curve `E: y^2 = x^3 + b mod p` as needed by the optimal Ate pairing.
///
/// The embedding field is the tower
///
/// ```text
/// F12 = F6[w]/(w^2 - v),
/// F6 = F2[v]/(v^3 - xi),
/// F2 = Fp[u]/(u^2 - beta),
/// ```
///
/// and G2 is the order `r` subgroup of the D-type twist `y^2 = x^3 + b/xi` over F2.
pub trait BnParameters: 'static {
    /// The BN parameter `u`, with `p = 36u^4 + 36u^3 + 24u^2 + 6u + 1`.
    const X: &'static [u64];
    /// Sign of `u`.
    const X_IS_NEGATIVE: bool;
    /// Loop count of the optimal Ate pairing, `6u + 2`.
    const ATE_LOOP_COUNT: &'static [u64];
    const TWIST_TYPE: TwistType;
    /// `xi^((p - 1)/3)`, scaling the x-coordinate under the twisted Frobenius.
    const TWIST_MUL_BY_Q_X: Fp2<Self::Fp2Params>;
    /// `xi^((p - 1)/2)`, scaling the y-coordinate under the twisted Frobenius.
    const TWIST_MUL_BY_Q_Y: Fp2<Self::Fp2Params>;
    /// `1/2` in Fp, used by the doubling steps of the G2 preparation.
    const TWO_INV: Self::Fp;
    type Fp: PrimeField + SquareRootField + Into<<Self::Fp as PrimeField>::BigInt>;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    type Fp12Params: Fp12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bn<P: BnParameters>(PhantomData<fn() -> P>);

type Gt<P> = Fp12<<P as BnParameters>::Fp12Params>;

impl<P: BnParameters> Bn<P> {
    /// `f^u` for `f` in the cyclotomic subgroup, with the sign of `u`.
    fn exp_by_u(f: &Gt<P>) -> Gt<P> {
        let f_u = f.cyclotomic_exp(P::X);
        if P::X_IS_NEGATIVE {
            f_u.unitary_inverse()
        } else {
            f_u
        }
    }

    fn frobenius(f: &Gt<P>, power: usize) -> Gt<P> {
        let mut t = *f;
        t.frobenius_map(power);
        t
    }

    /// Raises `m` from the cyclotomic subgroup to `(p^4 - p^2 + 1)/r`.
    ///
    /// Scott, Benger, Charlemagne, Dominguez Perez and Kachisa, "On the final
    /// exponentiation for calculating pairings on ordinary elliptic curves",
    /// Section 4: the exponent is written in base `p` with coefficients
    /// polynomial in `u`, and the powers
    ///
    /// ```text
    /// y0 = m^(p + p^2 + p^3),  y1 = m^-1,  y2 = m^(u^2 p^2),
    /// y3 = m^(-u p),  y4 = m^(-u - u^2 p),  y5 = m^(-u^2),
    /// y6 = m^(-u^3 - u^3 p)
    /// ```
    ///
    /// are combined as `y0 y1^2 y2^6 y3^12 y4^18 y5^30 y6^36` by a vectorial
    /// addition chain.
    fn hard_part(m: &Gt<P>) -> Gt<P> {
        let m_u = Self::exp_by_u(m);
        let m_u2 = Self::exp_by_u(&m_u);
        let m_u3 = Self::exp_by_u(&m_u2);

        let y0 = Self::frobenius(m, 1) * &Self::frobenius(m, 2) * &Self::frobenius(m, 3);
        let y1 = m.unitary_inverse();
        let y2 = Self::frobenius(&m_u2, 2);
        let y3 = Self::frobenius(&m_u, 1).unitary_inverse();
        let y4 = (m_u * &Self::frobenius(&m_u2, 1)).unitary_inverse();
        let y5 = m_u2.unitary_inverse();
        let y6 = (m_u3 * &Self::frobenius(&m_u3, 1)).unitary_inverse();

        let mut t0 = y6.cyclotomic_square() * &y4 * &y5;
        let mut t1 = y3 * &y5 * &t0;
        t0 *= &y2;
        t1 = t1.cyclotomic_square() * &t0;
        t1 = t1.cyclotomic_square();
        t0 = (t1 * &y1).cyclotomic_square();
        t1 *= &y0;
        t0 * &t1
    }
}

impl<P: BnParameters> PairingEngine for Bn<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp12<P::Fp12Params>;

    const EMBEDDING_DEGREE: u32 = 12;

    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        let timer = start_timer!(|| "BN Miller loop");

        // Pairs with an identity component contribute one.
        let mut pairs = i
            .into_iter()
            .filter(|(p, q)| !p.is_zero() && !q.is_zero())
            .map(|(p, q)| (&p.0, q.ell_coeffs.iter()))
            .collect::<Vec<_>>();

        let mut f = Self::Fqk::one();
        let mut mul_by_next_lines = |f: &mut Self::Fqk| {
            for (p, lines) in pairs.iter_mut() {
                if let Some(line) = lines.next() {
                    mul_by_line(f, P::TWIST_TYPE, line, &p.x, &p.y);
                }
            }
        };

        for bit in g2::ate_loop_bits::<P>() {
            f.square_in_place();
            mul_by_next_lines(&mut f);
            if bit {
                mul_by_next_lines(&mut f);
            }
        }

        if P::X_IS_NEGATIVE {
            f.conjugate();
        }

        // Lines through pi(Q) and -pi^2(Q).
        mul_by_next_lines(&mut f);
        mul_by_next_lines(&mut f);

        end_timer!(timer);
        f
    }

    /// Returns `f^((p^12 - 1)/r)`.
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk> {
        let timer = start_timer!(|| "BN final exponentiation");
        let result = f.to_cyclotomic_subgroup().map(|m| Self::hard_part(&m));
        end_timer!(timer);
        result
    }
}
