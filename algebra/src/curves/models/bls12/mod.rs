//! The BLS12 family and its optimal Ate pairing.
//!
//! G2 lives on a sextic twist over Fp2 and is prepared into line coefficients
//! ahead of the Miller loop, which walks the bits of `|x|` only. The final
//! exponentiation splits into the Frobenius-based easy part and a hard part
//! built from five exponentiations by `x`.

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

/// Parameters of a BLS12 curve `E: y^2 = x^3 + b` over Fp.
///
/// The curve is generated by `x` via `r = x^4 - x^2 + 1` and
/// `p = (x - 1)^2 r / 3 + x`. The embedding field is the tower
///
/// ```text
/// F12 = F6[w]/(w^2 - v),
/// F6 = F2[v]/(v^3 - xi),
/// F2 = Fp[u]/(u^2 - beta),
/// ```
///
/// and G2 is the order `r` subgroup of the twist `y^2 = x^3 + b xi` (M-type) or
/// `y^2 = x^3 + b/xi` (D-type) over F2.
pub trait Bls12Parameters: 'static {
    /// `|x|`, which is also the Miller loop count.
    const X: &'static [u64];
    const X_IS_NEGATIVE: bool;
    const TWIST_TYPE: TwistType;
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
pub struct Bls12<P: Bls12Parameters>(PhantomData<fn() -> P>);

impl<P: Bls12Parameters> Bls12<P> {
    /// `f^x` for `f` in the cyclotomic subgroup, with the sign of `x`.
    fn exp_by_x(f: &Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        let f_x = f.cyclotomic_exp(P::X);
        if P::X_IS_NEGATIVE {
            f_x.unitary_inverse()
        } else {
            f_x
        }
    }

    /// Raises `m` from the cyclotomic subgroup to `3(p^4 - p^2 + 1)/r`.
    ///
    /// Hayashida, Hayasaka and Teruya, "Efficient final exponentiation via
    /// cyclotomic structure for pairings over families of elliptic curves"
    /// (ePrint 2020/875), Table 1; see also ePrint 2016/130. Exponents in the
    /// comments are those of `m`.
    fn hard_part(m: &Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        let m_inv = m.unitary_inverse();
        let m_x = Self::exp_by_x(m);

        // x - 2
        let a = m.cyclotomic_square().unitary_inverse() * &m_x;
        // 2x
        let m_2x = m_x.cyclotomic_square();
        // x^2 - 2x
        let b = Self::exp_by_x(&a);
        // x^3 - 2x^2
        let c = Self::exp_by_x(&b);
        // x^4 - 2x^3 + 2x
        let d = Self::exp_by_x(&c) * &m_2x;
        // x^5 - 2x^4 + 2x^2 - x + 3
        let e = Self::exp_by_x(&d) * &a.unitary_inverse() * m;

        // (x^2 - 2x + 1) p^3
        let mut t3 = b * m;
        t3.frobenius_map(3);
        // (x^3 - 2x^2 + x) p^2
        let mut t2 = m_x * &c;
        t2.frobenius_map(2);
        // (x^4 - 2x^3 + 2x - 1) p
        let mut t1 = d * &m_inv;
        t1.frobenius_map(1);

        t3 * &t2 * &t1 * &e
    }
}

impl<P: Bls12Parameters> PairingEngine for Bls12<P> {
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
        let timer = start_timer!(|| "BLS12 Miller loop");

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

        for bit in g2::x_bits::<P>() {
            f.square_in_place();
            mul_by_next_lines(&mut f);
            if bit {
                mul_by_next_lines(&mut f);
            }
        }

        if P::X_IS_NEGATIVE {
            f.conjugate();
        }

        end_timer!(timer);
        f
    }

    /// Returns the cube of `f^((p^12 - 1)/r)`, which is again a non-degenerate
    /// bilinear pairing as `3` is coprime to `r`.
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk> {
        let timer = start_timer!(|| "BLS12 final exponentiation");
        let result = f.to_cyclotomic_subgroup().map(|m| Self::hard_part(&m));
        end_timer!(timer);
        result
    }
}
