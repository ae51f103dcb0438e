use crate::{
    error::AlgebraError,
    fft::DomainCoeff,
    fields::{batch_inversion, Field, FpParameters, PrimeField},
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fmt;

/// Below this size the butterflies of a layer run on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 1 << 10;

/// The multiplicative subgroup of order `2^k` of a prime field, together with the
/// precomputed constants used by its FFTs.
#[derive(Copy, Clone, Hash, Eq, PartialEq)]
pub struct EvaluationDomain<F: PrimeField> {
    /// The size of the domain.
    pub size: u64,
    /// `log_2(self.size)`.
    pub log_size_of_group: u32,
    /// Size of the domain as a field element.
    pub size_as_field_element: F,
    /// Inverse of the size in the field.
    pub size_inv: F,
    /// A generator of the subgroup.
    pub group_gen: F,
    /// Inverse of the generator of the subgroup.
    pub group_gen_inv: F,
    /// Multiplicative generator of the field, the offset of the coset domain.
    pub generator: F,
    /// Inverse of the multiplicative generator of the field.
    pub generator_inv: F,
}

impl<F: PrimeField> fmt::Debug for EvaluationDomain<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Radix-2 multiplicative subgroup of size {}", self.size)
    }
}

impl<F: PrimeField> EvaluationDomain<F> {
    /// Constructs the smallest domain holding `num_coeffs` coefficients, or `None`
    /// if it exceeds the two-adicity of the field.
    pub fn new(num_coeffs: usize) -> Option<Self> {
        let size = num_coeffs.checked_next_power_of_two()? as u64;
        let log_size_of_group = size.trailing_zeros();

        if log_size_of_group > F::Params::TWO_ADICITY {
            return None;
        }

        // Compute the generator for the multiplicative subgroup.
        // It should be 2^(log_size_of_group) root of unity.
        let mut group_gen = F::root_of_unity();
        for _ in log_size_of_group..F::Params::TWO_ADICITY {
            group_gen.square_in_place();
        }

        let size_as_field_element = F::from(size);
        let size_inv = size_as_field_element.inverse()?;
        let group_gen_inv = group_gen.inverse()?;
        let generator = F::multiplicative_generator();
        let generator_inv = generator.inverse()?;

        Some(EvaluationDomain {
            size,
            log_size_of_group,
            size_as_field_element,
            size_inv,
            group_gen,
            group_gen_inv,
            generator,
            generator_inv,
        })
    }

    /// Returns the size of the domain.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    fn check_length<T>(&self, evals: &[T]) -> Result<(), AlgebraError> {
        if evals.len() != self.size() {
            return Err(AlgebraError::InvalidDomainSize(evals.len()));
        }
        Ok(())
    }

    /// Evaluates the polynomial with coefficients `coeffs` over the domain, in place.
    pub fn fft_in_place<T: DomainCoeff<F>>(&self, coeffs: &mut [T]) -> Result<(), AlgebraError> {
        self.check_length(coeffs)?;
        let timer = start_timer!(|| format!("FFT of size {}", self.size));
        radix2_fft(coeffs, self.group_gen, self.log_size_of_group);
        end_timer!(timer);
        Ok(())
    }

    /// Interpolates the evaluations `evals` over the domain, in place.
    pub fn ifft_in_place<T: DomainCoeff<F>>(&self, evals: &mut [T]) -> Result<(), AlgebraError> {
        self.check_length(evals)?;
        let timer = start_timer!(|| format!("IFFT of size {}", self.size));
        radix2_fft(evals, self.group_gen_inv, self.log_size_of_group);
        let size_inv = self.size_inv;
        cfg_iter_mut!(evals).for_each(|v| *v *= size_inv);
        end_timer!(timer);
        Ok(())
    }

    /// Evaluates over the coset `g * H` of the domain `H`, in place.
    pub fn coset_fft_in_place<T: DomainCoeff<F>>(
        &self,
        coeffs: &mut [T],
    ) -> Result<(), AlgebraError> {
        self.check_length(coeffs)?;
        distribute_powers(coeffs, self.generator);
        self.fft_in_place(coeffs)
    }

    /// Interpolates evaluations over the coset `g * H`, in place.
    pub fn coset_ifft_in_place<T: DomainCoeff<F>>(
        &self,
        evals: &mut [T],
    ) -> Result<(), AlgebraError> {
        self.ifft_in_place(evals)?;
        distribute_powers(evals, self.generator_inv);
        Ok(())
    }

    /// Evaluates the vanishing polynomial `X^n - 1` of the domain at `tau`.
    pub fn evaluate_vanishing_polynomial(&self, tau: F) -> F {
        tau.pow(&[self.size]) - &F::one()
    }

    /// Evaluates all Lagrange basis polynomials of the domain at `tau`.
    pub fn evaluate_all_lagrange_coefficients(&self, tau: F) -> Vec<F> {
        let size = self.size();
        let z_h_at_tau = self.evaluate_vanishing_polynomial(tau);

        if z_h_at_tau.is_zero() {
            // tau is an element of the domain, the basis is an indicator vector.
            let mut u = vec![F::zero(); size];
            let mut omega_i = F::one();
            for x in u.iter_mut() {
                if omega_i == tau {
                    *x = F::one();
                    break;
                }
                omega_i *= &self.group_gen;
            }
            return u;
        }

        // L_i(tau) = (tau^n - 1)/n * omega^i/(tau - omega^i)
        let l = z_h_at_tau * &self.size_inv;
        let mut u = Vec::with_capacity(size);
        let mut ls = Vec::with_capacity(size);
        let mut r = F::one();
        for _ in 0..size {
            u.push(tau - &r);
            ls.push(l * &r);
            r *= &self.group_gen;
        }

        batch_inversion(u.as_mut_slice());
        u.iter_mut().zip(ls).for_each(|(tau_minus_r, l)| *tau_minus_r *= &l);
        u
    }

    /// Returns the elements `1, g, g^2, ...` of the domain.
    pub fn elements(&self) -> Elements<F> {
        Elements {
            cur_elem: F::one(),
            cur_pow: 0,
            domain: *self,
        }
    }
}

/// Iterator over the elements of an evaluation domain.
pub struct Elements<F: PrimeField> {
    cur_elem: F,
    cur_pow: u64,
    domain: EvaluationDomain<F>,
}

impl<F: PrimeField> Iterator for Elements<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.cur_pow == self.domain.size {
            None
        } else {
            let cur_elem = self.cur_elem;
            self.cur_elem *= &self.domain.group_gen;
            self.cur_pow += 1;
            Some(cur_elem)
        }
    }
}

/// Multiplies the `i`-th entry by `g^i`.
fn distribute_powers<F: PrimeField, T: DomainCoeff<F>>(coeffs: &mut [T], g: F) {
    let mut pow = F::one();
    for c in coeffs.iter_mut() {
        *c *= pow;
        pow *= &g;
    }
}

#[inline]
fn bitreverse(n: usize, l: u32) -> usize {
    if l == 0 {
        0
    } else {
        n.reverse_bits() >> (usize::BITS - l)
    }
}

/// Iterative Cooley-Tukey transform: bit-reversal permutation followed by
/// `log_n` layers of butterflies with twiddles `omega^(n/2m)`.
fn radix2_fft<F: PrimeField, T: DomainCoeff<F>>(a: &mut [T], omega: F, log_n: u32) {
    let n = a.len();
    assert_eq!(n, 1 << log_n);

    for k in 0..n {
        let rk = bitreverse(k, log_n);
        if k < rk {
            a.swap(rk, k);
        }
    }

    let mut m = 1;
    for _ in 0..log_n {
        let w_m = omega.pow(&[(n / (2 * m)) as u64]);

        let butterflies = |chunk: &mut [T]| {
            let mut w = F::one();
            for j in 0..m {
                let mut t = chunk[j + m];
                t *= w;
                let mut tmp = chunk[j];
                tmp -= t;
                chunk[j + m] = tmp;
                chunk[j] += t;
                w *= &w_m;
            }
        };

        #[cfg(feature = "parallel")]
        {
            if n >= PARALLEL_THRESHOLD {
                cfg_chunks_mut!(a, 2 * m).for_each(butterflies);
            } else {
                a.chunks_mut(2 * m).for_each(butterflies);
            }
        }
        #[cfg(not(feature = "parallel"))]
        cfg_chunks_mut!(a, 2 * m).for_each(butterflies);

        m *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{curves::ProjectiveCurve, UniformRand};
    use rand::SeedableRng;
    use std::ops::MulAssign;
    use rand_xorshift::XorShiftRng;

    fn horner<F: Field>(coeffs: &[F], x: F) -> F {
        coeffs.iter().rev().fold(F::zero(), |acc, c| acc * &x + c)
    }

    fn fft_consistency<F: PrimeField>() {
        let rng = &mut XorShiftRng::seed_from_u64(1231275789u64);

        for log_d in 0..8 {
            let d = 1 << log_d;
            let domain = EvaluationDomain::<F>::new(d).unwrap();
            assert_eq!(domain.size(), d);

            let coeffs = (0..d).map(|_| F::rand(rng)).collect::<Vec<_>>();

            // fft agrees with evaluation at the domain elements.
            let mut evals = coeffs.clone();
            domain.fft_in_place(&mut evals).unwrap();
            for (x, e) in domain.elements().zip(evals.iter()) {
                assert_eq!(horner(&coeffs, x), *e);
            }

            // ifft inverts fft.
            domain.ifft_in_place(&mut evals).unwrap();
            assert_eq!(evals, coeffs);

            // coset fft agrees with evaluation on g * H.
            let mut coset_evals = coeffs.clone();
            domain.coset_fft_in_place(&mut coset_evals).unwrap();
            for (x, e) in domain.elements().zip(coset_evals.iter()) {
                assert_eq!(horner(&coeffs, domain.generator * &x), *e);
            }
            domain.coset_ifft_in_place(&mut coset_evals).unwrap();
            assert_eq!(coset_evals, coeffs);
        }
    }

    fn lagrange_consistency<F: PrimeField>() {
        let rng = &mut XorShiftRng::seed_from_u64(1231275789u64);

        let domain = EvaluationDomain::<F>::new(16).unwrap();
        let coeffs = (0..16).map(|_| F::rand(rng)).collect::<Vec<_>>();
        let mut evals = coeffs.clone();
        domain.fft_in_place(&mut evals).unwrap();

        // Outside the domain.
        let tau = F::rand(rng);
        let lagrange = domain.evaluate_all_lagrange_coefficients(tau);
        let interpolated = lagrange
            .iter()
            .zip(evals.iter())
            .fold(F::zero(), |acc, (l, e)| acc + &(*l * e));
        assert_eq!(interpolated, horner(&coeffs, tau));

        // On the domain.
        let omega_3 = domain.elements().nth(3).unwrap();
        assert!(domain.evaluate_vanishing_polynomial(omega_3).is_zero());
        let lagrange = domain.evaluate_all_lagrange_coefficients(omega_3);
        for (i, l) in lagrange.iter().enumerate() {
            assert_eq!(l.is_one(), i == 3);
            assert_eq!(l.is_zero(), i != 3);
        }
    }

    fn domain_bounds<F: PrimeField>() {
        let max = 1usize << F::Params::TWO_ADICITY;

        let domain = EvaluationDomain::<F>::new(5).unwrap();
        assert_eq!(domain.size(), 8);
        assert_eq!(domain.group_gen.pow(&[8u64]), F::one());
        assert!(!domain.group_gen.pow(&[4u64]).is_one());
        assert_eq!(domain.group_gen * &domain.group_gen_inv, F::one());
        assert_eq!(domain.elements().count(), 8);

        if max < (1 << 40) {
            assert!(EvaluationDomain::<F>::new(max).is_some());
            assert!(EvaluationDomain::<F>::new(max + 1).is_none());
        }
        assert!(EvaluationDomain::<F>::new(usize::MAX).is_none());

        let mut wrong = vec![F::one(); 7];
        match domain.fft_in_place(&mut wrong) {
            Err(AlgebraError::InvalidDomainSize(7)) => {}
            other => panic!("unexpected result {:?}", other),
        }
        assert!(domain.ifft_in_place(&mut wrong).is_err());
        assert!(domain.coset_fft_in_place(&mut wrong).is_err());
        assert!(domain.coset_ifft_in_place(&mut wrong).is_err());
    }

    fn group_fft_consistency<G>()
    where
        G: ProjectiveCurve + MulAssign<<G as ProjectiveCurve>::ScalarField>,
    {
        let rng = &mut XorShiftRng::seed_from_u64(1231275789u64);
        let generator = G::prime_subgroup_generator();

        let domain = EvaluationDomain::<G::ScalarField>::new(8).unwrap();
        let scalars = (0..8)
            .map(|_| G::ScalarField::rand(rng))
            .collect::<Vec<_>>();
        let mut points = scalars
            .iter()
            .map(|s| generator.mul(*s))
            .collect::<Vec<_>>();

        let mut scalar_evals = scalars.clone();
        domain.fft_in_place(&mut scalar_evals).unwrap();
        domain.fft_in_place(&mut points).unwrap();
        for (p, s) in points.iter().zip(scalar_evals.iter()) {
            assert_eq!(*p, generator.mul(*s));
        }

        domain.ifft_in_place(&mut points).unwrap();
        for (p, s) in points.iter().zip(scalars.iter()) {
            assert_eq!(*p, generator.mul(*s));
        }
    }

    #[cfg(feature = "bn254")]
    #[test]
    fn test_fft_bn254() {
        use crate::{curves::bn254::G1Projective, fields::bn254::Fr};
        fft_consistency::<Fr>();
        lagrange_consistency::<Fr>();
        domain_bounds::<Fr>();
        group_fft_consistency::<G1Projective>();
    }

    #[cfg(feature = "bls12_381")]
    #[test]
    fn test_fft_bls12_381() {
        use crate::{curves::bls12_381::G2Projective, fields::bls12_381::Fr};
        fft_consistency::<Fr>();
        lagrange_consistency::<Fr>();
        domain_bounds::<Fr>();
        group_fft_consistency::<G2Projective>();
    }

    #[test]
    fn test_bitreverse() {
        assert_eq!(bitreverse(0, 0), 0);
        assert_eq!(bitreverse(1, 3), 4);
        assert_eq!(bitreverse(6, 3), 3);
        assert_eq!(bitreverse(0b1011, 4), 0b1101);
    }
}
