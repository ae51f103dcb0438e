use crate::{
    error::AlgebraError, msm::window_size, AffineCurve, BigInteger, Field, FpParameters,
    PrimeField, ProjectiveCurve,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct VariableBaseMSM;

impl VariableBaseMSM {
    /// Computes `sum_i scalars[i] * bases[i]` with Pippenger's bucket method.
    pub fn multi_scalar_mul<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInt],
    ) -> Result<G::Projective, AlgebraError> {
        if bases.len() != scalars.len() {
            return Err(AlgebraError::LengthMismatch {
                left: bases.len(),
                right: scalars.len(),
            });
        }

        let c = window_size(scalars.len());
        debug!("multiexp of {} points with window size {}", scalars.len(), c);

        let timer = start_timer!(|| format!("Multiexp of size {}", scalars.len()));
        let result = Self::msm_inner(bases, scalars, c);
        end_timer!(timer);

        Ok(result)
    }

    /// As `multi_scalar_mul`, with an explicit window width `c`.
    pub fn multi_scalar_mul_c<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInt],
        c: usize,
    ) -> Result<G::Projective, AlgebraError> {
        if bases.len() != scalars.len() {
            return Err(AlgebraError::LengthMismatch {
                left: bases.len(),
                right: scalars.len(),
            });
        }
        assert!(c > 0 && c < 64, "window size out of range");

        Ok(Self::msm_inner(bases, scalars, c))
    }

    fn msm_inner<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInt],
        c: usize,
    ) -> G::Projective {
        let num_bits = <G::ScalarField as PrimeField>::Params::MODULUS_BITS as usize;
        let fr_one = G::ScalarField::one().into_repr();

        let zero = G::Projective::zero();
        let window_starts: Vec<_> = (0..num_bits).step_by(c).collect();

        // Windows of `c` bits each, summed independently.
        let window_sums: Vec<_> = cfg_into_iter!(window_starts)
            .map(|w_start| {
                let mut res = zero;
                // Bucket `i` collects the bases whose current digit is `i`, the
                // zero bucket stays empty.
                let mut table = vec![zero; 1 << c];
                scalars
                    .iter()
                    .zip(bases)
                    .filter(|(s, b)| !s.is_zero() && !b.is_zero())
                    .for_each(|(&scalar, base)| {
                        if scalar == fr_one {
                            // Only the lowest window sees a unit scalar.
                            if w_start == 0 {
                                res.add_assign_mixed(base);
                            }
                        } else {
                            let mut scalar = scalar;

                            scalar.divn(w_start as u32);
                            let digit = scalar.as_ref()[0] % (1 << c);

                            if digit != 0 {
                                table[digit as usize].add_assign_mixed(base);
                            }
                        }
                    });

                res += &Self::reduce_table(table);
                res
            })
            .collect();

        // Horner over the windows, most significant first.
        window_sums
            .iter()
            .rev()
            .fold(zero, |mut total, sum_i| {
                for _ in 0..c {
                    total.double_in_place();
                }
                total += sum_i;
                total
            })
    }

    /// Reduces a bucket table `t` of size `2^k` to `sum_i i * t[i]` by
    /// recursive halving: the upper half shares the top bit, so
    ///
    /// ```text
    /// sum_i i * t[i] = sum_{j < 2^(k-1)} j * (t[j] + t[2^(k-1) + j])
    ///                  + 2^(k-1) * sum_{j < 2^(k-1)} t[2^(k-1) + j].
    /// ```
    pub fn reduce_table<G: ProjectiveCurve>(mut table: Vec<G>) -> G {
        debug_assert!(table.len().is_power_of_two());

        let mut acc = G::zero();
        let mut k = table.len().trailing_zeros();

        while k > 1 {
            let half = table.len() >> 1;
            let (lower, upper) = table.split_at_mut(half);

            let mut upper_sum = G::zero();
            for (l, u) in lower.iter_mut().zip(upper.iter()) {
                upper_sum += u;
                *l += u;
            }
            for _ in 0..(k - 1) {
                upper_sum.double_in_place();
            }
            acc += &upper_sum;

            table.truncate(half);
            k -= 1;
        }

        if k == 1 {
            acc += &table[1];
        }
        acc
    }
}

#[cfg(all(test, feature = "bn254"))]
mod test {
    use super::*;
    use crate::{
        curves::bn254::{G1Affine, G1Projective},
        fields::bn254::Fr,
        UniformRand,
    };
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn naive_var_base_msm<G: AffineCurve>(
        bases: &[G],
        scalars: &[<G::ScalarField as PrimeField>::BigInt],
    ) -> G::Projective {
        let mut acc = G::Projective::zero();

        for (base, scalar) in bases.iter().zip(scalars.iter()) {
            acc += &base.mul(*scalar);
        }
        acc
    }

    fn random_bases<R: Rng>(n: usize, rng: &mut R) -> Vec<G1Affine> {
        let mut v = (0..n)
            .map(|_| G1Projective::rand(rng))
            .collect::<Vec<_>>();
        G1Projective::batch_normalization(&mut v);
        v.into_iter().map(|e| e.into_affine()).collect()
    }

    #[test]
    fn test_with_bn254() {
        const SAMPLES: usize = 1 << 8;

        let rng = &mut XorShiftRng::seed_from_u64(234872845u64);

        let v = (0..SAMPLES).map(|_| Fr::rand(rng).into_repr()).collect::<Vec<_>>();
        let g = random_bases(SAMPLES, rng);

        let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
        let fast = VariableBaseMSM::multi_scalar_mul(g.as_slice(), v.as_slice()).unwrap();

        assert_eq!(naive.into_affine(), fast.into_affine());
    }

    #[test]
    fn test_with_explicit_window_sizes() {
        const SAMPLES: usize = 1 << 5;

        let rng = &mut XorShiftRng::seed_from_u64(234872845u64);

        let v = (0..SAMPLES).map(|_| Fr::rand(rng).into_repr()).collect::<Vec<_>>();
        let g = random_bases(SAMPLES, rng);
        let naive = naive_var_base_msm(g.as_slice(), v.as_slice());

        for c in 1..=9 {
            let fast = VariableBaseMSM::multi_scalar_mul_c(g.as_slice(), v.as_slice(), c).unwrap();
            assert_eq!(naive, fast, "window size {}", c);
        }
    }

    #[test]
    fn test_with_unit_and_zero_scalars() {
        let rng = &mut XorShiftRng::seed_from_u64(234872845u64);

        let mut g = random_bases(6, rng);
        g[5] = G1Affine::zero();
        let v = vec![
            Fr::one().into_repr(),
            Fr::zero().into_repr(),
            Fr::rand(rng).into_repr(),
            Fr::one().into_repr(),
            (-Fr::one()).into_repr(),
            Fr::rand(rng).into_repr(),
        ];

        let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
        let fast = VariableBaseMSM::multi_scalar_mul(g.as_slice(), v.as_slice()).unwrap();
        assert_eq!(naive, fast);
    }

    #[test]
    fn test_empty_and_mismatched_inputs() {
        let rng = &mut XorShiftRng::seed_from_u64(234872845u64);

        let empty = VariableBaseMSM::multi_scalar_mul::<G1Affine>(&[], &[]).unwrap();
        assert!(empty.is_zero());

        let g = random_bases(3, rng);
        let v = vec![Fr::rand(rng).into_repr(); 2];
        match VariableBaseMSM::multi_scalar_mul(g.as_slice(), v.as_slice()) {
            Err(AlgebraError::LengthMismatch { left: 3, right: 2 }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_reduce_table() {
        let rng = &mut XorShiftRng::seed_from_u64(234872845u64);

        for k in 0..6 {
            let table = (0..(1usize << k))
                .map(|_| G1Projective::rand(rng))
                .collect::<Vec<_>>();
            let expected = table
                .iter()
                .enumerate()
                .fold(G1Projective::zero(), |acc, (i, t)| {
                    acc + &t.mul(Fr::from(i as u64))
                });
            assert_eq!(VariableBaseMSM::reduce_table(table), expected);
        }
    }
}
