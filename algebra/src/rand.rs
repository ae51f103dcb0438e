use rand::{
    distributions::{Distribution, Standard},
    CryptoRng, Error, Rng, RngCore, SeedableRng,
};
use rand_chacha::ChaCha20Rng;

pub trait UniformRand: Sized {
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<T> UniformRand for T
where
    Standard: Distribution<T>,
{
    #[inline]
    fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(Standard)
    }
}

/// ChaCha20 keystream generator for sampling field and group elements.
///
/// There is no process wide instance: every caller (or worker thread) owns its own
/// generator, seeded either explicitly or from the operating system.
#[derive(Clone, Debug)]
pub struct FieldRng(ChaCha20Rng);

impl FieldRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        FieldRng(ChaCha20Rng::from_seed(seed))
    }

    pub fn seed_from_u64(state: u64) -> Self {
        FieldRng(ChaCha20Rng::seed_from_u64(state))
    }

    pub fn from_entropy() -> Self {
        FieldRng(ChaCha20Rng::from_entropy())
    }
}

impl RngCore for FieldRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for FieldRng {}

#[cfg(test)]
mod test {
    use super::FieldRng;
    use rand::RngCore;

    #[test]
    fn test_field_rng_is_deterministic_per_seed() {
        let mut a = FieldRng::from_seed([7u8; 32]);
        let mut b = FieldRng::from_seed([7u8; 32]);
        let mut c = FieldRng::seed_from_u64(7);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        let zs: Vec<u64> = (0..8).map(|_| c.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }
}

#[cfg(all(test, feature = "bn254", feature = "bls12_381"))]
mod sampling_test {
    use super::{FieldRng, UniformRand};
    use crate::{
        curves::{bls12_381::G2Projective, bn254::G1Projective, AffineCurve, ProjectiveCurve},
        fields::{
            bn254::{Fq, Fr},
            FpParameters, PrimeField,
        },
    };

    #[test]
    fn test_field_rng_samples_reduced_elements() {
        let modulus = <Fq as PrimeField>::Params::MODULUS;
        let mut a = FieldRng::seed_from_u64(1231275789u64);
        let mut b = FieldRng::seed_from_u64(1231275789u64);
        for _ in 0..16 {
            let x = Fq::rand(&mut a);
            assert_eq!(x, Fq::rand(&mut b));
            assert!(x.into_repr() < modulus);
        }

        let mut c = FieldRng::seed_from_u64(1231275790u64);
        assert_ne!(Fr::rand(&mut a), Fr::rand(&mut c));
    }

    #[test]
    fn test_field_rng_samples_subgroup_points() {
        let mut a = FieldRng::from_seed([42u8; 32]);
        let mut b = FieldRng::from_seed([42u8; 32]);

        let p = G1Projective::rand(&mut a);
        assert_eq!(p, G1Projective::rand(&mut b));
        assert!(p.into_affine().is_in_correct_subgroup_assuming_on_curve());

        let q = G2Projective::rand(&mut a);
        assert_eq!(q, G2Projective::rand(&mut b));
        let q = q.into_affine();
        assert!(q.is_on_curve());
        assert!(q.is_in_correct_subgroup_assuming_on_curve());
    }
}
