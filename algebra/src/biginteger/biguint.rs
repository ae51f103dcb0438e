//! Arbitrary precision helpers on `BigUint`: modular exponentiation and
//! inversion, primality testing, signed digit decompositions and fixed width
//! byte conversions. All functions are pure.

use crate::error::AlgebraError;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// `base^exp mod modulus`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// Inverse of `a` modulo `modulus` via the extended Euclidean algorithm,
/// or `None` if `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let (mut old_r, mut r) = (BigInt::from_biguint(Sign::Plus, a % modulus), m.clone());
    let (mut old_t, mut t) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let (q, new_r) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, new_r);
        let new_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, new_t);
    }

    if !old_r.is_one() {
        return None;
    }
    if old_t.is_negative() {
        old_t += &m;
    }
    old_t.to_biguint()
}

// First twelve primes; as Miller-Rabin bases they are deterministic below 3.3 * 10^24.
const SMALL_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin test with the first twelve primes as bases.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    for p in SMALL_PRIMES.iter() {
        let p = BigUint::from(*p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for a in SMALL_PRIMES.iter() {
        let mut x = BigUint::from(*a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Non-adjacent form of `n`, least significant digit first.
pub fn naf(n: &BigUint) -> Vec<i8> {
    let mut num = n.clone();
    let mut res = vec![];
    while !num.is_zero() {
        let z = if num.is_odd() {
            let low = (&num % 4u32).to_u8().unwrap_or(0);
            let z = 2 - low as i8;
            if z >= 0 {
                num -= z as u32;
            } else {
                num += 1u32;
            }
            z
        } else {
            0
        };
        res.push(z);
        num >>= 1;
    }
    res
}

/// Binary decomposition of `n`, least significant bit first, without trailing zeros.
pub fn bits_le(n: &BigUint) -> Vec<bool> {
    (0..n.bits()).map(|i| n.bit(i)).collect()
}

/// `n` as exactly `width` little endian bytes.
pub fn to_fixed_bytes_le(n: &BigUint, width: usize) -> Result<Vec<u8>, AlgebraError> {
    let mut bytes = n.to_bytes_le();
    if n.is_zero() {
        bytes.clear();
    }
    if bytes.len() > width {
        return Err(AlgebraError::InvalidEncoding(format!(
            "integer needs {} bytes, only {} available",
            bytes.len(),
            width
        )));
    }
    bytes.resize(width, 0);
    Ok(bytes)
}

/// `n` as exactly `width` big endian bytes.
pub fn to_fixed_bytes_be(n: &BigUint, width: usize) -> Result<Vec<u8>, AlgebraError> {
    let mut bytes = to_fixed_bytes_le(n, width)?;
    bytes.reverse();
    Ok(bytes)
}

/// Little endian 64 bit limbs, as returned by `Field::characteristic`.
pub fn from_limbs(limbs: &[u64]) -> BigUint {
    let digits = limbs
        .iter()
        .flat_map(|limb| vec![*limb as u32, (*limb >> 32) as u32])
        .collect();
    BigUint::new(digits)
}

pub fn from_bytes_le(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

pub fn from_bytes_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_mod_inverse() {
        let p = BigUint::parse_bytes(
            b"21888242871839275222246405745257275088696311157297823662689037894645226208583",
            10,
        )
        .unwrap();
        let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
        for _ in 0..20 {
            let a = BigUint::from(rng.gen::<u64>()) * BigUint::from(rng.gen::<u64>()) + 1u32;
            let inv = mod_inverse(&a, &p).unwrap();
            assert!(((a * inv) % &p).is_one());
        }
        assert!(mod_inverse(&BigUint::zero(), &p).is_none());
        assert!(mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32)).is_none());
        assert_eq!(
            mod_inverse(&BigUint::from(3u32), &BigUint::from(7u32)),
            Some(BigUint::from(5u32))
        );
    }

    #[test]
    fn test_mod_pow_fermat() {
        let p = BigUint::from(1_000_000_007u64);
        let a = BigUint::from(123_456_789u64);
        assert!(mod_pow(&a, &(&p - 1u32), &p).is_one());
    }

    #[test]
    fn test_is_probable_prime() {
        let primes = [2u64, 3, 5, 97, 7919, 1_000_000_007, 2_305_843_009_213_693_951];
        for p in primes.iter() {
            assert!(is_probable_prime(&BigUint::from(*p)), "{} is prime", p);
        }
        // Carmichael numbers and small composites
        let composites = [0u64, 1, 4, 561, 1105, 1729, 2465, 1_000_000_007 * 3];
        for c in composites.iter() {
            assert!(!is_probable_prime(&BigUint::from(*c)), "{} is composite", c);
        }
        let r = BigUint::parse_bytes(
            b"73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
            16,
        )
        .unwrap();
        assert!(is_probable_prime(&r));
        assert!(!is_probable_prime(&(&r * &r)));
    }

    #[test]
    fn test_naf() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
        for _ in 0..100 {
            let n = BigUint::from(rng.gen::<u64>()) * BigUint::from(rng.gen::<u64>());
            let digits = naf(&n);
            for pair in digits.windows(2) {
                assert!(pair[0] == 0 || pair[1] == 0);
            }
            let mut acc = BigInt::zero();
            for d in digits.iter().rev() {
                acc = acc * 2 + BigInt::from(*d);
            }
            assert_eq!(acc, BigInt::from_biguint(Sign::Plus, n));
        }
        assert_eq!(naf(&BigUint::from(7u32)), vec![-1, 0, 0, 1]);
    }

    #[test]
    fn test_from_limbs() {
        let n = from_limbs(&[0xffff_ffff_0000_0001, 0x2]);
        assert_eq!(n, (BigUint::from(2u32) << 64) + BigUint::from(0xffff_ffff_0000_0001u64));
        assert!(from_limbs(&[0, 0]).is_zero());
    }

    #[test]
    fn test_bits_and_fixed_bytes() {
        let n = BigUint::from(0x0102u32);
        assert_eq!(
            bits_le(&n),
            vec![false, true, false, false, false, false, false, false, true]
        );
        assert_eq!(to_fixed_bytes_le(&n, 4).unwrap(), vec![2, 1, 0, 0]);
        assert_eq!(to_fixed_bytes_be(&n, 4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(to_fixed_bytes_le(&BigUint::zero(), 2).unwrap(), vec![0, 0]);
        assert!(to_fixed_bytes_be(&n, 1).is_err());
        assert_eq!(from_bytes_be(&[0, 0, 1, 2]), n);
        assert_eq!(from_bytes_le(&[2, 1, 0, 0]), n);
    }
}
