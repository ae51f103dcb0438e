#![allow(unused)]
use crate::{
    biginteger::BigInteger,
    error::AlgebraError,
    fields::{Field, FieldEncoding, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
    UniformRand,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::cmp::Ordering;

pub(crate) const ITERATIONS: usize = 5;

fn random_negation_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let mut b = -a;
        b += &a;

        assert!(b.is_zero());
    }
}

fn random_addition_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a + &b) + &c; // (a + b) + c
        let t1 = (a + &c) + &b; // (a + c) + b
        let t2 = (b + &c) + &a; // (b + c) + a

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_subtraction_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);

        let t0 = a - &b; // (a - b)
        let mut t1 = b; // (b - a)
        t1 -= &a;

        let mut t2 = t0; // (a - b) + (b - a) = 0
        t2 += &t1;

        assert!(t2.is_zero());
    }
}

fn random_multiplication_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let mut t0 = a; // (a * b) * c
        t0 *= &b;
        t0 *= &c;

        let mut t1 = a; // (a * c) * b
        t1 *= &c;
        t1 *= &b;

        let mut t2 = b; // (b * c) * a
        t2 *= &c;
        t2 *= &a;

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_inversion_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    assert!(F::zero().inverse().is_none());
    assert!(matches!(F::zero().try_inverse(), Err(AlgebraError::DivisionByZero)));

    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let b = a.inverse().unwrap(); // probablistically nonzero
        a *= &b;

        assert_eq!(a, F::one());
    }
}

fn random_doubling_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let mut b = a;
        a += &b;
        b.double_in_place();

        assert_eq!(a, b);
    }
}

fn random_squaring_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let mut b = a;
        a *= &b;
        b.square_in_place();

        assert_eq!(a, b);
    }
}

fn random_expansion_tests<F: Field, R: rand::Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        // Compare (a + b)(c + d) and (a*c + b*c + a*d + b*d)

        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);
        let d = F::rand(rng);

        let mut t0 = a;
        t0 += &b;
        let mut t1 = c;
        t1 += &d;
        t0 *= &t1;

        let mut t2 = a;
        t2 *= &c;
        let mut t3 = b;
        t3 *= &c;
        let mut t4 = a;
        t4 *= &d;
        let mut t5 = b;
        t5 *= &d;

        t2 += &t3;
        t2 += &t4;
        t2 += &t5;

        assert_eq!(t0, t2);
    }

    for _ in 0..ITERATIONS {
        // Compare (a + b)c and (ac + bc)

        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a + &b) * &c;
        let t2 = a * &c + &(b * &c);

        assert_eq!(t0, t2);
    }
}

fn random_field_tests<F: Field>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    random_multiplication_tests::<F, _>(&mut rng);
    random_addition_tests::<F, _>(&mut rng);
    random_subtraction_tests::<F, _>(&mut rng);
    random_negation_tests::<F, _>(&mut rng);
    random_doubling_tests::<F, _>(&mut rng);
    random_squaring_tests::<F, _>(&mut rng);
    random_inversion_tests::<F, _>(&mut rng);
    random_expansion_tests::<F, _>(&mut rng);

    assert!(F::zero().is_zero());
    {
        let z = -F::zero();
        assert!(z.is_zero());
    }

    assert!(F::zero().inverse().is_none());

    // Multiplication by zero
    {
        let a = F::rand(&mut rng) * &F::zero();
        assert!(a.is_zero());
    }

    // Addition by zero
    {
        let mut a = F::rand(&mut rng);
        let copy = a;
        a += &F::zero();
        assert_eq!(a, copy);
    }
}

/// Checks the field axioms on the given pair of elements and on random ones.
pub fn field_test<F: Field>(a: F, b: F) {
    let zero = F::zero();
    assert!(zero == zero);
    assert!(zero.is_zero()); // true
    assert!(!zero.is_one()); // false

    let one = F::one();
    assert!(one == one);
    assert!(!one.is_zero()); // false
    assert!(one.is_one()); // true
    assert_eq!(zero + &one, one);

    let two = one + &one;
    assert!(two == two);
    assert_ne!(zero, two);
    assert_ne!(one, two);

    // a == a
    assert!(a == a);
    // a + 0 = a
    assert_eq!(a + &zero, a);
    // a - 0 = a
    assert_eq!(a - &zero, a);
    // a - a = 0
    assert_eq!(a - &a, zero);
    // 0 - a = -a
    assert_eq!(zero - &a, -a);
    // a.double() = a + a
    assert_eq!(a.double(), a + &a);
    // b.double() = b + b
    assert_eq!(b.double(), b + &b);
    // a + b = b + a
    assert_eq!(a + &b, b + &a);
    // a - b = -(b - a)
    assert_eq!(a - &b, -(b - &a));
    // (a + b) + a = a + (b + a)
    assert_eq!((a + &b) + &a, a + &(b + &a));
    // (a + b).double() = (a + b) + (b + a)
    assert_eq!((a + &b).double(), (a + &b) + &(b + &a));

    // a * 0 = 0
    assert_eq!(a * &zero, zero);
    // a * 1 = a
    assert_eq!(a * &one, a);
    // a * 2 = a.double()
    assert_eq!(a * &two, a.double());
    // a * a^-1 = 1
    assert_eq!(a * &a.inverse().unwrap(), one);
    // a * a = a^2
    assert_eq!(a * &a, a.square());
    // a * a * a = a^3
    assert_eq!(a * &(a * &a), a.pow([0x3, 0x0, 0x0, 0x0]));
    // a * b = b * a
    assert_eq!(a * &b, b * &a);
    // (a * b) * a = a * (b * a)
    assert_eq!((a * &b) * &a, a * &(b * &a));
    // (a + b)^2 = a^2 + 2ab + b^2
    assert_eq!(
        (a + &b).square(),
        a.square() + &((a * &b) + &(a * &b)) + &b.square()
    );
    // (a - b)^2 = (-(b - a))^2
    assert_eq!((a - &b).square(), (-(b - &a)).square());
    // a / b * b = a
    assert_eq!((a / &b) * &b, a);
    // a^5 via big endian bytes
    assert_eq!(a.pow_be_bytes(&[0x00, 0x05]), a.pow([5u64]));

    // Sum and Product
    assert_eq!([a, b, one].iter().sum::<F>(), a + &b + &one);
    assert_eq!([a, b, two].iter().product::<F>(), a * &b * &two);

    random_field_tests::<F>();
}

/// Checks that `sqrt` returns a root, and the root which is not lexicographically largest.
pub fn sqrt_field_test<F: SquareRootField>(elem: F) {
    let square = elem.square();
    let sqrt = square.sqrt().unwrap();
    assert!(sqrt == elem || sqrt == -elem);
    assert!(!sqrt.is_lexicographically_largest());
    if let Some(sqrt) = elem.sqrt() {
        assert_eq!(sqrt.square(), elem);
        assert!(elem.is_square());
    } else {
        assert!(!elem.is_square());
        assert_eq!(elem.legendre(), LegendreSymbol::QuadraticNonResidue);
    }
    assert_eq!(F::zero().sqrt(), Some(F::zero()));
    assert_eq!(F::zero().legendre(), LegendreSymbol::Zero);
    random_sqrt_tests::<F>();
}

fn random_sqrt_tests<F: SquareRootField>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let b = a.square();
        assert_eq!(b.legendre(), LegendreSymbol::QuadraticResidue);

        let b = b.sqrt().unwrap();
        assert!(a == b || a == -b);
    }

    let mut c = F::one();
    for _ in 0..ITERATIONS {
        let mut b = c.square();
        assert_eq!(b.legendre(), LegendreSymbol::QuadraticResidue);

        b.sqrt_in_place().unwrap();

        if b != c {
            b = -b;
        }

        assert_eq!(b, c);

        c += &F::one();
    }
}

/// Checks `frobenius_map(i)` against exponentiation by `characteristic^i`.
pub fn frobenius_test<F: Field, C: AsRef<[u64]>>(characteristic: C, maxpower: usize) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);

        let mut a_0 = a;
        a_0.frobenius_map(0);
        assert_eq!(a, a_0);

        let mut a_q = a.pow(&characteristic);
        for power in 1..maxpower {
            let mut a_qi = a;
            a_qi.frobenius_map(power);
            assert_eq!(a_qi, a_q);

            a_q = a_q.pow(&characteristic);
        }
    }
}

/// Checks the conversions between canonical and Montgomery representation,
/// the decimal parser and the two-adic root of unity.
pub fn primefield_test<F: PrimeField>() {
    let one = F::one();
    assert_eq!(F::from_repr(one.into_repr()).unwrap(), one);
    assert_eq!(F::from_str("1").ok().unwrap(), one);
    assert_eq!(F::from(1u64), one);
    assert_eq!(one.montgomery_repr(), F::Params::R);
    assert_eq!(F::from_montgomery_repr(F::Params::R).unwrap(), one);

    // The modulus itself is not a valid canonical representative.
    assert!(F::from_repr(F::Params::MODULUS).is_none());
    assert!(F::from_str("").is_err());
    assert!(F::from_str("01").is_err());
    assert!(F::from_str("12a").is_err());

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        assert_eq!(F::from_repr(a.into_repr()).unwrap(), a);
        assert_eq!(F::from_montgomery_repr(a.montgomery_repr()).unwrap(), a);
        assert_eq!(F::from_str(&a.into_repr().to_biguint().to_string()).unwrap(), a);
        // Exactly one of a, -a is negative for nonzero a.
        assert_ne!(a.is_negative(), (-a).is_negative());
        assert_eq!(a.signed_cmp(&a), Ordering::Equal);
        assert_eq!(a.signed_cmp(&-a), (-a).signed_cmp(&a).reverse());
    }

    let zero = F::zero();
    let two = one.double();
    assert!(!zero.is_negative());
    assert!((-one).is_negative());
    assert_eq!((-one).signed_cmp(&one), Ordering::Less);
    assert_eq!((-one).signed_cmp(&zero), Ordering::Less);
    assert_eq!(one.signed_cmp(&zero), Ordering::Greater);
    assert_eq!(two.signed_cmp(&one), Ordering::Greater);
    assert_eq!((-two).signed_cmp(&-one), Ordering::Less);
    assert_eq!((-one).signed_cmp(&-two), Ordering::Greater);

    // (p - 1)/2 is the largest positive value and its successor the smallest negative one.
    let half = F::from_repr(F::Params::MODULUS_MINUS_ONE_DIV_TWO).unwrap();
    assert!(!half.is_negative());
    assert!((half + &one).is_negative());
    assert_eq!((half + &one).signed_cmp(&half), Ordering::Less);
    assert_eq!((half + &one).signed_cmp(&-one), Ordering::Less);

    // w^(2^s) = 1 and w^(2^(s-1)) = -1
    let s = F::Params::TWO_ADICITY;
    let mut w = F::root_of_unity();
    for _ in 0..s - 1 {
        w.square_in_place();
    }
    assert_eq!(w, -F::one());
    w.square_in_place();
    assert!(w.is_one());

    let table = F::root_of_unity_table();
    assert_eq!(table.len(), s as usize + 1);
    assert!(table[0].is_one());
    assert_eq!(table[s as usize], F::root_of_unity());

    // The generator is a quadratic non-residue.
    assert!(F::multiplicative_generator().pow(F::Params::MODULUS_MINUS_ONE_DIV_TWO) == -F::one());
}

/// Checks the fixed size byte encodings: lengths, endianness, round trips and
/// the rejection of malformed buffers.
pub fn encoding_test<F: FieldEncoding>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let size = F::encoded_size();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);

        let le = a.to_le_bytes();
        let be = a.to_be_bytes();
        assert_eq!(le.len(), size);
        assert_eq!(be.len(), size);
        assert_eq!(F::from_le_bytes(&le).unwrap(), a);
        assert_eq!(F::from_be_bytes(&be).unwrap(), a);

        let le_mont = a.to_le_bytes_montgomery();
        let be_mont = a.to_be_bytes_montgomery();
        assert_eq!(F::from_le_bytes_montgomery(&le_mont).unwrap(), a);
        assert_eq!(F::from_be_bytes_montgomery(&be_mont).unwrap(), a);
    }

    assert!(F::zero().to_le_bytes().iter().all(|b| *b == 0));

    match F::from_le_bytes(&vec![0u8; size + 1]) {
        Err(AlgebraError::InvalidBufferLength { expected, found }) => {
            assert_eq!(expected, size);
            assert_eq!(found, size + 1);
        }
        _ => panic!("buffer of the wrong length was accepted"),
    }
    assert!(F::from_be_bytes(&vec![0u8; size - 1]).is_err());

    // All ones exceeds every modulus used here.
    assert!(F::from_le_bytes(&vec![0xffu8; size]).is_err());
    assert!(F::from_be_bytes_montgomery(&vec![0xffu8; size]).is_err());
}

/// For prime fields the big endian encoding is the reversed little endian one.
pub fn prime_field_encoding_test<F: PrimeField>() {
    encoding_test::<F>();

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = F::rand(&mut rng);
    let mut le = a.to_le_bytes();
    le.reverse();
    assert_eq!(le, a.to_be_bytes());
    assert_eq!(a.to_le_bytes(), a.into_repr().to_bytes_le());
    assert_eq!(F::one().to_le_bytes()[0], 1);
}
