/// Implements a prime field `$Fp<P>` over `$limbs` 64 bit words in Montgomery
/// form, together with its parameter trait `$FpParameters`.
macro_rules! impl_Fp {
    ($Fp:ident, $FpParameters:ident, $BigInteger:ident, $limbs:tt) => {
        pub trait $FpParameters: FpParameters<BigInt = $BigInteger> {}

        /// Prime field element, stored as `x * R mod p` with `R = 2^(64 * limbs)`.
        #[derive(Derivative)]
        #[derivative(
            Default(bound = ""),
            Hash(bound = ""),
            Clone(bound = ""),
            Copy(bound = ""),
            PartialEq(bound = ""),
            Eq(bound = "")
        )]
        pub struct $Fp<P: $FpParameters>(
            pub $BigInteger,
            #[doc(hidden)]
            pub PhantomData<P>,
        );

        impl<P: $FpParameters> $Fp<P> {
            /// Square root algorithm selected by the residue of the modulus.
            pub const SQRT_ALGORITHM: SqrtAlgorithm = SqrtAlgorithm::for_modulus(P::MODULUS.0[0]);

            #[inline]
            pub fn new(element: $BigInteger) -> Self {
                $Fp::<P>(element, PhantomData)
            }

            #[inline]
            fn is_valid(&self) -> bool {
                self.0 < P::MODULUS
            }

            #[inline]
            fn reduce(&mut self) {
                if !self.is_valid() {
                    self.0.sub_noborrow(&P::MODULUS);
                }
            }

            /// Reduces a random representation of at most `MODULUS_BITS` bits.
            #[inline]
            fn from_random_repr(mut repr: $BigInteger) -> Self {
                let shave = 64 * $limbs - P::MODULUS_BITS;
                repr.0[$limbs - 1] &= u64::max_value() >> shave;
                let mut elem = $Fp::<P>(repr, PhantomData);
                elem.reduce();
                elem
            }

            fn sqrt_three_mod_four(&self) -> Option<Self> {
                // (p + 1)/4 = (p >> 2) + 1 for p = 3 mod 4
                let mut exp = P::MODULUS;
                exp.divn(2);
                exp.add_nocarry(&$BigInteger::from(1));
                let root = self.pow(exp);
                if root.square() == *self {
                    Some(root)
                } else {
                    None
                }
            }

            fn sqrt_tonelli_shanks(&self) -> Option<Self> {
                // Tonelli-Shanks, with the 2^s root of unity as the power of a non residue.
                if self.is_zero() {
                    return Some(Self::zero());
                }
                if self.legendre().is_qnr() {
                    return None;
                }
                let mut z = $Fp::<P>(P::ROOT_OF_UNITY, PhantomData);
                let mut w = self.pow(P::T_MINUS_ONE_DIV_TWO);
                let mut x = w * self;
                let mut b = x * &w;

                let mut v = P::TWO_ADICITY as usize;

                while !b.is_one() {
                    let mut k = 0usize;

                    let mut b2k = b;
                    while !b2k.is_one() {
                        // invariant: b2k = b^(2^k) after entering this loop
                        b2k.square_in_place();
                        k += 1;
                    }

                    let j = v - k - 1;
                    w = z;
                    for _ in 0..j {
                        w.square_in_place();
                    }

                    z = w.square();
                    b *= &z;
                    x *= &w;
                    v = k;
                }

                Some(x)
            }
        }

        impl<P: $FpParameters> Field for $Fp<P> {
            #[inline]
            fn zero() -> Self {
                $Fp::<P>($BigInteger::from(0), PhantomData)
            }

            #[inline]
            fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            #[inline]
            fn one() -> Self {
                $Fp::<P>(P::R, PhantomData)
            }

            #[inline]
            fn is_one(&self) -> bool {
                self.0 == P::R
            }

            #[inline]
            fn characteristic<'a>() -> &'a [u64] {
                P::MODULUS.as_ref()
            }

            #[inline]
            fn double(&self) -> Self {
                let mut temp = *self;
                temp.double_in_place();
                temp
            }

            #[inline]
            fn double_in_place(&mut self) -> &mut Self {
                // the shifted out bit is non-zero only if the modulus uses the top bit
                let carry = self.0 .0[$limbs - 1] >> 63 == 1;
                self.0.mul2();
                if carry || !self.is_valid() {
                    self.0.sub_noborrow(&P::MODULUS);
                }
                self
            }

            #[inline]
            fn square(&self) -> Self {
                let mut temp = self.clone();
                temp.square_in_place();
                temp
            }

            #[inline]
            #[unroll_for_loops]
            fn square_in_place(&mut self) -> &mut Self {
                let mut r = [0u64; 2 * $limbs];

                // off-diagonal products
                for i in 0..($limbs - 1) {
                    let mut carry = 0;
                    for j in (i + 1)..$limbs {
                        r[i + j] = fa::mac_with_carry(r[i + j], (self.0).0[i], (self.0).0[j], &mut carry);
                    }
                    r[i + $limbs] = carry;
                }

                // doubled by a one bit shift
                r[2 * $limbs - 1] = r[2 * $limbs - 2] >> 63;
                for i in 0..(2 * $limbs - 2) {
                    let k = 2 * $limbs - 2 - i;
                    r[k] = (r[k] << 1) | (r[k - 1] >> 63);
                }
                r[0] <<= 1;

                // diagonal products
                let mut carry = 0;
                for i in 0..$limbs {
                    r[2 * i] = fa::mac_with_carry(r[2 * i], (self.0).0[i], (self.0).0[i], &mut carry);
                    r[2 * i + 1] = fa::adc(r[2 * i + 1], 0, &mut carry);
                }

                // Montgomery reduction
                let mut carry2 = 0;
                for i in 0..$limbs {
                    let k = r[i].wrapping_mul(P::INV);
                    let mut carry = 0;
                    fa::mac_with_carry(r[i], k, P::MODULUS.0[0], &mut carry);
                    for j in 1..$limbs {
                        r[j + i] = fa::mac_with_carry(r[j + i], k, P::MODULUS.0[j], &mut carry);
                    }
                    r[$limbs + i] = fa::adc(r[$limbs + i], carry2, &mut carry);
                    carry2 = carry;
                }

                let mut res = [0u64; $limbs];
                res.copy_from_slice(&r[$limbs..]);
                (self.0).0 = res;
                if carry2 != 0 || !self.is_valid() {
                    self.0.sub_noborrow(&P::MODULUS);
                }
                self
            }

            #[inline]
            fn inverse(&self) -> Option<Self> {
                if self.is_zero() {
                    None
                } else {
                    // Guajardo Kumar Paar Pelzl
                    // Efficient Software-Implementation of Finite Fields with Applications to
                    // Cryptography
                    // Algorithm 16 (BEA for Inversion in Fp)

                    let one = $BigInteger::from(1);

                    let mut u = self.0;
                    let mut v = P::MODULUS;
                    // starting from R^2 yields the Montgomery form of the inverse
                    let mut b = $Fp::<P>(P::R2, PhantomData);
                    let mut c = Self::zero();

                    while u != one && v != one {
                        while u.is_even() {
                            u.div2();
                            Self::halve_mod(&mut b);
                        }

                        while v.is_even() {
                            v.div2();
                            Self::halve_mod(&mut c);
                        }

                        if v < u {
                            u.sub_noborrow(&v);
                            b.sub_assign(&c);
                        } else {
                            v.sub_noborrow(&u);
                            c.sub_assign(&b);
                        }
                    }

                    if u == one {
                        Some(b)
                    } else {
                        Some(c)
                    }
                }
            }

            fn inverse_in_place(&mut self) -> Option<&mut Self> {
                if let Some(inverse) = self.inverse() {
                    *self = inverse;
                    Some(self)
                } else {
                    None
                }
            }

            #[inline]
            fn frobenius_map(&mut self, _: usize) {
                // No-op: No effect in a prime field.
            }
        }

        impl<P: $FpParameters> $Fp<P> {
            /// `x / 2 mod p` on the raw representation.
            #[inline]
            fn halve_mod(x: &mut Self) {
                if x.0.is_even() {
                    x.0.div2();
                } else {
                    let carry = x.0.add_nocarry(&P::MODULUS);
                    x.0.div2();
                    if carry {
                        x.0 .0[$limbs - 1] |= 1 << 63;
                    }
                }
            }
        }

        impl<P: $FpParameters> PrimeField for $Fp<P> {
            type Params = P;
            type BigInt = $BigInteger;

            #[inline]
            fn from_repr(r: $BigInteger) -> Option<Self> {
                let mut r = $Fp::<P>(r, PhantomData);
                if r.is_valid() {
                    r.mul_assign(&$Fp::<P>(P::R2, PhantomData));
                    Some(r)
                } else {
                    None
                }
            }

            #[inline]
            fn into_repr(&self) -> $BigInteger {
                let mut r = *self;
                r.mul_assign(&$Fp::<P>($BigInteger::from(1), PhantomData));
                r.0
            }

            #[inline]
            fn from_montgomery_repr(r: $BigInteger) -> Option<Self> {
                let r = $Fp::<P>(r, PhantomData);
                if r.is_valid() {
                    Some(r)
                } else {
                    None
                }
            }

            #[inline]
            fn montgomery_repr(&self) -> $BigInteger {
                self.0
            }

            #[inline]
            fn multiplicative_generator() -> Self {
                $Fp::<P>(P::GENERATOR, PhantomData)
            }

            #[inline]
            fn root_of_unity() -> Self {
                $Fp::<P>(P::ROOT_OF_UNITY, PhantomData)
            }
        }

        impl<P: $FpParameters> FieldEncoding for $Fp<P> {
            #[inline]
            fn encoded_size() -> usize {
                $limbs * 8
            }

            fn to_le_bytes(&self) -> Vec<u8> {
                self.into_repr().to_bytes_le()
            }

            fn to_be_bytes(&self) -> Vec<u8> {
                self.into_repr().to_bytes_be()
            }

            fn to_le_bytes_montgomery(&self) -> Vec<u8> {
                self.0.to_bytes_le()
            }

            fn to_be_bytes_montgomery(&self) -> Vec<u8> {
                self.0.to_bytes_be()
            }

            fn from_le_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
                let repr = $BigInteger::from_bytes_le(bytes)?;
                Self::from_repr(repr).ok_or_else(|| Self::not_reduced(&repr))
            }

            fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
                let repr = $BigInteger::from_bytes_be(bytes)?;
                Self::from_repr(repr).ok_or_else(|| Self::not_reduced(&repr))
            }

            fn from_le_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
                let repr = $BigInteger::from_bytes_le(bytes)?;
                Self::from_montgomery_repr(repr).ok_or_else(|| Self::not_reduced(&repr))
            }

            fn from_be_bytes_montgomery(bytes: &[u8]) -> Result<Self, AlgebraError> {
                let repr = $BigInteger::from_bytes_be(bytes)?;
                Self::from_montgomery_repr(repr).ok_or_else(|| Self::not_reduced(&repr))
            }
        }

        impl<P: $FpParameters> $Fp<P> {
            fn not_reduced(repr: &$BigInteger) -> AlgebraError {
                AlgebraError::InvalidEncoding(format!("{} is not smaller than the modulus", repr))
            }
        }

        impl<P: $FpParameters> SquareRootField for $Fp<P> {
            #[inline]
            fn legendre(&self) -> LegendreSymbol {
                use crate::fields::LegendreSymbol::*;

                // s = self^((MODULUS - 1) // 2)
                let s = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO);
                if s.is_zero() {
                    Zero
                } else if s.is_one() {
                    QuadraticResidue
                } else {
                    QuadraticNonResidue
                }
            }

            fn sqrt(&self) -> Option<Self> {
                let root = match Self::SQRT_ALGORITHM {
                    SqrtAlgorithm::ThreeModFour => self.sqrt_three_mod_four(),
                    SqrtAlgorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
                    SqrtAlgorithm::Atkin => unimplemented!("square root for p = 5 mod 8"),
                    SqrtAlgorithm::Kong => unimplemented!("square root for p = 9 mod 16"),
                };
                root.map(|r| if r.is_negative() { -r } else { r })
            }

            fn sqrt_in_place(&mut self) -> Option<&mut Self> {
                if let Some(sqrt) = self.sqrt() {
                    *self = sqrt;
                    Some(self)
                } else {
                    None
                }
            }

            #[inline]
            fn is_lexicographically_largest(&self) -> bool {
                self.is_negative()
            }
        }

        impl<P: $FpParameters> Ord for $Fp<P> {
            #[inline(always)]
            fn cmp(&self, other: &Self) -> Ordering {
                self.into_repr().cmp(&other.into_repr())
            }
        }

        impl<P: $FpParameters> PartialOrd for $Fp<P> {
            #[inline(always)]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<P: $FpParameters> From<u64> for $Fp<P> {
            fn from(value: u64) -> Self {
                let mut repr = $BigInteger::from(value);
                while repr >= P::MODULUS {
                    repr.sub_noborrow(&P::MODULUS);
                }
                let mut r = $Fp::<P>(repr, PhantomData);
                r.mul_assign(&$Fp::<P>(P::R2, PhantomData));
                r
            }
        }

        impl<P: $FpParameters> From<$Fp<P>> for $BigInteger {
            #[inline]
            fn from(fe: $Fp<P>) -> Self {
                fe.into_repr()
            }
        }

        impl<P: $FpParameters> ToBytes for $Fp<P> {
            #[inline]
            fn write<W: Write>(&self, writer: W) -> IoResult<()> {
                self.into_repr().write(writer)
            }
        }

        impl<P: $FpParameters> FromBytes for $Fp<P> {
            #[inline]
            fn read<R: Read>(reader: R) -> IoResult<Self> {
                $BigInteger::read(reader).and_then(|b| match $Fp::from_repr(b) {
                    Some(f) => Ok(f),
                    None => Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "field element is not reduced",
                    )),
                })
            }
        }

        impl<P: $FpParameters> FromStr for $Fp<P> {
            type Err = AlgebraError;

            /// Interpret a string of numbers as a (congruent) prime field element.
            /// Does not accept unnecessary leading zeroes or a blank string.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let invalid = || AlgebraError::InvalidEncoding(format!("{:?} is not a decimal number", s));
                if s.is_empty() {
                    return Err(invalid());
                }

                if s == "0" {
                    return Ok(Self::zero());
                }

                let mut res = Self::zero();

                let ten = Self::from(10u64);

                let mut first_digit = true;

                for c in s.chars() {
                    match c.to_digit(10) {
                        Some(c) => {
                            if first_digit {
                                if c == 0 {
                                    return Err(invalid());
                                }

                                first_digit = false;
                            }

                            res.mul_assign(&ten);
                            res.add_assign(&Self::from(u64::from(c)));
                        },
                        None => {
                            return Err(invalid());
                        },
                    }
                }
                Ok(res)
            }
        }

        impl<P: $FpParameters> Display for $Fp<P> {
            #[inline]
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "{}({})", stringify!($Fp), self.into_repr())
            }
        }

        impl<P: $FpParameters> std::fmt::Debug for $Fp<P> {
            #[inline]
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, "{}({})", stringify!($Fp), self.into_repr())
            }
        }

        impl<P: $FpParameters> Neg for $Fp<P> {
            type Output = Self;
            #[inline]
            #[must_use]
            fn neg(self) -> Self {
                if !self.is_zero() {
                    let mut tmp = P::MODULUS.clone();
                    tmp.sub_noborrow(&self.0);
                    $Fp::<P>(tmp, PhantomData)
                } else {
                    self
                }
            }
        }

        impl<'a, P: $FpParameters> Add<&'a $Fp<P>> for $Fp<P> {
            type Output = Self;

            #[inline]
            fn add(self, other: &Self) -> Self {
                let mut result = self.clone();
                result.add_assign(other);
                result
            }
        }

        impl<'a, P: $FpParameters> Sub<&'a $Fp<P>> for $Fp<P> {
            type Output = Self;

            #[inline]
            fn sub(self, other: &Self) -> Self {
                let mut result = self.clone();
                result.sub_assign(other);
                result
            }
        }

        impl<'a, P: $FpParameters> Mul<&'a $Fp<P>> for $Fp<P> {
            type Output = Self;

            #[inline]
            fn mul(self, other: &Self) -> Self {
                let mut result = self.clone();
                result.mul_assign(other);
                result
            }
        }

        impl<'a, P: $FpParameters> Div<&'a $Fp<P>> for $Fp<P> {
            type Output = Self;

            /// Panics if `other` is zero.
            #[inline]
            fn div(self, other: &Self) -> Self {
                let mut result = self.clone();
                result.div_assign(other);
                result
            }
        }

        impl_additive_ops_from_ref!($Fp, $FpParameters);
        impl_multiplicative_ops_from_ref!($Fp, $FpParameters);

        impl<'a, P: $FpParameters> AddAssign<&'a Self> for $Fp<P> {
            #[inline]
            fn add_assign(&mut self, other: &Self) {
                // the carry is set only if the modulus uses the top bit
                let carry = self.0.add_nocarry(&other.0);
                if carry || !self.is_valid() {
                    self.0.sub_noborrow(&P::MODULUS);
                }
            }
        }

        impl<'a, P: $FpParameters> SubAssign<&'a Self> for $Fp<P> {
            #[inline]
            fn sub_assign(&mut self, other: &Self) {
                // If `other` is larger than `self`, add the modulus to self first.
                // Both operations wrap, the final result is below the modulus.
                if other.0 > self.0 {
                    self.0.add_nocarry(&P::MODULUS);
                }

                self.0.sub_noborrow(&other.0);
            }
        }

        impl<'a, P: $FpParameters> MulAssign<&'a Self> for $Fp<P> {
            /// Coarsely integrated operand scanning (CIOS) Montgomery multiplication.
            #[inline]
            #[unroll_for_loops]
            fn mul_assign(&mut self, other: &Self) {
                let mut t = [0u64; $limbs + 2];
                for i in 0..$limbs {
                    // t += a * b_i
                    let mut carry = 0;
                    for j in 0..$limbs {
                        t[j] = fa::mac_with_carry(t[j], (self.0).0[j], (other.0).0[i], &mut carry);
                    }
                    let mut carry2 = 0;
                    t[$limbs] = fa::adc(t[$limbs], carry, &mut carry2);
                    t[$limbs + 1] = carry2;

                    // t = (t + k * p) / 2^64
                    let k = t[0].wrapping_mul(P::INV);
                    let mut carry = 0;
                    fa::mac_with_carry(t[0], k, P::MODULUS.0[0], &mut carry);
                    for j in 1..$limbs {
                        t[j - 1] = fa::mac_with_carry(t[j], k, P::MODULUS.0[j], &mut carry);
                    }
                    t[$limbs - 1] = fa::adc(t[$limbs], 0, &mut carry);
                    t[$limbs] = t[$limbs + 1] + carry;
                }

                let mut res = [0u64; $limbs];
                res.copy_from_slice(&t[..$limbs]);
                (self.0).0 = res;
                if t[$limbs] != 0 || !self.is_valid() {
                    self.0.sub_noborrow(&P::MODULUS);
                }
            }
        }

        impl<'a, P: $FpParameters> DivAssign<&'a Self> for $Fp<P> {
            /// Panics if `other` is zero.
            #[inline]
            fn div_assign(&mut self, other: &Self) {
                match other.inverse() {
                    Some(inv) => self.mul_assign(&inv),
                    None => panic!("division by zero"),
                }
            }
        }

        impl<P: $FpParameters> Distribution<$Fp<P>> for Standard {
            /// Draws `2 * MODULUS_BITS` random bits `lo + 2^(64 * limbs) * hi`
            /// and reduces them modulo `p`.
            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $Fp<P> {
                let r2 = $Fp::<P>(P::R2, PhantomData);
                // lo * R^2 / R = lo * R, the Montgomery form of lo
                let mut lo = $Fp::<P>::from_random_repr($BigInteger(rng.gen()));
                lo.mul_assign(&r2);
                // hi * R^2 * R^2 / R^2 = hi * R * R, the Montgomery form of hi * R
                let mut hi = $Fp::<P>::from_random_repr($BigInteger(rng.gen()));
                hi.mul_assign(&r2);
                hi.mul_assign(&r2);
                lo + &hi
            }
        }
    };
}
