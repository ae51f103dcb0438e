/// Calculate a + b + carry, returning the sum and modifying the
/// carry value.
#[inline(always)]
pub(crate) fn adc(a: u64, b: u64, carry: &mut u64) -> u64 {
    let tmp = u128::from(a) + u128::from(b) + u128::from(*carry);
    *carry = (tmp >> 64) as u64;
    tmp as u64
}

/// Calculate a - b - borrow, returning the result and modifying
/// the borrow value.
#[inline(always)]
pub(crate) fn sbb(a: u64, b: u64, borrow: &mut u64) -> u64 {
    let tmp = (1u128 << 64) + u128::from(a) - u128::from(b) - u128::from(*borrow);
    *borrow = if tmp >> 64 == 0 { 1 } else { 0 };
    tmp as u64
}

/// Calculate a + (b * c) + carry, returning the least significant digit
/// and setting carry to the most significant digit.
#[inline(always)]
pub(crate) fn mac_with_carry(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
    let tmp = u128::from(a) + u128::from(b) * u128::from(c) + u128::from(*carry);
    *carry = (tmp >> 64) as u64;
    tmp as u64
}

/// Calculate a + b * c, returning the lower 64 bits of the result and setting
/// `carry` to the upper 64 bits.
#[inline(always)]
pub(crate) fn mac(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
    let tmp = u128::from(a) + u128::from(b) * u128::from(c);
    *carry = (tmp >> 64) as u64;
    tmp as u64
}

/// Signed digit (non-adjacent form) decomposition of a little endian limb
/// slice, least significant digit first.
pub(crate) fn find_naf(limbs: &[u64]) -> Vec<i8> {
    // one spare limb absorbs the carry of `num + 1` when all limbs are saturated
    let mut num = limbs.to_vec();
    num.push(0);
    let is_zero = |num: &[u64]| num.iter().all(|limb| *limb == 0);

    let mut res = vec![];
    while !is_zero(&num) {
        let z: i8;
        if num[0] & 1 == 1 {
            z = 2 - (num[0] % 4) as i8;
            if z >= 0 {
                let mut borrow = z as u64;
                for limb in num.iter_mut() {
                    let (d, b) = limb.overflowing_sub(borrow);
                    *limb = d;
                    borrow = b as u64;
                    if borrow == 0 {
                        break;
                    }
                }
            } else {
                let mut carry = (-z) as u64;
                for limb in num.iter_mut() {
                    let (s, c) = limb.overflowing_add(carry);
                    *limb = s;
                    carry = c as u64;
                    if carry == 0 {
                        break;
                    }
                }
            }
        } else {
            z = 0;
        }
        res.push(z);

        let mut t = 0;
        for limb in num.iter_mut().rev() {
            let t2 = *limb << 63;
            *limb >>= 1;
            *limb |= t;
            t = t2;
        }
    }

    res
}
