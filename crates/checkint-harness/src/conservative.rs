// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Reference ("conservative") implementations of the operation catalog.
//!
//! Every function here widens its operands, computes the exact result in the
//! wide type where it cannot overflow, and reports success only if
//! [`Widen::narrow`] brings the result back losslessly. None of them inspects
//! operands against `MIN`/`MAX` the way `checkint_core::ops` does, so the two
//! families share no overflow logic.
//!
//! Euclidean division uses `num_traits::Euclid` on the wide type, and right
//! shifts are floor divisions by a power of two.

use crate::widen::Widen;
use num_traits::{Euclid, One, Signed, ToPrimitive, Zero};

#[inline]
pub fn abs<T: Widen>(x: T) -> Option<T> {
    T::narrow(x.widen().abs())
}

#[inline]
pub fn neg<T: Widen>(x: T) -> Option<T> {
    T::narrow(-x.widen())
}

#[inline]
pub fn add<T: Widen>(x: T, y: T) -> Option<T> {
    T::narrow(x.widen() + y.widen())
}

#[inline]
pub fn sub<T: Widen>(x: T, y: T) -> Option<T> {
    T::narrow(x.widen() - y.widen())
}

#[inline]
pub fn mul<T: Widen>(x: T, y: T) -> Option<T> {
    T::narrow(x.widen() * y.widen())
}

#[inline]
pub fn and<T: Widen>(x: T, y: T) -> Option<T> {
    T::narrow(x.widen() & y.widen())
}

#[inline]
pub fn or<T: Widen>(x: T, y: T) -> Option<T> {
    T::narrow(x.widen() | y.widen())
}

#[inline]
pub fn xor<T: Widen>(x: T, y: T) -> Option<T> {
    T::narrow(x.widen() ^ y.widen())
}

#[inline]
pub fn not<T: Widen>(x: T) -> Option<T> {
    T::narrow(!x.widen())
}

#[inline]
pub fn sign<T: Widen>(x: T) -> Option<T> {
    T::narrow(x.widen().signum())
}

/// Bit `y` of the sign-extended wide value. Indices past the wide width are
/// clamped to its top bit, which is a copy of the narrow sign bit.
pub fn bit<T: Widen>(x: T, y: T) -> Option<T> {
    let wy = y.widen();
    if wy < T::Wide::zero() {
        return None;
    }
    let top = T::wide_count(T::WIDE_BITS - 1);
    let index = if wy > top { top } else { wy };
    let shift = index.to_usize()?;
    T::narrow((x.widen() >> shift) & T::Wide::one())
}

/// Smallest `n` such that `-2^(n-1) <= x < 2^(n-1)`, found by linear search.
pub fn bit_size<T: Widen>(x: T) -> Option<T> {
    let wx = x.widen();
    for n in 1..=T::BITS {
        let half = T::Wide::one() << (n as usize - 1);
        if -half <= wx && wx < half {
            return T::narrow(T::wide_count(n));
        }
    }
    None
}

#[inline]
pub fn div<T: Widen>(x: T, y: T) -> Option<T> {
    let (wx, wy) = (x.widen(), y.widen());
    if wy.is_zero() {
        return None;
    }
    T::narrow(wx / wy)
}

/// Truncating remainder. Fails wherever the paired quotient does not narrow.
#[inline]
pub fn rem<T: Widen>(x: T, y: T) -> Option<T> {
    let (wx, wy) = (x.widen(), y.widen());
    if wy.is_zero() {
        return None;
    }
    T::narrow(wx / wy)?;
    T::narrow(wx % wy)
}

#[inline]
pub fn div_euclid<T: Widen>(x: T, y: T) -> Option<T> {
    let (wx, wy) = (x.widen(), y.widen());
    if wy.is_zero() {
        return None;
    }
    T::narrow(Euclid::div_euclid(&wx, &wy))
}

/// Euclidean remainder. Fails wherever the paired quotient does not narrow.
#[inline]
pub fn rem_euclid<T: Widen>(x: T, y: T) -> Option<T> {
    let (wx, wy) = (x.widen(), y.widen());
    if wy.is_zero() {
        return None;
    }
    T::narrow(Euclid::div_euclid(&wx, &wy))?;
    T::narrow(Euclid::rem_euclid(&wx, &wy))
}

/// Shifts `wx` left by the wide amount `wy`, or right by `-wy` when negative.
///
/// Amounts are clamped to `BITS`: a left shift by `BITS` of any nonzero value
/// cannot narrow, and a floor division by `2^BITS` already yields `0` or `-1`.
fn shift_wide<T: Widen>(wx: T::Wide, wy: T::Wide) -> Option<T> {
    let width = T::wide_count(T::BITS);
    if wy >= T::Wide::zero() {
        let amount = if wy > width { width } else { wy };
        return T::narrow(wx << amount.to_usize()?);
    }
    let magnitude = -wy;
    let amount = if magnitude > width { width } else { magnitude };
    let divisor = T::Wide::one() << amount.to_usize()?;
    T::narrow(Euclid::div_euclid(&wx, &divisor))
}

#[inline]
pub fn shl<T: Widen>(x: T, y: T) -> Option<T> {
    shift_wide::<T>(x.widen(), y.widen())
}

/// `shl(x, -y)`, with `y == MIN` taken as `BITS`.
#[inline]
pub fn shr<T: Widen>(x: T, y: T) -> Option<T> {
    let wy = if y == T::MIN {
        T::wide_count(T::BITS)
    } else {
        y.widen()
    };
    shift_wide::<T>(x.widen(), -wy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_boundaries() {
        assert_eq!(abs(-128_i8), None);
        assert_eq!(neg(-127_i8), Some(127));
        assert_eq!(add(100_i8, 27), Some(127));
        assert_eq!(add(100_i8, 50), None);
        assert_eq!(sub(-128_i8, 1), None);
        assert_eq!(sub(-128_i8, 0), Some(-128));
        assert_eq!(mul(16_i8, 8), None);
        assert_eq!(mul(16_i8, 7), Some(112));
        assert_eq!(div(-128_i8, -1), None);
        assert_eq!(div(-128_i8, 1), Some(-128));
    }

    #[test]
    fn test_remainders() {
        assert_eq!(rem(-7_i8, 3), Some(-1));
        assert_eq!(rem_euclid(-7_i8, 3), Some(2));
        assert_eq!(div_euclid(-7_i8, 3), Some(-3));
        assert_eq!(rem(-128_i8, -1), None);
        assert_eq!(rem_euclid(-128_i8, -1), None);
        assert_eq!(rem(5_i8, 0), None);
    }

    #[test]
    fn test_bits() {
        assert_eq!(bit(-5_i8, 8), Some(1));
        assert_eq!(bit(-5_i8, 127), Some(1));
        assert_eq!(bit(5_i8, 127), Some(0));
        assert_eq!(bit(5_i8, -1), None);
        assert_eq!(bit_size(0_i8), Some(1));
        assert_eq!(bit_size(-1_i8), Some(1));
        assert_eq!(bit_size(127_i8), Some(8));
        assert_eq!(bit_size(-128_i8), Some(8));
        assert_eq!(bit_size(i64::MIN), Some(64));
    }

    #[test]
    fn test_shifts() {
        assert_eq!(shl(1_i8, 6), Some(64));
        assert_eq!(shl(1_i8, 7), None);
        assert_eq!(shl(0_i8, 127), Some(0));
        assert_eq!(shl(-100_i8, -100), Some(-1));
        assert_eq!(shr(-128_i8, 7), Some(-1));
        assert_eq!(shr(5_i8, i8::MIN), Some(0));
        assert_eq!(shr(-5_i8, i8::MIN), Some(-1));
        assert_eq!(shl(i64::MIN, 0), Some(i64::MIN));
        assert_eq!(shl(-1_i64, 63), Some(i64::MIN));
        assert_eq!(shl(i64::MIN, 1), None);
    }
}
