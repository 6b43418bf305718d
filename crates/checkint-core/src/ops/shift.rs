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

//! Signed shifts.
//!
//! `shl` shifts left for a positive amount and arithmetically right for a
//! negative amount. Left shifts fail when a set bit (or, for negative `x`, a
//! clear bit) would be pushed through the sign bit. Right shifts always
//! succeed; amounts of `BITS` or more saturate at `BITS - 1`, which leaves
//! `0` or `-1`.

use crate::num::bounded::BoundedInt;

/// Left shift by `y`; a negative `y` shifts right by `-y`.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::shift::shl;
/// assert_eq!(shl(1_i8, 6), Some(64));
/// assert_eq!(shl(1_i8, 7), None);
/// assert_eq!(shl(-1_i8, 7), Some(-128));
/// assert_eq!(shl(-100_i8, -100), Some(-1));
/// ```
#[inline]
pub fn shl<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if x == T::ZERO || y == T::ZERO {
        return Some(x);
    }
    if y > T::ZERO {
        if y >= T::WIDTH {
            return None;
        }
        let amount = y.to_usize()?;
        if x > T::ZERO && x > T::MAX >> amount {
            return None;
        }
        if x < T::ZERO && x < T::MIN >> amount {
            return None;
        }
        return Some(x << amount);
    }
    // y < 0. Compare before negating, -MIN is not representable.
    let amount = if y <= -T::WIDTH {
        T::BITS as usize - 1
    } else {
        (-y).to_usize()?
    };
    Some(x >> amount)
}

/// Arithmetic right shift by `y`; a negative `y` shifts left by `-y`.
///
/// Equivalent to `shl(x, -y)`, except that `y == MIN` is clamped to `WIDTH`
/// before the negation, since `-MIN` is not representable. The clamped amount
/// shifts right, so `shr(x, MIN)` is `0` or `-1`.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::shift::shr;
/// assert_eq!(shr(-128_i8, 7), Some(-1));
/// assert_eq!(shr(64_i8, -1), None);
/// assert_eq!(shr(5_i8, i8::MIN), Some(0));
/// assert_eq!(shr(-5_i8, i8::MIN), Some(-1));
/// ```
#[inline]
pub fn shr<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    let y = if y == T::MIN { T::WIDTH } else { y };
    shl(x, -y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::domain::BoundedDomain;

    #[test]
    fn test_shl_boundaries() {
        assert_eq!(shl(1_i8, 6), Some(64));
        assert_eq!(shl(1_i8, 7), None);
        assert_eq!(shl(-1_i8, 7), Some(-128));
        assert_eq!(shl(-2_i8, 6), Some(-128));
        assert_eq!(shl(-3_i8, 6), None);
        assert_eq!(shl(63_i8, 1), Some(126));
        assert_eq!(shl(64_i8, 1), None);
    }

    #[test]
    fn test_shl_trivial_cases() {
        assert_eq!(shl(0_i8, 127), Some(0));
        assert_eq!(shl(0_i8, i8::MIN), Some(0));
        assert_eq!(shl(-77_i8, 0), Some(-77));
    }

    #[test]
    fn test_shl_amount_at_width_fails() {
        assert_eq!(shl(1_i8, 8), None);
        assert_eq!(shl(-1_i8, 8), None);
        assert_eq!(shl(1_i64, 64), None);
    }

    #[test]
    fn test_negative_shift_saturates() {
        assert_eq!(shl(100_i8, -7), Some(0));
        assert_eq!(shl(100_i8, -8), Some(0));
        assert_eq!(shl(-100_i8, -8), Some(-1));
        assert_eq!(shl(-100_i8, i8::MIN), Some(-1));
        assert_eq!(shl(-100_i8, -2), Some(-25));
        assert_eq!(shl(-7_i8, -1), Some(-4));
    }

    #[test]
    fn test_shr_is_negated_shl() {
        for x in BoundedDomain::<i8>::full() {
            for y in BoundedDomain::<i8>::full() {
                let expected = if y == i8::MIN { shl(x, -8) } else { shl(x, -y) };
                assert_eq!(shr(x, y), expected, "shr({x}, {y})");
            }
        }
    }

    #[test]
    fn test_shl_matches_exact_arithmetic_for_i8() {
        for x in BoundedDomain::<i8>::full() {
            for y in BoundedDomain::<i8>::full() {
                let wide = x as i64;
                let expected = if y >= 0 {
                    if x == 0 {
                        Some(0)
                    } else if y >= 8 {
                        None
                    } else {
                        i8::try_from(wide << y).ok()
                    }
                } else {
                    let amount = (-(y as i64)).min(63);
                    Some((wide >> amount) as i8)
                };
                assert_eq!(shl(x, y), expected, "shl({x}, {y})");
            }
        }
    }
}
