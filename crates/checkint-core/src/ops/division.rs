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

//! Truncating and Euclidean division.
//!
//! All four operations share one failure domain, decided by
//! [`division_is_defined`]: the divisor is zero, or the quotient `MIN / -1`
//! would be `MAX + 1`. The remainder operations fail on `MIN % -1` as well,
//! even though that remainder is `0`, so that a quotient and its paired
//! remainder are always available together.
//!
//! | `x`, `y`  | `div` | `rem` | `div_euclid` | `rem_euclid` |
//! |-----------|-------|-------|--------------|--------------|
//! | `7, 3`    | `2`   | `1`   | `2`          | `1`          |
//! | `-7, 3`   | `-2`  | `-1`  | `-3`         | `2`          |
//! | `7, -3`   | `-2`  | `1`   | `-2`         | `1`          |
//! | `-7, -3`  | `2`   | `-1`  | `3`          | `2`          |

use crate::num::bounded::BoundedInt;

/// Returns `true` if `x / y` has a representable result.
#[inline]
pub fn division_is_defined<T>(x: T, y: T) -> bool
where
    T: BoundedInt,
{
    y != T::ZERO && !(x == T::MIN && y == T::MINUS_ONE)
}

/// Division truncating toward zero.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::division::div;
/// assert_eq!(div(-7_i8, 2), Some(-3));
/// assert_eq!(div(-128_i8, 1), Some(-128));
/// assert_eq!(div(-128_i8, -1), None);
/// assert_eq!(div(1_i8, 0), None);
/// ```
#[inline]
pub fn div<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if !division_is_defined(x, y) {
        return None;
    }
    Some(x / y)
}

/// Remainder of truncating division; its sign follows the dividend.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::division::rem;
/// assert_eq!(rem(-7_i8, 3), Some(-1));
/// assert_eq!(rem(7_i8, -3), Some(1));
/// ```
#[inline]
pub fn rem<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if !division_is_defined(x, y) {
        return None;
    }
    Some(x % y)
}

/// Euclidean division: the quotient paired with a remainder in `[0, |y|)`.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::division::div_euclid;
/// assert_eq!(div_euclid(-7_i8, 3), Some(-3));
/// assert_eq!(div_euclid(-7_i8, -3), Some(3));
/// ```
#[inline]
pub fn div_euclid<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if !division_is_defined(x, y) {
        return None;
    }
    let q = x / y;
    let r = x % y;
    if r < T::ZERO {
        // |y| >= 2 here, so |q| <= |MIN| / 2 and the adjustment cannot overflow.
        return Some(if y > T::ZERO {
            q - T::PLUS_ONE
        } else {
            q + T::PLUS_ONE
        });
    }
    Some(q)
}

/// Euclidean remainder, always in `[0, |y|)`.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::division::rem_euclid;
/// assert_eq!(rem_euclid(-7_i8, 3), Some(2));
/// assert_eq!(rem_euclid(-7_i8, -3), Some(2));
/// ```
#[inline]
pub fn rem_euclid<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if !division_is_defined(x, y) {
        return None;
    }
    let r = x % y;
    if r < T::ZERO {
        return Some(if y > T::ZERO { r + y } else { r - y });
    }
    Some(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::domain::BoundedDomain;

    #[test]
    fn test_division_domain() {
        assert!(!division_is_defined(5_i8, 0));
        assert!(!division_is_defined(i8::MIN, -1));
        assert!(division_is_defined(i8::MIN, 1));
        assert!(division_is_defined(i8::MIN + 1, -1));
        assert!(division_is_defined(0_i8, -1));
    }

    #[test]
    fn test_division_overflow_singularity() {
        assert_eq!(div(-128_i8, -1), None);
        assert_eq!(div(-128_i8, 1), Some(-128));
        assert_eq!(rem(-128_i8, -1), None);
        assert_eq!(div_euclid(-128_i8, -1), None);
        assert_eq!(rem_euclid(-128_i8, -1), None);
    }

    #[test]
    fn test_truncating_vs_euclidean() {
        assert_eq!(rem(-7_i8, 3), Some(-1));
        assert_eq!(rem_euclid(-7_i8, 3), Some(2));
        assert_eq!(div_euclid(-7_i8, 3), Some(-3));

        assert_eq!(div(7_i8, -3), Some(-2));
        assert_eq!(rem(7_i8, -3), Some(1));
        assert_eq!(div_euclid(-7_i8, -3), Some(3));
        assert_eq!(rem_euclid(-7_i8, -3), Some(2));
    }

    #[test]
    fn test_euclidean_identity_holds_everywhere() {
        for x in BoundedDomain::<i8>::full() {
            for y in BoundedDomain::<i8>::full() {
                let (Some(q), Some(r)) = (div_euclid(x, y), rem_euclid(x, y)) else {
                    assert!(!division_is_defined(x, y));
                    continue;
                };
                assert!(r >= 0 && (r as i32) < (y as i32).abs(), "rem_euclid({x}, {y}) = {r}");
                assert_eq!(q as i32 * y as i32 + r as i32, x as i32, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_agrees_with_std_for_i8() {
        for x in BoundedDomain::<i8>::full() {
            for y in BoundedDomain::<i8>::full() {
                assert_eq!(div(x, y), x.checked_div(y));
                assert_eq!(rem(x, y), x.checked_div(y).map(|_| x % y));
                assert_eq!(div_euclid(x, y), x.checked_div_euclid(y));
                assert_eq!(rem_euclid(x, y), x.checked_div_euclid(y).map(|_| x.rem_euclid(y)));
            }
        }
    }
}
