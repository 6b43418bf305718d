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

//! Sign, negation, and the additive and multiplicative operations.
//!
//! Each function decides feasibility by comparing its operands against
//! `MIN`/`MAX` (or a quotient of them) before the operation is evaluated, so
//! the evaluated expression can never overflow.

use crate::num::bounded::BoundedInt;

/// Absolute value. Fails only for `MIN`, whose magnitude is `MAX + 1`.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::arith::abs;
/// assert_eq!(abs(-5_i8), Some(5));
/// assert_eq!(abs(i8::MIN), None);
/// ```
#[inline]
pub fn abs<T>(x: T) -> Option<T>
where
    T: BoundedInt,
{
    if x == T::MIN {
        return None;
    }
    Some(if x < T::ZERO { -x } else { x })
}

/// Arithmetic negation. Fails only for `MIN`.
#[inline]
pub fn neg<T>(x: T) -> Option<T>
where
    T: BoundedInt,
{
    if x == T::MIN {
        return None;
    }
    Some(-x)
}

/// Addition.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::arith::add;
/// assert_eq!(add(100_i8, 27), Some(127));
/// assert_eq!(add(100_i8, 50), None);
/// ```
#[inline]
pub fn add<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if y > T::ZERO && x > T::MAX - y {
        return None;
    }
    if y < T::ZERO && x < T::MIN - y {
        return None;
    }
    Some(x + y)
}

/// Subtraction.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::arith::sub;
/// assert_eq!(sub(-128_i8, 0), Some(-128));
/// assert_eq!(sub(-128_i8, 1), None);
/// ```
#[inline]
pub fn sub<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if y < T::ZERO && x > T::MAX + y {
        return None;
    }
    if y > T::ZERO && x < T::MIN + y {
        return None;
    }
    Some(x - y)
}

/// Multiplication.
///
/// The check is split by operand signs. In every branch the bound is a
/// quotient of `MIN` or `MAX` by a nonzero operand of the sign that keeps the
/// quotient itself representable.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::arith::mul;
/// assert_eq!(mul(16_i8, 7), Some(112));
/// assert_eq!(mul(16_i8, 8), None);
/// assert_eq!(mul(-16_i8, 8), Some(-128));
/// ```
#[inline]
pub fn mul<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if x > T::ZERO {
        if y > T::ZERO {
            if x > T::MAX / y {
                return None;
            }
        } else if y < T::MIN / x {
            return None;
        }
    } else if y > T::ZERO {
        if x < T::MIN / y {
            return None;
        }
    } else if x != T::ZERO && y < T::MAX / x {
        return None;
    }
    Some(x * y)
}

/// Sign of `x`: `-1`, `0`, or `1`. Never fails.
#[inline]
pub fn sign<T>(x: T) -> Option<T>
where
    T: BoundedInt,
{
    Some(if x > T::ZERO {
        T::PLUS_ONE
    } else if x < T::ZERO {
        T::MINUS_ONE
    } else {
        T::ZERO
    })
}
