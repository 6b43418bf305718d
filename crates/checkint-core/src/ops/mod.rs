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

//! # Bounded Operations
//!
//! The operation catalog. Every operation is a pure function of its operands
//! returning `Option<T>`: `Some(v)` with `MIN <= v <= MAX`, or `None` when the
//! mathematically exact result is undefined or not representable. Callers
//! that only need the verdict use `.is_some()`.
//!
//! Feasibility is always decided from the operands, before the operation is
//! evaluated, so the evaluated expression never overflows on any host.
//!
//! ## Submodules
//!
//! - `arith`: `abs`, `neg`, `add`, `sub`, `mul`, `sign`.
//! - `bitwise`: `and`, `or`, `xor`, `not`, `bit`, `bit_size`.
//! - `division`: `div`, `rem`, `div_euclid`, `rem_euclid` and their shared
//!   domain predicate `division_is_defined`.
//! - `shift`: `shl`, `shr` with negative amounts reversing direction.
//!
//! The `BoundedOps` trait exposes the same catalog with method syntax.

pub mod arith;
pub mod bitwise;
pub mod division;
pub mod shift;

use crate::num::bounded::BoundedInt;

/// Method-call access to the operation catalog (by value, no references).
///
/// Blanket-implemented for every `BoundedInt`; each method delegates to the
/// free function of the same name.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::BoundedOps;
/// assert_eq!(100_i8.bounded_add(27), Some(127));
/// assert_eq!(100_i8.bounded_add(50), None);
/// assert_eq!((-7_i8).bounded_rem_euclid(3), Some(2));
/// assert!(!(-128_i8).bounded_div(-1).is_some());
/// ```
pub trait BoundedOps: BoundedInt {
    fn bounded_abs(self) -> Option<Self>;
    fn bounded_neg(self) -> Option<Self>;
    fn bounded_add(self, v: Self) -> Option<Self>;
    fn bounded_sub(self, v: Self) -> Option<Self>;
    fn bounded_mul(self, v: Self) -> Option<Self>;
    fn bounded_and(self, v: Self) -> Option<Self>;
    fn bounded_or(self, v: Self) -> Option<Self>;
    fn bounded_xor(self, v: Self) -> Option<Self>;
    fn bounded_not(self) -> Option<Self>;
    fn bounded_sign(self) -> Option<Self>;
    fn bounded_bit(self, index: Self) -> Option<Self>;
    fn bounded_bit_size(self) -> Option<Self>;
    fn bounded_div(self, v: Self) -> Option<Self>;
    fn bounded_rem(self, v: Self) -> Option<Self>;
    fn bounded_div_euclid(self, v: Self) -> Option<Self>;
    fn bounded_rem_euclid(self, v: Self) -> Option<Self>;
    fn bounded_shl(self, amount: Self) -> Option<Self>;
    fn bounded_shr(self, amount: Self) -> Option<Self>;
}

macro_rules! delegate_unary {
    ($($method:ident => $path:path),* $(,)?) => {
        $(
            #[inline(always)]
            fn $method(self) -> Option<Self> {
                $path(self)
            }
        )*
    };
}

macro_rules! delegate_binary {
    ($($method:ident => $path:path),* $(,)?) => {
        $(
            #[inline(always)]
            fn $method(self, v: Self) -> Option<Self> {
                $path(self, v)
            }
        )*
    };
}

impl<T> BoundedOps for T
where
    T: BoundedInt,
{
    delegate_unary!(
        bounded_abs => arith::abs,
        bounded_neg => arith::neg,
        bounded_not => bitwise::not,
        bounded_sign => arith::sign,
        bounded_bit_size => bitwise::bit_size,
    );

    delegate_binary!(
        bounded_add => arith::add,
        bounded_sub => arith::sub,
        bounded_mul => arith::mul,
        bounded_and => bitwise::and,
        bounded_or => bitwise::or,
        bounded_xor => bitwise::xor,
        bounded_bit => bitwise::bit,
        bounded_div => division::div,
        bounded_rem => division::rem,
        bounded_div_euclid => division::div_euclid,
        bounded_rem_euclid => division::rem_euclid,
        bounded_shl => shift::shl,
        bounded_shr => shift::shr,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_delegate() {
        assert_eq!((-5_i8).bounded_abs(), Some(5));
        assert_eq!(i8::MIN.bounded_neg(), None);
        assert_eq!(16_i8.bounded_mul(8), None);
        assert_eq!(16_i8.bounded_mul(7), Some(112));
        assert_eq!(0_i8.bounded_bit_size(), Some(1));
        assert_eq!(1_i8.bounded_shl(6), Some(64));
        assert_eq!(64_i8.bounded_shr(6), Some(1));
        assert_eq!(6_i32.bounded_bit(1), Some(1));
        assert_eq!((-7_i64).bounded_div_euclid(3), Some(-3));
        assert_eq!(0x0F_i16.bounded_and(0x3C), Some(0x0C));
    }

    #[test]
    fn test_verdict_only_usage() {
        let feasible = |x: i8, y: i8| x.bounded_add(y).is_some();
        assert!(feasible(100, 27));
        assert!(!feasible(100, 50));
    }
}
