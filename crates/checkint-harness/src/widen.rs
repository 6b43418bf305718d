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

//! Wide intermediate types for the reference implementations.
//!
//! A `Widen` type names an intermediate `Wide` type with at least twice as
//! many bits, enough that no product, sum, or shift of two narrow operands
//! can overflow it. `narrow` detects overflow by truncating the wide value
//! back to the narrow width and checking that widening it again reproduces
//! the original exactly.

use checkint_core::num::bounded::BoundedInt;
use num_traits::{AsPrimitive, Euclid, PrimInt, Signed};
use std::fmt::{Debug, Display};

/// A bounded integer paired with a strictly wider intermediate type.
///
/// # Examples
///
/// ```rust
/// # use checkint_harness::widen::Widen;
/// assert_eq!(i8::narrow(127_i32), Some(127_i8));
/// assert_eq!(i8::narrow(128_i32), None);
/// assert_eq!(i8::narrow(-129_i32), None);
/// ```
pub trait Widen: BoundedInt {
    /// The intermediate type used by reference computations.
    type Wide: PrimInt + Signed + Euclid + AsPrimitive<Self> + Debug + Display;

    /// Bits in `Wide`. Always at least `2 * Self::BITS`.
    const WIDE_BITS: u32;

    /// Sign-extends `self` into the wide type.
    fn widen(self) -> Self::Wide;

    /// Reinterprets the low `BITS` bits of `bits` as a two's complement value.
    fn from_bit_pattern(bits: u64) -> Self;

    /// Narrows `wide` back to `Self`, or `None` if the value does not survive
    /// a truncate-then-widen round trip.
    #[inline]
    fn narrow(wide: Self::Wide) -> Option<Self> {
        let narrowed: Self = wide.as_();
        if narrowed.widen() == wide {
            Some(narrowed)
        } else {
            None
        }
    }

    /// Converts a small count (a bit index or bit width) into the wide type.
    fn wide_count(n: u32) -> Self::Wide;
}

macro_rules! impl_widen {
    ($($t:ty => $wide:ty, $bits:ty);* $(;)?) => {
        $(
            impl Widen for $t {
                type Wide = $wide;

                const WIDE_BITS: u32 = <$wide>::BITS;

                #[inline(always)]
                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }

                #[inline(always)]
                fn from_bit_pattern(bits: u64) -> Self {
                    bits as $bits as $t
                }

                #[inline(always)]
                fn wide_count(n: u32) -> $wide {
                    n as $wide
                }
            }
        )*
    };
}

impl_widen!(
    i8 => i32, u8;
    i16 => i64, u16;
    i32 => i64, u32;
    i64 => i128, u64;
);

#[cfg(test)]
mod tests {
    use super::*;

    fn check_wide_is_wide_enough<T: Widen>() {
        assert!(T::WIDE_BITS >= 2 * T::BITS);
    }

    #[test]
    fn test_widths() {
        check_wide_is_wide_enough::<i8>();
        check_wide_is_wide_enough::<i16>();
        check_wide_is_wide_enough::<i32>();
        check_wide_is_wide_enough::<i64>();
    }

    #[test]
    fn test_narrow_round_trip() {
        assert_eq!(i8::narrow(-128), Some(i8::MIN));
        assert_eq!(i8::narrow(256), None);
        assert_eq!(i16::narrow(32_768), None);
        assert_eq!(i32::narrow(i64::from(i32::MIN)), Some(i32::MIN));
        assert_eq!(i64::narrow(i128::from(i64::MAX) + 1), None);
    }

    #[test]
    fn test_from_bit_pattern() {
        assert_eq!(i8::from_bit_pattern(0x80), -128);
        assert_eq!(i8::from_bit_pattern(0xFF), -1);
        assert_eq!(i8::from_bit_pattern(0x17F), 127);
        assert_eq!(i16::from_bit_pattern(0x8000), i16::MIN);
        assert_eq!(i64::from_bit_pattern(u64::MAX), -1);
    }

    #[test]
    fn test_wide_count() {
        assert_eq!(i8::wide_count(0), 0_i32);
        assert_eq!(i8::wide_count(8), 8_i32);
        assert_eq!(i64::wide_count(64), 64_i128);
    }
}
