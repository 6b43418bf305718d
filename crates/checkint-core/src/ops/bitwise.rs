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

//! Bitwise operations, bit extraction, and sign-extended bit size.
//!
//! `and`, `or`, `xor` and `not` cannot fail; they return `Option` only so
//! that every catalog operation has the same shape.

use crate::num::bounded::BoundedInt;

/// Bitwise AND. Never fails.
#[inline]
pub fn and<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    Some(x & y)
}

/// Bitwise OR. Never fails.
#[inline]
pub fn or<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    Some(x | y)
}

/// Bitwise XOR. Never fails.
#[inline]
pub fn xor<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    Some(x ^ y)
}

/// Bitwise complement. Never fails.
#[inline]
pub fn not<T>(x: T) -> Option<T>
where
    T: BoundedInt,
{
    Some(!x)
}

/// Bit `y` of `x`, as `0` or `1`.
///
/// `x` is treated as sign-extended to infinite width, so any index at or
/// beyond `BITS` yields the sign bit. Fails for a negative index.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::bitwise::bit;
/// assert_eq!(bit(0b0100_i8, 2), Some(1));
/// assert_eq!(bit(-1_i8, 100), Some(1));
/// assert_eq!(bit(1_i8, -1), None);
/// ```
#[inline]
pub fn bit<T>(x: T, y: T) -> Option<T>
where
    T: BoundedInt,
{
    if y < T::ZERO {
        return None;
    }
    if y >= T::WIDTH {
        return Some(if x < T::ZERO { T::PLUS_ONE } else { T::ZERO });
    }
    let shift = y.to_usize()?;
    Some((x >> shift) & T::PLUS_ONE)
}

/// The number of bits needed to represent `x` in two's complement,
/// including the sign bit. `0` and `-1` both need a single bit.
///
/// Negative inputs are folded onto `!x`, which has the same magnitude class,
/// and the highest set bit of the folded value is located by halving the
/// search window. The loop runs `log2(BITS)` times regardless of `x`.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::ops::bitwise::bit_size;
/// assert_eq!(bit_size(0_i8), Some(1));
/// assert_eq!(bit_size(-1_i8), Some(1));
/// assert_eq!(bit_size(127_i8), Some(8));
/// assert_eq!(bit_size(-128_i8), Some(8));
/// ```
#[inline]
pub fn bit_size<T>(x: T) -> Option<T>
where
    T: BoundedInt,
{
    let mut folded = if x < T::ZERO { !x } else { x };
    let mut count: u32 = 0;
    let mut step = T::BITS / 2;
    while step > 0 {
        let shifted = folded >> step as usize;
        if shifted != T::ZERO {
            folded = shifted;
            count += step;
        }
        step /= 2;
    }
    // `folded` is now 0 or 1.
    if folded != T::ZERO {
        count += 1;
    }
    num_traits::cast(count + 1)
}
