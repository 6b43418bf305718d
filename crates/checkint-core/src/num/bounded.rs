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

//! # Bounded Integer Widths
//!
//! The single parameterization point for every operation in this crate.
//! `BoundedInt` exposes the width (`BITS`), the bounds (`MIN`, `MAX`), and a
//! handful of small constants as associated items, so the algorithms in
//! `crate::ops` are written once in terms of these names and never in terms
//! of width-specific literals.
//!
//! Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A signed, fixed-width integer whose bounds are known at compile time.
///
/// # Invariants
///
/// - `MIN == -2^(BITS-1)` and `MAX == 2^(BITS-1) - 1`.
/// - `WIDTH` is `BITS` represented as a value of the type itself; it is
///   representable for every implementing type.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::num::bounded::BoundedInt;
/// assert_eq!(<i8 as BoundedInt>::BITS, 8);
/// assert_eq!(<i8 as BoundedInt>::MIN, -128);
/// assert_eq!(<i8 as BoundedInt>::MAX, 127);
/// assert_eq!(<i8 as BoundedInt>::WIDTH, 8);
/// ```
pub trait BoundedInt:
    PrimInt + Signed + Debug + Display + Hash + Default + Send + Sync + 'static
{
    /// The number of bits in the two's complement representation.
    const BITS: u32;
    /// The smallest representable value, `-2^(BITS-1)`.
    const MIN: Self;
    /// The largest representable value, `2^(BITS-1) - 1`.
    const MAX: Self;
    /// `BITS` as a value of `Self`.
    const WIDTH: Self;
    /// The constant `0`.
    const ZERO: Self;
    /// The constant `1`.
    const PLUS_ONE: Self;
    /// The constant `-1`.
    const MINUS_ONE: Self;
}

macro_rules! impl_bounded_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl BoundedInt for $t {
                const BITS: u32 = <$t>::BITS;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const WIDTH: Self = <$t>::BITS as $t;
                const ZERO: Self = 0;
                const PLUS_ONE: Self = 1;
                const MINUS_ONE: Self = -1;
            }
        )*
    };
}

impl_bounded_int!(i8, i16, i32, i64, i128, isize);
