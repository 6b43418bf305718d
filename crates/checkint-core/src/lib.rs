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

//! # Checkint Core
//!
//! Arithmetic, bitwise, and shift operations over fixed-width signed integers
//! with overflow detected by inspecting the operands, never the result.
//!
//! Signed overflow is undefined or unspecified in many environments, so a
//! result cannot be trusted to reveal that it overflowed. Every operation in
//! this crate compares its operands against precomputed bounds first and
//! only evaluates the operation once it is known to be representable.
//!
//! ## Modules
//!
//! - `num`: The `BoundedInt` width abstraction (`BITS`, `MIN`, `MAX`, `WIDTH`)
//!   for `i8` through `i128`, and the `BoundedDomain` iterator over `[MIN, MAX]`.
//! - `ops`: The operation catalog as free functions returning `Option<T>`, and
//!   the `BoundedOps` method trait.
//!
//! ## Failure semantics
//!
//! `None` covers three situations, none of which carries a payload:
//! division or remainder by zero, a result outside `[MIN, MAX]` (including
//! `MIN / -1`), and a negative bit index.
//!
//! ```rust
//! use checkint_core::ops::{arith, division, shift};
//!
//! assert_eq!(arith::add(100_i8, 27), Some(127));
//! assert_eq!(arith::add(100_i8, 50), None);
//! assert_eq!(division::rem(-7_i8, 3), Some(-1));
//! assert_eq!(division::rem_euclid(-7_i8, 3), Some(2));
//! assert_eq!(shift::shl(1_i8, 7), None);
//! ```

pub mod num;
pub mod ops;
