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

//! # Checkint FFI
//!
//! C-compatible bindings for the checkint core operations and the
//! differential harness.
//!
//! ## Conventions
//!
//! 1.  **Verdict plus optional output**: every catalog operation is exported as
//!     `checkint_<type>_<op>(out, x[, y]) -> bool` for `i8`, `i16`, `i32` and
//!     `i64`. `out` may be `NULL` when only the verdict is wanted, and it is
//!     never written on failure.
//! 2.  **Opaque Handles**: harness reports are hidden behind raw pointers and
//!     read through accessor functions. Every `checkint_diff_run` must be
//!     paired with `checkint_diff_report_free`.
//! 3.  **Fail-Fast Safety**: passing `NULL` handles or out-of-range indices to
//!     accessors aborts with a panic rather than reading invalid memory.

pub mod ops;
pub mod report;
