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

//! # Checkint Harness
//!
//! Differential testing of `checkint-core` against reference implementations
//! that compute in a strictly wider integer type and narrow the result back.
//! Both families share the same contract (success with a value, or failure),
//! but detect overflow by unrelated mechanisms, so agreement across a whole
//! operand domain is strong evidence that both are right.
//!
//! ## Modules
//!
//! - `widen`: the wide intermediate type of each width and lossless narrowing.
//! - `conservative`: the reference implementation of every operation.
//! - `operation`: the operation catalog and its pairs of implementations.
//! - `sweep`: operand sources (exhaustive and sampled) and comparison loops.
//! - `monitor`: observers for sweep progress and mismatches.
//! - `mismatch`, `stats`: what a run finds and counts.
//! - `config`, `harness`: run configuration and the run itself.
//! - `report`: runs selected by bit count at run time.
//! - `error`: configuration and policy errors.
//!
//! ## Example
//!
//! ```rust
//! use checkint_harness::config::HarnessConfig;
//! use checkint_harness::report::{Reporting, run_for_width};
//!
//! let report = run_for_width(8, &HarnessConfig::default(), Reporting::Silent)
//!     .expect("8-bit exhaustive sweeps are supported");
//! assert_eq!(report.total_mismatches(), 0);
//! ```

pub mod config;
pub mod conservative;
pub mod error;
pub mod harness;
pub mod mismatch;
pub mod monitor;
pub mod operation;
pub mod report;
pub mod stats;
pub mod sweep;
pub mod widen;
