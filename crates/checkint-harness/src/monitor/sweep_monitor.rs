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

//! Sweep monitoring interface
//!
//! Declares the `SweepMonitor` trait for observing a differential run.
//! The harness reports the lifecycle of every operation sweep and each
//! disagreement between the two implementations it compares.
//!
//! Lifecycle
//! - enter → {start operation → mismatch* → finish operation}* → exit
//! - `SweepStatistics` is handed over once, when the run exits.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are driven from a single thread.
//! - `on_mismatch` sits on the hot path of a broken implementation; keep it
//!   cheap or bound the work it does.

use crate::{
    mismatch::Mismatch,
    operation::Operation,
    stats::{OperationStatistics, SweepStatistics},
};
use checkint_core::num::bounded::BoundedInt;

/// Trait for observing a differential sweep.
pub trait SweepMonitor<T>
where
    T: BoundedInt,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first operation is swept.
    fn on_enter_sweep(&mut self, operations: &[Operation]);
    /// Called before the cases of `operation` are compared. `cases` is the
    /// number of cases the sweep will visit.
    fn on_start_operation(&mut self, operation: Operation, cases: u64);
    /// Called for every case where the implementations disagree.
    fn on_mismatch(&mut self, mismatch: &Mismatch<T>);
    /// Called after the last case of an operation.
    fn on_finish_operation(&mut self, statistics: &OperationStatistics);
    /// Called once after the last operation.
    fn on_exit_sweep(&mut self, statistics: &SweepStatistics);
}

impl<T, M> SweepMonitor<T> for &mut M
where
    T: BoundedInt,
    M: SweepMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_sweep(&mut self, operations: &[Operation]) {
        (**self).on_enter_sweep(operations)
    }

    #[inline(always)]
    fn on_start_operation(&mut self, operation: Operation, cases: u64) {
        (**self).on_start_operation(operation, cases)
    }

    #[inline(always)]
    fn on_mismatch(&mut self, mismatch: &Mismatch<T>) {
        (**self).on_mismatch(mismatch)
    }

    #[inline(always)]
    fn on_finish_operation(&mut self, statistics: &OperationStatistics) {
        (**self).on_finish_operation(statistics)
    }

    #[inline(always)]
    fn on_exit_sweep(&mut self, statistics: &SweepStatistics) {
        (**self).on_exit_sweep(statistics)
    }
}

impl<T> std::fmt::Debug for dyn SweepMonitor<T>
where
    T: BoundedInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SweepMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SweepMonitor<T>
where
    T: BoundedInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SweepMonitor({})", self.name())
    }
}
