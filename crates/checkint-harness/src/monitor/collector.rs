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

use crate::{
    mismatch::Mismatch,
    monitor::sweep_monitor::SweepMonitor,
    operation::Operation,
    stats::{OperationStatistics, SweepStatistics},
};
use checkint_core::num::bounded::BoundedInt;

/// A monitor that keeps the first `limit` mismatches of a run and counts the
/// rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MismatchCollector<T>
where
    T: BoundedInt,
{
    limit: usize,
    mismatches: Vec<Mismatch<T>>,
    overflowed: u64,
}

impl<T> MismatchCollector<T>
where
    T: BoundedInt,
{
    /// Creates a collector that retains at most `limit` mismatches.
    #[inline]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            mismatches: Vec::with_capacity(limit.min(64)),
            overflowed: 0,
        }
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The retained mismatches, in the order they were found.
    #[inline]
    pub fn mismatches(&self) -> &[Mismatch<T>] {
        &self.mismatches
    }

    /// Number of mismatches seen after the limit was reached.
    #[inline]
    pub fn overflowed(&self) -> u64 {
        self.overflowed
    }

    /// Total number of mismatches seen.
    #[inline]
    pub fn total(&self) -> u64 {
        (self.mismatches.len() as u64).saturating_add(self.overflowed)
    }

    #[inline]
    pub fn into_mismatches(self) -> Vec<Mismatch<T>> {
        self.mismatches
    }
}

impl<T> SweepMonitor<T> for MismatchCollector<T>
where
    T: BoundedInt,
{
    fn name(&self) -> &str {
        "MismatchCollector"
    }

    fn on_enter_sweep(&mut self, _operations: &[Operation]) {
        self.mismatches.clear();
        self.overflowed = 0;
    }

    fn on_start_operation(&mut self, _operation: Operation, _cases: u64) {}

    fn on_mismatch(&mut self, mismatch: &Mismatch<T>) {
        if self.mismatches.len() < self.limit {
            self.mismatches.push(*mismatch);
        } else {
            self.overflowed = self.overflowed.saturating_add(1);
        }
    }

    fn on_finish_operation(&mut self, _statistics: &OperationStatistics) {}

    fn on_exit_sweep(&mut self, _statistics: &SweepStatistics) {}
}
