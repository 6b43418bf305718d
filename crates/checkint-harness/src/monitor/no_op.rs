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

/// A monitor that ignores every event.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: BoundedInt,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: BoundedInt,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SweepMonitor<T> for NoOperationMonitor<T>
where
    T: BoundedInt,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_sweep(&mut self, _operations: &[Operation]) {}

    #[inline(always)]
    fn on_start_operation(&mut self, _operation: Operation, _cases: u64) {}

    #[inline(always)]
    fn on_mismatch(&mut self, _mismatch: &Mismatch<T>) {}

    #[inline(always)]
    fn on_finish_operation(&mut self, _statistics: &OperationStatistics) {}

    #[inline(always)]
    fn on_exit_sweep(&mut self, _statistics: &SweepStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_monitor_name() {
        let monitor = NoOperationMonitor::<i8>::new();
        assert_eq!(monitor.name(), "NoOperationMonitor");
        let dyn_monitor: &dyn SweepMonitor<i8> = &monitor;
        assert_eq!(format!("{}", dyn_monitor), "SweepMonitor(NoOperationMonitor)");
    }
}
