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

//! Monitoring combinators for differential sweeps
//!
//! Provides `CompositeSweepMonitor`, a fan‑out monitor that forwards every
//! event to its children, so console output and mismatch collection can run
//! side by side without the harness knowing about either.
//!
//! Events are dispatched to child monitors in insertion order.

use crate::{
    mismatch::Mismatch,
    monitor::sweep_monitor::SweepMonitor,
    operation::Operation,
    stats::{OperationStatistics, SweepStatistics},
};
use checkint_core::num::bounded::BoundedInt;

/// A sweep monitor that forwards events to all of its children.
pub struct CompositeSweepMonitor<'a, T>
where
    T: BoundedInt,
{
    monitors: Vec<Box<dyn SweepMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeSweepMonitor<'a, T>
where
    T: BoundedInt,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeSweepMonitor<'a, T>
where
    T: BoundedInt,
{
    /// Creates a new empty `CompositeSweepMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSweepMonitor` with room for `capacity` children.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SweepMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> SweepMonitor<T> for CompositeSweepMonitor<'a, T>
where
    T: BoundedInt,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeSweepMonitor"
    }

    #[inline(always)]
    fn on_enter_sweep(&mut self, operations: &[Operation]) {
        for monitor in &mut self.monitors {
            monitor.on_enter_sweep(operations);
        }
    }

    #[inline(always)]
    fn on_start_operation(&mut self, operation: Operation, cases: u64) {
        for monitor in &mut self.monitors {
            monitor.on_start_operation(operation, cases);
        }
    }

    #[inline(always)]
    fn on_mismatch(&mut self, mismatch: &Mismatch<T>) {
        for monitor in &mut self.monitors {
            monitor.on_mismatch(mismatch);
        }
    }

    #[inline(always)]
    fn on_finish_operation(&mut self, statistics: &OperationStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_finish_operation(statistics);
        }
    }

    #[inline(always)]
    fn on_exit_sweep(&mut self, statistics: &SweepStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_sweep(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mismatch::Operands;
    use crate::monitor::collector::MismatchCollector;

    #[derive(Default)]
    struct CountingMonitor {
        events: Vec<&'static str>,
    }

    impl SweepMonitor<i8> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_sweep(&mut self, _operations: &[Operation]) {
            self.events.push("enter");
        }
        fn on_start_operation(&mut self, _operation: Operation, _cases: u64) {
            self.events.push("start");
        }
        fn on_mismatch(&mut self, _mismatch: &Mismatch<i8>) {
            self.events.push("mismatch");
        }
        fn on_finish_operation(&mut self, _statistics: &OperationStatistics) {
            self.events.push("finish");
        }
        fn on_exit_sweep(&mut self, _statistics: &SweepStatistics) {
            self.events.push("exit");
        }
    }

    #[test]
    fn test_composite_forwards_to_all_children() {
        let mut first = CountingMonitor::default();
        let mut collector = MismatchCollector::<i8>::new(4);
        {
            let mut composite = CompositeSweepMonitor::<i8>::new();
            composite.add_monitor(&mut first);
            composite.add_monitor(&mut collector);
            assert_eq!(composite.len(), 2);

            let mismatch = Mismatch::new(Operation::Add, Operands::Binary(1, 1), None, Some(2));
            composite.on_enter_sweep(&[Operation::Add]);
            composite.on_start_operation(Operation::Add, 1);
            composite.on_mismatch(&mismatch);
            composite.on_finish_operation(&OperationStatistics::new(Operation::Add));
            composite.on_exit_sweep(&SweepStatistics::default());
        }
        assert_eq!(first.events, ["enter", "start", "mismatch", "finish", "exit"]);
        assert_eq!(collector.mismatches().len(), 1);
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeSweepMonitor::<i16>::default();
        assert!(composite.is_empty());
        assert_eq!(composite.name(), "CompositeSweepMonitor");
    }
}
