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
use std::time::Instant;

/// A monitor that reports a run on standard output.
///
/// Prints a notice when an operation starts, one line per mismatch, and the
/// statistics table at the end. In quiet mode only mismatches and the table
/// are printed.
#[derive(Debug, Clone)]
pub struct LogSweepMonitor<T>
where
    T: BoundedInt,
{
    start_time: Instant,
    quiet: bool,
    max_mismatch_lines: u64,
    printed_for_operation: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogSweepMonitor<T>
where
    T: BoundedInt,
{
    /// Creates a monitor that prints at most `max_mismatch_lines` mismatch
    /// lines per operation.
    pub fn new(quiet: bool, max_mismatch_lines: u64) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
            max_mismatch_lines,
            printed_for_operation: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline(always)]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl<T> Default for LogSweepMonitor<T>
where
    T: BoundedInt,
{
    fn default() -> Self {
        Self::new(false, u64::MAX)
    }
}

impl<T> std::fmt::Display for LogSweepMonitor<T>
where
    T: BoundedInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogSweepMonitor(quiet: {}, max_mismatch_lines: {})",
            self.quiet, self.max_mismatch_lines
        )
    }
}

impl<T> SweepMonitor<T> for LogSweepMonitor<T>
where
    T: BoundedInt,
{
    fn name(&self) -> &str {
        "LogSweepMonitor"
    }

    fn on_enter_sweep(&mut self, operations: &[Operation]) {
        self.start_time = Instant::now();
        if !self.quiet {
            println!(
                "Comparing {} operation(s) on {}-bit integers",
                operations.len(),
                T::BITS
            );
        }
    }

    fn on_start_operation(&mut self, operation: Operation, cases: u64) {
        self.printed_for_operation = 0;
        if !self.quiet {
            println!("Testing {} ({} cases)...", operation, cases);
        }
    }

    fn on_mismatch(&mut self, mismatch: &Mismatch<T>) {
        if self.printed_for_operation < self.max_mismatch_lines {
            println!("  mismatch: {}", mismatch);
        } else if self.printed_for_operation == self.max_mismatch_lines {
            println!("  further mismatches for {} suppressed", mismatch.operation());
        }
        self.printed_for_operation = self.printed_for_operation.saturating_add(1);
    }

    fn on_finish_operation(&mut self, statistics: &OperationStatistics) {
        if !self.quiet && !statistics.is_clean() {
            println!(
                "  {} mismatch(es) in {} case(s) for {}",
                statistics.mismatches, statistics.cases, statistics.operation
            );
        }
    }

    fn on_exit_sweep(&mut self, statistics: &SweepStatistics) {
        println!("{}", statistics);
        if !self.quiet {
            println!(
                "Sweep finished in {:.2}s.",
                self.start_time.elapsed().as_secs_f64()
            );
        }
    }
}
