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

use crate::operation::Operation;
use std::time::Duration;

/// Counters for the sweep of a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatistics {
    /// The operation these counters belong to.
    pub operation: Operation,
    /// Total cases compared.
    pub cases: u64,
    /// Cases where both implementations succeeded with the same value.
    pub both_succeeded: u64,
    /// Cases where both implementations failed.
    pub both_failed: u64,
    /// Cases where the implementations disagreed.
    pub mismatches: u64,
    /// Wall time spent on this operation.
    pub elapsed: Duration,
}

impl OperationStatistics {
    #[inline]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            cases: 0,
            both_succeeded: 0,
            both_failed: 0,
            mismatches: 0,
            elapsed: Duration::ZERO,
        }
    }

    #[inline]
    pub fn on_agreement_success(&mut self) {
        self.cases = self.cases.saturating_add(1);
        self.both_succeeded = self.both_succeeded.saturating_add(1);
    }

    #[inline]
    pub fn on_agreement_failure(&mut self) {
        self.cases = self.cases.saturating_add(1);
        self.both_failed = self.both_failed.saturating_add(1);
    }

    #[inline]
    pub fn on_mismatch(&mut self) {
        self.cases = self.cases.saturating_add(1);
        self.mismatches = self.mismatches.saturating_add(1);
    }

    #[inline]
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Returns `true` if no mismatch was recorded.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }
}

impl std::fmt::Display for OperationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<11} | {:>12} | {:>12} | {:>12} | {:>10} | {:>9.2?}",
            self.operation.name(),
            self.cases,
            self.both_succeeded,
            self.both_failed,
            self.mismatches,
            self.elapsed
        )
    }
}

/// Counters for a complete harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepStatistics {
    /// Per-operation counters in the order the operations ran.
    pub operations: Vec<OperationStatistics>,
    /// Total wall time of the run.
    pub time_total: Duration,
}

impl SweepStatistics {
    #[inline]
    pub fn push(&mut self, stats: OperationStatistics) {
        self.operations.push(stats);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    pub fn total_cases(&self) -> u64 {
        self.operations
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.cases))
    }

    pub fn total_mismatches(&self) -> u64 {
        self.operations
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.mismatches))
    }

    #[inline]
    pub fn has_mismatches(&self) -> bool {
        self.operations.iter().any(|s| !s.is_clean())
    }

    /// Looks up the counters of one operation.
    pub fn get(&self, operation: Operation) -> Option<&OperationStatistics> {
        self.operations.iter().find(|s| s.operation == operation)
    }
}

impl std::fmt::Display for SweepStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Checkint Differential Statistics:")?;
        writeln!(
            f,
            "{:<11} | {:>12} | {:>12} | {:>12} | {:>10} | {:>9}",
            "Operation", "Cases", "Both ok", "Both failed", "Mismatches", "Time"
        )?;
        writeln!(f, "{}", "-".repeat(82))?;
        for stats in &self.operations {
            writeln!(f, "{}", stats)?;
        }
        writeln!(f, "{}", "-".repeat(82))?;
        writeln!(f, "  Cases compared:       {}", self.total_cases())?;
        writeln!(f, "  Mismatches:           {}", self.total_mismatches())?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
