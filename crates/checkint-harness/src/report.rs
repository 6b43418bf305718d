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

//! Width-erased runs.
//!
//! The harness is generic over the integer width; command-line and C callers
//! choose the width at run time. `run_for_width` dispatches a bit count to
//! the matching instantiation and returns a `HarnessReport`, which keeps the
//! statistics and the rendered mismatches but no longer depends on the width.

use crate::{
    config::{HarnessConfig, SweepStrategy},
    error::HarnessError,
    harness::{Harness, HarnessOutcome},
    monitor::{log::LogSweepMonitor, no_op::NoOperationMonitor, sweep_monitor::SweepMonitor},
    stats::SweepStatistics,
    widen::Widen,
};
use rand::distr::{Distribution, StandardUniform};

/// The widths `run_for_width` accepts.
pub const SUPPORTED_WIDTHS: [u32; 4] = [8, 16, 32, 64];

/// How a width-erased run reports progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Reporting {
    /// No output.
    #[default]
    Silent,
    /// Console output through `LogSweepMonitor`.
    Console {
        /// Print only mismatches and the final table.
        quiet: bool,
        /// Mismatch lines printed per operation before suppression.
        max_mismatch_lines: u64,
    },
}

/// The width-erased result of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessReport {
    bits: u32,
    strategy: SweepStrategy,
    fail_on_mismatch: bool,
    statistics: SweepStatistics,
    mismatches: Vec<String>,
    unretained_mismatches: u64,
}

impl HarnessReport {
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn strategy(&self) -> SweepStrategy {
        self.strategy
    }

    #[inline]
    pub fn statistics(&self) -> &SweepStatistics {
        &self.statistics
    }

    /// The retained mismatches, rendered as `op(x, y): tricky=.. conservative=..`.
    #[inline]
    pub fn mismatches(&self) -> &[String] {
        &self.mismatches
    }

    #[inline]
    pub fn unretained_mismatches(&self) -> u64 {
        self.unretained_mismatches
    }

    #[inline]
    pub fn total_mismatches(&self) -> u64 {
        self.statistics.total_mismatches()
    }

    #[inline]
    pub fn total_cases(&self) -> u64 {
        self.statistics.total_cases()
    }

    /// Returns `false` only if the run found mismatches and was configured to
    /// fail on them.
    #[inline]
    pub fn passed(&self) -> bool {
        !(self.fail_on_mismatch && self.statistics.has_mismatches())
    }

    /// Applies the mismatch policy: a failed report becomes
    /// `HarnessError::MismatchesFound`.
    pub fn into_result(self) -> Result<Self, HarnessError> {
        if self.passed() {
            Ok(self)
        } else {
            Err(HarnessError::MismatchesFound {
                mismatches: self.total_mismatches(),
                cases: self.total_cases(),
            })
        }
    }

    /// Erases the width of `outcome`, a sweep produced by `harness`.
    pub fn from_outcome<T>(harness: &Harness<T>, outcome: HarnessOutcome<T>) -> Self
    where
        T: Widen,
        StandardUniform: Distribution<T>,
    {
        let mismatches = outcome.mismatches().iter().map(|m| m.to_string()).collect();
        let unretained_mismatches = outcome.unretained_mismatches();
        Self {
            bits: T::BITS,
            strategy: harness.strategy(),
            fail_on_mismatch: harness.config().is_fail_on_mismatch(),
            statistics: outcome.into_statistics(),
            mismatches,
            unretained_mismatches,
        }
    }

    /// A short human-readable summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "{}-bit {} sweep: {} case(s), {} mismatch(es), {}",
            self.bits,
            self.strategy,
            self.total_cases(),
            self.total_mismatches(),
            if self.passed() { "passed" } else { "failed" }
        )
    }
}

impl std::fmt::Display for HarnessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statistics)?;
        write!(f, "{}", self.summary())
    }
}

fn run_typed<T>(config: &HarnessConfig, reporting: Reporting) -> Result<HarnessReport, HarnessError>
where
    T: Widen,
    StandardUniform: Distribution<T>,
{
    let harness = Harness::<T>::new(config.clone());
    let mut monitor: Box<dyn SweepMonitor<T>> = match reporting {
        Reporting::Silent => Box::new(NoOperationMonitor::<T>::new()),
        Reporting::Console {
            quiet,
            max_mismatch_lines,
        } => Box::new(LogSweepMonitor::<T>::new(quiet, max_mismatch_lines)),
    };

    let outcome = harness.sweep(monitor.as_mut())?;
    Ok(HarnessReport::from_outcome(&harness, outcome))
}

/// Runs the harness at `bits` (one of `SUPPORTED_WIDTHS`).
///
/// Configuration errors are returned as `Err`. Mismatches never are; use
/// `HarnessReport::passed` or `HarnessReport::into_result` to apply the
/// mismatch policy.
pub fn run_for_width(
    bits: u32,
    config: &HarnessConfig,
    reporting: Reporting,
) -> Result<HarnessReport, HarnessError> {
    match bits {
        8 => run_typed::<i8>(config, reporting),
        16 => run_typed::<i16>(config, reporting),
        32 => run_typed::<i32>(config, reporting),
        64 => run_typed::<i64>(config, reporting),
        other => Err(HarnessError::UnsupportedWidth(other)),
    }
}
