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

//! # Differential Harness
//!
//! Runs each configured operation through its optimized and reference
//! implementations and compares every case.
//!
//! ## Run lifecycle
//!
//! 1. The configuration is validated up front: an empty selection, or an
//!    exhaustive strategy for a domain too large to enumerate, is rejected
//!    before any case runs.
//! 2. Operations are swept one after the other in configuration order. Each
//!    sweep reports its progress and mismatches to the caller's monitor and to
//!    an internal `MismatchCollector`.
//! 3. The outcome carries the statistics and the retained mismatches.
//!    `Harness::run` turns it into `HarnessError::MismatchesFound` only when
//!    the run is configured to fail on mismatches; `Harness::sweep` never
//!    does.
//!
//! ## Usage
//!
//! ```rust
//! use checkint_harness::config::HarnessConfig;
//! use checkint_harness::harness::Harness;
//! use checkint_harness::monitor::no_op::NoOperationMonitor;
//! use checkint_harness::operation::Operation;
//!
//! let config = HarnessConfig::builder()
//!     .with_operations([Operation::Add, Operation::Abs])
//!     .fail_on_mismatch(true)
//!     .build();
//!
//! let outcome = Harness::<i8>::new(config)
//!     .run(&mut NoOperationMonitor::new())
//!     .expect("the 8-bit catalog agrees");
//!
//! assert_eq!(outcome.statistics().total_cases(), 65_536 + 256);
//! assert!(outcome.is_clean());
//! ```

use crate::{
    config::{HarnessConfig, SweepStrategy},
    error::HarnessError,
    mismatch::Mismatch,
    monitor::{
        collector::MismatchCollector, composite::CompositeSweepMonitor,
        sweep_monitor::SweepMonitor,
    },
    operation::{ImplementationLookup, Implementations, Operation},
    stats::{OperationStatistics, SweepStatistics},
    sweep::{
        PackedPairs, exhaustive_binary_cases, exhaustive_unary_cases, sampled_binary_cases,
        sampled_pairs, sampled_unary_cases, sampled_values, sweep_binary, sweep_unary,
    },
    widen::Widen,
};
use checkint_core::num::domain::BoundedDomain;
use rand::distr::{Distribution, StandardUniform};
use std::time::Instant;

/// The result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessOutcome<T>
where
    T: Widen,
{
    statistics: SweepStatistics,
    mismatches: Vec<Mismatch<T>>,
    unretained_mismatches: u64,
}

impl<T> HarnessOutcome<T>
where
    T: Widen,
{
    #[inline]
    pub fn statistics(&self) -> &SweepStatistics {
        &self.statistics
    }

    /// The first mismatches of the run, up to the configured limit.
    #[inline]
    pub fn mismatches(&self) -> &[Mismatch<T>] {
        &self.mismatches
    }

    /// Mismatches counted but not retained because the limit was reached.
    #[inline]
    pub fn unretained_mismatches(&self) -> u64 {
        self.unretained_mismatches
    }

    /// Returns `true` if both implementations agreed on every case.
    #[inline]
    pub fn is_clean(&self) -> bool {
        !self.statistics.has_mismatches()
    }

    #[inline]
    pub fn into_statistics(self) -> SweepStatistics {
        self.statistics
    }
}

impl<T> std::fmt::Display for HarnessOutcome<T>
where
    T: Widen,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statistics)
    }
}

/// A differential run over one integer width.
#[derive(Debug, Clone)]
pub struct Harness<T> {
    config: HarnessConfig,
    lookup: ImplementationLookup<T>,
}

impl<T> Harness<T>
where
    T: Widen,
    StandardUniform: Distribution<T>,
{
    #[inline]
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            lookup: Operation::implementations::<T>,
        }
    }

    /// Replaces the catalog lookup, so that a candidate implementation can be
    /// swept against a reference of the caller's choice.
    #[inline]
    pub fn with_implementations(mut self, lookup: ImplementationLookup<T>) -> Self {
        self.lookup = lookup;
        self
    }

    #[inline]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The strategy this harness sweeps with at width `T`.
    #[inline]
    pub fn strategy(&self) -> SweepStrategy {
        self.config.strategy_for_bits(T::BITS)
    }

    /// Checks the configuration without running any case.
    pub fn validate(&self) -> Result<(), HarnessError> {
        let operations = self.config.operations();
        if operations.is_empty() {
            return Err(HarnessError::NoOperations);
        }

        let strategy = self.strategy();
        if let Some(&operation) = operations
            .iter()
            .find(|op| !strategy.supports(op.arity(), T::BITS))
        {
            return Err(HarnessError::DomainTooLarge {
                operation,
                bits: T::BITS,
            });
        }
        Ok(())
    }

    /// Runs every configured operation, reports to `monitor`, and applies the
    /// configured mismatch policy to the outcome.
    pub fn run<M>(&self, monitor: &mut M) -> Result<HarnessOutcome<T>, HarnessError>
    where
        M: SweepMonitor<T> + ?Sized,
    {
        let outcome = self.sweep(monitor)?;
        if self.config.is_fail_on_mismatch() && !outcome.is_clean() {
            return Err(HarnessError::MismatchesFound {
                mismatches: outcome.statistics.total_mismatches(),
                cases: outcome.statistics.total_cases(),
            });
        }
        Ok(outcome)
    }

    /// Runs every configured operation and reports to `monitor`.
    ///
    /// Only configuration errors are returned; mismatches are always part of
    /// the outcome regardless of the mismatch policy.
    pub fn sweep<M>(&self, monitor: &mut M) -> Result<HarnessOutcome<T>, HarnessError>
    where
        M: SweepMonitor<T> + ?Sized,
    {
        self.validate()?;

        let start = Instant::now();
        let strategy = self.strategy();
        let operations = self.config.operations();
        let mut statistics = SweepStatistics::default();
        let mut collector = MismatchCollector::new(self.config.mismatch_limit());

        {
            let mut composite = CompositeSweepMonitor::with_capacity(2);
            composite.add_monitor(&mut *monitor);
            composite.add_monitor(&mut collector);

            composite.on_enter_sweep(operations);
            for &operation in operations {
                let op_stats = self.sweep_operation(operation, strategy, &mut composite);
                statistics.push(op_stats);
            }
            statistics.set_total_time(start.elapsed());
            composite.on_exit_sweep(&statistics);
        }

        let unretained_mismatches = collector.overflowed();
        Ok(HarnessOutcome {
            statistics,
            mismatches: collector.into_mismatches(),
            unretained_mismatches,
        })
    }

    fn sweep_operation<M>(
        &self,
        operation: Operation,
        strategy: SweepStrategy,
        monitor: &mut M,
    ) -> OperationStatistics
    where
        M: SweepMonitor<T> + ?Sized,
    {
        match (self.lookup)(operation) {
            Implementations::Unary {
                tricky,
                conservative,
            } => match strategy {
                SweepStrategy::Exhaustive => sweep_unary(
                    operation,
                    tricky,
                    conservative,
                    BoundedDomain::<T>::full(),
                    exhaustive_unary_cases::<T>(),
                    monitor,
                ),
                SweepStrategy::Sampled { samples, seed } => sweep_unary(
                    operation,
                    tricky,
                    conservative,
                    sampled_values::<T>(samples, seed),
                    sampled_unary_cases::<T>(samples),
                    monitor,
                ),
            },
            Implementations::Binary {
                tricky,
                conservative,
            } => match strategy {
                SweepStrategy::Exhaustive => sweep_binary(
                    operation,
                    tricky,
                    conservative,
                    // Validation guarantees an enumerable pair domain here.
                    PackedPairs::<T>::new().into_iter().flatten(),
                    exhaustive_binary_cases::<T>(),
                    monitor,
                ),
                SweepStrategy::Sampled { samples, seed } => sweep_binary(
                    operation,
                    tricky,
                    conservative,
                    sampled_pairs::<T>(samples, seed),
                    sampled_binary_cases::<T>(samples),
                    monitor,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MISMATCH_LIMIT;
    use crate::conservative;
    use crate::monitor::no_op::NoOperationMonitor;

    // Pairs whose exact sum leaves [-128, 127]: 127 * 128 / 2 above and
    // 128 * 129 / 2 below.
    const OVERFLOWING_I8_ADDITIONS: u64 = 8_128 + 8_256;

    fn wrapping_add(x: i8, y: i8) -> Option<i8> {
        Some(x.wrapping_add(y))
    }

    fn with_wrapping_add(operation: Operation) -> Implementations<i8> {
        match operation {
            Operation::Add => Implementations::Binary {
                tricky: wrapping_add,
                conservative: conservative::add::<i8>,
            },
            other => other.implementations(),
        }
    }

    fn wrapping_add_harness(fail_on_mismatch: bool) -> Harness<i8> {
        let config = HarnessConfig::builder()
            .with_operations([Operation::Add, Operation::Neg])
            .fail_on_mismatch(fail_on_mismatch)
            .build();
        Harness::<i8>::new(config).with_implementations(with_wrapping_add)
    }

    #[test]
    fn test_run_fails_on_mismatch_when_configured() {
        let result = wrapping_add_harness(true).run(&mut NoOperationMonitor::new());
        assert_eq!(
            result,
            Err(HarnessError::MismatchesFound {
                mismatches: OVERFLOWING_I8_ADDITIONS,
                cases: 65_536 + 256
            })
        );
    }

    #[test]
    fn test_run_reports_mismatches_without_failing_by_default() {
        let outcome = wrapping_add_harness(false)
            .run(&mut NoOperationMonitor::new())
            .unwrap();
        assert!(!outcome.is_clean());
        assert_eq!(
            outcome.statistics().total_mismatches(),
            OVERFLOWING_I8_ADDITIONS
        );
        assert_eq!(
            outcome.statistics().get(Operation::Neg).unwrap().mismatches,
            0
        );

        let retained = outcome.mismatches().len() as u64;
        assert_eq!(retained, DEFAULT_MISMATCH_LIMIT as u64);
        assert_eq!(
            retained + outcome.unretained_mismatches(),
            OVERFLOWING_I8_ADDITIONS
        );
        assert!(outcome
            .mismatches()
            .iter()
            .all(|m| m.operation() == Operation::Add && m.is_verdict_mismatch()));
    }

    #[test]
    fn test_sweep_ignores_the_mismatch_policy() {
        let outcome = wrapping_add_harness(true)
            .sweep(&mut NoOperationMonitor::new())
            .unwrap();
        let add = outcome.statistics().get(Operation::Add).unwrap();
        assert_eq!(add.cases, 65_536);
        assert_eq!(add.mismatches, OVERFLOWING_I8_ADDITIONS);
        assert_eq!(add.both_failed, 0);
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let config = HarnessConfig::builder()
            .with_operations(std::iter::empty())
            .build();
        let result = Harness::<i8>::new(config).run(&mut NoOperationMonitor::new());
        assert_eq!(result, Err(HarnessError::NoOperations));
    }

    #[test]
    fn test_exhaustive_binary_above_eight_bits_is_rejected() {
        let config = HarnessConfig::builder()
            .with_operations([Operation::Neg, Operation::Mul])
            .with_exhaustive_strategy()
            .build();
        let harness = Harness::<i16>::new(config);
        assert_eq!(
            harness.validate(),
            Err(HarnessError::DomainTooLarge {
                operation: Operation::Mul,
                bits: 16
            })
        );
    }

    #[test]
    fn test_exhaustive_unary_at_sixteen_bits_runs() {
        let config = HarnessConfig::builder()
            .with_operations([Operation::Abs, Operation::BitSize])
            .with_exhaustive_strategy()
            .build();
        let outcome = Harness::<i16>::new(config)
            .run(&mut NoOperationMonitor::new())
            .unwrap();
        let abs = outcome.statistics().get(Operation::Abs).unwrap();
        assert_eq!(abs.cases, 65_536);
        assert_eq!(abs.both_failed, 1);
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_sampled_sweep_on_wide_type() {
        let config = HarnessConfig::builder()
            .with_operation(Operation::Shl)
            .with_sampled_strategy(500, 9)
            .build();
        let outcome = Harness::<i64>::new(config)
            .run(&mut NoOperationMonitor::new())
            .unwrap();
        assert_eq!(outcome.statistics().total_cases(), 49 + 500);
        assert!(outcome.mismatches().is_empty());
        assert_eq!(outcome.unretained_mismatches(), 0);
    }

    #[test]
    fn test_statistics_follow_configuration_order() {
        let ops = [Operation::Xor, Operation::Sign, Operation::Div];
        let config = HarnessConfig::builder().with_operations(ops).build();
        let outcome = Harness::<i8>::new(config)
            .run(&mut NoOperationMonitor::new())
            .unwrap();
        let order: Vec<Operation> = outcome
            .statistics()
            .operations
            .iter()
            .map(|s| s.operation)
            .collect();
        assert_eq!(order, ops);
    }
}
