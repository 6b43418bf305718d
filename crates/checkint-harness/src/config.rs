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

//! Run configuration for the differential harness.
//!
//! A `HarnessConfig` selects which operations to compare, how their operand
//! domains are enumerated, and whether mismatches turn the run into an
//! error. The default reproduces the classic behavior: every operation,
//! exhaustive enumeration, mismatches reported but never fatal.
//!
//! ```rust
//! use checkint_harness::config::{HarnessConfig, SweepStrategy};
//! use checkint_harness::operation::Operation;
//!
//! let config = HarnessConfig::builder()
//!     .with_operation(Operation::Add)
//!     .with_operation(Operation::Mul)
//!     .with_sampled_strategy(10_000, 7)
//!     .fail_on_mismatch(true)
//!     .build();
//!
//! assert_eq!(config.operations(), &[Operation::Add, Operation::Mul]);
//! assert_eq!(config.strategy(), Some(SweepStrategy::Sampled { samples: 10_000, seed: 7 }));
//! assert!(config.is_fail_on_mismatch());
//! ```

use crate::operation::{Arity, Operation};

/// Unary domains up to this many bits may be enumerated exhaustively.
pub const MAX_EXHAUSTIVE_UNARY_BITS: u32 = 16;

/// Binary domains up to this many bits per operand may be enumerated
/// exhaustively (`2^(2 * 8)` = 65536 ordered pairs).
pub const MAX_EXHAUSTIVE_BINARY_BITS: u32 = 8;

/// Default number of random cases per operation for sampled sweeps.
pub const DEFAULT_SAMPLES: u64 = 100_000;

/// Default seed for sampled sweeps.
pub const DEFAULT_SEED: u64 = 0x5EED_C4EC_0001_0001;

/// Default number of mismatches retained in a run outcome.
pub const DEFAULT_MISMATCH_LIMIT: usize = 1024;

/// How operand domains are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SweepStrategy {
    /// Every value (unary) or every ordered pair (binary).
    Exhaustive,
    /// Boundary values crossed with each other, followed by `samples`
    /// pseudo-random cases drawn from a generator seeded with `seed`.
    Sampled { samples: u64, seed: u64 },
}

impl SweepStrategy {
    /// Returns `true` if an operation of the given arity at `bits` can be
    /// swept with this strategy.
    pub fn supports(self, arity: Arity, bits: u32) -> bool {
        match self {
            SweepStrategy::Sampled { .. } => true,
            SweepStrategy::Exhaustive => match arity {
                Arity::Unary => bits <= MAX_EXHAUSTIVE_UNARY_BITS,
                Arity::Binary => bits <= MAX_EXHAUSTIVE_BINARY_BITS,
            },
        }
    }

    /// The strategy used when none is configured for a given width:
    /// exhaustive where every binary domain is enumerable, sampled otherwise.
    pub fn default_for_bits(bits: u32) -> Self {
        if bits <= MAX_EXHAUSTIVE_BINARY_BITS {
            SweepStrategy::Exhaustive
        } else {
            SweepStrategy::Sampled {
                samples: DEFAULT_SAMPLES,
                seed: DEFAULT_SEED,
            }
        }
    }
}

impl std::fmt::Display for SweepStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepStrategy::Exhaustive => write!(f, "exhaustive"),
            SweepStrategy::Sampled { samples, seed } => {
                write!(f, "sampled ({} samples, seed {:#x})", samples, seed)
            }
        }
    }
}

/// Configuration of a harness run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    operations: Vec<Operation>,
    strategy: Option<SweepStrategy>,
    fail_on_mismatch: bool,
    mismatch_limit: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
            strategy: None,
            fail_on_mismatch: false,
            mismatch_limit: DEFAULT_MISMATCH_LIMIT,
        }
    }
}

impl HarnessConfig {
    /// Returns a builder with no operations selected yet.
    #[inline]
    pub fn builder() -> HarnessConfigBuilder {
        HarnessConfigBuilder::new()
    }

    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The explicitly configured strategy. `None` means the strategy is
    /// chosen per width by `strategy_for_bits`.
    #[inline]
    pub fn strategy(&self) -> Option<SweepStrategy> {
        self.strategy
    }

    /// The configured strategy, or the default for `bits` if none was set.
    #[inline]
    pub fn strategy_for_bits(&self, bits: u32) -> SweepStrategy {
        self.strategy
            .unwrap_or_else(|| SweepStrategy::default_for_bits(bits))
    }

    #[inline]
    pub fn is_fail_on_mismatch(&self) -> bool {
        self.fail_on_mismatch
    }

    /// Maximum number of mismatches kept in the run outcome. All mismatches
    /// are still counted and reported to the monitor.
    #[inline]
    pub fn mismatch_limit(&self) -> usize {
        self.mismatch_limit
    }
}

/// Builder for [`HarnessConfig`].
///
/// If the selection is never touched, `build` selects the whole catalog.
/// An explicitly empty selection is kept and rejected when the run starts.
#[derive(Clone, Debug)]
pub struct HarnessConfigBuilder {
    operations: Option<Vec<Operation>>,
    strategy: Option<SweepStrategy>,
    fail_on_mismatch: bool,
    mismatch_limit: usize,
}

impl Default for HarnessConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            operations: None,
            strategy: None,
            fail_on_mismatch: false,
            mismatch_limit: DEFAULT_MISMATCH_LIMIT,
        }
    }

    /// Adds one operation. Duplicates are ignored.
    #[inline]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        let operations = self.operations.get_or_insert_with(Vec::new);
        if !operations.contains(&operation) {
            operations.push(operation);
        }
        self
    }

    /// Adds several operations. Duplicates are ignored.
    #[inline]
    pub fn with_operations<I>(mut self, operations: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.operations.get_or_insert_with(Vec::new);
        for op in operations {
            self = self.with_operation(op);
        }
        self
    }

    #[inline]
    pub fn with_strategy(mut self, strategy: SweepStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    #[inline]
    pub fn with_exhaustive_strategy(self) -> Self {
        self.with_strategy(SweepStrategy::Exhaustive)
    }

    #[inline]
    pub fn with_sampled_strategy(self, samples: u64, seed: u64) -> Self {
        self.with_strategy(SweepStrategy::Sampled { samples, seed })
    }

    /// Makes a run with any mismatch return `HarnessError::MismatchesFound`.
    #[inline]
    pub fn fail_on_mismatch(mut self, fail: bool) -> Self {
        self.fail_on_mismatch = fail;
        self
    }

    #[inline]
    pub fn with_mismatch_limit(mut self, limit: usize) -> Self {
        self.mismatch_limit = limit;
        self
    }

    pub fn build(self) -> HarnessConfig {
        HarnessConfig {
            operations: self
                .operations
                .unwrap_or_else(|| Operation::ALL.to_vec()),
            strategy: self.strategy,
            fail_on_mismatch: self.fail_on_mismatch,
            mismatch_limit: self.mismatch_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_soft_and_complete() {
        let config = HarnessConfig::default();
        assert_eq!(config.operations().len(), Operation::ALL.len());
        assert!(!config.is_fail_on_mismatch());
        assert_eq!(config.strategy(), None);
        assert_eq!(config.strategy_for_bits(8), SweepStrategy::Exhaustive);
        assert!(matches!(
            config.strategy_for_bits(32),
            SweepStrategy::Sampled { .. }
        ));
    }

    #[test]
    fn test_builder_without_operations_selects_all() {
        let config = HarnessConfig::builder().fail_on_mismatch(true).build();
        assert_eq!(config.operations(), &Operation::ALL);
        assert!(config.is_fail_on_mismatch());
    }

    #[test]
    fn test_builder_keeps_explicitly_empty_selection() {
        let config = HarnessConfig::builder()
            .with_operations(std::iter::empty())
            .build();
        assert!(config.operations().is_empty());
    }

    #[test]
    fn test_builder_deduplicates() {
        let config = HarnessConfig::builder()
            .with_operations([Operation::Shl, Operation::Shr, Operation::Shl])
            .build();
        assert_eq!(config.operations(), &[Operation::Shl, Operation::Shr]);
    }

    #[test]
    fn test_strategy_support() {
        let ex = SweepStrategy::Exhaustive;
        assert!(ex.supports(Arity::Binary, 8));
        assert!(!ex.supports(Arity::Binary, 16));
        assert!(ex.supports(Arity::Unary, 16));
        assert!(!ex.supports(Arity::Unary, 32));
        let sampled = SweepStrategy::Sampled { samples: 1, seed: 0 };
        assert!(sampled.supports(Arity::Binary, 64));
    }

    #[test]
    fn test_strategy_for_bits_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.strategy_for_bits(8), SweepStrategy::Exhaustive);
        assert!(matches!(
            config.strategy_for_bits(32),
            SweepStrategy::Sampled { .. }
        ));

        let pinned = HarnessConfig::builder().with_exhaustive_strategy().build();
        assert_eq!(pinned.strategy_for_bits(32), SweepStrategy::Exhaustive);
    }
}
