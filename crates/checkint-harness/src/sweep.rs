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

//! Case generators and comparison loops.
//!
//! A sweep feeds every case of an operand source to both implementations of
//! one operation and classifies the pair of results:
//!
//! - both succeeded with the same value, or both failed: agreement;
//! - anything else: a mismatch, reported to the monitor.
//!
//! Sweeps never stop early; every case of the source is compared.
//!
//! Sources
//! - `BoundedDomain::full()`: every value of a width (unary, exhaustive).
//! - `PackedPairs`: every ordered pair, enumerated by a single counter over
//!   `2 * BITS` bits whose high and low halves are the operands.
//! - `sampled_values` / `sampled_pairs`: the boundary values, then
//!   pseudo-random operands from a seeded `ChaCha8Rng`.

use crate::{
    mismatch::{Mismatch, Operands},
    monitor::sweep_monitor::SweepMonitor,
    operation::{BinaryFn, Operation, UnaryFn},
    stats::OperationStatistics,
    widen::Widen,
};
use checkint_core::num::bounded::BoundedInt;
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, StandardUniform},
};
use rand_chacha::ChaCha8Rng;
use std::iter::FusedIterator;
use std::time::Instant;

/// The values at and next to the edges of a width, plus the values around
/// zero, in ascending order.
#[inline]
pub fn boundary_values<T>() -> [T; 7]
where
    T: BoundedInt,
{
    [
        T::MIN,
        T::MIN + T::PLUS_ONE,
        T::MINUS_ONE,
        T::ZERO,
        T::PLUS_ONE,
        T::MAX - T::PLUS_ONE,
        T::MAX,
    ]
}

/// Number of cases in an exhaustive unary sweep, `2^BITS`.
///
/// Saturates at `u64::MAX` for 64-bit and wider types, one short of the
/// true count. Those domains are never swept exhaustively.
#[inline]
pub fn exhaustive_unary_cases<T>() -> u64
where
    T: BoundedInt,
{
    1u64.checked_shl(T::BITS).unwrap_or(u64::MAX)
}

/// Number of cases in an exhaustive binary sweep, `2^(2 * BITS)`.
///
/// Saturates at `u64::MAX` from 32 bits up.
#[inline]
pub fn exhaustive_binary_cases<T>() -> u64
where
    T: BoundedInt,
{
    1u64.checked_shl(2 * T::BITS).unwrap_or(u64::MAX)
}

/// Number of cases in a sampled unary sweep.
#[inline]
pub fn sampled_unary_cases<T>(samples: u64) -> u64
where
    T: BoundedInt,
{
    (boundary_values::<T>().len() as u64).saturating_add(samples)
}

/// Number of cases in a sampled binary sweep.
#[inline]
pub fn sampled_binary_cases<T>(samples: u64) -> u64
where
    T: BoundedInt,
{
    let n = boundary_values::<T>().len() as u64;
    (n * n).saturating_add(samples)
}

/// Every ordered pair `(x, y)` of a width.
///
/// The pair is packed into one counter: the operand bits of `x` occupy the
/// high `BITS` bits and those of `y` the low `BITS` bits. Only widths with
/// `2 * BITS < 64` can be enumerated.
#[derive(Clone, Debug)]
pub struct PackedPairs<T>
where
    T: Widen,
{
    next: u64,
    end: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> PackedPairs<T>
where
    T: Widen,
{
    /// Returns the pair source, or `None` if the packed counter does not fit
    /// in 64 bits.
    #[inline]
    pub fn new() -> Option<Self> {
        let end = 1u64.checked_shl(2 * T::BITS)?;
        Some(Self {
            next: 0,
            end,
            _phantom: std::marker::PhantomData,
        })
    }

    #[inline(always)]
    fn unpack(packed: u64) -> (T, T) {
        (
            T::from_bit_pattern(packed >> T::BITS),
            T::from_bit_pattern(packed),
        )
    }
}

impl<T> Iterator for PackedPairs<T>
where
    T: Widen,
{
    type Item = (T, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let pair = Self::unpack(self.next);
        self.next += 1;
        Some(pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.end - self.next) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for PackedPairs<T> where T: Widen {}

#[inline]
fn sample_count(samples: u64) -> usize {
    usize::try_from(samples).unwrap_or(usize::MAX)
}

/// The boundary values followed by `samples` random values.
pub fn sampled_values<T>(samples: u64, seed: u64) -> impl Iterator<Item = T>
where
    T: BoundedInt,
    StandardUniform: Distribution<T>,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    boundary_values::<T>()
        .into_iter()
        .chain(std::iter::repeat_with(move || rng.random::<T>()).take(sample_count(samples)))
}

/// The boundary values crossed with each other, followed by `samples`
/// random pairs.
pub fn sampled_pairs<T>(samples: u64, seed: u64) -> impl Iterator<Item = (T, T)>
where
    T: BoundedInt,
    StandardUniform: Distribution<T>,
{
    let edges = boundary_values::<T>();
    let crossed = edges
        .into_iter()
        .flat_map(move |x| edges.into_iter().map(move |y| (x, y)));

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let random = std::iter::repeat_with(move || (rng.random::<T>(), rng.random::<T>()))
        .take(sample_count(samples));

    crossed.chain(random)
}

#[inline(always)]
fn classify<T, M>(
    statistics: &mut OperationStatistics,
    monitor: &mut M,
    operands: Operands<T>,
    tricky: Option<T>,
    conservative: Option<T>,
) where
    T: BoundedInt,
    M: SweepMonitor<T> + ?Sized,
{
    match (tricky, conservative) {
        (Some(a), Some(b)) if a == b => statistics.on_agreement_success(),
        (None, None) => statistics.on_agreement_failure(),
        _ => {
            statistics.on_mismatch();
            let mismatch = Mismatch::new(statistics.operation, operands, tricky, conservative);
            monitor.on_mismatch(&mismatch);
        }
    }
}

/// Compares a unary operation on every value of `inputs`.
///
/// `cases` is the announced size of `inputs` passed to the monitor.
pub fn sweep_unary<T, I, M>(
    operation: Operation,
    tricky: UnaryFn<T>,
    conservative: UnaryFn<T>,
    inputs: I,
    cases: u64,
    monitor: &mut M,
) -> OperationStatistics
where
    T: BoundedInt,
    I: IntoIterator<Item = T>,
    M: SweepMonitor<T> + ?Sized,
{
    let start = Instant::now();
    let mut statistics = OperationStatistics::new(operation);
    monitor.on_start_operation(operation, cases);

    for x in inputs {
        classify(
            &mut statistics,
            monitor,
            Operands::Unary(x),
            tricky(x),
            conservative(x),
        );
    }

    statistics.set_elapsed(start.elapsed());
    monitor.on_finish_operation(&statistics);
    statistics
}

/// Compares a binary operation on every pair of `inputs`.
///
/// `cases` is the announced size of `inputs` passed to the monitor.
pub fn sweep_binary<T, I, M>(
    operation: Operation,
    tricky: BinaryFn<T>,
    conservative: BinaryFn<T>,
    inputs: I,
    cases: u64,
    monitor: &mut M,
) -> OperationStatistics
where
    T: BoundedInt,
    I: IntoIterator<Item = (T, T)>,
    M: SweepMonitor<T> + ?Sized,
{
    let start = Instant::now();
    let mut statistics = OperationStatistics::new(operation);
    monitor.on_start_operation(operation, cases);

    for (x, y) in inputs {
        classify(
            &mut statistics,
            monitor,
            Operands::Binary(x, y),
            tricky(x, y),
            conservative(x, y),
        );
    }

    statistics.set_elapsed(start.elapsed());
    monitor.on_finish_operation(&statistics);
    statistics
}
