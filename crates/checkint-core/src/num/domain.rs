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

use crate::num::bounded::BoundedInt;
use std::iter::FusedIterator;

/// An inclusive range `[first, last]` of bounded integers that can be
/// iterated from either end.
///
/// Unlike `RangeInclusive`, this works for any `BoundedInt` in generic code
/// and can cover the full domain `[MIN, MAX]` without overflowing the cursor.
///
/// # Examples
///
/// ```rust
/// # use checkint_core::num::domain::BoundedDomain;
/// let all: Vec<i8> = BoundedDomain::<i8>::full().collect();
/// assert_eq!(all.len(), 256);
/// assert_eq!(all[0], -128);
/// assert_eq!(all[255], 127);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundedDomain<T>
where
    T: BoundedInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> BoundedDomain<T>
where
    T: BoundedInt,
{
    /// Creates a domain covering `[first, last]`.
    ///
    /// If `first > last` the domain is empty.
    #[inline]
    pub fn new(first: T, last: T) -> Self {
        Self {
            front: first,
            back: last,
            exhausted: first > last,
        }
    }

    /// Creates a domain covering every representable value, `[MIN, MAX]`.
    #[inline]
    pub fn full() -> Self {
        Self::new(T::MIN, T::MAX)
    }

    /// Returns `true` if no values remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exhausted
    }
}

impl<T> Iterator for BoundedDomain<T>
where
    T: BoundedInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::PLUS_ONE;
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        // back >= front, so the wrapped difference reinterpreted as u128 is exact.
        let len = match (self.front.to_i128(), self.back.to_i128()) {
            (Some(front), Some(back)) => (back.wrapping_sub(front) as u128).checked_add(1),
            _ => None,
        };
        match len.and_then(|len| usize::try_from(len).ok()) {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for BoundedDomain<T>
where
    T: BoundedInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::PLUS_ONE;
        }
        Some(value)
    }
}

impl<T> FusedIterator for BoundedDomain<T> where T: BoundedInt {}
