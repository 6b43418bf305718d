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
use std::fmt::Display;

/// The operands of one compared case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operands<T> {
    Unary(T),
    Binary(T, T),
}

impl<T> Display for Operands<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operands::Unary(x) => write!(f, "{x}"),
            Operands::Binary(x, y) => write!(f, "{x}, {y}"),
        }
    }
}

/// A case where the optimized and reference implementations disagree,
/// either on the verdict or on the produced value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Mismatch<T> {
    operation: Operation,
    operands: Operands<T>,
    tricky: Option<T>,
    conservative: Option<T>,
}

impl<T> Mismatch<T>
where
    T: Copy,
{
    #[inline]
    pub fn new(
        operation: Operation,
        operands: Operands<T>,
        tricky: Option<T>,
        conservative: Option<T>,
    ) -> Self {
        Self {
            operation,
            operands,
            tricky,
            conservative,
        }
    }

    #[inline]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub fn operands(&self) -> Operands<T> {
        self.operands
    }

    /// The result of the optimized implementation.
    #[inline]
    pub fn tricky(&self) -> Option<T> {
        self.tricky
    }

    /// The result of the reference implementation.
    #[inline]
    pub fn conservative(&self) -> Option<T> {
        self.conservative
    }

    /// Returns `true` if the implementations disagree on success itself,
    /// rather than on the value.
    #[inline]
    pub fn is_verdict_mismatch(&self) -> bool {
        self.tricky.is_some() != self.conservative.is_some()
    }
}

struct Verdict<T>(Option<T>);

impl<T> Display for Verdict<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "fail"),
        }
    }
}

impl<T> Display for Mismatch<T>
where
    T: Display + Copy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}): tricky={} conservative={}",
            self.operation,
            self.operands,
            Verdict(self.tricky),
            Verdict(self.conservative)
        )
    }
}
