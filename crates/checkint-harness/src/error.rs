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

//! Errors reported by harness configuration and runs.

use crate::operation::Operation;
use std::fmt::Display;

/// An operation name that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperationError {
    /// The name that failed to parse.
    pub name: String,
}

impl std::fmt::Display for UnknownOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown operation '{}'", self.name)
    }
}

impl std::error::Error for UnknownOperationError {}

/// The error type for harness runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The configuration selects no operations.
    NoOperations,
    /// An exhaustive sweep was requested for a domain too large to enumerate.
    DomainTooLarge {
        /// The operation whose domain is too large.
        operation: Operation,
        /// The bit width of the instantiation.
        bits: u32,
    },
    /// The requested bit width has no instantiation.
    UnsupportedWidth(u32),
    /// An operation name could not be parsed.
    UnknownOperation(UnknownOperationError),
    /// At least one mismatch was found and the run was configured to fail on
    /// mismatches.
    MismatchesFound {
        /// Number of disagreeing cases.
        mismatches: u64,
        /// Number of cases compared.
        cases: u64,
    },
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOperations => write!(f, "No operations selected"),
            Self::DomainTooLarge { operation, bits } => write!(
                f,
                "Cannot sweep {} exhaustively at {} bits; use a sampled sweep",
                operation, bits
            ),
            Self::UnsupportedWidth(bits) => {
                write!(f, "Unsupported width {bits}; expected 8, 16, 32 or 64")
            }
            Self::UnknownOperation(e) => write!(f, "Configuration error: {e}"),
            Self::MismatchesFound { mismatches, cases } => write!(
                f,
                "Found {} mismatch(es) in {} compared case(s)",
                mismatches, cases
            ),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownOperation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownOperationError> for HarnessError {
    fn from(e: UnknownOperationError) -> Self {
        Self::UnknownOperation(e)
    }
}
