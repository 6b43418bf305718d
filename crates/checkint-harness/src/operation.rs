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

//! The operation catalog as seen by the harness.
//!
//! `Operation` names each entry, knows its arity, and hands out the pair of
//! implementations under comparison: the optimized one from
//! `checkint_core::ops` and the wide-intermediate one from
//! [`crate::conservative`].

use crate::{conservative, error::UnknownOperationError, widen::Widen};
use checkint_core::ops::{arith, bitwise, division, shift};
use std::str::FromStr;

/// Number of operands an operation takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

/// A unary operation under test.
pub type UnaryFn<T> = fn(T) -> Option<T>;

/// A binary operation under test.
pub type BinaryFn<T> = fn(T, T) -> Option<T>;

/// Resolves the implementations compared for an operation.
pub type ImplementationLookup<T> = fn(Operation) -> Implementations<T>;

/// The two implementations of one operation.
#[derive(Clone, Copy)]
pub enum Implementations<T> {
    Unary {
        tricky: UnaryFn<T>,
        conservative: UnaryFn<T>,
    },
    Binary {
        tricky: BinaryFn<T>,
        conservative: BinaryFn<T>,
    },
}

impl<T> std::fmt::Debug for Implementations<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Implementations::Unary { .. } => write!(f, "Implementations::Unary"),
            Implementations::Binary { .. } => write!(f, "Implementations::Binary"),
        }
    }
}

/// Every operation in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Abs,
    Neg,
    Add,
    Sub,
    Mul,
    And,
    Or,
    Xor,
    Not,
    Sign,
    Bit,
    BitSize,
    Div,
    Rem,
    DivEuclid,
    RemEuclid,
    Shl,
    Shr,
}

impl Operation {
    /// The full catalog in reporting order.
    pub const ALL: [Operation; 18] = [
        Operation::Abs,
        Operation::Neg,
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Not,
        Operation::Sign,
        Operation::Bit,
        Operation::BitSize,
        Operation::Div,
        Operation::Rem,
        Operation::DivEuclid,
        Operation::RemEuclid,
        Operation::Shl,
        Operation::Shr,
    ];

    /// The name used in diagnostics and accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Abs => "abs",
            Operation::Neg => "neg",
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Xor => "xor",
            Operation::Not => "not",
            Operation::Sign => "sign",
            Operation::Bit => "bit",
            Operation::BitSize => "bit_size",
            Operation::Div => "div",
            Operation::Rem => "rem",
            Operation::DivEuclid => "div_euclid",
            Operation::RemEuclid => "rem_euclid",
            Operation::Shl => "shl",
            Operation::Shr => "shr",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Abs
            | Operation::Neg
            | Operation::Not
            | Operation::Sign
            | Operation::BitSize => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// Returns the optimized and reference implementations for width `T`.
    pub fn implementations<T>(self) -> Implementations<T>
    where
        T: Widen,
    {
        macro_rules! unary {
            ($module:ident :: $name:ident) => {
                Implementations::Unary {
                    tricky: $module::$name::<T>,
                    conservative: conservative::$name::<T>,
                }
            };
        }
        macro_rules! binary {
            ($module:ident :: $name:ident) => {
                Implementations::Binary {
                    tricky: $module::$name::<T>,
                    conservative: conservative::$name::<T>,
                }
            };
        }

        match self {
            Operation::Abs => unary!(arith::abs),
            Operation::Neg => unary!(arith::neg),
            Operation::Not => unary!(bitwise::not),
            Operation::Sign => unary!(arith::sign),
            Operation::BitSize => unary!(bitwise::bit_size),
            Operation::Add => binary!(arith::add),
            Operation::Sub => binary!(arith::sub),
            Operation::Mul => binary!(arith::mul),
            Operation::And => binary!(bitwise::and),
            Operation::Or => binary!(bitwise::or),
            Operation::Xor => binary!(bitwise::xor),
            Operation::Bit => binary!(bitwise::bit),
            Operation::Div => binary!(division::div),
            Operation::Rem => binary!(division::rem),
            Operation::DivEuclid => binary!(division::div_euclid),
            Operation::RemEuclid => binary!(division::rem_euclid),
            Operation::Shl => binary!(shift::shl),
            Operation::Shr => binary!(shift::shr),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperationError;

    /// Parses a catalog name. The camel-case spellings `bitSize`, `divEu`,
    /// `modEu` and the alias `mod` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(op) = Operation::ALL.iter().find(|op| op.name() == trimmed) {
            return Ok(*op);
        }
        match trimmed {
            "bitSize" => Ok(Operation::BitSize),
            "mod" => Ok(Operation::Rem),
            "divEu" => Ok(Operation::DivEuclid),
            "modEu" => Ok(Operation::RemEuclid),
            _ => Err(UnknownOperationError {
                name: trimmed.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("mod".parse::<Operation>(), Ok(Operation::Rem));
        assert_eq!("modEu".parse::<Operation>(), Ok(Operation::RemEuclid));
        assert_eq!("divEu".parse::<Operation>(), Ok(Operation::DivEuclid));
        assert_eq!(" bitSize ".parse::<Operation>(), Ok(Operation::BitSize));
    }

    #[test]
    fn test_unknown_operation() {
        let err = "pow".parse::<Operation>().unwrap_err();
        assert_eq!(err.name, "pow");
        assert_eq!(err.to_string(), "unknown operation 'pow'");
    }

    #[test]
    fn test_arity_matches_implementations() {
        for op in Operation::ALL {
            let arity = match op.implementations::<i8>() {
                Implementations::Unary { .. } => Arity::Unary,
                Implementations::Binary { .. } => Arity::Binary,
            };
            assert_eq!(arity, op.arity(), "{op}");
        }
    }

    #[test]
    fn test_implementations_are_wired_to_the_right_operation() {
        let Implementations::Binary {
            tricky,
            conservative,
        } = Operation::Sub.implementations::<i8>()
        else {
            panic!("sub is binary");
        };
        assert_eq!(tricky(10, 3), Some(7));
        assert_eq!(conservative(10, 3), Some(7));

        let Implementations::Unary {
            tricky,
            conservative,
        } = Operation::BitSize.implementations::<i16>()
        else {
            panic!("bit_size is unary");
        };
        assert_eq!(tricky(255), Some(9));
        assert_eq!(conservative(255), Some(9));
    }
}
