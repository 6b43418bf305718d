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

//! Randomized agreement for the widths too large to enumerate.

use checkint_core::ops::shift;
use checkint_harness::operation::{Arity, Implementations, Operation};
use checkint_harness::widen::Widen;
use proptest::prelude::*;

fn agree_unary<T: Widen>(op: Operation, x: T) -> Result<(), TestCaseError> {
    let Implementations::Unary { tricky, conservative } = op.implementations::<T>() else {
        return Err(TestCaseError::fail(format!("{op} is not unary")));
    };
    prop_assert_eq!(tricky(x), conservative(x), "{}({})", op, x);
    Ok(())
}

fn agree_binary<T: Widen>(op: Operation, x: T, y: T) -> Result<(), TestCaseError> {
    let Implementations::Binary { tricky, conservative } = op.implementations::<T>() else {
        return Err(TestCaseError::fail(format!("{op} is not binary")));
    };
    prop_assert_eq!(tricky(x, y), conservative(x, y), "{}({}, {})", op, x, y);
    Ok(())
}

fn agree_all<T: Widen>(x: T, y: T) -> Result<(), TestCaseError> {
    for op in Operation::ALL {
        match op.arity() {
            Arity::Unary => {
                agree_unary(op, x)?;
                agree_unary(op, y)?;
            }
            Arity::Binary => {
                agree_binary(op, x, y)?;
                agree_binary(op, y, x)?;
            }
        }
    }
    Ok(())
}

/// Values concentrated on the edges of a width, where overflow checks live.
fn edgy_i32() -> impl Strategy<Value = i32> {
    prop_oneof![
        any::<i32>(),
        (-64i32..=64),
        (i32::MIN..=i32::MIN + 64),
        (i32::MAX - 64..=i32::MAX),
        (0u32..32).prop_map(|n| 1i32 << n),
        (0u32..32).prop_map(|n| -(1i64 << n) as i32),
    ]
}

fn edgy_i64() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        (-128i64..=128),
        (i64::MIN..=i64::MIN + 64),
        (i64::MAX - 64..=i64::MAX),
        (0u32..64).prop_map(|n| 1i64 << n),
        (0u32..64).prop_map(|n| -(1i128 << n) as i64),
    ]
}

proptest! {
    #[test]
    fn prop_i16_catalog_agrees(x: i16, y: i16) {
        agree_all(x, y)?;
    }

    #[test]
    fn prop_i32_catalog_agrees(x in edgy_i32(), y in edgy_i32()) {
        agree_all(x, y)?;
    }

    #[test]
    fn prop_i64_catalog_agrees(x in edgy_i64(), y in edgy_i64()) {
        agree_all(x, y)?;
    }

    #[test]
    fn prop_small_shift_amounts_agree_i64(x in edgy_i64(), y in -70i64..=70) {
        agree_binary(Operation::Shl, x, y)?;
        agree_binary(Operation::Shr, x, y)?;
    }

    #[test]
    fn prop_shr_is_shl_of_negated_amount_i32(x: i32, y: i32) {
        let negated = if y == i32::MIN { -32 } else { -y };
        prop_assert_eq!(shift::shr(x, y), shift::shl(x, negated));
    }
}
