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

//! Catalog operations with the C calling convention
//! `checkint_<type>_<op>(out, x[, y]) -> bool`.
//!
//! Every function performs the full feasibility check and returns it. The
//! value is written to `out` only on success and only if `out` is not null;
//! a null `out` asks for the verdict alone. On failure `*out` is untouched.

use checkint_core::ops::{arith, bitwise, division, shift};

/// Writes `result` through `out` if both exist and returns the verdict.
///
/// # Safety
///
/// `out` must be null or valid for a write of `T`.
#[inline(always)]
unsafe fn store<T>(out: *mut T, result: Option<T>) -> bool {
    match result {
        Some(value) => {
            if !out.is_null() {
                *out = value;
            }
            true
        }
        None => false,
    }
}

macro_rules! ffi_unary {
    ($t:ty { $($name:ident => $op:path),* $(,)? }) => {
        $(
            #[doc = concat!("`", stringify!($op), "` for `", stringify!($t), "`.")]
            ///
            /// Returns `true` on success and writes the result to `out` unless
            /// `out` is null.
            ///
            /// # Safety
            ///
            /// `out` must be null or valid for a write.
            #[no_mangle]
            pub unsafe extern "C" fn $name(out: *mut $t, x: $t) -> bool {
                store(out, $op(x))
            }
        )*
    };
}

macro_rules! ffi_binary {
    ($t:ty { $($name:ident => $op:path),* $(,)? }) => {
        $(
            #[doc = concat!("`", stringify!($op), "` for `", stringify!($t), "`.")]
            ///
            /// Returns `true` on success and writes the result to `out` unless
            /// `out` is null.
            ///
            /// # Safety
            ///
            /// `out` must be null or valid for a write.
            #[no_mangle]
            pub unsafe extern "C" fn $name(out: *mut $t, x: $t, y: $t) -> bool {
                store(out, $op(x, y))
            }
        )*
    };
}

ffi_unary!(i8 {
    checkint_i8_abs => arith::abs,
    checkint_i8_neg => arith::neg,
    checkint_i8_not => bitwise::not,
    checkint_i8_sign => arith::sign,
    checkint_i8_bit_size => bitwise::bit_size,
});

ffi_binary!(i8 {
    checkint_i8_add => arith::add,
    checkint_i8_sub => arith::sub,
    checkint_i8_mul => arith::mul,
    checkint_i8_and => bitwise::and,
    checkint_i8_or => bitwise::or,
    checkint_i8_xor => bitwise::xor,
    checkint_i8_bit => bitwise::bit,
    checkint_i8_div => division::div,
    checkint_i8_rem => division::rem,
    checkint_i8_div_euclid => division::div_euclid,
    checkint_i8_rem_euclid => division::rem_euclid,
    checkint_i8_shl => shift::shl,
    checkint_i8_shr => shift::shr,
});

ffi_unary!(i16 {
    checkint_i16_abs => arith::abs,
    checkint_i16_neg => arith::neg,
    checkint_i16_not => bitwise::not,
    checkint_i16_sign => arith::sign,
    checkint_i16_bit_size => bitwise::bit_size,
});

ffi_binary!(i16 {
    checkint_i16_add => arith::add,
    checkint_i16_sub => arith::sub,
    checkint_i16_mul => arith::mul,
    checkint_i16_and => bitwise::and,
    checkint_i16_or => bitwise::or,
    checkint_i16_xor => bitwise::xor,
    checkint_i16_bit => bitwise::bit,
    checkint_i16_div => division::div,
    checkint_i16_rem => division::rem,
    checkint_i16_div_euclid => division::div_euclid,
    checkint_i16_rem_euclid => division::rem_euclid,
    checkint_i16_shl => shift::shl,
    checkint_i16_shr => shift::shr,
});

ffi_unary!(i32 {
    checkint_i32_abs => arith::abs,
    checkint_i32_neg => arith::neg,
    checkint_i32_not => bitwise::not,
    checkint_i32_sign => arith::sign,
    checkint_i32_bit_size => bitwise::bit_size,
});

ffi_binary!(i32 {
    checkint_i32_add => arith::add,
    checkint_i32_sub => arith::sub,
    checkint_i32_mul => arith::mul,
    checkint_i32_and => bitwise::and,
    checkint_i32_or => bitwise::or,
    checkint_i32_xor => bitwise::xor,
    checkint_i32_bit => bitwise::bit,
    checkint_i32_div => division::div,
    checkint_i32_rem => division::rem,
    checkint_i32_div_euclid => division::div_euclid,
    checkint_i32_rem_euclid => division::rem_euclid,
    checkint_i32_shl => shift::shl,
    checkint_i32_shr => shift::shr,
});

ffi_unary!(i64 {
    checkint_i64_abs => arith::abs,
    checkint_i64_neg => arith::neg,
    checkint_i64_not => bitwise::not,
    checkint_i64_sign => arith::sign,
    checkint_i64_bit_size => bitwise::bit_size,
});

ffi_binary!(i64 {
    checkint_i64_add => arith::add,
    checkint_i64_sub => arith::sub,
    checkint_i64_mul => arith::mul,
    checkint_i64_and => bitwise::and,
    checkint_i64_or => bitwise::or,
    checkint_i64_xor => bitwise::xor,
    checkint_i64_bit => bitwise::bit,
    checkint_i64_div => division::div,
    checkint_i64_rem => division::rem,
    checkint_i64_div_euclid => division::div_euclid,
    checkint_i64_rem_euclid => division::rem_euclid,
    checkint_i64_shl => shift::shl,
    checkint_i64_shr => shift::shr,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_writes_output() {
        let mut out: i8 = 0;
        unsafe {
            assert!(checkint_i8_add(&mut out, 100, 27));
        }
        assert_eq!(out, 127);
    }

    #[test]
    fn test_failure_leaves_output_untouched() {
        let mut out: i8 = 42;
        unsafe {
            assert!(!checkint_i8_add(&mut out, 100, 50));
            assert!(!checkint_i8_div(&mut out, -128, -1));
            assert!(!checkint_i8_rem(&mut out, 5, 0));
            assert!(!checkint_i8_abs(&mut out, i8::MIN));
            assert!(!checkint_i8_bit(&mut out, 1, -1));
        }
        assert_eq!(out, 42);
    }

    #[test]
    fn test_null_output_still_checks() {
        unsafe {
            assert!(checkint_i16_mul(std::ptr::null_mut(), 181, 181));
            assert!(!checkint_i16_mul(std::ptr::null_mut(), 182, 181));
            assert!(!checkint_i64_neg(std::ptr::null_mut(), i64::MIN));
            assert!(checkint_i32_shl(std::ptr::null_mut(), 1, 30));
            assert!(!checkint_i32_shl(std::ptr::null_mut(), 1, 31));
        }
    }

    #[test]
    fn test_every_width_is_exported() {
        let mut a: i8 = 0;
        let mut b: i16 = 0;
        let mut c: i32 = 0;
        let mut d: i64 = 0;
        unsafe {
            assert!(checkint_i8_rem_euclid(&mut a, -7, 3));
            assert!(checkint_i16_div_euclid(&mut b, -7, 3));
            assert!(checkint_i32_bit_size(&mut c, -129));
            assert!(checkint_i64_shr(&mut d, -256, 4));
        }
        assert_eq!((a, b, c, d), (2, -3, 9, -16));
    }
}
