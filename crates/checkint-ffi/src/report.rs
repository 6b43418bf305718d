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

//! Differential runs from C.
//!
//! `checkint_diff_run` runs the harness over every operation at one width
//! and returns an owned report handle. Widths of 8 bits are swept
//! exhaustively, wider ones are sampled with the default seed. The handle
//! must be released with `checkint_diff_report_free`.

use checkint_harness::config::HarnessConfig;
use checkint_harness::report::{run_for_width, HarnessReport, Reporting};
use libc::c_char;
use std::ffi::CString;

/// A completed run with its C strings.
/// The C strings are owned by this struct and valid until it is freed.
#[derive(Debug, Clone)]
pub struct CheckintDiffReport {
    inner: HarnessReport,
    summary_cstr: CString,
    mismatch_cstrs: Vec<CString>,
}

impl CheckintDiffReport {
    /// Wraps a report, rendering its summary and mismatch lines as C strings.
    pub fn new(inner: HarnessReport) -> Self {
        // Rendered reports never contain interior NUL bytes.
        let summary_cstr = CString::new(inner.summary()).unwrap_or_default();
        let mismatch_cstrs = inner
            .mismatches()
            .iter()
            .map(|line| CString::new(line.as_str()).unwrap_or_default())
            .collect();
        Self {
            inner,
            summary_cstr,
            mismatch_cstrs,
        }
    }

    #[inline]
    pub fn inner(&self) -> &HarnessReport {
        &self.inner
    }

    #[inline]
    pub fn summary(&self) -> &CString {
        &self.summary_cstr
    }
}

impl From<HarnessReport> for CheckintDiffReport {
    #[inline]
    fn from(report: HarnessReport) -> Self {
        Self::new(report)
    }
}

/// Runs every operation at `width_bits` (8, 16, 32 or 64).
///
/// With `fail_on_mismatch`, a run with any mismatch reports
/// `checkint_diff_report_passed == false`; otherwise every completed run
/// passes. Returns null for an unsupported width.
#[no_mangle]
pub extern "C" fn checkint_diff_run(
    width_bits: u32,
    fail_on_mismatch: bool,
) -> *mut CheckintDiffReport {
    let config = HarnessConfig::builder()
        .fail_on_mismatch(fail_on_mismatch)
        .build();
    match run_for_width(width_bits, &config, Reporting::Silent) {
        Ok(report) => Box::into_raw(Box::new(CheckintDiffReport::new(report))),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Frees a report returned by `checkint_diff_run`.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is null or was returned by
/// `checkint_diff_run` and not freed before.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_free(ptr: *mut CheckintDiffReport) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the bit width the report was produced for.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_width(ptr: *const CheckintDiffReport) -> u32 {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_width` with null pointer"
    );
    (*ptr).inner.bits()
}

/// Returns the number of cases compared.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_cases(ptr: *const CheckintDiffReport) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_cases` with null pointer"
    );
    (*ptr).inner.total_cases()
}

/// Returns the number of mismatching cases.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_mismatches(ptr: *const CheckintDiffReport) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_mismatches` with null pointer"
    );
    (*ptr).inner.total_mismatches()
}

/// Returns `false` only if the run found mismatches and was started with
/// `fail_on_mismatch`.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_passed(ptr: *const CheckintDiffReport) -> bool {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_passed` with null pointer"
    );
    (*ptr).inner.passed()
}

/// Returns a one-line summary of the run.
/// The pointer is valid until the report is freed.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_summary(
    ptr: *const CheckintDiffReport,
) -> *const c_char {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_summary` with null pointer"
    );
    (*ptr).summary_cstr.as_ptr()
}

/// Returns the number of retained mismatch lines.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_num_mismatch_lines(
    ptr: *const CheckintDiffReport,
) -> usize {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_num_mismatch_lines` with null pointer"
    );
    (*ptr).mismatch_cstrs.len()
}

/// Returns the retained mismatch line at `index`.
/// The pointer is valid until the report is freed.
///
/// # Panics
///
/// This function will panic if called with a null pointer or if the index
/// is out of bounds.
///
/// # Safety
///
/// The caller must ensure that the pointer is valid.
#[no_mangle]
pub unsafe extern "C" fn checkint_diff_report_get_mismatch_line(
    ptr: *const CheckintDiffReport,
    index: usize,
) -> *const c_char {
    assert!(
        !ptr.is_null(),
        "called `checkint_diff_report_get_mismatch_line` with null pointer"
    );
    let lines = &(*ptr).mismatch_cstrs;
    assert!(
        index < lines.len(),
        "called `checkint_diff_report_get_mismatch_line` with index out of bounds: the len is {} but the index is {}",
        lines.len(),
        index
    );
    lines[index].as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_eight_bit_run_through_handle() {
        unsafe {
            let report = checkint_diff_run(8, true);
            assert!(!report.is_null());

            assert_eq!(checkint_diff_report_width(report), 8);
            assert_eq!(checkint_diff_report_mismatches(report), 0);
            assert!(checkint_diff_report_passed(report));
            assert_eq!(checkint_diff_report_num_mismatch_lines(report), 0);
            // 5 unary and 13 binary operations.
            assert_eq!(checkint_diff_report_cases(report), 5 * 256 + 13 * 65_536);

            let summary = CStr::from_ptr(checkint_diff_report_summary(report))
                .to_str()
                .unwrap();
            assert!(summary.starts_with("8-bit exhaustive sweep"));
            assert!(summary.ends_with("passed"));

            checkint_diff_report_free(report);
        }
    }

    #[test]
    fn test_unsupported_width_returns_null() {
        let report = checkint_diff_run(24, false);
        assert!(report.is_null());
        unsafe { checkint_diff_report_free(report) };
    }
}
