//! Marshaling helpers for crossing the native boundary.

use crate::error::GpuError;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};

/// Encode a text argument as a NUL-terminated UTF-8 buffer.
///
/// The buffer lives for the enclosing scope only; pass `as_ptr()` to exactly
/// one native call and let it drop. An empty string yields a valid one-byte
/// buffer, never a null pointer.
pub(crate) fn utf8_arg(text: &str, param: &'static str) -> Result<CString, GpuError> {
    CString::new(text).map_err(|_| GpuError::InteriorNul { param })
}

/// Copy a native C string into an owned `String`.
///
/// Returns `None` for a null pointer. Invalid UTF-8 is replaced rather than
/// rejected, since native diagnostics are passed through as-is.
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated C string.
pub(crate) unsafe fn native_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let cstr = unsafe { CStr::from_ptr(ptr) };
    Some(cstr.to_string_lossy().into_owned())
}

/// Element count of a slice as the native `int` count argument.
pub(crate) fn array_len(len: usize, param: &'static str) -> Result<c_int, GpuError> {
    c_int::try_from(len).map_err(|_| GpuError::ArrayTooLong { param, len })
}
