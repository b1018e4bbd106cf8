//! Owning wrappers for native handles.

use crate::sys::{RawImage, TargetData};

/// Owning handle to a native rendering target (`GPU_Target*`).
///
/// The pointer is stored as returned by SDL_gpu, null included: a null
/// target means the creation call failed and must be checked with
/// [`Target::is_null`] before use. The handle is released only through
/// [`crate::Gpu::free_target`]; dropping it leaks the native target.
///
/// # Thread Safety
///
/// `Target` is NOT `Send` or `Sync`. SDL_gpu targets belong to the thread
/// that owns the GL context.
#[derive(Debug)]
pub struct Target {
    raw: *mut TargetData,
}

impl Target {
    /// Wrap a raw target pointer.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live target returned by SDL_gpu, and no other
    /// `Target` may own it.
    pub unsafe fn from_raw(raw: *mut TargetData) -> Self {
        Self { raw }
    }

    /// The raw address, for passing to native calls.
    ///
    /// Copies of this address stay unchanged after the target is freed and
    /// must not be used again.
    pub fn as_ptr(&self) -> *mut TargetData {
        self.raw
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Snapshot of the native target state.
    ///
    /// The bytes are copied on every call; editing the copy does not touch
    /// the native target. Returns `None` for a null target.
    pub fn data(&self) -> Option<TargetData> {
        if self.raw.is_null() {
            return None;
        }
        Some(unsafe { self.raw.read() })
    }

    /// Release ownership without freeing, returning the raw pointer.
    pub fn into_raw(self) -> *mut TargetData {
        self.raw
    }
}

/// Owning handle to a native image (`GPU_Image*`).
///
/// Same contract as [`Target`]: null is a representable "no image" state,
/// and the only release path is [`crate::Gpu::free_image`].
#[derive(Debug)]
pub struct Image {
    raw: *mut RawImage,
}

impl Image {
    /// Wrap a raw image pointer.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live image returned by SDL_gpu, and no other
    /// `Image` may own it.
    pub unsafe fn from_raw(raw: *mut RawImage) -> Self {
        Self { raw }
    }

    pub fn as_ptr(&self) -> *mut RawImage {
        self.raw
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Release ownership without freeing, returning the raw pointer.
    pub fn into_raw(self) -> *mut RawImage {
        self.raw
    }
}
