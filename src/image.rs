//! Image creation, loading and release.

use crate::error::GpuError;
use crate::gpu::Gpu;
use crate::handle::Image;
use crate::sys::{ImageFormat, RawImage, RawRwOps, RawSurface};
use crate::util::utf8_arg;

/// Wrap a creation result, logging when SDL_gpu returned null.
fn created(raw: *mut RawImage, what: &str) -> Image {
    if raw.is_null() {
        log::warn!("{what} returned a null image");
    }
    unsafe { Image::from_raw(raw) }
}

impl Gpu {
    /// Create a blank image (`GPU_CreateImage`). Null on failure.
    pub fn create_image(&self, w: u16, h: u16, format: ImageFormat) -> Image {
        let raw = unsafe { (self.api().create_image)(w, h, format as u32) };
        created(raw, "GPU_CreateImage")
    }

    /// Load an image file (`GPU_LoadImage`).
    ///
    /// The returned image is null if SDL_gpu could not load the file. The
    /// only binding-side failure is a filename containing a NUL byte.
    pub fn load_image(&self, filename: &str) -> Result<Image, GpuError> {
        let filename = utf8_arg(filename, "filename")?;
        let raw = unsafe { (self.api().load_image)(filename.as_ptr()) };
        Ok(created(raw, "GPU_LoadImage"))
    }

    /// Upload an SDL surface into a new image (`GPU_CopyImageFromSurface`).
    ///
    /// # Safety
    ///
    /// `surface` must be a valid `SDL_Surface*`. It stays owned by the
    /// caller.
    pub unsafe fn copy_image_from_surface(&self, surface: *mut RawSurface) -> Image {
        let raw = unsafe { (self.api().copy_image_from_surface)(surface) };
        created(raw, "GPU_CopyImageFromSurface")
    }

    /// Load an image from an SDL_RWops stream (`GPU_LoadImage_RW`).
    ///
    /// # Safety
    ///
    /// `rwops` must be a valid `SDL_RWops*`. With `free_rwops` set, SDL_gpu
    /// closes it and the caller must not touch it again.
    pub unsafe fn load_image_rw(&self, rwops: *mut RawRwOps, free_rwops: bool) -> Image {
        let raw = unsafe { (self.api().load_image_rw)(rwops, free_rwops) };
        created(raw, "GPU_LoadImage_RW")
    }

    /// Release an image (`GPU_FreeImage`), consuming the handle.
    pub fn free_image(&self, image: Image) {
        let raw = image.into_raw();
        log::trace!("GPU_FreeImage({raw:p})");
        unsafe { (self.api().free_image)(raw) }
    }

    /// Set the color modulation of an image (`GPU_SetRGBA`).
    pub fn set_rgba(&self, image: &Image, r: u8, g: u8, b: u8, a: u8) {
        unsafe { (self.api().set_rgba)(image.as_ptr(), r, g, b, a) }
    }
}
