//! Blitting images onto targets.
//!
//! SDL_gpu reads a null rectangle pointer as "no rectangle": the whole image
//! for a source rect, the default placement for a destination rect. Each
//! optional rectangle is matched explicitly and the present case passes the
//! address of a local copy.

use crate::gpu::Gpu;
use crate::handle::{Image, Target};
use crate::sys::Rect;
use std::ptr;

impl Gpu {
    /// Draw `image` (or its `src_rect` region) centered at (x, y).
    pub fn blit(&self, image: &Image, src_rect: Option<Rect>, target: &Target, x: f32, y: f32) {
        let blit = self.api().blit;
        match src_rect {
            Some(mut src) => unsafe { blit(image.as_ptr(), &mut src, target.as_ptr(), x, y) },
            None => unsafe { blit(image.as_ptr(), ptr::null_mut(), target.as_ptr(), x, y) },
        }
    }

    /// Blit with rotation (degrees) and scaling about the image center.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_transform(
        &self,
        image: &Image,
        src_rect: Option<Rect>,
        target: &Target,
        x: f32,
        y: f32,
        degrees: f32,
        scale_x: f32,
        scale_y: f32,
    ) {
        let blit_transform = self.api().blit_transform;
        let (image, target) = (image.as_ptr(), target.as_ptr());
        match src_rect {
            Some(mut src) => unsafe {
                blit_transform(image, &mut src, target, x, y, degrees, scale_x, scale_y)
            },
            None => unsafe {
                blit_transform(image, ptr::null_mut(), target, x, y, degrees, scale_x, scale_y)
            },
        }
    }

    /// Blit with rotation and scaling about the pivot (`pivot_x`, `pivot_y`),
    /// given relative to the image's top-left corner.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_transform_x(
        &self,
        image: &Image,
        src_rect: Option<Rect>,
        target: &Target,
        x: f32,
        y: f32,
        pivot_x: f32,
        pivot_y: f32,
        degrees: f32,
        scale_x: f32,
        scale_y: f32,
    ) {
        let blit_transform_x = self.api().blit_transform_x;
        let (image, target) = (image.as_ptr(), target.as_ptr());
        match src_rect {
            Some(mut src) => unsafe {
                blit_transform_x(
                    image, &mut src, target, x, y, pivot_x, pivot_y, degrees, scale_x, scale_y,
                )
            },
            None => unsafe {
                blit_transform_x(
                    image,
                    ptr::null_mut(),
                    target,
                    x,
                    y,
                    pivot_x,
                    pivot_y,
                    degrees,
                    scale_x,
                    scale_y,
                )
            },
        }
    }

    /// Stretch `image` (or its `src_rect` region) into `dest_rect`.
    pub fn blit_rect(
        &self,
        image: &Image,
        src_rect: Option<Rect>,
        target: &Target,
        dest_rect: Option<Rect>,
    ) {
        let blit_rect = self.api().blit_rect;
        let (image, target) = (image.as_ptr(), target.as_ptr());
        match (src_rect, dest_rect) {
            (Some(mut src), Some(mut dest)) => unsafe {
                blit_rect(image, &mut src, target, &mut dest)
            },
            (Some(mut src), None) => unsafe {
                blit_rect(image, &mut src, target, ptr::null_mut())
            },
            (None, Some(mut dest)) => unsafe {
                blit_rect(image, ptr::null_mut(), target, &mut dest)
            },
            (None, None) => unsafe { blit_rect(image, ptr::null_mut(), target, ptr::null_mut()) },
        }
    }
}
