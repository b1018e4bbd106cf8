//! Target state, frame presentation and primitive shapes.

use crate::gpu::Gpu;
use crate::handle::Target;
use crate::sys::Color;

impl Gpu {
    /// Clear `target` to transparent black.
    pub fn clear(&self, target: &Target) {
        unsafe { (self.api().clear)(target.as_ptr()) }
    }

    pub fn clear_rgba(&self, target: &Target, r: u8, g: u8, b: u8, a: u8) {
        unsafe { (self.api().clear_rgba)(target.as_ptr(), r, g, b, a) }
    }

    /// Present `target` (swap buffers for a window target).
    pub fn flip(&self, target: &Target) {
        unsafe { (self.api().flip)(target.as_ptr()) }
    }

    /// Send queued blits to the GPU now.
    pub fn flush_blit_buffer(&self) {
        unsafe { (self.api().flush_blit_buffer)() }
    }

    pub fn set_window_resolution(&self, w: u16, h: u16) {
        unsafe { (self.api().set_window_resolution)(w, h) }
    }

    /// Enter or leave fullscreen. Returns the fullscreen state SDL_gpu
    /// reports afterwards.
    pub fn set_fullscreen(&self, enable: bool, use_desktop_resolution: bool) -> bool {
        unsafe { (self.api().set_fullscreen)(enable, use_desktop_resolution) }
    }

    pub fn fullscreen(&self) -> bool {
        unsafe { (self.api().get_fullscreen)() }
    }

    /// Toggle blending for shape primitives.
    pub fn set_shape_blending(&self, enable: bool) {
        unsafe { (self.api().set_shape_blending)(enable) }
    }

    /// Set the line thickness for shapes, returning the previous thickness.
    pub fn set_line_thickness(&self, thickness: f32) -> f32 {
        unsafe { (self.api().set_line_thickness)(thickness) }
    }

    pub fn line_thickness(&self) -> f32 {
        unsafe { (self.api().get_line_thickness)() }
    }

    pub fn pixel(&self, target: &Target, x: f32, y: f32, color: Color) {
        unsafe { (self.api().pixel)(target.as_ptr(), x, y, color) }
    }

    pub fn line(&self, target: &Target, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        unsafe { (self.api().line)(target.as_ptr(), x1, y1, x2, y2, color) }
    }

    /// Outline the rectangle spanning (x1, y1) to (x2, y2).
    pub fn rectangle(&self, target: &Target, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        unsafe { (self.api().rectangle)(target.as_ptr(), x1, y1, x2, y2, color) }
    }

    pub fn rectangle_filled(
        &self,
        target: &Target,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    ) {
        unsafe { (self.api().rectangle_filled)(target.as_ptr(), x1, y1, x2, y2, color) }
    }
}
