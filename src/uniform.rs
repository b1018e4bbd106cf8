//! Uniform and vertex attribute setters.
//!
//! The slice setters forward the slice length as the native element count
//! and its buffer as the value pointer; the borrow keeps the memory in place
//! for the duration of the call. Every element type has its own native
//! entry point, and each setter calls the one matching its slice type.

use crate::error::GpuError;
use crate::gpu::Gpu;
use crate::util::array_len;

impl Gpu {
    pub fn set_uniform_i(&self, location: i32, value: i32) {
        unsafe { (self.api().set_uniform_i)(location, value) }
    }

    pub fn set_uniform_ui(&self, location: i32, value: u32) {
        unsafe { (self.api().set_uniform_ui)(location, value) }
    }

    pub fn set_uniform_f(&self, location: i32, value: f32) {
        unsafe { (self.api().set_uniform_f)(location, value) }
    }

    pub fn set_attribute_i(&self, location: i32, value: i32) {
        unsafe { (self.api().set_attribute_i)(location, value) }
    }

    pub fn set_attribute_ui(&self, location: i32, value: u32) {
        unsafe { (self.api().set_attribute_ui)(location, value) }
    }

    pub fn set_attribute_f(&self, location: i32, value: f32) {
        unsafe { (self.api().set_attribute_f)(location, value) }
    }

    /// Upload `values` as one uniform value of `values.len()` ints
    /// (`GPU_SetUniformiv` with `num_values = 1`).
    pub fn set_uniform_iv(&self, location: i32, values: &[i32]) -> Result<(), GpuError> {
        let count = array_len(values.len(), "values")?;
        unsafe { (self.api().set_uniform_iv)(location, count, 1, values.as_ptr()) };
        Ok(())
    }

    /// Unsigned variant of [`Gpu::set_uniform_iv`].
    pub fn set_uniform_uiv(&self, location: i32, values: &[u32]) -> Result<(), GpuError> {
        let count = array_len(values.len(), "values")?;
        unsafe { (self.api().set_uniform_uiv)(location, count, 1, values.as_ptr()) };
        Ok(())
    }

    /// Float variant of [`Gpu::set_uniform_iv`].
    pub fn set_uniform_fv(&self, location: i32, values: &[f32]) -> Result<(), GpuError> {
        let count = array_len(values.len(), "values")?;
        unsafe { (self.api().set_uniform_fv)(location, count, 1, values.as_ptr()) };
        Ok(())
    }

    /// Set a constant vertex attribute from `values` (`GPU_SetAttributeiv`).
    pub fn set_attribute_iv(&self, location: i32, values: &[i32]) -> Result<(), GpuError> {
        let count = array_len(values.len(), "values")?;
        unsafe { (self.api().set_attribute_iv)(location, count, values.as_ptr()) };
        Ok(())
    }

    pub fn set_attribute_uiv(&self, location: i32, values: &[u32]) -> Result<(), GpuError> {
        let count = array_len(values.len(), "values")?;
        unsafe { (self.api().set_attribute_uiv)(location, count, values.as_ptr()) };
        Ok(())
    }

    pub fn set_attribute_fv(&self, location: i32, values: &[f32]) -> Result<(), GpuError> {
        let count = array_len(values.len(), "values")?;
        unsafe { (self.api().set_attribute_fv)(location, count, values.as_ptr()) };
        Ok(())
    }
}
