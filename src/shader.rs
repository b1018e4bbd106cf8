//! Shader compilation, linking and program state.

use crate::error::GpuError;
use crate::gpu::Gpu;
use crate::handle::Image;
use crate::sys::{ShaderBlock, ShaderType};
use crate::util::{native_string, utf8_arg};
use std::ptr;

impl Gpu {
    /// Compile one shader stage (`GPU_CompileShader`).
    ///
    /// Returns SDL_gpu's shader object, `0` when compilation failed. The
    /// diagnostic is then available from [`Gpu::shader_message`].
    pub fn compile_shader(&self, shader_type: ShaderType, source: &str) -> Result<u32, GpuError> {
        let source = utf8_arg(source, "shader_source")?;
        let shader = unsafe { (self.api().compile_shader)(shader_type as u32, source.as_ptr()) };
        if shader == 0 {
            log::debug!("GPU_CompileShader({shader_type:?}) returned 0");
        }
        Ok(shader)
    }

    /// Link two compiled shaders into a program. `0` on failure.
    pub fn link_shaders(&self, shader_object1: u32, shader_object2: u32) -> u32 {
        unsafe { (self.api().link_shaders)(shader_object1, shader_object2) }
    }

    pub fn free_shader(&self, shader_object: u32) {
        unsafe { (self.api().free_shader)(shader_object) }
    }

    pub fn free_shader_program(&self, program_object: u32) {
        unsafe { (self.api().free_shader_program)(program_object) }
    }

    /// Look up the four standard attribute and uniform locations of a
    /// program (`GPU_LoadShaderBlock`).
    pub fn load_shader_block(
        &self,
        program_object: u32,
        position_name: &str,
        texcoord_name: &str,
        color_name: &str,
        model_view_matrix_name: &str,
    ) -> Result<ShaderBlock, GpuError> {
        let position = utf8_arg(position_name, "position_name")?;
        let texcoord = utf8_arg(texcoord_name, "texcoord_name")?;
        let color = utf8_arg(color_name, "color_name")?;
        let model_view = utf8_arg(model_view_matrix_name, "model_view_matrix_name")?;

        Ok(unsafe {
            (self.api().load_shader_block)(
                program_object,
                position.as_ptr(),
                texcoord.as_ptr(),
                color.as_ptr(),
                model_view.as_ptr(),
            )
        })
    }

    /// Make `block` the locations used by subsequent blits.
    pub fn set_shader_block(&self, block: ShaderBlock) {
        unsafe { (self.api().set_shader_block)(block) }
    }

    pub fn shader_block(&self) -> ShaderBlock {
        unsafe { (self.api().get_shader_block)() }
    }

    /// Activate a program for subsequent draws.
    ///
    /// With `None` SDL_gpu receives a null block pointer and looks the
    /// standard locations up itself.
    pub fn activate_shader_program(&self, program_object: u32, block: Option<&ShaderBlock>) {
        let activate = self.api().activate_shader_program;
        match block {
            Some(block) => {
                let mut block = *block;
                unsafe { activate(program_object, &mut block) }
            }
            None => unsafe { activate(program_object, ptr::null_mut()) },
        }
    }

    /// Return to the default program.
    pub fn deactivate_shader_program(&self) {
        unsafe { (self.api().deactivate_shader_program)() }
    }

    /// The last shader compile or link diagnostic, if SDL_gpu has one.
    pub fn shader_message(&self) -> Option<String> {
        unsafe { native_string((self.api().get_shader_message)()) }
    }

    /// Location of a vertex attribute, `-1` if the program has none.
    pub fn attribute_location(
        &self,
        program_object: u32,
        attrib_name: &str,
    ) -> Result<i32, GpuError> {
        let name = utf8_arg(attrib_name, "attrib_name")?;
        Ok(unsafe { (self.api().get_attribute_location)(program_object, name.as_ptr()) })
    }

    /// Location of a uniform, `-1` if the program has none.
    pub fn uniform_location(
        &self,
        program_object: u32,
        uniform_name: &str,
    ) -> Result<i32, GpuError> {
        let name = utf8_arg(uniform_name, "uniform_name")?;
        Ok(unsafe { (self.api().get_uniform_location)(program_object, name.as_ptr()) })
    }

    /// Bind `image` to the sampler at `location` using texture unit
    /// `image_unit`.
    pub fn set_shader_image(&self, image: &Image, location: i32, image_unit: i32) {
        unsafe { (self.api().set_shader_image)(image.as_ptr(), location, image_unit) }
    }
}
