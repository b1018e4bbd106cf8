//! Native entry point table.
//!
//! Every field is one SDL_gpu export, bound by its exact symbol name. The
//! table is declared through a single macro so that the field, its C
//! signature and its symbol name sit on the same line.

use crate::error::GpuError;
use crate::sys::{
    Color, ErrorObject, RawImage, RawRwOps, RawSurface, Rect, ShaderBlock, TargetData,
};
use libc::{c_char, c_float, c_int, c_uint};
use libloading::Library;

macro_rules! native_api {
    ($( $symbol:literal => $field:ident : fn($($arg:ty),* $(,)?) $(-> $ret:ty)?; )*) => {
        /// Function pointers for every SDL_gpu export this crate uses.
        ///
        /// Built by [`crate::Gpu::load`] from a shared library, or by hand for
        /// [`crate::Gpu::from_api`].
        #[derive(Debug, Clone, Copy)]
        pub struct Api {
            $( pub $field: unsafe extern "C" fn($($arg),*) $(-> $ret)?, )*
        }

        impl Api {
            /// Native names of all bound symbols, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[$($symbol),*];

            /// Resolve every symbol from `library`.
            ///
            /// # Safety
            ///
            /// `library` must be SDL_gpu, exporting these symbols with the
            /// declared signatures.
            pub(crate) unsafe fn resolve(library: &Library) -> Result<Self, GpuError> {
                Ok(Self {
                    $( $field: unsafe { symbol(library, $symbol)? }, )*
                })
            }
        }
    };
}

native_api! {
    "GPU_Init" => init: fn(u16, u16, u32) -> *mut TargetData;
    "GPU_Quit" => quit: fn();
    "GPU_SetPreInitFlags" => set_pre_init_flags: fn(u32);
    "GPU_GetPreInitFlags" => get_pre_init_flags: fn() -> u32;

    "GPU_Clear" => clear: fn(*mut TargetData);
    "GPU_ClearRGBA" => clear_rgba: fn(*mut TargetData, u8, u8, u8, u8);
    "GPU_Flip" => flip: fn(*mut TargetData);
    "GPU_FlushBlitBuffer" => flush_blit_buffer: fn();
    "GPU_SetWindowResolution" => set_window_resolution: fn(u16, u16);
    "GPU_SetFullscreen" => set_fullscreen: fn(bool, bool) -> bool;
    "GPU_GetFullscreen" => get_fullscreen: fn() -> bool;

    "GPU_SetShapeBlending" => set_shape_blending: fn(bool);
    "GPU_SetLineThickness" => set_line_thickness: fn(c_float) -> c_float;
    "GPU_GetLineThickness" => get_line_thickness: fn() -> c_float;
    "GPU_Pixel" => pixel: fn(*mut TargetData, c_float, c_float, Color);
    "GPU_Line" => line: fn(*mut TargetData, c_float, c_float, c_float, c_float, Color);
    "GPU_Rectangle" => rectangle: fn(*mut TargetData, c_float, c_float, c_float, c_float, Color);
    "GPU_RectangleFilled" => rectangle_filled: fn(
        *mut TargetData, c_float, c_float, c_float, c_float, Color,
    );

    "GPU_Blit" => blit: fn(*mut RawImage, *mut Rect, *mut TargetData, c_float, c_float);
    "GPU_BlitTransform" => blit_transform: fn(
        *mut RawImage, *mut Rect, *mut TargetData,
        c_float, c_float, c_float, c_float, c_float,
    );
    "GPU_BlitTransformX" => blit_transform_x: fn(
        *mut RawImage, *mut Rect, *mut TargetData,
        c_float, c_float, c_float, c_float, c_float, c_float, c_float,
    );
    "GPU_BlitRect" => blit_rect: fn(*mut RawImage, *mut Rect, *mut TargetData, *mut Rect);

    "GPU_CompileShader" => compile_shader: fn(u32, *const c_char) -> u32;
    "GPU_LinkShaders" => link_shaders: fn(u32, u32) -> u32;
    "GPU_FreeShader" => free_shader: fn(u32);
    "GPU_FreeShaderProgram" => free_shader_program: fn(u32);
    "GPU_LoadShaderBlock" => load_shader_block: fn(
        u32, *const c_char, *const c_char, *const c_char, *const c_char,
    ) -> ShaderBlock;
    "GPU_SetShaderBlock" => set_shader_block: fn(ShaderBlock);
    "GPU_GetShaderBlock" => get_shader_block: fn() -> ShaderBlock;
    "GPU_ActivateShaderProgram" => activate_shader_program: fn(u32, *mut ShaderBlock);
    "GPU_DeactivateShaderProgram" => deactivate_shader_program: fn();
    "GPU_GetShaderMessage" => get_shader_message: fn() -> *const c_char;
    "GPU_GetAttributeLocation" => get_attribute_location: fn(u32, *const c_char) -> c_int;
    "GPU_GetUniformLocation" => get_uniform_location: fn(u32, *const c_char) -> c_int;
    "GPU_SetShaderImage" => set_shader_image: fn(*mut RawImage, c_int, c_int);

    "GPU_SetUniformi" => set_uniform_i: fn(c_int, c_int);
    "GPU_SetUniformui" => set_uniform_ui: fn(c_int, c_uint);
    "GPU_SetUniformf" => set_uniform_f: fn(c_int, c_float);
    "GPU_SetAttributei" => set_attribute_i: fn(c_int, c_int);
    "GPU_SetAttributeui" => set_attribute_ui: fn(c_int, c_uint);
    "GPU_SetAttributef" => set_attribute_f: fn(c_int, c_float);
    "GPU_SetUniformiv" => set_uniform_iv: fn(c_int, c_int, c_int, *const c_int);
    "GPU_SetUniformuiv" => set_uniform_uiv: fn(c_int, c_int, c_int, *const c_uint);
    "GPU_SetUniformfv" => set_uniform_fv: fn(c_int, c_int, c_int, *const c_float);
    "GPU_SetAttributeiv" => set_attribute_iv: fn(c_int, c_int, *const c_int);
    "GPU_SetAttributeuiv" => set_attribute_uiv: fn(c_int, c_int, *const c_uint);
    "GPU_SetAttributefv" => set_attribute_fv: fn(c_int, c_int, *const c_float);

    "GPU_CreateImage" => create_image: fn(u16, u16, u32) -> *mut RawImage;
    "GPU_LoadImage" => load_image: fn(*const c_char) -> *mut RawImage;
    "GPU_CopyImageFromSurface" => copy_image_from_surface: fn(*mut RawSurface) -> *mut RawImage;
    "GPU_LoadImage_RW" => load_image_rw: fn(*mut RawRwOps, bool) -> *mut RawImage;
    "GPU_FreeImage" => free_image: fn(*mut RawImage);
    "GPU_SetRGBA" => set_rgba: fn(*mut RawImage, u8, u8, u8, u8);
    "GPU_LoadTarget" => load_target: fn(*mut RawImage) -> *mut TargetData;
    "GPU_FreeTarget" => free_target: fn(*mut TargetData);

    "GPU_PopErrorCode" => pop_error_code: fn() -> ErrorObject;
    "GPU_SetErrorQueueMax" => set_error_queue_max: fn(c_uint);
    "GPU_GetErrorString" => get_error_string: fn(c_int) -> *const c_char;
}

/// Copy one function pointer out of `library`.
///
/// # Safety
///
/// `T` must be the exact function pointer type of the exported symbol.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, GpuError> {
    let sym = unsafe { library.get::<T>(name.as_bytes()) }
        .map_err(|source| GpuError::MissingSymbol { symbol: name, source })?;
    Ok(*sym)
}
