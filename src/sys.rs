//! Raw C types shared with SDL_gpu.
//!
//! These mirror the native structs field by field, including the explicit
//! padding bytes the native headers carry. The layouts track SDL_gpu 0.12;
//! SDL_gpu does not promise they stay stable across releases.

use libc::{c_char, c_float, c_int, c_uint};
use std::marker::{PhantomData, PhantomPinned};

/// One-byte C `bool` as used by `GPU_bool`.
///
/// Struct fields read back from native memory keep the raw byte so that an
/// out-of-range value can never become an invalid Rust `bool`.
pub type GpuBool = u8;

/// Init flags, passed to `GPU_SetPreInitFlags` (and, as the C# binding did,
/// accepted verbatim by `GPU_Init`).
pub const INIT_ENABLE_VSYNC: u32 = 0x1;
pub const INIT_DISABLE_VSYNC: u32 = 0x2;
pub const INIT_DISABLE_DOUBLE_BUFFER: u32 = 0x4;
pub const INIT_DISABLE_AUTO_VIRTUAL_RESOLUTION: u32 = 0x8;
pub const INIT_REQUEST_COMPATIBILITY_PROFILE: u32 = 0x10;
pub const INIT_USE_ROW_BY_ROW_TEXTURE_UPLOAD_FALLBACK: u32 = 0x20;
pub const INIT_USE_COPY_TEXTURE_UPLOAD_FALLBACK: u32 = 0x40;

/// Shader stage (`GPU_ShaderEnum`).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    Vertex = 0,
    Fragment = 1,
    Geometry = 2,
}

impl ShaderType {
    /// `GPU_PIXEL_SHADER` is an alias of the fragment stage.
    pub const PIXEL: ShaderType = ShaderType::Fragment;
}

/// Pixel format of a newly created image (`GPU_FormatEnum`).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Luminance = 1,
    LuminanceAlpha = 2,
    Rgb = 3,
    Rgba = 4,
    Alpha = 5,
    Rg = 6,
    YCbCr422 = 7,
    YCbCr420P = 8,
    Bgr = 9,
    Bgra = 10,
    Abgr = 11,
}

/// Floating-point rectangle (`GPU_Rect`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: c_float,
    pub y: c_float,
    pub w: c_float,
    pub h: c_float,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Integer rectangle (`SDL_Rect`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SdlRect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

impl From<SdlRect> for Rect {
    fn from(r: SdlRect) -> Self {
        Self {
            x: r.x as f32,
            y: r.y as f32,
            w: r.w as f32,
            h: r.h as f32,
        }
    }
}

/// RGBA color passed by value (`SDL_Color`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Attribute and uniform locations of a linked shader program
/// (`GPU_ShaderBlock`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShaderBlock {
    pub position_loc: c_int,
    pub texcoord_loc: c_int,
    pub color_loc: c_int,
    pub model_view_projection_loc: c_int,
}

/// Camera state embedded in a target (`GPU_Camera`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
    pub angle: c_float,
    pub zoom_x: c_float,
    pub zoom_y: c_float,
    /// Near z clipping plane
    pub z_near: c_float,
    /// Far z clipping plane
    pub z_far: c_float,
    /// Rotation and scaling origin at the center of the view
    pub use_centered_origin: GpuBool,
    pub _padding: [u8; 7],
}

/// One matrix stack of a target (`GPU_MatrixStack`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MatrixStack {
    pub storage_size: c_uint,
    pub size: c_uint,
    pub matrix: *mut *mut c_float,
}

/// Field layout of a native rendering target (`GPU_Target`).
///
/// Only ever obtained as a copy, see [`crate::Target::data`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TargetData {
    pub renderer: *mut libc::c_void,
    pub context_target: *mut TargetData,
    pub image: *mut RawImage,
    pub data: *mut libc::c_void,
    pub w: u16,
    pub h: u16,
    pub base_w: u16,
    pub base_h: u16,
    pub clip_rect: Rect,
    pub color: Color,
    pub viewport: Rect,
    pub matrix_mode: c_int,
    pub projection_matrix: MatrixStack,
    pub view_matrix: MatrixStack,
    pub model_matrix: MatrixStack,
    pub camera: Camera,
    pub using_virtual_resolution: GpuBool,
    pub use_clip_rect: GpuBool,
    pub use_color: GpuBool,
    pub use_camera: GpuBool,
    pub depth_function: c_uint,
    pub context: *mut libc::c_void,
    pub refcount: c_int,
    pub use_depth_test: GpuBool,
    pub use_depth_write: GpuBool,
    pub is_alias: GpuBool,
    pub _padding: [u8; 1],
}

/// Entry of the native error queue (`GPU_ErrorObject`).
///
/// The strings are owned by SDL_gpu and only valid until the next pop.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ErrorObject {
    pub function: *const c_char,
    pub details: *const c_char,
    pub error: c_int,
    pub _padding: [u8; 4],
}

/// Opaque `GPU_Image`.
#[repr(C)]
pub struct RawImage {
    _opaque: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Opaque `SDL_Surface`, owned by SDL2.
#[repr(C)]
pub struct RawSurface {
    _opaque: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// Opaque `SDL_RWops`, owned by SDL2.
#[repr(C)]
pub struct RawRwOps {
    _opaque: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}
