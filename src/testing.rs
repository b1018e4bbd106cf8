//! Recording stand-in for SDL_gpu, used by the unit tests.
//!
//! Every fake entry point appends a [`Call`] (symbol name plus decoded
//! arguments) to a thread-local log and answers with a small, predictable
//! result. State is per thread and reset by [`gpu`].

use crate::api::Api;
use crate::gpu::Gpu;
use crate::sys::{
    Color, ErrorObject, RawImage, RawRwOps, RawSurface, Rect, ShaderBlock, TargetData,
};
use libc::{c_char, c_float, c_int, c_uint};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::CStr;

/// A decoded native argument.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Arg {
    Ptr(usize),
    Int(i64),
    Uint(u64),
    Float(f32),
    Bool(bool),
    Color(Color),
    Rect(Option<Rect>),
    Block(Option<ShaderBlock>),
    /// Bytes of a C string, terminating NUL included
    Text(Vec<u8>),
    Ints(Vec<i32>),
    Uints(Vec<u32>),
    Floats(Vec<f32>),
}

impl Arg {
    /// Expected encoding of `s` as received by native code.
    pub(crate) fn text(s: &str) -> Arg {
        let mut bytes = s.as_bytes().to_vec();
        bytes.push(0);
        Arg::Text(bytes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub name: &'static str,
    pub args: Vec<Arg>,
}

struct FakeState {
    calls: Vec<Call>,
    errors: VecDeque<(&'static CStr, &'static CStr, c_int)>,
    line_thickness: f32,
    fullscreen: bool,
    pre_init_flags: u32,
    shader_block: ShaderBlock,
    shader_message: Option<&'static CStr>,
}

impl FakeState {
    fn new() -> Self {
        Self {
            calls: Vec::new(),
            errors: VecDeque::new(),
            line_thickness: 1.0,
            fullscreen: false,
            pre_init_flags: 0,
            shader_block: ShaderBlock::default(),
            shader_message: None,
        }
    }
}

thread_local! {
    static STATE: RefCell<FakeState> = RefCell::new(FakeState::new());
}

/// Fake image allocation; only its size is tracked.
struct FakeImage {
    w: u16,
    h: u16,
}

fn with_state<R>(f: impl FnOnce(&mut FakeState) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

fn record(name: &'static str, args: Vec<Arg>) {
    with_state(|s| s.calls.push(Call { name, args }));
}

/// A [`Gpu`] wired to the fake table, with fresh per-thread state.
pub(crate) fn gpu() -> Gpu {
    with_state(|s| *s = FakeState::new());
    unsafe { Gpu::from_api(api()) }
}

/// Drain the call log.
pub(crate) fn take_calls() -> Vec<Call> {
    with_state(|s| std::mem::take(&mut s.calls))
}

pub(crate) fn last_call() -> Call {
    with_state(|s| s.calls.last().cloned()).expect("no native call recorded")
}

pub(crate) fn calls_named(name: &str) -> usize {
    with_state(|s| s.calls.iter().filter(|c| c.name == name).count())
}

/// Queue a record for the fake `GPU_PopErrorCode`.
pub(crate) fn push_error(function: &'static CStr, details: &'static CStr, code: c_int) {
    with_state(|s| s.errors.push_back((function, details, code)));
}

/// Leak a zeroed native target of the given size.
pub(crate) fn fake_target(w: u16, h: u16) -> *mut TargetData {
    let mut data: TargetData = unsafe { std::mem::zeroed() };
    data.w = w;
    data.h = h;
    data.base_w = w;
    data.base_h = h;
    Box::into_raw(Box::new(data))
}

fn fake_image(w: u16, h: u16) -> *mut RawImage {
    Box::into_raw(Box::new(FakeImage { w, h })).cast()
}

fn rgba_args(handle: Arg, rgba: [u8; 4]) -> Vec<Arg> {
    let mut args = vec![handle];
    args.extend(rgba.map(|c| Arg::Uint(c.into())));
    args
}

fn ptr<T>(p: *const T) -> Arg {
    Arg::Ptr(p as usize)
}

unsafe fn text(p: *const c_char) -> Arg {
    if p.is_null() {
        return Arg::Ptr(0);
    }
    Arg::Text(unsafe { CStr::from_ptr(p) }.to_bytes_with_nul().to_vec())
}

unsafe fn slice<T: Copy>(p: *const T, len: c_int) -> Vec<T> {
    if len <= 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(p, len as usize) }.to_vec()
}

fn name_loc(name: &CStr) -> c_int {
    match name.to_bytes().len() {
        0 => -1,
        n => n as c_int,
    }
}

// Lifecycle

unsafe extern "C" fn init(w: u16, h: u16, flags: u32) -> *mut TargetData {
    record(
        "GPU_Init",
        vec![Arg::Uint(w.into()), Arg::Uint(h.into()), Arg::Uint(flags.into())],
    );
    if w == 0 || h == 0 {
        return std::ptr::null_mut();
    }
    fake_target(w, h)
}

unsafe extern "C" fn quit() {
    record("GPU_Quit", vec![]);
}

unsafe extern "C" fn set_pre_init_flags(flags: u32) {
    record("GPU_SetPreInitFlags", vec![Arg::Uint(flags.into())]);
    with_state(|s| s.pre_init_flags = flags);
}

unsafe extern "C" fn get_pre_init_flags() -> u32 {
    record("GPU_GetPreInitFlags", vec![]);
    with_state(|s| s.pre_init_flags)
}

// Target state and shapes

unsafe extern "C" fn clear(target: *mut TargetData) {
    record("GPU_Clear", vec![ptr(target)]);
}

unsafe extern "C" fn clear_rgba(target: *mut TargetData, r: u8, g: u8, b: u8, a: u8) {
    record(
        "GPU_ClearRGBA",
        rgba_args(ptr(target), [r, g, b, a]),
    );
}

unsafe extern "C" fn flip(target: *mut TargetData) {
    record("GPU_Flip", vec![ptr(target)]);
}

unsafe extern "C" fn flush_blit_buffer() {
    record("GPU_FlushBlitBuffer", vec![]);
}

unsafe extern "C" fn set_window_resolution(w: u16, h: u16) {
    record("GPU_SetWindowResolution", vec![Arg::Uint(w.into()), Arg::Uint(h.into())]);
}

unsafe extern "C" fn set_fullscreen(enable: bool, use_desktop: bool) -> bool {
    record("GPU_SetFullscreen", vec![Arg::Bool(enable), Arg::Bool(use_desktop)]);
    with_state(|s| {
        s.fullscreen = enable;
        s.fullscreen
    })
}

unsafe extern "C" fn get_fullscreen() -> bool {
    record("GPU_GetFullscreen", vec![]);
    with_state(|s| s.fullscreen)
}

unsafe extern "C" fn set_shape_blending(enable: bool) {
    record("GPU_SetShapeBlending", vec![Arg::Bool(enable)]);
}

unsafe extern "C" fn set_line_thickness(thickness: c_float) -> c_float {
    record("GPU_SetLineThickness", vec![Arg::Float(thickness)]);
    with_state(|s| std::mem::replace(&mut s.line_thickness, thickness))
}

unsafe extern "C" fn get_line_thickness() -> c_float {
    record("GPU_GetLineThickness", vec![]);
    with_state(|s| s.line_thickness)
}

unsafe extern "C" fn pixel(target: *mut TargetData, x: c_float, y: c_float, color: Color) {
    record("GPU_Pixel", vec![ptr(target), Arg::Float(x), Arg::Float(y), Arg::Color(color)]);
}

fn shape(name: &'static str, target: *mut TargetData, coords: [c_float; 4], color: Color) {
    let mut args = vec![ptr(target)];
    args.extend(coords.into_iter().map(Arg::Float));
    args.push(Arg::Color(color));
    record(name, args);
}

unsafe extern "C" fn line(
    t: *mut TargetData,
    x1: c_float,
    y1: c_float,
    x2: c_float,
    y2: c_float,
    c: Color,
) {
    shape("GPU_Line", t, [x1, y1, x2, y2], c);
}

unsafe extern "C" fn rectangle(
    t: *mut TargetData,
    x1: c_float,
    y1: c_float,
    x2: c_float,
    y2: c_float,
    c: Color,
) {
    shape("GPU_Rectangle", t, [x1, y1, x2, y2], c);
}

unsafe extern "C" fn rectangle_filled(
    t: *mut TargetData,
    x1: c_float,
    y1: c_float,
    x2: c_float,
    y2: c_float,
    c: Color,
) {
    shape("GPU_RectangleFilled", t, [x1, y1, x2, y2], c);
}

// Blits

unsafe fn rect(p: *mut Rect) -> Arg {
    Arg::Rect(unsafe { p.as_ref() }.copied())
}

unsafe extern "C" fn blit(
    image: *mut RawImage,
    src: *mut Rect,
    target: *mut TargetData,
    x: c_float,
    y: c_float,
) {
    let args = vec![ptr(image), unsafe { rect(src) }, ptr(target), Arg::Float(x), Arg::Float(y)];
    record("GPU_Blit", args);
}

unsafe extern "C" fn blit_transform(
    image: *mut RawImage,
    src: *mut Rect,
    target: *mut TargetData,
    x: c_float,
    y: c_float,
    degrees: c_float,
    scale_x: c_float,
    scale_y: c_float,
) {
    let mut args = vec![ptr(image), unsafe { rect(src) }, ptr(target)];
    args.extend([x, y, degrees, scale_x, scale_y].map(Arg::Float));
    record("GPU_BlitTransform", args);
}

unsafe extern "C" fn blit_transform_x(
    image: *mut RawImage,
    src: *mut Rect,
    target: *mut TargetData,
    x: c_float,
    y: c_float,
    pivot_x: c_float,
    pivot_y: c_float,
    degrees: c_float,
    scale_x: c_float,
    scale_y: c_float,
) {
    let mut args = vec![ptr(image), unsafe { rect(src) }, ptr(target)];
    args.extend([x, y, pivot_x, pivot_y, degrees, scale_x, scale_y].map(Arg::Float));
    record("GPU_BlitTransformX", args);
}

unsafe extern "C" fn blit_rect(
    image: *mut RawImage,
    src: *mut Rect,
    target: *mut TargetData,
    dest: *mut Rect,
) {
    let args = vec![ptr(image), unsafe { rect(src) }, ptr(target), unsafe { rect(dest) }];
    record("GPU_BlitRect", args);
    // Scribble over the destination to show writes stay on the native side.
    if let Some(dest) = unsafe { dest.as_mut() } {
        *dest = Rect::new(-1.0, -1.0, -1.0, -1.0);
    }
}

// Shaders

unsafe extern "C" fn compile_shader(shader_type: u32, source: *const c_char) -> u32 {
    record("GPU_CompileShader", vec![Arg::Uint(shader_type.into()), unsafe { text(source) }]);
    let len = unsafe { CStr::from_ptr(source) }.to_bytes().len();
    if len == 0 {
        with_state(|s| s.shader_message = Some(c"Failed to compile shader: empty source"));
        return 0;
    }
    len as u32
}

unsafe extern "C" fn link_shaders(a: u32, b: u32) -> u32 {
    record("GPU_LinkShaders", vec![Arg::Uint(a.into()), Arg::Uint(b.into())]);
    a * 100 + b
}

unsafe extern "C" fn free_shader(shader: u32) {
    record("GPU_FreeShader", vec![Arg::Uint(shader.into())]);
}

unsafe extern "C" fn free_shader_program(program: u32) {
    record("GPU_FreeShaderProgram", vec![Arg::Uint(program.into())]);
}

unsafe extern "C" fn load_shader_block(
    program: u32,
    position: *const c_char,
    texcoord: *const c_char,
    color: *const c_char,
    model_view: *const c_char,
) -> ShaderBlock {
    let names = [position, texcoord, color, model_view];
    let mut args = vec![Arg::Uint(program.into())];
    args.extend(names.iter().map(|&p| unsafe { text(p) }));
    record("GPU_LoadShaderBlock", args);

    let [position, texcoord, color, model_view] =
        names.map(|p| name_loc(unsafe { CStr::from_ptr(p) }));
    ShaderBlock {
        position_loc: position,
        texcoord_loc: texcoord,
        color_loc: color,
        model_view_projection_loc: model_view,
    }
}

unsafe extern "C" fn set_shader_block(block: ShaderBlock) {
    record("GPU_SetShaderBlock", vec![Arg::Block(Some(block))]);
    with_state(|s| s.shader_block = block);
}

unsafe extern "C" fn get_shader_block() -> ShaderBlock {
    record("GPU_GetShaderBlock", vec![]);
    with_state(|s| s.shader_block)
}

unsafe extern "C" fn activate_shader_program(program: u32, block: *mut ShaderBlock) {
    let block = unsafe { block.as_ref() }.copied();
    record("GPU_ActivateShaderProgram", vec![Arg::Uint(program.into()), Arg::Block(block)]);
}

unsafe extern "C" fn deactivate_shader_program() {
    record("GPU_DeactivateShaderProgram", vec![]);
}

unsafe extern "C" fn get_shader_message() -> *const c_char {
    record("GPU_GetShaderMessage", vec![]);
    with_state(|s| s.shader_message.map_or(std::ptr::null(), CStr::as_ptr))
}

unsafe extern "C" fn get_attribute_location(program: u32, name: *const c_char) -> c_int {
    record("GPU_GetAttributeLocation", vec![Arg::Uint(program.into()), unsafe { text(name) }]);
    name_loc(unsafe { CStr::from_ptr(name) })
}

unsafe extern "C" fn get_uniform_location(program: u32, name: *const c_char) -> c_int {
    record("GPU_GetUniformLocation", vec![Arg::Uint(program.into()), unsafe { text(name) }]);
    name_loc(unsafe { CStr::from_ptr(name) })
}

unsafe extern "C" fn set_shader_image(image: *mut RawImage, location: c_int, unit: c_int) {
    record(
        "GPU_SetShaderImage",
        vec![ptr(image), Arg::Int(location.into()), Arg::Int(unit.into())],
    );
}

// Uniforms and attributes

unsafe extern "C" fn set_uniform_i(location: c_int, value: c_int) {
    record("GPU_SetUniformi", vec![Arg::Int(location.into()), Arg::Int(value.into())]);
}

unsafe extern "C" fn set_uniform_ui(location: c_int, value: c_uint) {
    record("GPU_SetUniformui", vec![Arg::Int(location.into()), Arg::Uint(value.into())]);
}

unsafe extern "C" fn set_uniform_f(location: c_int, value: c_float) {
    record("GPU_SetUniformf", vec![Arg::Int(location.into()), Arg::Float(value)]);
}

unsafe extern "C" fn set_attribute_i(location: c_int, value: c_int) {
    record("GPU_SetAttributei", vec![Arg::Int(location.into()), Arg::Int(value.into())]);
}

unsafe extern "C" fn set_attribute_ui(location: c_int, value: c_uint) {
    record("GPU_SetAttributeui", vec![Arg::Int(location.into()), Arg::Uint(value.into())]);
}

unsafe extern "C" fn set_attribute_f(location: c_int, value: c_float) {
    record("GPU_SetAttributef", vec![Arg::Int(location.into()), Arg::Float(value)]);
}

fn uniform_args(location: c_int, per_value: c_int, num_values: c_int, values: Arg) -> Vec<Arg> {
    vec![
        Arg::Int(location.into()),
        Arg::Int(per_value.into()),
        Arg::Int(num_values.into()),
        values,
    ]
}

unsafe extern "C" fn set_uniform_iv(
    location: c_int,
    per_value: c_int,
    num_values: c_int,
    values: *const c_int,
) {
    let values = Arg::Ints(unsafe { slice(values, per_value * num_values) });
    record("GPU_SetUniformiv", uniform_args(location, per_value, num_values, values));
}

unsafe extern "C" fn set_uniform_uiv(
    location: c_int,
    per_value: c_int,
    num_values: c_int,
    values: *const c_uint,
) {
    let values = Arg::Uints(unsafe { slice(values, per_value * num_values) });
    record("GPU_SetUniformuiv", uniform_args(location, per_value, num_values, values));
}

unsafe extern "C" fn set_uniform_fv(
    location: c_int,
    per_value: c_int,
    num_values: c_int,
    values: *const c_float,
) {
    let values = Arg::Floats(unsafe { slice(values, per_value * num_values) });
    record("GPU_SetUniformfv", uniform_args(location, per_value, num_values, values));
}

unsafe extern "C" fn set_attribute_iv(location: c_int, count: c_int, values: *const c_int) {
    let values = Arg::Ints(unsafe { slice(values, count) });
    let args = vec![Arg::Int(location.into()), Arg::Int(count.into()), values];
    record("GPU_SetAttributeiv", args);
}

unsafe extern "C" fn set_attribute_uiv(location: c_int, count: c_int, values: *const c_uint) {
    let values = Arg::Uints(unsafe { slice(values, count) });
    let args = vec![Arg::Int(location.into()), Arg::Int(count.into()), values];
    record("GPU_SetAttributeuiv", args);
}

unsafe extern "C" fn set_attribute_fv(location: c_int, count: c_int, values: *const c_float) {
    let values = Arg::Floats(unsafe { slice(values, count) });
    let args = vec![Arg::Int(location.into()), Arg::Int(count.into()), values];
    record("GPU_SetAttributefv", args);
}

// Images and targets

unsafe extern "C" fn create_image(w: u16, h: u16, format: u32) -> *mut RawImage {
    record(
        "GPU_CreateImage",
        vec![Arg::Uint(w.into()), Arg::Uint(h.into()), Arg::Uint(format.into())],
    );
    if w == 0 || h == 0 {
        return std::ptr::null_mut();
    }
    fake_image(w, h)
}

unsafe extern "C" fn load_image(filename: *const c_char) -> *mut RawImage {
    record("GPU_LoadImage", vec![unsafe { text(filename) }]);
    if unsafe { CStr::from_ptr(filename) }.is_empty() {
        return std::ptr::null_mut();
    }
    fake_image(1, 1)
}

unsafe extern "C" fn copy_image_from_surface(surface: *mut RawSurface) -> *mut RawImage {
    record("GPU_CopyImageFromSurface", vec![ptr(surface)]);
    fake_image(1, 1)
}

unsafe extern "C" fn load_image_rw(rwops: *mut RawRwOps, free_rwops: bool) -> *mut RawImage {
    record("GPU_LoadImage_RW", vec![ptr(rwops), Arg::Bool(free_rwops)]);
    fake_image(1, 1)
}

unsafe extern "C" fn free_image(image: *mut RawImage) {
    record("GPU_FreeImage", vec![ptr(image)]);
}

unsafe extern "C" fn set_rgba(image: *mut RawImage, r: u8, g: u8, b: u8, a: u8) {
    record(
        "GPU_SetRGBA",
        rgba_args(ptr(image), [r, g, b, a]),
    );
}

unsafe extern "C" fn load_target(image: *mut RawImage) -> *mut TargetData {
    record("GPU_LoadTarget", vec![ptr(image)]);
    if image.is_null() {
        return std::ptr::null_mut();
    }
    let fake = unsafe { &*image.cast::<FakeImage>() };
    let target = fake_target(fake.w, fake.h);
    unsafe { (*target).image = image };
    target
}

unsafe extern "C" fn free_target(target: *mut TargetData) {
    record("GPU_FreeTarget", vec![ptr(target)]);
}

// Error queue

unsafe extern "C" fn pop_error_code() -> ErrorObject {
    record("GPU_PopErrorCode", vec![]);
    match with_state(|s| s.errors.pop_front()) {
        Some((function, details, error)) => ErrorObject {
            function: function.as_ptr(),
            details: details.as_ptr(),
            error,
            _padding: [0; 4],
        },
        None => ErrorObject {
            function: c"".as_ptr(),
            details: c"".as_ptr(),
            error: 0,
            _padding: [0; 4],
        },
    }
}

unsafe extern "C" fn set_error_queue_max(max: c_uint) {
    record("GPU_SetErrorQueueMax", vec![Arg::Uint(max.into())]);
}

unsafe extern "C" fn get_error_string(code: c_int) -> *const c_char {
    record("GPU_GetErrorString", vec![Arg::Int(code.into())]);
    match code {
        0 => c"NO ERROR".as_ptr(),
        5 => c"NULL ARGUMENT".as_ptr(),
        6 => c"FILE NOT FOUND".as_ptr(),
        _ => std::ptr::null(),
    }
}

fn api() -> Api {
    Api {
        init,
        quit,
        set_pre_init_flags,
        get_pre_init_flags,
        clear,
        clear_rgba,
        flip,
        flush_blit_buffer,
        set_window_resolution,
        set_fullscreen,
        get_fullscreen,
        set_shape_blending,
        set_line_thickness,
        get_line_thickness,
        pixel,
        line,
        rectangle,
        rectangle_filled,
        blit,
        blit_transform,
        blit_transform_x,
        blit_rect,
        compile_shader,
        link_shaders,
        free_shader,
        free_shader_program,
        load_shader_block,
        set_shader_block,
        get_shader_block,
        activate_shader_program,
        deactivate_shader_program,
        get_shader_message,
        get_attribute_location,
        get_uniform_location,
        set_shader_image,
        set_uniform_i,
        set_uniform_ui,
        set_uniform_f,
        set_attribute_i,
        set_attribute_ui,
        set_attribute_f,
        set_uniform_iv,
        set_uniform_uiv,
        set_uniform_fv,
        set_attribute_iv,
        set_attribute_uiv,
        set_attribute_fv,
        create_image,
        load_image,
        copy_image_from_surface,
        load_image_rw,
        free_image,
        set_rgba,
        load_target,
        free_target,
        pop_error_code,
        set_error_queue_max,
        get_error_string,
    }
}
