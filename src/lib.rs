//! Rust bindings for SDL_gpu.
//!
//! This crate loads the SDL_gpu shared library (`SDL2_gpu`) at runtime and
//! exposes its C entry points as methods on [`Gpu`]. Each method is a
//! direct, synchronous call into the native library; the binding only
//! translates types:
//!
//! - text arguments become NUL-terminated UTF-8 buffers that live for the
//!   one native call they are passed to
//! - optional structs become either the address of a local copy or a null
//!   pointer
//! - slices become a pointer plus an element count
//! - native handles are held by [`Target`] and [`Image`]
//!
//! # Memory Management
//!
//! - Targets from [`Gpu::init`]/[`Gpu::load_target`] are released with
//!   [`Gpu::free_target`] (or all at once by [`Gpu::quit`])
//! - Images from the `create_image`/`load_image` family are released with
//!   [`Gpu::free_image`]
//! - Nothing is released on drop. Release consumes the handle, but any raw
//!   address copied out with `as_ptr()` keeps its old value and must not be
//!   used afterwards.
//!
//! # Errors
//!
//! Native failures are not turned into Rust errors. Creation calls return a
//! null handle, shader calls return `0`, and details are queued by SDL_gpu
//! and drained with [`Gpu::pop_error`]. [`GpuError`] only covers the
//! binding's own failures.
//!
//! # Thread Safety
//!
//! SDL_gpu is tied to the thread owning its GL context. [`Target`] and
//! [`Image`] are NOT `Send` or `Sync`; [`Gpu`] itself adds no locking, so
//! concurrent calls are exactly as safe as SDL_gpu makes them.
//!
//! # Struct Layouts
//!
//! The structs in [`sys`] follow SDL_gpu 0.12. SDL_gpu does not keep them
//! stable between releases, so a library upgrade needs the layouts
//! re-checked.

#![allow(clippy::missing_safety_doc)]

mod api;
mod blit;
mod config;
mod error;
mod gpu;
mod handle;
mod image;
mod lifecycle;
mod render;
mod shader;
pub mod sys;
mod uniform;
mod util;

#[cfg(test)]
mod testing;

pub use api::Api;
pub use config::{GpuConfig, InitFlag};
pub use error::{ErrorCode, ErrorRecord, GpuError};
pub use gpu::{DEFAULT_LIBRARY_NAMES, Gpu, LIBRARY_ENV};
pub use handle::{Image, Target};
pub use sys::{Color, ImageFormat, Rect, SdlRect, ShaderBlock, ShaderType, TargetData};

/// Version of this binding crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
