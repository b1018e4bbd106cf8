//! JSON configuration for opening the library and creating the window target.

use crate::error::GpuError;
use crate::sys;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Named init flag, one per `GPU_INIT_*` constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitFlag {
    EnableVsync,
    DisableVsync,
    DisableDoubleBuffer,
    DisableAutoVirtualResolution,
    RequestCompatibilityProfile,
    UseRowByRowTextureUploadFallback,
    UseCopyTextureUploadFallback,
}

impl InitFlag {
    pub fn bits(self) -> u32 {
        match self {
            InitFlag::EnableVsync => sys::INIT_ENABLE_VSYNC,
            InitFlag::DisableVsync => sys::INIT_DISABLE_VSYNC,
            InitFlag::DisableDoubleBuffer => sys::INIT_DISABLE_DOUBLE_BUFFER,
            InitFlag::DisableAutoVirtualResolution => sys::INIT_DISABLE_AUTO_VIRTUAL_RESOLUTION,
            InitFlag::RequestCompatibilityProfile => sys::INIT_REQUEST_COMPATIBILITY_PROFILE,
            InitFlag::UseRowByRowTextureUploadFallback => {
                sys::INIT_USE_ROW_BY_ROW_TEXTURE_UPLOAD_FALLBACK
            }
            InitFlag::UseCopyTextureUploadFallback => sys::INIT_USE_COPY_TEXTURE_UPLOAD_FALLBACK,
        }
    }
}

/// Settings for [`crate::Gpu::from_config`] and [`crate::Gpu::init_with`].
///
/// Every field is optional in JSON:
///
/// ```json
/// { "width": 1280, "height": 720, "init_flags": ["enable_vsync"], "error_queue_max": 32 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuConfig {
    /// Shared library to load instead of the platform default
    pub library_path: Option<PathBuf>,
    /// Window width in pixels
    pub width: u16,
    /// Window height in pixels
    pub height: u16,
    /// SDL window flags passed to `GPU_Init`
    pub window_flags: u32,
    /// Flags applied with `GPU_SetPreInitFlags` before init
    pub init_flags: Vec<InitFlag>,
    /// Capacity of the native error queue
    pub error_queue_max: Option<u32>,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            width: 800,
            height: 600,
            window_flags: 0,
            init_flags: Vec::new(),
            error_queue_max: None,
        }
    }
}

impl GpuConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, GpuError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The init flags OR-ed into one bitmask.
    pub fn init_flag_bits(&self) -> u32 {
        self.init_flags.iter().fold(0, |bits, flag| bits | flag.bits())
    }
}
