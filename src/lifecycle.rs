//! Lifecycle functions (init, quit, target creation and release).

use crate::config::GpuConfig;
use crate::gpu::Gpu;
use crate::handle::{Image, Target};

impl Gpu {
    /// Create the window and its rendering target (`GPU_Init`).
    ///
    /// `flags` is forwarded unchanged. The returned target is null if
    /// initialization failed; the reason is in the native error queue.
    ///
    /// # Ownership
    ///
    /// The caller owns the target and releases it with [`Gpu::free_target`]
    /// or, for the window target, [`Gpu::quit`].
    pub fn init(&self, w: u16, h: u16, flags: u32) -> Target {
        log::debug!("GPU_Init({w}x{h}, flags={flags:#x})");
        let raw = unsafe { (self.api().init)(w, h, flags) };
        if raw.is_null() {
            log::warn!("GPU_Init returned a null target");
        }
        unsafe { Target::from_raw(raw) }
    }

    /// Apply `config` and create the window target.
    ///
    /// Pre-init flags are set first (only when the config names any), then
    /// the error queue capacity, then `GPU_Init` runs with the configured
    /// size and window flags.
    pub fn init_with(&self, config: &GpuConfig) -> Target {
        if !config.init_flags.is_empty() {
            self.set_pre_init_flags(config.init_flag_bits());
        }
        if let Some(max) = config.error_queue_max {
            self.set_error_queue_max(max);
        }
        self.init(config.width, config.height, config.window_flags)
    }

    /// Shut SDL_gpu down, freeing the window target and all renderers.
    ///
    /// Every outstanding handle is invalid afterwards.
    pub fn quit(&self) {
        log::debug!("GPU_Quit");
        unsafe { (self.api().quit)() }
    }

    /// Set the `GPU_INIT_*` flags used by the next init.
    pub fn set_pre_init_flags(&self, flags: u32) {
        unsafe { (self.api().set_pre_init_flags)(flags) }
    }

    pub fn pre_init_flags(&self) -> u32 {
        unsafe { (self.api().get_pre_init_flags)() }
    }

    /// Get a rendering target that draws into `image` (`GPU_LoadTarget`).
    ///
    /// Null if the image cannot be a render target.
    pub fn load_target(&self, image: &Image) -> Target {
        let raw = unsafe { (self.api().load_target)(image.as_ptr()) };
        if raw.is_null() {
            log::warn!("GPU_LoadTarget returned a null target");
        }
        unsafe { Target::from_raw(raw) }
    }

    /// Release a target (`GPU_FreeTarget`).
    ///
    /// Consumes the handle. Raw addresses copied out earlier keep their old
    /// value and dangle from here on.
    pub fn free_target(&self, target: Target) {
        let raw = target.into_raw();
        log::trace!("GPU_FreeTarget({raw:p})");
        unsafe { (self.api().free_target)(raw) }
    }
}
