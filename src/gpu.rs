//! The loaded SDL_gpu library.

use crate::api::Api;
use crate::config::GpuConfig;
use crate::error::GpuError;
use libloading::Library;
use std::ffi::OsStr;

/// Environment variable naming the SDL_gpu shared library to load.
pub const LIBRARY_ENV: &str = "SDL2_GPU_LIBRARY";

/// Platform file names tried by [`Gpu::load_default`].
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &[
    "libSDL2_gpu.so",
    "libSDL2_gpu.dylib",
    "SDL2_gpu.dll",
];

/// Entry point to SDL_gpu.
///
/// Holds the resolved symbol table and keeps the shared library mapped for
/// as long as it lives. Every wrapper operation is a method on `&Gpu` and
/// calls straight into the native library on the caller's thread.
///
/// # Thread Safety
///
/// This type enforces nothing. SDL_gpu is bound to the thread owning its GL
/// context; calling from other threads is exactly as safe as SDL_gpu says.
#[derive(Debug)]
pub struct Gpu {
    api: Api,
    _library: Option<Library>,
}

impl Gpu {
    /// Load SDL_gpu from `path`.
    ///
    /// # Safety
    ///
    /// Loading runs the library's initializers, and every exported symbol is
    /// trusted to have the signature declared in [`Api`]. `path` must name a
    /// compatible SDL_gpu build.
    pub unsafe fn load(path: impl AsRef<OsStr>) -> Result<Self, GpuError> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }.map_err(|source| GpuError::LibraryLoad {
            path: path.to_string_lossy().into_owned(),
            source,
        })?;
        let api = unsafe { Api::resolve(&library)? };

        log::debug!(
            "loaded SDL_gpu from {} ({} symbols)",
            path.to_string_lossy(),
            Api::SYMBOLS.len()
        );
        Ok(Self {
            api,
            _library: Some(library),
        })
    }

    /// Load SDL_gpu from `$SDL2_GPU_LIBRARY`, or else the first platform
    /// library name that opens.
    ///
    /// A library that opens but lacks a symbol is reported immediately
    /// rather than skipped.
    ///
    /// # Safety
    ///
    /// Same as [`Gpu::load`].
    pub unsafe fn load_default() -> Result<Self, GpuError> {
        if let Some(path) = std::env::var_os(LIBRARY_ENV) {
            return unsafe { Self::load(path) };
        }

        for name in DEFAULT_LIBRARY_NAMES {
            match unsafe { Self::load(name) } {
                Ok(gpu) => return Ok(gpu),
                Err(GpuError::LibraryLoad { source, .. }) => {
                    log::trace!("could not open {name}: {source}");
                }
                Err(e) => return Err(e),
            }
        }

        Err(GpuError::LibraryNotFound {
            tried: DEFAULT_LIBRARY_NAMES.join(", "),
        })
    }

    /// Load the library named by `config`, falling back to
    /// [`Gpu::load_default`] when it names none.
    ///
    /// # Safety
    ///
    /// Same as [`Gpu::load`].
    pub unsafe fn from_config(config: &GpuConfig) -> Result<Self, GpuError> {
        match &config.library_path {
            Some(path) => unsafe { Self::load(path) },
            None => unsafe { Self::load_default() },
        }
    }

    /// Wrap a symbol table built by the caller.
    ///
    /// # Safety
    ///
    /// Every function in `api` must honor the contract of the SDL_gpu symbol
    /// it stands in for.
    pub unsafe fn from_api(api: Api) -> Self {
        Self {
            api,
            _library: None,
        }
    }

    /// The resolved symbol table.
    pub fn api(&self) -> &Api {
        &self.api
    }
}
