//! Error handling for the binding layer.
//!
//! Two kinds of failure exist here. [`GpuError`] covers the binding's own
//! failures (loading the library, marshaling arguments, parsing config).
//! Everything SDL_gpu reports itself stays in the native error queue and is
//! surfaced unchanged through [`Gpu::pop_error`].

use crate::gpu::Gpu;
use crate::util::native_string;
use std::fmt;

/// Errors raised by the binding before or instead of a native call.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    /// The shared library could not be opened.
    #[error("failed to load native library `{path}`: {source}")]
    LibraryLoad {
        path: String,
        #[source]
        source: libloading::Error,
    },

    /// None of the default library names could be opened.
    #[error("SDL_gpu library not found (tried: {tried})")]
    LibraryNotFound { tried: String },

    /// The library was opened but does not export a required symbol.
    #[error("native library does not export `{symbol}`: {source}")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    /// A text argument contains a NUL byte and cannot become a C string.
    #[error("interior NUL byte in parameter `{param}`")]
    InteriorNul { param: &'static str },

    /// A slice is longer than the native element count can express.
    #[error("parameter `{param}` has {len} elements, more than a C int can count")]
    ArrayTooLong { param: &'static str, len: usize },

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Native error codes (`GPU_ErrorEnum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No error
    None,
    /// Backend (OpenGL) error
    Backend,
    /// Bad data passed in
    Data,
    /// Invalid use of the API
    User,
    /// Function not supported by the current renderer
    UnsupportedFunction,
    /// Null pointer argument
    NullArgument,
    /// File not found
    FileNotFound,
    /// Code this binding does not know; the raw value is kept.
    Unknown(i32),
}

impl ErrorCode {
    /// Map a raw native code.
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => ErrorCode::None,
            1 => ErrorCode::Backend,
            2 => ErrorCode::Data,
            3 => ErrorCode::User,
            4 => ErrorCode::UnsupportedFunction,
            5 => ErrorCode::NullArgument,
            6 => ErrorCode::FileNotFound,
            other => ErrorCode::Unknown(other),
        }
    }

    /// The raw native code.
    pub fn raw(self) -> i32 {
        match self {
            ErrorCode::None => 0,
            ErrorCode::Backend => 1,
            ErrorCode::Data => 2,
            ErrorCode::User => 3,
            ErrorCode::UnsupportedFunction => 4,
            ErrorCode::NullArgument => 5,
            ErrorCode::FileNotFound => 6,
            ErrorCode::Unknown(code) => code,
        }
    }
}

/// One entry popped from the native error queue, copied into owned strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Name of the failing native function
    pub function: String,
    /// Detail message
    pub details: String,
    pub code: ErrorCode,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({:?})", self.function, self.details, self.code)
    }
}

impl Gpu {
    /// Pop the oldest record from SDL_gpu's error queue.
    ///
    /// Returns `None` once the queue reports `GPU_ERROR_NONE`. The native
    /// strings are copied before returning; nothing is kept on this side.
    pub fn pop_error(&self) -> Option<ErrorRecord> {
        let raw = unsafe { (self.api().pop_error_code)() };
        let code = ErrorCode::from_raw(raw.error);
        if code == ErrorCode::None {
            return None;
        }

        let record = ErrorRecord {
            function: unsafe { native_string(raw.function) }.unwrap_or_default(),
            details: unsafe { native_string(raw.details) }.unwrap_or_default(),
            code,
        };
        log::trace!("popped native error: {record}");
        Some(record)
    }

    /// Cap the number of records the native error queue keeps.
    pub fn set_error_queue_max(&self, max: u32) {
        unsafe { (self.api().set_error_queue_max)(max) }
    }

    /// SDL_gpu's description of an error code.
    pub fn error_string(&self, code: ErrorCode) -> Option<String> {
        unsafe { native_string((self.api().get_error_string)(code.raw())) }
    }
}
