//! Error types for the Anaglyph3D engine
//!
//! This module defines the error types used throughout the engine,
//! including rendering, initialization, and per-frame failures.

use std::fmt;

/// Result type for Anaglyph3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Anaglyph3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, DirectX, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, buffer, shader, etc.)
    InvalidResource(String),

    /// Initialization failed (engine, renderer, eye targets)
    InitializationFailed(String),

    /// The current frame was abandoned; the next frame starts fresh
    FrameAbandoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::FrameAbandoned(msg) => write!(f, "Frame abandoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error::InvalidResource`] from a format string and log it
///
/// # Example
///
/// ```no_run
/// use anaglyph_3d_engine::engine_err;
/// # fn lookup(slot: Option<u32>) -> anaglyph_3d_engine::anaglyph3d::Result<u32> {
/// let index = slot
///     .ok_or_else(|| engine_err!("anaglyph3d::Scene", "Unknown entity key"))?;
/// # Ok(index)
/// # }
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::anaglyph3d::Error::InvalidResource(message)
    }};
}

/// Log an error and return it from the current function
///
/// # Example
///
/// ```no_run
/// use anaglyph_3d_engine::engine_bail;
/// # fn validate(width: u32) -> anaglyph_3d_engine::anaglyph3d::Result<()> {
/// if width == 0 {
///     engine_bail!("anaglyph3d::render", "create_texture: zero width");
/// }
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
