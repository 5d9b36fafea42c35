//! Error types for the labelview core.
//!
//! Event-path operations never return errors: per the degradation contract
//! they fall back to no-ops or sentinel values. `CanvasError` covers the
//! construction and configuration surface only.

use thiserror::Error;

/// Errors that can occur constructing buffers or loading configuration.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// I/O error during config file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file version does not match what this build understands
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected config version
        expected: u32,
        /// Version found in the file
        found: u32,
    },

    /// A surface was created with a zero-area pixel buffer
    #[error("Surface has zero pixel area ({width}x{height})")]
    EmptySurface {
        /// Requested buffer width
        width: u32,
        /// Requested buffer height
        height: u32,
    },

    /// Raw pixel data does not match the declared dimensions
    #[error("Buffer length {len} does not match {width}x{height} RGBA")]
    BufferSize {
        /// Length of the provided byte slice
        len: usize,
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
    },
}
