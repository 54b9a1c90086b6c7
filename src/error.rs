//! Error types for the fallible edges of the generator.
//!
//! Code generation itself never fails. Errors only come from loading
//! configurations, looking up presets, and parsing names strictly.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration and CLI operations.
pub type GlassResult<T> = Result<T, GlassError>;

/// Errors that can occur around code generation.
#[derive(Debug, Error)]
pub enum GlassError {
    /// Configuration JSON could not be parsed or serialized.
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a configuration file failed.
    #[error("IO error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// No built-in preset has the requested id.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Strict parsing of an output format name failed.
    #[error("Unknown output format: {0} (expected one of css, html, react, vue, typescript, tailwind)")]
    UnknownFormat(String),

    /// Strict parsing of a component type name failed.
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),
}

impl GlassError {
    /// Wraps an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
