//! Error types for gitignore-gen operations.
//!
//! This module defines [`GenError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Providers report catalog failures as [`GenError::SourceLoad`] and
//!   per-template failures as [`GenError::TemplateParsing`]
//! - The registry and generator never wrap provider errors; they are
//!   returned to the caller unchanged
//! - Use `anyhow::Error` (via `GenError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gitignore-gen operations.
#[derive(Debug, Error)]
pub enum GenError {
    /// A provider could not enumerate its catalog.
    #[error("Failed to load sources from {provider}: {message}")]
    SourceLoad { provider: String, message: String },

    /// A template's content could not be read or its annotation parsed.
    #[error("Failed to parse template '{template}': {message}")]
    TemplateParsing { template: String, message: String },

    /// A descriptor references a provider that is not registered.
    #[error("Source provider not found: {provider_kind}")]
    SourceNotFound { provider_kind: String },

    /// Custom header mode is active but no header was set.
    #[error("Custom header mode is enabled, but no custom header was provided")]
    MissingHeader,

    /// Selection index outside the current list bounds.
    #[error("Selection index {index} out of range (length {len})")]
    SelectionIndex { index: usize, len: usize },

    /// No template with the requested name exists in any provider.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gitignore-gen operations.
pub type Result<T> = std::result::Result<T, GenError>;
