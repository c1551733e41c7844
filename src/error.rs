//! Error types for crules
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! only at the process boundary.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, RenderError};

/// Result type alias for crules operations
pub type CrulesResult<T> = Result<T, CrulesError>;

/// Coarse classification of a [`CrulesError`], used when an error is
/// reduced to a log line or a JSON event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidConfig,
    InvalidArgument,
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidConfig => "invalid_config",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Io => "io",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for crules operations
#[derive(Error, Debug)]
pub enum CrulesError {
    /// No ancestor of the start directory carries the marker directory
    #[error("project root not found: no .crules directory in {start} or any parent")]
    ProjectRootNotFound { start: PathBuf },

    /// Template set directory (or one of its category directories) is absent
    #[error("template '{name}' not found at {path}")]
    TemplateNotFound { name: String, path: PathBuf },

    /// A single requested asset is absent
    #[error("asset not found: {path}")]
    AssetNotFound { path: PathBuf },

    /// Persisted configuration lacks a required key
    #[error("missing required key '{key}' in {path}")]
    MissingConfigKey { key: String, path: PathBuf },

    /// Persisted configuration is not a flat mapping
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Template or rule name that cannot be turned into a path segment
    #[error("invalid {what} name '{name}' (allowed: letters, digits, '-' and '_')")]
    InvalidName { what: &'static str, name: String },

    /// A command was invoked without one of its required arguments
    #[error("missing required argument '{name}'")]
    MissingArgument { name: String },

    /// Dispatch of a name that no command is registered under
    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    /// Rendering a templated asset failed
    #[error("failed to render {file}: {source}")]
    Render {
        file: PathBuf,
        #[source]
        source: RenderError,
    },

    /// Filesystem error
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl CrulesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CrulesError::ProjectRootNotFound { .. }
            | CrulesError::TemplateNotFound { .. }
            | CrulesError::AssetNotFound { .. } => ErrorKind::NotFound,
            CrulesError::MissingConfigKey { .. }
            | CrulesError::InvalidConfig { .. }
            | CrulesError::Yaml(_) => ErrorKind::InvalidConfig,
            CrulesError::InvalidName { .. }
            | CrulesError::MissingArgument { .. }
            | CrulesError::UnknownCommand { .. } => ErrorKind::InvalidArgument,
            CrulesError::Render { .. } => ErrorKind::Io,
            CrulesError::Fs(FsError::NotFound(_)) => ErrorKind::NotFound,
            CrulesError::Fs(_) => ErrorKind::Io,
        }
    }
}
