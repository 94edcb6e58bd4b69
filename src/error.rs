//! Error types for tiapp operations.
//!
//! This module defines [`TiappError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TiappError` for descriptor conditions that need distinct handling
//! - Use `anyhow::Error` (via `TiappError::Other`) for unexpected errors
//! - Library code never terminates the process; `main` maps errors to an
//!   exit code via [`TiappError::exit_code`]

use std::path::PathBuf;
use thiserror::Error;

use crate::descriptor::DependencyKind;

/// Core error type for tiapp operations.
#[derive(Debug, Error)]
pub enum TiappError {
    /// The descriptor file does not exist.
    #[error("tiapp.xml file does not exist at \"{}\"", path.display())]
    DescriptorNotFound { path: PathBuf },

    /// The descriptor could not be parsed as XML.
    #[error("Failed to parse {}: {message}", path.display())]
    DescriptorParse { path: PathBuf, message: String },

    /// The in-memory document could not be serialized.
    #[error("Failed to write {}: {message}", path.display())]
    DescriptorWrite { path: PathBuf, message: String },

    /// A module or plugin could not be added to the descriptor.
    #[error("Unable to install {kind} \"{name}\": {message}")]
    InstallFailed {
        kind: DependencyKind,
        name: String,
        message: String,
    },

    /// The descriptor targets an SDK older than the supported minimum.
    #[error("Titanium SDK {required} or higher is required, found \"{found}\"")]
    VersionTooLow { required: String, found: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TiappError {
    /// Exit status the command layer should terminate with.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Returns true if this error came from the SDK version gate.
    pub fn is_version_too_low(&self) -> bool {
        matches!(self, TiappError::VersionTooLow { .. })
    }

    /// User-facing diagnostic, one entry per output line.
    ///
    /// `VersionTooLow` expands into the remediation text; every other
    /// variant is a single line.
    pub fn diagnostic_lines(&self) -> Vec<String> {
        match self {
            TiappError::VersionTooLow { required, found } => vec![
                format!(
                    "tiapp {} requires Titanium SDK {} or higher.",
                    crate::version::VERSION,
                    required
                ),
                format!(
                    "\"{}\" was found in the \"sdk-version\" field of your tiapp.xml.",
                    found
                ),
                "If your build passes an SDK version on the command line that differs from"
                    .to_string(),
                "the one in your tiapp.xml, please change the version in your tiapp.xml file."
                    .to_string(),
            ],
            other => vec![other.to_string()],
        }
    }
}

/// Result type alias for tiapp operations.
pub type Result<T> = std::result::Result<T, TiappError>;
