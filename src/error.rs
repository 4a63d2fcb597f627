//! Error type for the generation pipeline.
//!
//! Only two things can go wrong during a run: the assembled text is not valid
//! Rust (a defect in naming or templates), or the destination cannot be
//! written. Both abort the run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The assembled source failed parsing, validation or formatting.
    #[error("generated source is malformed: {reason}")]
    MalformedSource {
        /// Parser, validator or formatter diagnostic
        reason: String,
    },

    /// The destination (or the external formatter process) could not be used.
    #[error("{context} {path:?}: {source}")]
    Io {
        /// What was being attempted
        context: &'static str,
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        GenerateError::MalformedSource {
            reason: reason.into(),
        }
    }

    pub(crate) fn io(context: &'static str, path: &Path, source: io::Error) -> Self {
        GenerateError::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for [`GenerateError::MalformedSource`].
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, GenerateError::MalformedSource { .. })
    }

    /// True for [`GenerateError::Io`].
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, GenerateError::Io { .. })
    }
}

/// Result alias used across the generator.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
