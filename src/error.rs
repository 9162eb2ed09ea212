//! Error types for krites modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from commit analysis and rule resolution.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A configured release severity is not one of the seven recognized
    /// release types. This is a configuration-integrity error and halts
    /// the whole analysis run.
    #[error("invalid release type \"{0}\"")]
    InvalidReleaseType(String),

    #[error("Failed to load style configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from style configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read style config {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse style config {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),
}
