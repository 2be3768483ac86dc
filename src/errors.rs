// src/errors.rs

//! Crate-wide error type and the recovery classification used by the run loop.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    /// The watched directory is missing or cannot be listed.
    #[error("cannot access directory {path:?}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A single tracked file vanished or became unreadable.
    #[error("cannot read file {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How the run loop should treat a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DirectoryAccess,
    FileAccess,
    InvalidArgument,
    Unclassified,
}

impl WatchError {
    pub fn directory(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        WatchError::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    pub fn file(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        WatchError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WatchError::DirectoryAccess { .. } => ErrorKind::DirectoryAccess,
            WatchError::FileAccess { .. } => ErrorKind::FileAccess,
            WatchError::InvalidArgument(_) | WatchError::ConfigError(_) => {
                ErrorKind::InvalidArgument
            }
            WatchError::IoError(_) | WatchError::TomlError(_) | WatchError::Other(_) => {
                ErrorKind::Unclassified
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WatchError>;
