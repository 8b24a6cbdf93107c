//! Error types for guard-hook-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error from an [`HttpClient`](crate::HttpClient) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build HTTP client")]
    Client(#[source] BoxError),

    #[error("download of {url} failed")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to create temporary file in {path}: {source}")]
    TempFile { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("downloaded archive from {url} failed verification: {source}")]
    Verification {
        url: String,
        source: guard_hook_verify::VerificationError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
