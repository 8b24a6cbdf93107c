use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Platform(#[from] guard_hook_platform::Error),

    #[error(transparent)]
    Fetch(#[from] guard_hook_fetch::Error),

    #[error(transparent)]
    Archive(#[from] guard_hook_archive::Error),

    #[error(transparent)]
    Fs(#[from] guard_hook_fs::Error),

    #[error("failed to open downloaded archive {path}: {source}")]
    OpenArchive { path: PathBuf, source: io::Error },

    #[error("release archive {url} does not contain {binary}")]
    BinaryNotInArchive { binary: String, url: String },

    #[error("cfn-guard is still not installed at {path} after installation")]
    InstallVerificationFailed { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
