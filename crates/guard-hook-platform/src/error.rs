use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("home directory could not be determined")]
    NoHomeDirectory,

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },
}
