#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("invalid SHA-256 digest: {0}")]
    InvalidDigest(String),
}

pub type Result<T> = std::result::Result<T, VerificationError>;
