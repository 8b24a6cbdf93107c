use sha2::Digest;

use crate::error::{Result, VerificationError};

const SHA256_LEN: usize = 32;

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

pub struct Sha256Hasher(sha2::Sha256);

impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256Hasher {
    pub fn new() -> Self { Self(sha2::Sha256::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { sha2::Sha256::digest(data).to_vec() }
}

/// Parse a hex-encoded SHA-256 digest (case-insensitive, surrounding
/// whitespace ignored).
pub fn parse_sha256(hex_digest: &str) -> Result<Vec<u8>> {
    let trimmed = hex_digest.trim();
    let bytes =
        hex::decode(trimmed).map_err(|_| VerificationError::InvalidDigest(trimmed.to_string()))?;
    if bytes.len() != SHA256_LEN {
        return Err(VerificationError::InvalidDigest(trimmed.to_string()));
    }
    Ok(bytes)
}

pub fn verify_digest(expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(VerificationError::Mismatch {
        expected: hex::encode(expected),
        actual: hex::encode(actual),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn incremental_matches_one_shot() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"hello");
        hasher.update(b" ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize(), Sha256Hasher::digest(b"hello world"));
    }

    #[test]
    fn known_vector() {
        assert_eq!(hex::encode(Sha256Hasher::digest(b"hello world")), HELLO_WORLD);
    }

    #[test]
    fn parse_accepts_upper_case_and_whitespace() {
        let parsed = parse_sha256(&format!("  {}\n", HELLO_WORLD.to_uppercase())).unwrap();
        assert_eq!(parsed, Sha256Hasher::digest(b"hello world"));
    }

    #[test]
    fn parse_rejects_wrong_length_and_garbage() {
        assert!(matches!(parse_sha256("abcd"), Err(VerificationError::InvalidDigest(_))));
        assert!(matches!(parse_sha256(&"zz".repeat(32)), Err(VerificationError::InvalidDigest(_))));
    }

    #[test]
    fn verify_reports_both_digests_on_mismatch() {
        let expected = Sha256Hasher::digest(b"a");
        let actual = Sha256Hasher::digest(b"b");
        match verify_digest(&expected, &actual) {
            Err(VerificationError::Mismatch { expected: e, actual: a }) => {
                assert_eq!(e, hex::encode(&expected));
                assert_eq!(a, hex::encode(&actual));
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
        assert!(verify_digest(&expected, &expected).is_ok());
    }
}
