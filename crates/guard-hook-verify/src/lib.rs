//! Content verification primitives for downloaded artifacts.
//!
//! Digests are computed incrementally while bytes stream to disk, so the
//! archive is only read once.
//!
//! # Example
//!
//! ```
//! use guard_hook_verify::{Hasher, Sha256Hasher, verify_digest};
//!
//! let expected = Sha256Hasher::digest(b"hello world");
//!
//! let mut hasher = Sha256Hasher::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//!
//! verify_digest(&expected, &hasher.finalize()).unwrap();
//! ```

pub use self::error::{Result, VerificationError};
pub use self::hasher::{Hasher, Sha256Hasher, parse_sha256, verify_digest};

mod error;
mod hasher;
