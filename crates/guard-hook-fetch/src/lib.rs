//! Release resolution and HTTP downloading for the cfn-guard hook.
//!
//! - [`Release`] - pinned version tag and per-platform download URL
//! - [`HttpClient`] - minimal async client seam, [`ReqwestClient`] in production
//! - [`Fetcher`] - single-shot streaming download into a temporary file, with
//!   optional SHA-256 verification

mod error;
mod fetcher;
mod http;
mod options;
mod release;

pub use error::{BoxError, Error, Result};
pub use fetcher::{Download, Fetcher};
pub use http::{BoxStream, HttpClient};
pub use options::FetchOptions;
pub use release::{PINNED_VERSION, RELEASE_BASE_URL, Release};

#[cfg(feature = "reqwest")]
pub use http::{ReqwestClient, USER_AGENT};
