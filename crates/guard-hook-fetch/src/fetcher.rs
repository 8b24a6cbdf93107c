use std::io::Write;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use guard_hook_verify::{Hasher, Sha256Hasher};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::options::FetchOptions;

const TEMP_PREFIX: &str = "cfn-guard-";
const TEMP_SUFFIX: &str = ".tar.gz";

/// Downloads release archives through an [`HttpClient`].
pub struct Fetcher<C: HttpClient> {
    client: C,
}

/// A downloaded body held in a temporary file.
///
/// The file is deleted when the `Download` is dropped or closed.
#[derive(Debug)]
pub struct Download {
    file: NamedTempFile,
    bytes: u64,
}

impl Download {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Delete the temporary file, reporting failures instead of ignoring them.
    pub fn close(self) -> Result<()> {
        let path = self.file.path().to_path_buf();
        self.file
            .close()
            .map_err(|e| Error::Write { path, source: e })
    }
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Download `url` into a fresh temporary file.
    ///
    /// Drives the async client on a current-thread runtime, so it must not be
    /// called from inside another tokio runtime. The body is hashed while it is
    /// written; when `options.checksum` is set a mismatch fails the download
    /// and the temporary file is removed.
    pub fn download(&self, url: &str, options: &FetchOptions) -> Result<Download> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        let temp_dir = options
            .temp_dir
            .clone()
            .unwrap_or_else(guard_hook_platform::dir::user_temp);
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&temp_dir)
            .map_err(|e| Error::TempFile {
                path: temp_dir.clone(),
                source: e,
            })?;

        tracing::info!(url, "downloading cfn-guard");
        let (bytes, sha256) = runtime.block_on(self.stream_into(url, &mut file))?;
        tracing::debug!(bytes, path = %file.path().display(), "download finished");

        match &options.checksum {
            Some(expected) => {
                guard_hook_verify::verify_digest(expected, &sha256).map_err(|e| {
                    Error::Verification {
                        url: url.to_string(),
                        source: e,
                    }
                })?;
                tracing::debug!(sha256 = %hex::encode(&sha256), "checksum verified");
            }
            None => {
                tracing::warn!(
                    sha256 = %hex::encode(&sha256),
                    "no checksum pinned; archive integrity not verified"
                );
            }
        }

        Ok(Download { file, bytes })
    }

    async fn stream_into(
        &self,
        url: &str,
        file: &mut NamedTempFile,
    ) -> Result<(u64, Vec<u8>)> {
        let network = |e: C::Error| Error::Network {
            url: url.to_string(),
            source: Box::new(e),
        };
        let write_err = |path: PathBuf, e| Error::Write { path, source: e };

        let mut stream = self
            .client
            .stream(url)
            .await
            .map_err(network)?;

        let mut hasher = Sha256Hasher::new();
        let mut bytes = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(network)?;
            hasher.update(&chunk);
            file.write_all(&chunk)
                .map_err(|e| write_err(file.path().to_path_buf(), e))?;
            bytes += chunk.len() as u64;
        }
        file.flush()
            .map_err(|e| write_err(file.path().to_path_buf(), e))?;

        Ok((bytes, hasher.finalize()))
    }
}
