use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;

use guard_hook_fetch::{FetchOptions, Fetcher, HttpClient, RELEASE_BASE_URL, Release};
use guard_hook_fs::Workspace;

use crate::cache::{InstallCache, VERSION_MARKER};
use crate::error::{Error, Result};

/// Places the cfn-guard release described by an [`InstallCache`].
pub trait Install {
    fn install(&self, cache: &InstallCache) -> Result<()>;
}

/// Installs a release by downloading its archive and flattening it into the
/// install root.
///
/// Files are extracted into a staging workspace inside the root, the binary
/// is made executable there, and everything is renamed into place with the
/// binary and then the version marker last. If a rename fails part-way, files
/// committed before it stay and the cache is not yet considered installed.
pub struct ReleaseInstaller<C: HttpClient> {
    fetcher: Fetcher<C>,
    base_url: String,
    options: FetchOptions,
}

impl<C: HttpClient> ReleaseInstaller<C> {
    pub fn new(client: C) -> Self {
        Self {
            fetcher: Fetcher::new(client),
            base_url: RELEASE_BASE_URL.to_string(),
            options: FetchOptions::default(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn fetcher(&self) -> &Fetcher<C> {
        &self.fetcher
    }

    pub fn url(&self, cache: &InstallCache) -> String {
        Release::new(cache.version())
            .with_base_url(self.base_url.as_str())
            .url(cache.platform())
    }
}

impl<C: HttpClient> Install for ReleaseInstaller<C> {
    fn install(&self, cache: &InstallCache) -> Result<()> {
        let binary = cache.binary_name();
        let url = self.url(cache);
        tracing::info!(
            version = cache.version(),
            platform = %cache.platform(),
            root = %cache.root().display(),
            "installing cfn-guard"
        );

        let download = self.fetcher.download(&url, &self.options)?;
        let workspace = Workspace::new(cache.root())?;

        let archive = File::open(download.path()).map_err(|e| Error::OpenArchive {
            path: download.path().to_path_buf(),
            source: e,
        })?;
        let report = guard_hook_archive::extract_flat(BufReader::new(archive), workspace.path())?;

        let binary_name = OsStr::new(&binary);
        if !report.contains(binary_name) {
            return Err(Error::BinaryNotInArchive { binary, url });
        }
        guard_hook_fs::make_executable(&workspace.path().join(&binary))?;
        cache.write_version_marker(workspace.path())?;

        let committed = workspace.commit(&[binary_name, OsStr::new(VERSION_MARKER)])?;
        let bytes = download.bytes();
        download.close()?;

        tracing::info!(
            files = committed.len(),
            bytes,
            path = %cache.binary_path().display(),
            "cfn-guard installed"
        );
        Ok(())
    }
}
