use std::env::{self, VarError};
use std::path::PathBuf;

use guard_hook_fetch::{FetchOptions, ReqwestClient};
use guard_hook_install::{InstallCache, ReleaseInstaller, Runner};
use guard_hook_platform::Platform;

use crate::error::{Error, Result};

/// Install root override.
pub const HOME_VAR: &str = "CFN_GUARD_PRE_COMMIT_HOME";
/// Base URL of a mirror laid out like the GitHub releases tree.
pub const MIRROR_VAR: &str = "CFN_GUARD_PRE_COMMIT_MIRROR";
/// Expected SHA-256 of the release archive, hex encoded.
pub const SHA256_VAR: &str = "CFN_GUARD_PRE_COMMIT_SHA256";

/// Process-level settings, read once at start-up.
#[derive(Debug, Clone, Default)]
pub struct HookEnv {
    /// Host OS identifier, as in `std::env::consts::OS`.
    pub os: String,
    pub install_root: Option<PathBuf>,
    pub mirror: Option<String>,
    pub sha256: Option<String>,
    /// Working directory handed to cfn-guard.
    pub working_dir: PathBuf,
}

impl HookEnv {
    pub fn from_env() -> Result<Self> {
        let working_dir = env::current_dir().map_err(|e| Error::Config {
            var: "working directory",
            message: e.to_string(),
        })?;

        Ok(Self {
            os: env::consts::OS.to_string(),
            install_root: read_var(HOME_VAR)?.map(PathBuf::from),
            mirror: read_var(MIRROR_VAR)?,
            sha256: read_var(SHA256_VAR)?,
            working_dir,
        })
    }

    pub fn platform(&self) -> Result<Platform> {
        Ok(Platform::from_os(&self.os)?)
    }

    pub fn cache(&self, platform: Platform) -> Result<InstallCache> {
        match &self.install_root {
            Some(root) => Ok(InstallCache::new(root, platform)),
            None => Ok(InstallCache::user_default(platform)?),
        }
    }

    pub fn fetch_options(&self) -> Result<FetchOptions> {
        let checksum = self
            .sha256
            .as_deref()
            .map(guard_hook_verify::parse_sha256)
            .transpose()
            .map_err(|e| Error::Config {
                var: SHA256_VAR,
                message: e.to_string(),
            })?;
        Ok(FetchOptions::default().checksum(checksum))
    }

    /// Assemble the production runner.
    ///
    /// The platform is resolved first, so an unsupported host fails before
    /// any installer or HTTP client exists.
    pub fn runner(&self) -> Result<Runner<ReleaseInstaller<ReqwestClient>>> {
        let platform = self.platform()?;
        let cache = self.cache(platform)?;

        let mut installer =
            ReleaseInstaller::new(ReqwestClient::new()?).with_options(self.fetch_options()?);
        if let Some(mirror) = &self.mirror {
            installer = installer.with_base_url(mirror.as_str());
        }

        tracing::debug!(
            platform = %platform,
            root = %cache.root().display(),
            "configured cfn-guard install"
        );
        Ok(Runner::new(cache, installer, &self.working_dir))
    }
}

/// Unset and empty both mean "not configured".
fn read_var(var: &'static str) -> Result<Option<String>> {
    match env::var(var) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => Err(Error::Config {
            var,
            message: e.to_string(),
        }),
    }
}
