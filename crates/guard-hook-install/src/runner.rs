use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use guard_hook_platform::command::Command;

use crate::cache::InstallCache;
use crate::error::{Error, Result};
use crate::installer::Install;

/// Runs the wrapped executable, installing it first when it is missing.
pub struct Runner<I: Install> {
    cache: InstallCache,
    installer: I,
    working_dir: PathBuf,
}

impl<I: Install> Runner<I> {
    pub fn new(cache: InstallCache, installer: I, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache,
            installer,
            working_dir: working_dir.into(),
        }
    }

    pub fn cache(&self) -> &InstallCache {
        &self.cache
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Return the binary path, installing at most once if it is absent or
    /// belongs to another version.
    pub fn ensure_installed(&self) -> Result<PathBuf> {
        let path = self.cache.binary_path();
        if self.cache.is_installed() {
            tracing::debug!(path = %path.display(), "cfn-guard already installed");
            return Ok(path);
        }

        match self.cache.installed_version() {
            Some(found) if path.is_file() => tracing::info!(
                path = %path.display(),
                found = %found,
                wanted = self.cache.version(),
                "replacing cfn-guard of another version"
            ),
            None if path.is_file() => tracing::info!(
                path = %path.display(),
                "cfn-guard present without a version marker"
            ),
            _ => tracing::info!(path = %path.display(), "cfn-guard not found"),
        }
        self.installer.install(&self.cache)?;

        if self.cache.is_installed() {
            Ok(path)
        } else {
            Err(Error::InstallVerificationFailed { path })
        }
    }

    /// Run cfn-guard with `args` and return its exit code.
    ///
    /// A non-zero exit is returned as a code, not an error.
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<i32> {
        let binary = self.ensure_installed()?;
        let code = Command::new(&binary)
            .args(args)
            .current_dir(&self.working_dir)
            .status()?;
        tracing::debug!(code, "cfn-guard exited");
        Ok(code)
    }
}
