use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use crate::{Error, Result};

const STAGING_PREFIX: &str = ".staging-";

/// Staging directories untouched for this long belong to an install that
/// was killed. Younger ones may still be in use by a concurrent install.
const STALE_STAGING_AGE: Duration = Duration::from_secs(60 * 60);

/// A staging directory created inside `destination`.
///
/// Staged files are renamed into `destination` by [`Workspace::commit`]. The
/// staging directory lives on the same filesystem as the destination, so each
/// rename is atomic. Dropping an uncommitted workspace removes everything that
/// was staged.
pub struct Workspace {
    staging: TempDir,
    destination: PathBuf,
}

impl Workspace {
    /// Open a staging directory in `destination`, creating it if needed.
    ///
    /// Staging directories left behind by earlier, interrupted installs are
    /// removed first once they are more than an hour old.
    pub fn new(destination: impl AsRef<Path>) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();

        std::fs::create_dir_all(&destination).map_err(|e| Error::Write {
            path: destination.clone(),
            source: e,
        })?;
        remove_stale_staging(&destination, STALE_STAGING_AGE);

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&destination)
            .map_err(|e| Error::Staging {
                path: destination.clone(),
                source: e,
            })?;

        tracing::debug!(staging = %staging.path().display(), "opened staging workspace");
        Ok(Self {
            staging,
            destination,
        })
    }

    pub fn path(&self) -> &Path {
        self.staging.path()
    }

    /// Move every staged file into the destination.
    ///
    /// Files named in `last` are moved after all the others, in the order
    /// given. Returns the committed destination paths in commit order.
    pub fn commit(self, last: &[&OsStr]) -> Result<Vec<PathBuf>> {
        let mut staged = self.staged_files()?;
        staged.sort();
        for name in last {
            if let Some(pos) = staged.iter().position(|p| p.file_name() == Some(*name)) {
                let item = staged.remove(pos);
                staged.push(item);
            }
        }

        let mut committed = Vec::with_capacity(staged.len());
        for from in staged {
            let Some(name) = from.file_name() else {
                continue;
            };
            let to = self.destination.join(name);
            std::fs::rename(&from, &to).map_err(|e| Error::Commit {
                from: from.clone(),
                to: to.clone(),
                source: e,
            })?;
            committed.push(to);
        }

        tracing::debug!(files = committed.len(), "committed staging workspace");
        Ok(committed)
    }

    fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let read_err = |e| Error::Read {
            path: self.path().to_path_buf(),
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(self.path()).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if entry.file_type().map_err(read_err)?.is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }
}

/// Best-effort removal of `.staging-*` directories in `destination` last
/// modified at least `older_than` ago. Failures are logged and skipped.
pub(crate) fn remove_stale_staging(destination: &Path, older_than: Duration) {
    let Ok(entries) = std::fs::read_dir(destination) else {
        return;
    };
    let now = SystemTime::now();

    for entry in entries.flatten() {
        let is_staging = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(STAGING_PREFIX));
        if !is_staging {
            continue;
        }
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_dir() {
            continue;
        }
        let age = metadata
            .modified()
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .unwrap_or(Duration::ZERO);
        if age < older_than {
            continue;
        }

        let path = entry.path();
        match std::fs::remove_dir_all(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed stale staging directory"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not remove stale staging directory")
            }
        }
    }
}
