use std::path::{Path, PathBuf};

use guard_hook_fetch::PINNED_VERSION;
use guard_hook_platform::Platform;

use crate::error::Result;

/// Directory created under the user's home for the default install.
pub const INSTALL_DIR_NAME: &str = ".cfn-guard-pre-commit";

/// Executable name before the platform suffix.
pub const BINARY_STEM: &str = "cfn-guard";

/// File in the install root holding the version tag of the installed binary.
pub const VERSION_MARKER: &str = ".cfn-guard-version";

/// Location of an installed cfn-guard release.
///
/// The binary path depends only on the root and the platform. The release
/// counts as installed when that path is a regular file and the
/// [`VERSION_MARKER`] next to it names this cache's version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCache {
    root: PathBuf,
    platform: Platform,
    version: String,
}

impl InstallCache {
    pub fn new(root: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            root: root.into(),
            platform,
            version: PINNED_VERSION.to_string(),
        }
    }

    /// `<home>/.cfn-guard-pre-commit`.
    pub fn user_default(platform: Platform) -> Result<Self> {
        let home = guard_hook_platform::dir::require_home()?;
        Ok(Self::new(home.join(INSTALL_DIR_NAME), platform))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn binary_name(&self) -> String {
        self.platform.binary_name(BINARY_STEM)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.root.join(self.binary_name())
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(VERSION_MARKER)
    }

    /// Version recorded by the last completed install, if any.
    pub fn installed_version(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.marker_path()).ok()?;
        Some(content.trim().to_string())
    }

    pub fn is_installed(&self) -> bool {
        self.binary_path().is_file() && self.installed_version().as_deref() == Some(self.version())
    }

    /// Write the version marker for this cache into `dir` and return its path.
    ///
    /// `dir` is normally a staging directory that is later committed into
    /// [`root`](Self::root).
    pub fn write_version_marker(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(VERSION_MARKER);
        std::fs::write(&path, format!("{}\n", self.version)).map_err(|e| {
            guard_hook_fs::Error::Write {
                path: path.clone(),
                source: e,
            }
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_path_per_platform() {
        let root = Path::new("/opt/hook");
        assert_eq!(
            InstallCache::new(root, Platform::Linux).binary_path(),
            root.join("cfn-guard")
        );
        assert_eq!(
            InstallCache::new(root, Platform::Darwin).binary_path(),
            root.join("cfn-guard")
        );
        assert_eq!(
            InstallCache::new(root, Platform::Windows).binary_path(),
            root.join("cfn-guard.exe")
        );
    }

    #[test]
    fn defaults_to_pinned_version() {
        let cache = InstallCache::new("/x", Platform::Linux);
        assert_eq!(cache.version(), PINNED_VERSION);
        assert_eq!(cache.marker_path(), Path::new("/x").join(VERSION_MARKER));
    }

    #[test]
    fn user_default_lives_under_home() {
        if let Some(home) = guard_hook_platform::dir::user_home() {
            let cache = InstallCache::user_default(Platform::Linux).unwrap();
            assert_eq!(cache.root(), home.join(INSTALL_DIR_NAME));
        }
    }

    #[test]
    fn directory_at_binary_path_is_not_installed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = InstallCache::new(dir.path(), Platform::Linux);
        assert!(!cache.is_installed());

        std::fs::create_dir(cache.binary_path()).unwrap();
        cache.write_version_marker(dir.path()).unwrap();
        assert!(!cache.is_installed());
    }

    #[test]
    fn binary_without_marker_is_not_installed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = InstallCache::new(dir.path(), Platform::Linux);
        std::fs::write(cache.binary_path(), "bin").unwrap();

        assert!(!cache.is_installed());
        assert_eq!(cache.installed_version(), None);
    }

    #[test]
    fn binary_from_other_version_is_not_installed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = InstallCache::new(dir.path(), Platform::Linux);
        std::fs::write(cache.binary_path(), "bin").unwrap();
        std::fs::write(cache.marker_path(), "1.0.0\n").unwrap();

        assert_eq!(cache.installed_version().as_deref(), Some("1.0.0"));
        assert!(!cache.is_installed());
    }

    #[test]
    fn marker_written_for_this_version_completes_install() {
        let dir = tempfile::tempdir().unwrap();
        let cache = InstallCache::new(dir.path(), Platform::Linux);
        std::fs::write(cache.binary_path(), "bin").unwrap();

        let marker = cache.write_version_marker(dir.path()).unwrap();

        assert_eq!(marker, cache.marker_path());
        assert_eq!(
            std::fs::read_to_string(&marker).unwrap(),
            format!("{PINNED_VERSION}\n")
        );
        assert!(cache.is_installed());
    }
}
