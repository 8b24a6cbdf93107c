use crate::{Error, Result};
use std::path::Path;

/// Mode given to installed executables on Unix (rwxr-xr-x).
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Make `path` runnable by everyone.
///
/// On Unix sets mode 0755. On Windows clears the `readonly`
/// attribute; executability there follows the file extension.
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE)).map_err(
            |e| Error::Write {
                path: path.to_path_buf(),
                source: e,
            },
        )?;
    }

    #[cfg(windows)]
    {
        let mut perms = std::fs::metadata(path)
            .map_err(|e| Error::Read {
                path: path.to_path_buf(),
                source: e,
            })?
            .permissions();
        perms.set_readonly(false);
        std::fs::set_permissions(path, perms).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    Ok(())
}
