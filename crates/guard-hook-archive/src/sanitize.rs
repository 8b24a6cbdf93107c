use std::ffi::OsString;
use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Reduce an archive entry path to the name it is extracted under.
///
/// Only the final normal component survives, so no entry can be written
/// outside the destination directory. Entries whose last component is
/// empty, `.` or `..` are rejected.
pub fn flatten_name(entry_path: &Path) -> Result<OsString> {
    match entry_path.components().next_back() {
        Some(Component::Normal(name)) if !name.is_empty() => Ok(name.to_os_string()),
        _ => Err(Error::InvalidPath(entry_path.to_path_buf())),
    }
}
