use std::ffi::OsStr;
use std::path::PathBuf;

/// Outcome of a flattening extraction.
#[derive(Clone, Debug, Default)]
pub struct ExtractReport {
    /// Written files, in archive order. A name repeated in the archive
    /// appears once per occurrence.
    pub files: Vec<PathBuf>,
    /// Directory, link and special entries that were not written.
    pub skipped: usize,
    pub total_bytes: u64,
}

impl ExtractReport {
    pub fn contains(&self, name: &OsStr) -> bool {
        self.files.iter().any(|p| p.file_name() == Some(name))
    }
}
