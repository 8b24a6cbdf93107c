use std::path::PathBuf;

/// Configuration for a single download.
///
/// ```
/// use guard_hook_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .checksum(Some(vec![0u8; 32]))
///     .temp_dir("/var/tmp");
/// assert_eq!(options.checksum.as_deref().map(<[u8]>::len), Some(32));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Expected SHA-256 of the response body. When set, a mismatch fails the
    /// download and the temporary file is removed.
    pub checksum: Option<Vec<u8>>,

    /// Directory for the temporary download file. Defaults to the system
    /// temporary directory.
    pub temp_dir: Option<PathBuf>,
}

impl FetchOptions {
    #[must_use]
    pub fn checksum(mut self, checksum: Option<Vec<u8>>) -> Self {
        self.checksum = checksum;
        self
    }

    #[must_use]
    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }
}
