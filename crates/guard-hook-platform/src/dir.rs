use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Like [`user_home`], but failing when no home directory is known.
pub fn require_home() -> Result<PathBuf> {
    user_home().ok_or(Error::NoHomeDirectory)
}

pub fn user_temp() -> PathBuf {
    env::temp_dir()
}
