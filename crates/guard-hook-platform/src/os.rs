//! Operating system resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Platforms cfn-guard publishes release archives for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
}

impl Platform {
    /// Map an OS identifier (case-insensitive) to a supported platform.
    ///
    /// Accepts both `darwin` and `macos` for Apple hosts, since the former is
    /// what `uname` reports and the latter is what Rust's `consts::OS` uses.
    pub fn from_os(id: &str) -> Result<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "darwin" | "macos" => Ok(Self::Darwin),
            "windows" => Ok(Self::Windows),
            _ => Err(Error::UnsupportedPlatform(id.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }

    /// Executable extension, including the leading dot.
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Linux | Self::Darwin => "",
        }
    }

    /// File name of an executable called `stem` on this platform.
    pub fn binary_name(self, stem: &str) -> String {
        format!("{stem}{}", self.exe_suffix())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_os(s)
    }
}
