//! Installation and invocation of the wrapped `cfn-guard` executable.
//!
//! - [`InstallCache`] - where the pinned binary lives
//! - [`Install`] / [`ReleaseInstaller`] - download, flatten and place a release
//! - [`Runner`] - install on demand, then spawn the binary

pub use cache::{BINARY_STEM, INSTALL_DIR_NAME, InstallCache, VERSION_MARKER};
pub use error::{Error, Result};
pub use installer::{Install, ReleaseInstaller};
pub use runner::Runner;

mod cache;
mod error;
mod installer;
mod runner;
