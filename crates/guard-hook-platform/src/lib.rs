//! Platform helpers for the cfn-guard hook (OS, user directories, child processes).

pub use error::{Error, Result};
pub use os::Platform;

pub mod command;
pub mod dir;
mod error;
pub mod os;
