//! Filesystem primitives used while installing the wrapped executable.
//!
//! Files are written into a [`Workspace`] (a staging directory on the same
//! filesystem as the destination) and renamed into place on commit, so a
//! reader of the destination only ever sees complete files.

pub use error::{Error, Result};
pub use permissions::make_executable;
pub use workspace::Workspace;

mod error;
mod permissions;
mod workspace;
