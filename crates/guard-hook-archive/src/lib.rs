//! Flattening extraction of gzip-compressed tar archives.
//!
//! Release archives nest the executable under a platform directory. The
//! hook only cares about the files themselves, so [`extract_flat`] writes
//! every regular file directly into the destination under its base name and
//! ignores directories, links and special entries.

pub use error::{Error, Result};
pub use extract::extract_flat;
pub use report::ExtractReport;
pub use sanitize::flatten_name;

mod error;
mod extract;
mod report;
mod sanitize;
