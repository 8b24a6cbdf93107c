use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::report::ExtractReport;
use crate::sanitize::flatten_name;

/// Extract every regular file of a `.tar.gz` stream into `dest`.
///
/// Directory structure is discarded: `a/b/tool` lands at `dest/tool`. Later
/// entries with the same base name overwrite earlier ones. `dest` must
/// already exist.
pub fn extract_flat<R: Read>(reader: R, dest: &Path) -> Result<ExtractReport> {
    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    let mut report = ExtractReport::default();

    for entry in archive.entries().map_err(|_| Error::Corrupted)? {
        let mut entry = entry.map_err(|_| Error::Corrupted)?;
        let entry_path = entry.path().map_err(|_| Error::Corrupted)?.into_owned();

        if !entry.header().entry_type().is_file() {
            tracing::trace!(entry = %entry_path.display(), "skipping non-file entry");
            report.skipped += 1;
            continue;
        }

        let target = dest.join(flatten_name(&entry_path)?);
        let written = write_entry(&mut entry, &target).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => Error::Corrupted,
            _ => Error::ExtractionFailed {
                path: target.clone(),
                source: e,
            },
        })?;

        tracing::trace!(entry = %entry_path.display(), bytes = written, "extracted");
        report.total_bytes += written;
        report.files.push(target);
    }

    tracing::debug!(
        files = report.files.len(),
        skipped = report.skipped,
        bytes = report.total_bytes,
        "archive extracted"
    );
    Ok(report)
}

fn write_entry(entry: &mut impl Read, target: &Path) -> io::Result<u64> {
    let mut out = File::create(target)?;
    let written = io::copy(entry, &mut out)?;
    out.sync_all()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    fn tar_gz(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn nested_files_are_flattened() {
        let archive = tar_gz(&[
            ("cfn-guard-v3-ubuntu-latest/cfn-guard", b"binary"),
            ("cfn-guard-v3-ubuntu-latest/docs/README.md", b"readme"),
        ]);
        let dir = tempfile::tempdir().unwrap();

        let report = extract_flat(archive.as_slice(), dir.path()).unwrap();

        assert_eq!(std::fs::read(dir.path().join("cfn-guard")).unwrap(), b"binary");
        assert_eq!(std::fs::read(dir.path().join("README.md")).unwrap(), b"readme");
        assert!(!dir.path().join("cfn-guard-v3-ubuntu-latest").exists());
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.total_bytes, 12);
    }

    #[test]
    fn later_duplicates_overwrite_earlier() {
        let archive = tar_gz(&[("one/tool", b"first"), ("two/tool", b"second")]);
        let dir = tempfile::tempdir().unwrap();

        extract_flat(archive.as_slice(), dir.path()).unwrap();

        assert_eq!(std::fs::read(dir.path().join("tool")).unwrap(), b"second");
    }

    #[test]
    fn garbage_is_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_flat(&b"definitely not gzip data"[..], dir.path()).unwrap_err();
        assert!(matches!(err, Error::Corrupted));
    }
}
