//! Ledger preconditions and the sequential extraction loop.

use std::fs::File;
use std::io::{self, Read, Seek, Write};
use std::path::Path;

use planrun_fetch::{Ledger, is_archive_media_type};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::report::{ArchiveReport, ExtractedEntry};
use crate::sanitize::sanitize_path;
use crate::source::{EntryKind, ZipSource};

/// Destination used when none is given.
pub const DEFAULT_DESTINATION: &str = "documentation";

/// Check that the latest ledger record is an extractable archive and return its bytes.
///
/// Performs no I/O.
pub fn check_latest(ledger: &Ledger) -> Result<&[u8]> {
    let record = ledger.latest().ok_or(Error::EmptyLedger)?;

    let payload = record.payload.as_ref().ok_or_else(|| Error::MissingPayload {
        url: record.source_url.clone(),
        expired: record.expired,
    })?;

    if !is_archive_media_type(&record.media_type) {
        return Err(Error::UnsupportedMediaType {
            url: record.source_url.clone(),
            media_type: record.media_type.clone(),
        });
    }

    Ok(payload.as_ref())
}

/// Extract the latest download into `destination`.
///
/// Preconditions are checked before anything touches the filesystem.
pub fn extract_latest(ledger: &Ledger, destination: &Path) -> Result<ArchiveReport> {
    let payload = check_latest(ledger)?;
    extract_payload(payload, destination)
}

/// Stage `payload` in a temporary file and extract it into `destination`.
///
/// The temporary file is removed after a successful extraction; failing to
/// remove it only logs a warning.
pub fn extract_payload(payload: &[u8], destination: &Path) -> Result<ArchiveReport> {
    extract_staged_in(payload, destination, &std::env::temp_dir())
}

fn extract_staged_in(payload: &[u8], destination: &Path, staging: &Path) -> Result<ArchiveReport> {
    ensure_directory(destination)?;

    let mut staged = tempfile::Builder::new()
        .prefix("planrun-archive-")
        .suffix(".zip")
        .tempfile_in(staging)
        .map_err(Error::TempFile)?;
    staged.write_all(payload).map_err(Error::TempFile)?;
    staged.flush().map_err(Error::TempFile)?;
    staged.as_file_mut().rewind().map_err(Error::TempFile)?;
    debug!(path = %staged.path().display(), bytes = payload.len(), "staged archive");

    let report = extract_archive(staged.as_file_mut(), destination)?;

    let staged_path = staged.path().to_path_buf();
    if let Err(e) = staged.close() {
        warn!(path = %staged_path.display(), error = %e, "failed to remove staged archive");
    }

    Ok(report)
}

/// Extract every entry of a zip stream into `destination`, in archive order.
///
/// Stops at the first failing entry; files already written stay in place.
pub fn extract_archive<R: Read + Seek>(reader: R, destination: &Path) -> Result<ArchiveReport> {
    ensure_directory(destination)?;

    let mut source = ZipSource::new(reader)?;
    debug!(entries = source.len(), destination = %destination.display(), "opened archive");
    let mut report = ArchiveReport::new(destination);

    while let Some(pending) = source.next_entry() {
        let pending = pending?;
        let target = sanitize_path(&pending.path, destination)?;
        let is_directory = matches!(pending.kind, EntryKind::Directory);

        let size = match pending.kind {
            EntryKind::Directory => {
                ensure_directory(&target)?;
                0
            }
            EntryKind::File(mut reader) => write_file(&mut reader, &target)?,
        };

        report.record(ExtractedEntry {
            is_directory,
            original_path: pending.path,
            target_path: target,
            size,
        });
    }

    info!(
        destination = %destination.display(),
        files = report.file_count,
        directories = report.directory_count,
        bytes = report.total_bytes,
        "archive extracted"
    );
    Ok(report)
}

/// Stream one entry to disk. The output file is closed before this returns.
fn write_file<R: Read>(reader: &mut R, target: &Path) -> Result<u64> {
    if let Some(parent) = target.parent() {
        ensure_directory(parent)?;
    }

    let extraction_failed = |source: io::Error| Error::ExtractionFailed {
        path: target.to_path_buf(),
        source,
    };

    let mut file = File::create(target).map_err(extraction_failed)?;
    let written = io::copy(reader, &mut file).map_err(extraction_failed)?;
    file.flush().map_err(extraction_failed)?;
    drop(file);

    debug!(path = %target.display(), bytes = written, "wrote entry");
    Ok(written)
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
