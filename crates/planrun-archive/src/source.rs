use std::io::{Read, Seek};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// What an entry turned out to be.
pub enum EntryKind<'a, R: Read + 'a> {
    Directory,
    /// File contents, streamed straight out of the archive.
    File(zip::read::ZipFile<'a, R>),
}

/// An entry read from the archive but not yet written.
///
/// It borrows its [`ZipSource`]; drop it before asking for the next one.
pub struct PendingEntry<'a, R: Read + 'a> {
    /// Path inside the archive, already checked not to escape it.
    pub path: PathBuf,
    pub kind: EntryKind<'a, R>,
}

/// Sequential entry source over a zip archive.
pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
    index: usize,
}

impl<R: Read + Seek> ZipSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        Ok(Self { archive, index: 0 })
    }

    /// Number of entries in the central directory.
    pub(crate) fn len(&self) -> usize {
        self.archive.len()
    }

    /// Open the next entry, or `None` once every entry has been handed out.
    pub fn next_entry(&mut self) -> Option<Result<PendingEntry<'_, R>>> {
        if self.index >= self.archive.len() {
            return None;
        }

        let file = match self.archive.by_index(self.index) {
            Ok(f) => f,
            Err(e) => return Some(Err(e.into())),
        };
        self.index += 1;

        let path = match file.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                return Some(Err(Error::InvalidPath {
                    name: file.name().to_string(),
                }));
            }
        };

        let kind = if file.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File(file)
        };

        Some(Ok(PendingEntry { path, kind }))
    }
}
