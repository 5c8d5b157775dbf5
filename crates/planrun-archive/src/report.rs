use std::path::PathBuf;

/// Summary of one extraction run.
#[derive(Clone, Debug, Default)]
pub struct ArchiveReport {
    pub destination: PathBuf,
    pub entry_count: usize,
    pub file_count: usize,
    pub directory_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<ExtractedEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub size: u64,
    pub is_directory: bool,
}

impl ArchiveReport {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, entry: ExtractedEntry) {
        self.entry_count += 1;
        if entry.is_directory {
            self.directory_count += 1;
        } else {
            self.file_count += 1;
            self.total_bytes += entry.size;
        }
        self.entries.push(entry);
    }
}
