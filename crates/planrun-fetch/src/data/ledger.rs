use super::record::{DownloadRecord, DownloadSummary};

/// Ordered, append-only history of fetch attempts.
///
/// Only the fetcher appends. Records leave only through [`Ledger::clear`].
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    records: Vec<DownloadRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: DownloadRecord) -> &DownloadRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&DownloadRecord> {
        self.records.last()
    }

    pub fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DownloadRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Read-out of every record, oldest first.
    pub fn summaries(&self) -> Vec<DownloadSummary> {
        self.records.iter().map(DownloadRecord::summary).collect()
    }
}

impl FromIterator<DownloadRecord> for Ledger {
    fn from_iter<I: IntoIterator<Item = DownloadRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a DownloadRecord;
    type IntoIter = std::slice::Iter<'a, DownloadRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
