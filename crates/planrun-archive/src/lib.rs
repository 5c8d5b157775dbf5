//! Zip extraction driven by the download ledger.
//!
//! # Architecture
//!
//! - `source.rs` - Lending entry source over a zip archive
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `extract.rs` - Ledger preconditions and the sequential write loop
//! - `report.rs` - What was written where
//!
//! Entries are processed strictly one at a time: [`ZipSource::next_entry`]
//! lends its entry out, so the next entry cannot be opened while the previous
//! one's reader or output file is still alive.

pub use error::{Error, Result};
pub use extract::{
    DEFAULT_DESTINATION, check_latest, extract_archive, extract_latest, extract_payload,
};
pub use report::{ArchiveReport, ExtractedEntry};
pub use sanitize::sanitize_path;
pub use source::{EntryKind, PendingEntry, ZipSource};

mod error;
pub mod extract;
mod report;
mod sanitize;
mod source;
