//! Data layer: the records a fetch leaves behind and the ledger that owns them.

mod ledger;
mod record;

pub use ledger::Ledger;
pub use record::{DownloadRecord, DownloadSummary};
