//! HTTP retrieval feeding an append-only download ledger.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Ledger and record types
//! - [`sniff`] - Pure media-type and payload classification
//! - [`effects`] - The HTTP client seam and the fetcher that drives it
//!
//! # Key Features
//!
//! - **Single attempt**: one request, bounded by the client's timeout, no retries
//! - **Append-only ledger**: every attempt that got a response leaves exactly one record
//! - **Expiry detection**: a JSON body whose `message` says "url expired" is a
//!   recognized failure, not a parse error

pub mod data;
pub mod effects;
mod error;
pub mod sniff;

pub use data::{DownloadRecord, DownloadSummary, Ledger};
pub use effects::{Fetcher, HttpClient, HttpResponse, MockHttpClient};
pub use sniff::{Payload, classify, is_archive_media_type, is_json_media_type};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result, TransportError};
