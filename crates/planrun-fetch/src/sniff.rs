//! Pure transformations: media-type parsing and payload classification.
//!
//! Nothing here performs I/O; the fetcher feeds response metadata in and acts
//! on the verdict.

mod classify;
mod media;

pub use classify::{EXPIRY_MARKER, Payload, classify, is_expiry_message};
pub use media::{ARCHIVE_MEDIA_TYPES, essence, is_archive_media_type, is_json_media_type};
