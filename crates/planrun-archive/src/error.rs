use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("nothing has been downloaded yet")]
    EmptyLedger,

    #[error(
        "latest download from {url} has no payload{}",
        if *expired { " (link expired)" } else { "" }
    )]
    MissingPayload { url: String, expired: bool },

    #[error("latest download from {url} is not a zip archive (media type '{media_type}')")]
    UnsupportedMediaType { url: String, media_type: String },

    #[error("archive is corrupted: {0}")]
    Corrupted(String),

    #[error("entry '{name}' has an unsafe or invalid path")]
    InvalidPath { name: String },

    #[error("zip-slip attack detected: entry '{entry}' resolves to '{resolved}'")]
    ZipSlip { entry: PathBuf, resolved: PathBuf },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to stage archive in a temporary file: {0}")]
    TempFile(#[source] io::Error),
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Corrupted(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
