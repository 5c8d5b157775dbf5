use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("validation root does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("no files found matching pattern '{pattern}' under {}", root.display())]
    NoMatches { pattern: String, root: PathBuf },

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
