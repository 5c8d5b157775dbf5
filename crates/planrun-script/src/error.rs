use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid script name: '{name}'")]
    InvalidName { name: String },

    #[error("script not found: '{name}' (looked for {})", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error(
        "script '{name}' exited with {}: {}",
        code.map_or_else(|| "no exit code".to_string(), |c| format!("code {c}")),
        stderr.trim()
    )]
    NonZeroExit {
        name: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },
}
