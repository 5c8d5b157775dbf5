use std::ffi::OsStr;
use std::process::Output;

use tokio::process::Command as TokioCommand;

use crate::error::{Error, Result};

/// Thin builder over [`tokio::process::Command`] that remembers what it runs.
#[derive(Debug)]
pub struct Command {
    inner: TokioCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: TokioCommand::new(&program),
            program,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    /// Run to completion with stdout and stderr piped and buffered.
    pub async fn capture(mut self) -> Result<Output> {
        self.inner.output().await.map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}
