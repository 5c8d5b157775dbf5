use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::command::Command;
use crate::error::{Error, Result};

pub const DEFAULT_SCRIPTS_DIR: &str = "scripts";
pub const DEFAULT_EXTENSION: &str = "sh";
pub const DEFAULT_INTERPRETER: &str = "sh";

/// Captured result of a script that exited successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Executes a named script and reports whether it succeeded.
pub trait ScriptRunner: Send + Sync {
    fn run(&self, name: &str) -> impl Future<Output = Result<ScriptOutput>> + Send;
}

/// Runs `<scripts_dir>/<name>.<extension>` as a child process.
///
/// With an interpreter set the script is passed as its only argument,
/// otherwise the file itself is executed.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    scripts_dir: PathBuf,
    extension: String,
    interpreter: Option<String>,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPTS_DIR)
    }
}

impl ProcessRunner {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            interpreter: Some(DEFAULT_INTERPRETER.to_string()),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// An empty interpreter means direct execution.
    pub fn with_interpreter(mut self, interpreter: Option<String>) -> Self {
        self.interpreter = interpreter.filter(|i| !i.trim().is_empty());
        self
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }

    /// Map a script name to an existing file under the scripts directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if !is_valid_name(name) {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }

        let file = if self.extension.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{}", self.extension)
        };
        let path = self.scripts_dir.join(file);

        if !path.is_file() {
            return Err(Error::NotFound {
                name: name.to_string(),
                path,
            });
        }
        Ok(path)
    }

    fn command(&self, path: &Path) -> Command {
        match &self.interpreter {
            Some(interpreter) => Command::new(interpreter.as_str()).arg(path),
            None => Command::new(path.to_string_lossy()),
        }
    }
}

impl ScriptRunner for ProcessRunner {
    async fn run(&self, name: &str) -> Result<ScriptOutput> {
        let path = self.resolve(name)?;
        let command = self.command(&path);
        info!(
            script = name,
            program = command.program(),
            path = %path.display(),
            "running script"
        );

        let output = command.capture().await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::NonZeroExit {
                name: name.trim().to_string(),
                code: output.status.code(),
                stderr,
            });
        }

        debug!(script = name, stdout = %stdout.trim_end(), "script finished");
        Ok(ScriptOutput {
            code: output.status.code().unwrap_or(0),
            stdout,
            stderr,
        })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}
