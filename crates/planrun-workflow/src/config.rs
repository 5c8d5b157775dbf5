//! Layered settings: defaults, then `planrun.toml`, then `PLANRUN_*` variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use planrun_script::ProcessRunner;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub plan_path: PathBuf,
    pub documentation_dir: PathBuf,
    pub scripts_dir: PathBuf,
    pub script_extension: String,
    /// Empty means the script file is executed directly.
    pub script_interpreter: String,
    pub fetch_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plan_path: PathBuf::from("plan.md"),
            documentation_dir: PathBuf::from(planrun_archive::DEFAULT_DESTINATION),
            scripts_dir: PathBuf::from(planrun_script::DEFAULT_SCRIPTS_DIR),
            script_extension: planrun_script::DEFAULT_EXTENSION.to_string(),
            script_interpreter: planrun_script::DEFAULT_INTERPRETER.to_string(),
            fetch_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub const DEFAULT_FILE: &str = "planrun.toml";
    pub const ENV_PREFIX: &str = "PLANRUN_";

    /// Load settings from `path`, or from [`Self::DEFAULT_FILE`] if it exists.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        let file = path.unwrap_or(Path::new(Self::DEFAULT_FILE));
        Ok(Self::figment(file).extract()?)
    }

    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn script_runner(&self) -> ProcessRunner {
        ProcessRunner::new(&self.scripts_dir)
            .with_extension(&self.script_extension)
            .with_interpreter(Some(self.script_interpreter.clone()))
    }
}
