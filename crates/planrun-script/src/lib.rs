//! Run named scripts from a fixed directory and capture what they print.
//!
//! A script name `build` resolves to `<scripts_dir>/build.<extension>` and is
//! handed to an interpreter (`sh` by default). Output is collected in full;
//! a non-zero exit is an error carrying the exit code and stderr.

pub use command::Command;
pub use error::{Error, Result};
pub use runner::{
    DEFAULT_EXTENSION, DEFAULT_INTERPRETER, DEFAULT_SCRIPTS_DIR, ProcessRunner, ScriptOutput,
    ScriptRunner,
};

pub mod command;
mod error;
mod runner;
