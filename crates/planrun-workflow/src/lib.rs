//! Plan-directed workflow engine.
//!
//! A plan is a Markdown document. Ordered-list items of the form
//! `1. **download** https://host/doc.zip` are directives; everything else is
//! prose and ignored. The [`Engine`] runs directives one at a time and stops
//! at the first failure. A missing plan, or one without directives, takes
//! the fallback path instead.

pub use config::Settings;
pub use directive::{Directive, DirectiveKind, parse_plan, read_plan};
pub use engine::{Engine, RunOutcome, State};
pub use error::{ConfigError, PlanError, StepError};

pub mod config;
pub mod directive;
pub mod engine;
mod error;
