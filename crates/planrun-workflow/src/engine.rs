//! The plan state machine.
//!
//! ```text
//! Start ─┬─ PlanMissing ──┐
//!        ├─ NoDirectives ─┴─ Fallback ─┬─ Succeeded
//!        └─ HasDirectives ── Running ──┴─ Failed
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use planrun_archive::{check_latest, extract_payload};
use planrun_fetch::{Fetcher, HttpClient, Ledger};
use planrun_script::ScriptRunner;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::directive::{Directive, DirectiveKind, read_plan};
use crate::error::StepError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    PlanMissing,
    NoDirectives,
    HasDirectives,
    Running,
    Fallback,
    Succeeded,
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Either [`State::Succeeded`] or [`State::Failed`].
    pub state: State,
    pub fallback: bool,
    /// Directives started, the failing one included.
    pub executed: usize,
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        self.state == State::Succeeded
    }
}

pub struct Engine<C: HttpClient, R: ScriptRunner> {
    settings: Settings,
    fetcher: Fetcher<C>,
    runner: R,
    ledger: Ledger,
    extracted_root: Option<PathBuf>,
}

impl<C: HttpClient, R: ScriptRunner> Engine<C, R> {
    pub fn new(settings: Settings, client: C, runner: R) -> Self {
        Self {
            settings,
            fetcher: Fetcher::new(client),
            runner,
            ledger: Ledger::new(),
            extracted_root: None,
        }
    }

    pub fn with_plan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.plan_path = path.into();
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn client(&self) -> &C {
        self.fetcher.client()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn clear_ledger(&mut self) {
        self.ledger.clear();
    }

    /// Read the plan and drive it to a terminal state.
    pub async fn run(&mut self) -> RunOutcome {
        debug!(state = %State::Start, plan = %self.settings.plan_path.display(), "reading plan");

        let directives = match read_plan(&self.settings.plan_path).await {
            Ok(directives) => directives,
            Err(e) => {
                info!(error = %e, "no plan available");
                transition(State::Start, State::PlanMissing);
                return self.fallback(State::PlanMissing);
            }
        };

        if directives.is_empty() {
            info!(plan = %self.settings.plan_path.display(), "plan has no directives");
            transition(State::Start, State::NoDirectives);
            return self.fallback(State::NoDirectives);
        }

        transition(State::Start, State::HasDirectives);
        self.run_directives(&directives).await
    }

    /// Execute `directives` in order, stopping at the first failure.
    pub async fn run_directives(&mut self, directives: &[Directive]) -> RunOutcome {
        transition(State::HasDirectives, State::Running);
        self.extracted_root = None;

        for (index, directive) in directives.iter().enumerate() {
            info!(
                step = index + 1,
                total = directives.len(),
                verb = %directive.kind,
                target = %directive.target,
                "executing"
            );

            if let Err(e) = self.execute(directive).await {
                error!(
                    step = index + 1,
                    line = %directive.source_line,
                    error = %e,
                    "directive failed"
                );
                transition(State::Running, State::Failed);
                return RunOutcome {
                    state: State::Failed,
                    fallback: false,
                    executed: index + 1,
                };
            }
        }

        transition(State::Running, State::Succeeded);
        info!(steps = directives.len(), "plan completed");
        RunOutcome {
            state: State::Succeeded,
            fallback: false,
            executed: directives.len(),
        }
    }

    /// Run a single directive through its handler.
    pub async fn execute(&mut self, directive: &Directive) -> Result<(), StepError> {
        let target = directive.target.as_str();
        match directive.kind {
            DirectiveKind::Fetch => self.fetch(target).await,
            DirectiveKind::Extract => self.extract(target).await,
            DirectiveKind::Validate => self.validate(target),
            DirectiveKind::Run => self.run_script(target).await,
        }
    }

    fn fallback(&self, from: State) -> RunOutcome {
        transition(from, State::Fallback);
        transition(State::Fallback, State::Succeeded);
        RunOutcome {
            state: State::Succeeded,
            fallback: true,
            executed: 0,
        }
    }

    async fn fetch(&mut self, url: &str) -> Result<(), StepError> {
        let bytes = self.fetcher.fetch(url, &mut self.ledger).await?.payload_len();
        debug!(url, bytes, records = self.ledger.len(), "ledger updated");
        Ok(())
    }

    async fn extract(&mut self, target: &str) -> Result<(), StepError> {
        let destination = self.extract_destination(target);
        let payload = check_latest(&self.ledger)?.to_vec();

        let dest = destination.clone();
        let report = tokio::task::spawn_blocking(move || extract_payload(&payload, &dest)).await??;

        debug!(
            destination = %report.destination.display(),
            entries = report.entry_count,
            "extraction finished"
        );
        self.extracted_root = Some(destination);
        Ok(())
    }

    fn validate(&self, pattern: &str) -> Result<(), StepError> {
        let root = self.validation_root();
        let matches = planrun_verify::validate(pattern, root)?;
        info!(pattern, root = %root.display(), matches = matches.len(), "validated");
        Ok(())
    }

    async fn run_script(&self, name: &str) -> Result<(), StepError> {
        let output = self.runner.run(name).await?;
        info!(script = name, code = output.code, "script succeeded");
        Ok(())
    }

    fn extract_destination(&self, target: &str) -> PathBuf {
        let target = target.trim();
        if target.is_empty() {
            self.settings.documentation_dir.clone()
        } else {
            PathBuf::from(target)
        }
    }

    fn validation_root(&self) -> &Path {
        self.extracted_root
            .as_deref()
            .unwrap_or(&self.settings.documentation_dir)
    }
}

fn transition(from: State, to: State) {
    debug!(%from, %to, "state transition");
}
