use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use planrun_fetch::ReqwestClient;
use planrun_script::ScriptRunner;
use planrun_workflow::{Engine, Settings};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "planrun",
    version = env!("CARGO_PKG_VERSION"),
    about,
    long_about = None,
    propagate_version = true
)]
pub struct App {
    /// Settings file (defaults to ./planrun.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "r", name = "run", about = "Execute the plan's directives")]
    Run(RunArg),
    #[command(alias = "v", name = "validate", about = "Check that files match a pattern")]
    Validate(ValidateArg),
    #[command(alias = "s", name = "script", about = "Run one named script")]
    Script(ScriptArg),
}

#[derive(Clone, Debug, Args)]
pub struct RunArg {
    /// Plan document to read instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Print the download ledger as JSON after the run
    #[arg(long)]
    pub ledger: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArg {
    pub pattern: String,

    /// Directory to search (defaults to the documentation directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ScriptArg {
    pub name: String,
}

impl Commands {
    pub async fn execute(self, settings: Settings) -> anyhow::Result<ExitCode> {
        match self {
            Self::Run(arg) => arg.execute(settings).await,
            Self::Validate(arg) => arg.execute(settings),
            Self::Script(arg) => arg.execute(settings).await,
        }
    }
}

impl RunArg {
    async fn execute(self, settings: Settings) -> anyhow::Result<ExitCode> {
        let client =
            ReqwestClient::new(settings.fetch_timeout()).context("failed to build HTTP client")?;
        let runner = settings.script_runner();

        let mut engine = Engine::new(settings, client, runner);
        if let Some(plan) = self.plan {
            engine = engine.with_plan_path(plan);
        }

        let outcome = engine.run().await;

        if self.ledger {
            let summaries = engine.ledger().summaries();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }

        Ok(exit_code(outcome.succeeded()))
    }
}

impl ValidateArg {
    fn execute(self, settings: Settings) -> anyhow::Result<ExitCode> {
        let root = self.root.unwrap_or(settings.documentation_dir);
        let matches = planrun_verify::validate(&self.pattern, &root)?;
        for path in matches {
            println!("{}", path.display());
        }
        Ok(ExitCode::SUCCESS)
    }
}

impl ScriptArg {
    async fn execute(self, settings: Settings) -> anyhow::Result<ExitCode> {
        let output = settings.script_runner().run(&self.name).await?;
        print!("{}", output.stdout);
        Ok(ExitCode::SUCCESS)
    }
}

fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn run_flags() {
        let app =
            App::try_parse_from(["planrun", "-vv", "run", "--plan", "p.md", "--ledger"]).unwrap();
        assert_eq!(app.verbose, 2);
        match app.cmd {
            Commands::Run(arg) => {
                assert_eq!(arg.plan, Some(PathBuf::from("p.md")));
                assert!(arg.ledger);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn global_config_after_subcommand() {
        let app =
            App::try_parse_from(["planrun", "validate", "**/*.md", "--config", "c.toml"]).unwrap();
        assert_eq!(app.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(app.cmd, Commands::Validate(ValidateArg { root: None, .. })));
    }
}
