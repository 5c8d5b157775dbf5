use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use planrun_workflow::Settings;
use tracing::error;

use crate::cli::App;

mod cli;
mod logging;

fn main() -> ExitCode {
    let app = App::parse();
    logging::init(app.verbose);

    match run(app) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: App) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(app.config.as_deref()).context("failed to load settings")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(app.cmd.execute(settings))
}
