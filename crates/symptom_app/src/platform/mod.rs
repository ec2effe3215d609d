pub mod app;
pub mod config;
pub mod effects;
pub mod once;
pub mod ui;

use std::process::ExitCode;

use query_logging::query_info;

use config::Cli;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = cli.client_settings()?;
    query_logging::initialize(cli.log_destination(), cli.log_level(), &cli.log_file);
    query_info!(
        "Starting symptom checker endpoint={} model={}",
        settings.endpoint,
        settings.model
    );

    match cli.once.as_deref() {
        Some(symptoms) => once::run_once(settings, symptoms),
        None => app::run_app(settings).map(|()| ExitCode::SUCCESS),
    }
}
