use std::process::ExitCode;

use clap::Parser;

use gramtap_core::config::ConfigStore;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(e) = gramtap_core::logging::init("gramtap", cli.verbose) {
        eprintln!("warning: {e}");
    }

    let mut store = match &cli.config_dir {
        Some(dir) => ConfigStore::new(dir.clone()),
        None => ConfigStore::open_default(),
    };
    tracing::debug!(path = %store.config_path().display(), "using config file");

    match commands::run(cli.command, &mut store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
