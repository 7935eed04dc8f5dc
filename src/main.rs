use clap::Parser;
use std::io;
use std::process::ExitCode;

use folio::app::domain::sections::uniform_layout;
use folio::cli::{Cli, execute};
use folio::{AppState, FileStore};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match cli.site_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("folio: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let storage = FileStore::new(config.storage_path());
    log::debug!("Using storage at {}", storage.path().display());

    let mut app = AppState::new(config, storage, uniform_layout(800.0));
    let mut stdout = io::stdout().lock();

    match execute(cli.command, &mut app, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio: {}", e);
            ExitCode::FAILURE
        }
    }
}
