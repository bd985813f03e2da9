use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;

use student_roster::backend::io::console::{session::SessionEnd, ConsoleSession, ProgressLoader};
use student_roster::backend::initialize_backend;
use student_roster::cli::CommandLine;
use student_roster::config::AppConfig;

fn main() -> Result<()> {
    // Quiet by default so log lines don't interleave with the menu; RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CommandLine::parse();
    let config = AppConfig::resolve(&args)?;
    info!("Starting student roster with data file {:?}", config.data_file);

    let state = initialize_backend(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(
        stdin.lock(),
        stdout.lock(),
        state,
        ProgressLoader::new(config.loader.clone()),
    );

    let end = session.run().context("Console session failed")?;
    match end {
        SessionEnd::Saved => info!("Session ended after saving"),
        SessionEnd::EndOfInput => info!("Session ended at end of input without saving"),
    }
    Ok(())
}
