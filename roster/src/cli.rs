use clap::Parser;
use std::path::PathBuf;

/// Manage a roster of student records stored in a flat text file
#[derive(Debug, Parser)]
#[clap(name = "roster", version)]
pub struct CommandLine {
    /// Data file to load at startup and write on save
    #[clap(long)]
    pub data_file: Option<PathBuf>,
    /// YAML configuration file (defaults to roster.yaml when present)
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Skip the loading animation between menu choices
    #[clap(long, action)]
    pub no_loader: bool,
}
