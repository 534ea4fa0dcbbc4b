use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "topstocks")]
#[command(about = "US large-cap price history and risk analysis CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download 1y of daily history, compute metrics, write CSVs and charts
    Run,
    /// Show what a previous run produced
    Status,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            commands::run::run();
        }
        Commands::Status => {
            commands::status::run();
        }
    }
}
