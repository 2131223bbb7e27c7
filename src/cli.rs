use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jobportal_config::ConfigLoader;

use crate::report::summary;

#[derive(Parser, Debug)]
#[command(name = "jobportal")]
#[command(about = "JobPortal - configuration and startup checks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate configuration, then print it (secrets omitted)
    Check {
        /// Overlay file to apply instead of `./.env`
        #[arg(short = 'e', long)]
        env_file: Option<PathBuf>,

        /// Skip the overlay file entirely
        #[arg(long, conflicts_with = "env_file")]
        no_env_file: bool,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Executes a command and returns what should be printed on success.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Check {
            env_file,
            no_env_file,
            json,
        } => {
            let loader = match env_file {
                Some(path) => ConfigLoader::new().overlay_path(path),
                None if *no_env_file => ConfigLoader::new().without_overlay(),
                None => ConfigLoader::new(),
            };

            let config = loader.load().context("Invalid configuration")?;

            if *json {
                serde_json::to_string_pretty(&config).context("Failed to serialize configuration")
            } else {
                Ok(summary(&config))
            }
        }
    }
}
