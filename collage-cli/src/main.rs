//! Collage binary — arranges a folder of images into one grid image.

mod cli;
mod config;
mod run;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::CliArgs;
use config::RunConfig;

fn main() -> ExitCode {
    let dotenv = config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Some(path) => tracing::debug!("Loaded .env from: {}", path.display()),
        None => tracing::debug!("No .env file found, using system environment variables"),
    }

    let args = CliArgs::parse();

    let result = RunConfig::from_args(args).and_then(|config| run::run(&config));
    match result {
        Ok(summary) => {
            println!(
                "Collage successfully saved as: {} ({}x{}, {} images{})",
                summary.output.display(),
                summary.width,
                summary.height,
                summary.placed,
                if summary.skipped > 0 {
                    format!(", {} skipped", summary.skipped)
                } else {
                    String::new()
                }
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
