//! Plant Care Advisor - command-line tool
//!
//! Turns weather observations into ranked plant care advice, lists seasonal
//! tips and computes when recurring care tasks are due next.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;

use cli::Cli;
use commands::Settings;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let default_filter = if cli.verbose {
        "pca=debug,shared=debug"
    } else {
        "pca=info,shared=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load().context("Failed to load configuration")?;
    tracing::debug!("Environment: {}", config.environment);

    let settings = Settings::resolve(&cli, &config);
    let mut stdout = std::io::stdout().lock();
    commands::run(&cli.command, &settings, &mut stdout)
}
