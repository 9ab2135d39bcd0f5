//! Custom Form CLI
//!
//! Render, validate, and inspect custom form definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use customform::{Config, cli};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the client payload for a form definition.
    Render {
        /// Definition file, or a bare name looked up in CUSTOMFORM_DIR.
        definition: String,
    },

    /// Validate a client response and print the labelled values.
    Validate {
        /// Definition file, or a bare name looked up in CUSTOMFORM_DIR.
        definition: String,

        /// JSON response file, or `-` for stdin.
        #[arg(default_value = "-")]
        response: PathBuf,
    },

    /// List a form's elements with their labels.
    Inspect {
        /// Definition file, or a bare name looked up in CUSTOMFORM_DIR.
        definition: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(dir = %config.definitions_dir.display(), "configuration loaded");

    match args.command {
        Command::Render { definition } => cli::cmd_render(&config, &definition),
        Command::Validate {
            definition,
            response,
        } => cli::cmd_validate(&config, &definition, &response),
        Command::Inspect { definition } => cli::cmd_inspect(&config, &definition),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
