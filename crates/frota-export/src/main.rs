//! Command-line front end for the export pipelines.
//!
//! `generate` mirrors the build-from-scratch action; `complete` mirrors the
//! upload-and-fill action. Either way the result is one zip archive written
//! to the output directory.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use frota_export::ExportError;
use frota_export::pipeline::{Bundle, complete_bundle, generate_bundle};

/// Synthetic fleet dataset exporter.
#[derive(Debug, Parser)]
#[command(name = "frota-export", version, about)]
struct Cli {
    /// RNG seed for reproducible exports; defaults to OS entropy.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory the archive is written to.
    #[arg(long, global = true, default_value = ".")]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a roster from scratch and derive telemetry from it.
    Generate {
        /// Number of users to generate.
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,
    },
    /// Complete a partially-filled roster sheet and derive telemetry.
    Complete {
        /// Path to the uploaded roster sheet (CSV).
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run(&Cli::parse()) {
        Ok(message) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, ExportError> {
    let mut rng = cli
        .seed
        .map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64);
    let now = Local::now().naive_local();

    let bundle = match &cli.command {
        Command::Generate { count } => generate_bundle(&mut rng, *count as usize, now)?,
        Command::Complete { input } => {
            // Unreadable input is reported through the same user-facing
            // message as unparseable input.
            let uploaded = fs::read(input).map_err(|e| ExportError::InvalidSheet {
                message: e.to_string(),
            })?;
            complete_bundle(&mut rng, &uploaded, now)?
        }
    };

    let path = cli.output.join(bundle.archive_name);
    fs::write(&path, &bundle.bytes)?;
    Ok(summary(&bundle, &path.display().to_string()))
}

fn summary(bundle: &Bundle, path: &str) -> String {
    format!(
        "wrote {path}: {} users, {} telemetry events",
        bundle.user_count, bundle.event_count
    )
}
