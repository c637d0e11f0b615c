//! Subshelf CLI
//!
//! `run` drives the whole pipeline (discover, pair, tag, sort, import);
//! `plan` builds and prints the batch without touching the archival tool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use subshelf::ImportConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "subshelf", about = "Batch importer for downloaded video metadata and subtitles")]
struct Cli {
    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Path to a TOML config file for the importer invocation
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the import batch and drive the archival tool over it
    Run {
        /// Root directory bounding discovery and tag ascent
        root: PathBuf,

        /// Build and print the batch without spawning the archival tool
        #[arg(long)]
        dry_run: bool,

        /// Override the archival tool binary
        #[arg(long)]
        importer: Option<PathBuf>,

        /// Override the archival tool's database path
        #[arg(long)]
        db: Option<PathBuf>,

        /// Override the archival tool's config file path
        #[arg(long)]
        archive_config: Option<PathBuf>,
    },
    /// Preview the batch: records, tags, and import order
    Plan {
        /// Root directory bounding discovery and tag ascent
        root: PathBuf,

        /// Emit the batch as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match args.command {
        Commands::Run {
            root,
            dry_run,
            importer,
            db,
            archive_config,
        } => {
            let mut config = config;
            if let Some(binary) = importer {
                config.importer_binary = binary;
            }
            if let Some(db) = db {
                config.archive_db = db;
            }
            if let Some(path) = archive_config {
                config.archive_config = path;
            }
            cli::run::run(cli::run::RunArgs {
                root,
                dry_run,
                config,
            })
        }
        Commands::Plan { root, json } => cli::plan::run(cli::plan::PlanArgs { root, json }),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "subshelf=debug" } else { "subshelf=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> subshelf::Result<ImportConfig> {
    match path {
        Some(path) => ImportConfig::load(path),
        None => Ok(ImportConfig::default()),
    }
}
