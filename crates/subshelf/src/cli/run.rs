//! Run command - build the batch and drive the archival tool

use std::path::PathBuf;
use std::process::ExitCode;

use subshelf::{build_batch, run_batch, CommandImporter, ImportConfig};
use tracing::info;

/// Arguments for the run command
#[derive(Debug)]
pub struct RunArgs {
    pub root: PathBuf,
    pub dry_run: bool,
    pub config: ImportConfig,
}

/// Execute the run command
pub fn run(args: RunArgs) -> anyhow::Result<ExitCode> {
    let batch = build_batch(&args.root)?;

    if args.dry_run {
        for record in &batch.records {
            println!(
                "{} {} [{}] + {}",
                record.timestamp,
                record.info_path.display(),
                record.tags_arg(),
                record.subtitle_path.display()
            );
        }
        print_batch_footer(&batch);
        return Ok(ExitCode::SUCCESS);
    }

    info!(
        importer = %args.config.importer_binary.display(),
        records = batch.records.len(),
        "Starting import"
    );
    let mut importer = CommandImporter::new(&args.config);
    let outcome = run_batch(&mut importer, &batch.records);

    println!(
        "{} imported, {} failed, {} skipped (no subtitle), {} excluded (unparsable metadata)",
        outcome.imported,
        outcome.failed.len(),
        batch.skipped_no_subtitle.len(),
        batch.unparsable.len()
    );
    print_paths("Failed (re-run these)", &outcome.failed);
    print_paths("Excluded (unparsable metadata)", &batch.unparsable);

    if outcome.failed.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_batch_footer(batch: &subshelf::Batch) {
    println!(
        "{} records, {} skipped (no subtitle), {} excluded (unparsable metadata)",
        batch.records.len(),
        batch.skipped_no_subtitle.len(),
        batch.unparsable.len()
    );
}

fn print_paths(label: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        return;
    }
    println!("{label}:");
    for path in paths {
        println!("  {}", path.display());
    }
}
