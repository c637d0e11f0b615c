//! Plan command - preview the batch without importing

use std::path::PathBuf;
use std::process::ExitCode;

use subshelf::build_batch;

/// Arguments for the plan command
#[derive(Debug)]
pub struct PlanArgs {
    pub root: PathBuf,
    pub json: bool,
}

/// Execute the plan command
pub fn run(args: PlanArgs) -> anyhow::Result<ExitCode> {
    let batch = build_batch(&args.root)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(ExitCode::SUCCESS);
    }

    for record in &batch.records {
        println!(
            "{} {} [{}] + {}",
            record.timestamp,
            record.info_path.display(),
            record.tags_arg(),
            record.subtitle_path.display()
        );
    }
    for path in &batch.skipped_no_subtitle {
        println!("skip (no subtitle): {}", path.display());
    }
    for path in &batch.unparsable {
        println!("excluded (unparsable metadata): {}", path.display());
    }
    println!(
        "{} records, {} skipped, {} excluded",
        batch.records.len(),
        batch.skipped_no_subtitle.len(),
        batch.unparsable.len()
    );
    Ok(ExitCode::SUCCESS)
}
