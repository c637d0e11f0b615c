//! Importer driver
//!
//! The archival tool is an external collaborator behind the [`Importer`]
//! trait, so tests can substitute a recorder instead of spawning processes.
//! The production implementation spawns one process per record and blocks
//! until it exits; one failing item never halts the rest of the batch.

use std::path::PathBuf;
use std::process::Command;

use anyhow::Context;
use tracing::{error, info};

use crate::config::ImportConfig;
use crate::types::{ImportOutcome, ImportRecord};

/// Capability to hand one record to the archival tool.
pub trait Importer {
    fn import(&mut self, record: &ImportRecord) -> anyhow::Result<()>;
}

/// Spawns the configured archival tool binary per record.
pub struct CommandImporter {
    binary: PathBuf,
    archive_db: PathBuf,
    archive_config: PathBuf,
}

impl CommandImporter {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            binary: config.importer_binary.clone(),
            archive_db: config.archive_db.clone(),
            archive_config: config.archive_config.clone(),
        }
    }
}

impl Importer for CommandImporter {
    fn import(&mut self, record: &ImportRecord) -> anyhow::Result<()> {
        let status = Command::new(&self.binary)
            .arg("--db")
            .arg(&self.archive_db)
            .arg("--config")
            .arg(&self.archive_config)
            .arg("--unique-url")
            .arg("--allow-duplicate-title")
            .arg("--tags")
            .arg(record.tags_arg())
            .arg("--metadata")
            .arg(&record.info_path)
            .arg(&record.subtitle_path)
            .status()
            .with_context(|| format!("Failed to launch {}", self.binary.display()))?;

        if !status.success() {
            anyhow::bail!("Importer exited with {status}");
        }
        Ok(())
    }
}

/// Drive the importer over an ordered batch, one record at a time.
///
/// Failures are recorded and the loop continues; the outcome lists every
/// failed item so a human can re-run them.
pub fn run_batch(importer: &mut dyn Importer, records: &[ImportRecord]) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for record in records {
        match importer.import(record) {
            Ok(()) => {
                info!(path = %record.info_path.display(), "Imported");
                outcome.imported += 1;
            }
            Err(err) => {
                error!(path = %record.info_path.display(), error = ?err, "Import failed, continuing");
                outcome.failed.push(record.info_path.clone());
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    struct FlakyImporter {
        fail_on: Vec<PathBuf>,
        calls: Vec<PathBuf>,
    }

    impl Importer for FlakyImporter {
        fn import(&mut self, record: &ImportRecord) -> anyhow::Result<()> {
            self.calls.push(record.info_path.clone());
            if self.fail_on.contains(&record.info_path) {
                anyhow::bail!("boom");
            }
            Ok(())
        }
    }

    fn record(name: &str, timestamp: i64) -> ImportRecord {
        ImportRecord {
            timestamp,
            info_path: PathBuf::from(format!("{name}.info.json")),
            subtitle_path: PathBuf::from(format!("{name}.ko.vtt")),
            tags: BTreeSet::new(),
        }
    }

    #[test]
    fn failure_does_not_halt_the_batch() {
        let records = vec![record("a", 1), record("b", 2), record("c", 3)];
        let mut importer = FlakyImporter {
            fail_on: vec![PathBuf::from("b.info.json")],
            calls: Vec::new(),
        };

        let outcome = run_batch(&mut importer, &records);
        assert_eq!(importer.calls.len(), 3);
        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.failed, vec![PathBuf::from("b.info.json")]);
    }

    #[test]
    fn records_are_imported_in_order() {
        let records = vec![record("x", 1), record("y", 2)];
        let mut importer = FlakyImporter {
            fail_on: Vec::new(),
            calls: Vec::new(),
        };

        run_batch(&mut importer, &records);
        assert_eq!(
            importer.calls,
            vec![PathBuf::from("x.info.json"), PathBuf::from("y.info.json")]
        );
    }
}
