//! Data types shared across the import pipeline

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

/// One import-ready item: a metadata file, its matched subtitle, and the
/// tags derived from its location. Constructed once during batch building
/// and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ImportRecord {
    /// Integer timestamp from the metadata file; orders the batch
    pub timestamp: i64,
    /// Path to the metadata file, unique within a batch
    pub info_path: PathBuf,
    /// Path to the matched subtitle file
    pub subtitle_path: PathBuf,
    /// Deduplicated tags; `BTreeSet` keeps iteration order sorted
    pub tags: BTreeSet<String>,
}

impl ImportRecord {
    /// Comma-joined tag argument for the external tool. Sorted set iteration
    /// makes the argument reproducible across runs.
    pub fn tags_arg(&self) -> String {
        self.tags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Result of batch building: the ordered records plus everything that was
/// left out and why.
#[derive(Debug, Default, Serialize)]
pub struct Batch {
    /// Records sorted by timestamp ascending, ties in discovery order
    pub records: Vec<ImportRecord>,
    /// Metadata files with no usable subtitle (normal skips)
    pub skipped_no_subtitle: Vec<PathBuf>,
    /// Metadata files excluded because their timestamp could not be read
    pub unparsable: Vec<PathBuf>,
}

/// Result of driving the importer over a batch.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Items the external tool accepted
    pub imported: usize,
    /// Metadata paths whose invocation failed to launch or exited non-zero
    pub failed: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_arg_is_sorted_and_comma_joined() {
        let record = ImportRecord {
            timestamp: 1,
            info_path: PathBuf::from("a.info.json"),
            subtitle_path: PathBuf::from("a.ko.vtt"),
            tags: ["news", "a b", "drama"]
                .into_iter()
                .map(String::from)
                .collect(),
        };
        assert_eq!(record.tags_arg(), "a b,drama,news");
    }

    #[test]
    fn empty_tags_arg_is_empty_string() {
        let record = ImportRecord {
            timestamp: 1,
            info_path: PathBuf::from("a.info.json"),
            subtitle_path: PathBuf::from("a.ko.vtt"),
            tags: BTreeSet::new(),
        };
        assert_eq!(record.tags_arg(), "");
    }
}
