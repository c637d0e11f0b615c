//! Batch building: discovery, pairing, ordering
//!
//! Discovers every metadata file under the root, pairs each with a subtitle
//! and its derived tags, and orders the result by timestamp. Discovery uses
//! a name-sorted walk so the batch (and sort tie-breaking) is reproducible
//! across runs.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{ImportError, Result};
use crate::paths::validate_root;
use crate::subtitle::{match_subtitle, METADATA_SUFFIX};
use crate::tags::resolve_tags;
use crate::types::{Batch, ImportRecord};

/// The one field the importer needs from a metadata document
#[derive(Debug, Deserialize)]
struct InfoDoc {
    timestamp: i64,
}

/// Discover, pair, and order all import-ready items under `root`.
///
/// Walk failures are fatal (no file list, no run). A metadata file without a
/// subtitle is skipped and counted; one whose timestamp cannot be read is
/// excluded with a warning and counted. Neither aborts the batch.
pub fn build_batch(root: &Path) -> Result<Batch> {
    validate_root(root)?;

    let mut batch = Batch::default();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(METADATA_SUFFIX) {
            continue;
        }
        let info_path = entry.into_path();

        let Some(subtitle_path) = match_subtitle(&info_path) else {
            debug!(path = %info_path.display(), "No subtitle, skipping");
            batch.skipped_no_subtitle.push(info_path);
            continue;
        };

        let timestamp = match read_timestamp(&info_path) {
            Ok(ts) => ts,
            Err(err) => {
                warn!(%err, "Excluding unparsable metadata file");
                batch.unparsable.push(info_path);
                continue;
            }
        };

        let tags = resolve_tags(&info_path, root);
        batch.records.push(ImportRecord {
            timestamp,
            info_path,
            subtitle_path,
            tags,
        });
    }

    // Stable sort: equal timestamps keep discovery order
    batch.records.sort_by_key(|r| r.timestamp);

    info!(
        records = batch.records.len(),
        skipped = batch.skipped_no_subtitle.len(),
        unparsable = batch.unparsable.len(),
        "Batch built"
    );
    Ok(batch)
}

fn read_timestamp(path: &Path) -> Result<i64> {
    let content = fs::read_to_string(path).map_err(|err| ImportError::Metadata {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    let doc: InfoDoc = serde_json::from_str(&content).map_err(|err| ImportError::Metadata {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(doc.timestamp)
}
