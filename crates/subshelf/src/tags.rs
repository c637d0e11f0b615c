//! Tag derivation from filesystem location
//!
//! Walks a metadata file's containing directory upward to the tree root.
//! Each directory on the way contributes two tag sources: a `tags.txt` file
//! sitting directly in it (one tag per line), and its own base name with
//! underscores replaced by spaces. The root contributes only its `tags.txt`,
//! never its name, and a directory literally named `misc` contributes no name
//! tag at that level.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::paths::{is_within_root, parent_or_self};

/// Per-directory tag list file name
pub const TAG_LIST_FILE: &str = "tags.txt";

/// Directory name that never contributes a tag
const EXCLUDED_DIR_TAG: &str = "misc";

/// Accumulate the tag set for a metadata file located under `root`.
///
/// The result is a `BTreeSet`, so duplicates collapse and iteration order is
/// sorted; callers can join it directly for a reproducible external-tool
/// argument.
pub fn resolve_tags(info_path: &Path, root: &Path) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let Some(start) = info_path.parent() else {
        return tags;
    };

    let mut dir = start;
    while is_within_root(dir, root) {
        let list = dir.join(TAG_LIST_FILE);
        if list.is_file() {
            match fs::read_to_string(&list) {
                Ok(content) => {
                    for line in content.lines() {
                        let line = line.trim_end();
                        if !line.is_empty() {
                            tags.insert(line.to_string());
                        }
                    }
                }
                Err(err) => {
                    // A missing tag is a lesser failure than a missing import
                    warn!(path = %list.display(), %err, "Skipping unreadable tag list");
                }
            }
        }

        if dir != root {
            if let Some(name) = dir.file_name() {
                let tag = name.to_string_lossy().replace('_', " ");
                if tag != EXCLUDED_DIR_TAG {
                    tags.insert(tag);
                }
            }
        }

        let next = parent_or_self(dir);
        if next == dir {
            break;
        }
        dir = next;
    }

    tags
}
