//! Path helpers for the upward tag ascent and root validation.

use std::path::Path;

use crate::error::{ImportError, Result};

/// Check whether `path` is the root itself or nested anywhere below it.
///
/// Comparison is segment-wise (`Path::starts_with` compares components, not
/// raw bytes), so a sibling like `/data/foo2` never counts as inside
/// `/data/foo`.
pub fn is_within_root(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}

/// One step up the tree. At a filesystem root `parent()` is `None`; returning
/// the path unchanged gives the caller a fixed point to terminate on.
pub fn parent_or_self(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}

/// Validate the scan root before discovery starts.
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(ImportError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ImportError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}
