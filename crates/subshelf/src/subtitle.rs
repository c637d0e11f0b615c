//! Subtitle pairing for metadata files
//!
//! A metadata file `<stem>.info.json` pairs with a Korean subtitle sharing
//! its stem. Locale-variant names are not perfectly predictable (auto
//! captions carry extra suffixes after the locale code), so matching is
//! glob-based: any sibling `<stem>.ko*.vtt` wins over the plain default
//! `<stem>.ko.vtt`, and among several variants the lexicographically first
//! file name is taken so repeated runs make the same choice.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;

/// Fixed suffix identifying metadata files
pub const METADATA_SUFFIX: &str = ".info.json";

/// Subtitle locale code the matcher looks for
const SUBTITLE_LOCALE: &str = "ko";

/// Find the paired subtitle for a metadata file, or `None` if the item has
/// no usable subtitle. Absence is a normal skip condition, not an error.
pub fn match_subtitle(info_path: &Path) -> Option<PathBuf> {
    let name = info_path.file_name()?.to_str()?;
    let stem = name.strip_suffix(METADATA_SUFFIX)?;
    let dir = info_path.parent().unwrap_or_else(|| Path::new("."));

    // Escape the stem so literal `*?[]` in filenames match exactly
    let raw = format!("{}.{}*.vtt", Pattern::escape(stem), SUBTITLE_LOCALE);
    let pattern = match Pattern::new(&raw) {
        Ok(p) => p,
        Err(err) => {
            warn!(pattern = %raw, %err, "Invalid subtitle pattern");
            return None;
        }
    };

    let candidate = variant_candidates(dir, &pattern)
        .into_iter()
        .next()
        .unwrap_or_else(|| dir.join(format!("{stem}.{SUBTITLE_LOCALE}.vtt")));

    candidate.is_file().then_some(candidate)
}

/// Sibling files matching the variant pattern, sorted by file name for a
/// deterministic pick.
fn variant_candidates(dir: &Path, pattern: &Pattern) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %dir.display(), %err, "Cannot read directory for subtitle match");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| pattern.matches(name))
        .collect();
    names.sort();
    names.into_iter().map(|name| dir.join(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn plain_locale_subtitle_matches() {
        let temp = TempDir::new().unwrap();
        let vtt = touch(temp.path(), "item.ko.vtt");
        let info = temp.path().join("item.info.json");
        assert_eq!(match_subtitle(&info), Some(vtt));
    }

    #[test]
    fn variant_overrides_default_deterministically() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "item.ko.vtt");
        touch(temp.path(), "item.ko-auto.vtt");
        let info = temp.path().join("item.info.json");

        // "item.ko-auto.vtt" < "item.ko.vtt" by name, chosen on every run
        let expected = temp.path().join("item.ko-auto.vtt");
        assert_eq!(match_subtitle(&info), Some(expected.clone()));
        assert_eq!(match_subtitle(&info), Some(expected));
    }

    #[test]
    fn variant_alone_is_found() {
        let temp = TempDir::new().unwrap();
        let vtt = touch(temp.path(), "item.ko-orig.vtt");
        let info = temp.path().join("item.info.json");
        assert_eq!(match_subtitle(&info), Some(vtt));
    }

    #[test]
    fn missing_subtitle_is_none() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "item.en.vtt");
        let info = temp.path().join("item.info.json");
        assert_eq!(match_subtitle(&info), None);
    }

    #[test]
    fn glob_metacharacters_in_stem_match_literally() {
        let temp = TempDir::new().unwrap();
        let vtt = touch(temp.path(), "clip [1].ko.vtt");
        touch(temp.path(), "clip a1b.ko.vtt");
        let info = temp.path().join("clip [1].info.json");
        assert_eq!(match_subtitle(&info), Some(vtt));
    }

    #[test]
    fn other_stems_do_not_match() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "other.ko.vtt");
        let info = temp.path().join("item.info.json");
        assert_eq!(match_subtitle(&info), None);
    }
}
