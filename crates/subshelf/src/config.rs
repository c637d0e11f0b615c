//! Configuration for the importer invocation

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};

/// Where the archival tool lives and what it writes to. The scan root is
/// deliberately not here: it is a CLI argument threaded through every
/// component, which keeps the pipeline testable against temp directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Archival tool binary
    #[serde(default = "default_importer_binary")]
    pub importer_binary: PathBuf,

    /// Database the archival tool appends to
    #[serde(default = "default_archive_db")]
    pub archive_db: PathBuf,

    /// Configuration file handed to the archival tool
    #[serde(default = "default_archive_config")]
    pub archive_config: PathBuf,
}

fn default_importer_binary() -> PathBuf {
    PathBuf::from("target/release/add_book")
}

fn default_archive_db() -> PathBuf {
    PathBuf::from("data/prod/lit.db")
}

fn default_archive_config() -> PathBuf {
    PathBuf::from("data/prod/config.toml")
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            importer_binary: default_importer_binary(),
            archive_db: default_archive_db(),
            archive_config: default_archive_config(),
        }
    }
}

impl ImportConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ImportConfig =
            toml::from_str(&content).map_err(|e| ImportError::Config(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("subshelf.toml");
        fs::write(&path, "importer_binary = \"/opt/bin/add_book\"\n").unwrap();

        let config = ImportConfig::load(&path).unwrap();
        assert_eq!(config.importer_binary, PathBuf::from("/opt/bin/add_book"));
        assert_eq!(config.archive_db, default_archive_db());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("subshelf.toml");
        fs::write(&path, "importer_binary = [").unwrap();

        assert!(matches!(
            ImportConfig::load(&path),
            Err(ImportError::Config(_))
        ));
    }
}
