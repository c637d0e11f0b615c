//! Subshelf - Subtitle Archive Batch Importer
//!
//! Subshelf walks a directory tree of previously downloaded video metadata
//! (`<stem>.info.json`) and subtitle files (`<stem>.<locale>.vtt`), derives
//! classification tags for each item from where it sits in the tree, and
//! feeds every (metadata, subtitle, tags) triple into an external archival
//! tool in timestamp order.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌─────────────┐    ┌────────────┐
//! │   root   │    │ batch builder │    │   sorted    │    │  importer  │
//! │  (tree)  │───▶│ pair subtitle │───▶│    batch    │───▶│ (external  │
//! │          │    │ resolve tags  │    │ (timestamp) │    │   tool)    │
//! └──────────┘    └───────────────┘    └─────────────┘    └────────────┘
//! ```
//!
//! # Core Concepts
//!
//! - **Metadata file**: `<stem>.info.json`, carries the integer `timestamp`
//!   that orders the batch
//! - **Subtitle match**: the lexicographically first sibling matching
//!   `<stem>.ko*.vtt`; items with no subtitle are skipped, not errors
//! - **Tag ascent**: every ancestor directory between the file and the root
//!   contributes its name (underscores become spaces, literal `misc` is
//!   excluded), and any `tags.txt` on the way contributes one tag per line

pub mod batch;
pub mod config;
pub mod error;
pub mod importer;
pub mod paths;
pub mod subtitle;
pub mod tags;
pub mod types;

// Re-exports for CLI usage
pub use batch::build_batch;
pub use config::ImportConfig;
pub use error::{ImportError, Result};
pub use importer::{run_batch, CommandImporter, Importer};
pub use subtitle::match_subtitle;
pub use tags::resolve_tags;
pub use types::{Batch, ImportOutcome, ImportRecord};
