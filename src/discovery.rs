//! Finding the pages to migrate
//!
//! Symlinks are not followed, so a link pointing outside the root can never
//! be rewritten through.

use crate::config::MigrationConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Collect every `.html` file under `root`, minus the navigation sources,
/// sorted by path
pub fn discover_html_files(root: &Path, config: &MigrationConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_html(entry.path()))
        .filter(|entry| {
            let skipped = entry
                .file_name()
                .to_str()
                .is_some_and(|name| config.is_skipped(name));
            if skipped {
                debug!(path = %entry.path().display(), "Skipping navigation source");
            }
            !skipped
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!(count = files.len(), root = %root.display(), "Discovered HTML files");
    files
}

/// Case-sensitive `.html` extension check
fn is_html(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("html")
}
