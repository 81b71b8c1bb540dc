use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Where pages are read from and written back to
pub trait PageStore {
    /// Read a page as UTF-8 text with line endings normalized to LF
    fn load(&self, path: &Path) -> Result<String>;

    fn save(&self, path: &Path, content: &str) -> Result<()>;
}

/// Pages on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPageStore;

impl PageStore for FsPageStore {
    fn load(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(normalize_line_endings(&content))
    }

    fn save(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Normalize line endings in a string to LF (\n)
///
/// CRLF and lone CR both become LF, so the newline-anchored style block
/// pattern matches pages saved on any platform. Migrated pages are written
/// back with LF endings.
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
