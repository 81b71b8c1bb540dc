//! Migration settings
//!
//! The defaults are the fixed values the migration was written for. A TOML
//! file can restate them for a site that names things differently.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File names that hold the canonical navigation markup
pub const DEFAULT_SKIP_FILES: [&str; 2] = ["nav-de.html", "nav-en.html"];

/// Attribute substring that marks a page as already migrated
pub const DEFAULT_MARKER: &str = r#"id="site-header""#;

/// Element that replaces the inline header
pub const DEFAULT_PLACEHOLDER: &str = r#"<header id="site-header"></header>"#;

/// Script that fills the placeholder at runtime
pub const DEFAULT_SCRIPT_SRC: &str = "/nav-loader.js";

/// Comment line that opens the inline style block to strip
pub const DEFAULT_STYLE_COMMENT: &str = "/* Static archive: desktop navigation layout */";

/// Settings for one migration run
///
/// Every field falls back to its default when missing from the TOML file:
///
/// ```toml
/// skip_files = ["nav-de.html", "nav-en.html"]
/// marker = 'id="site-header"'
/// placeholder = '<header id="site-header"></header>'
/// script_src = "/nav-loader.js"
/// style_comment = "/* Static archive: desktop navigation layout */"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    pub skip_files: Vec<String>,
    pub marker: String,
    pub placeholder: String,
    pub script_src: String,
    pub style_comment: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            skip_files: DEFAULT_SKIP_FILES.iter().map(|s| s.to_string()).collect(),
            marker: DEFAULT_MARKER.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            script_src: DEFAULT_SCRIPT_SRC.to_string(),
            style_comment: DEFAULT_STYLE_COMMENT.to_string(),
        }
    }
}

impl MigrationConfig {
    /// Load settings from a TOML file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make a second run rewrite the same page
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            bail!("marker must not be empty");
        }
        if !self.placeholder.contains(&self.marker) {
            bail!(
                "placeholder '{}' does not contain marker '{}'",
                self.placeholder,
                self.marker
            );
        }
        if self.script_src.trim().is_empty() {
            bail!("script_src must not be empty");
        }
        Ok(())
    }

    /// Line inserted before `</body>`, including its trailing newline
    pub fn script_tag(&self) -> String {
        format!("<script src=\"{}\"></script>\n", self.script_src)
    }

    /// Whether a file name belongs to the navigation sources
    pub fn is_skipped(&self, file_name: &str) -> bool {
        self.skip_files.iter().any(|s| s == file_name)
    }
}
