//! Text rewrite applied to a single page
//!
//! Everything here works on plain strings; reading and writing files is the
//! caller's job. Matching is textual, not structural: the header pattern
//! pairs the first `<header>` with the nearest following `</header>`, so
//! nested or repeated headers are not understood.

use crate::config::MigrationConfig;
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// Inline header span, non-greedy across line breaks
pub const HEADER_PATTERN: &str = r"(?s)<header>.*?</header>";

/// Closing tag the loader script is inserted in front of
pub const BODY_CLOSE: &str = "</body>";

/// Result of classifying and rewriting one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Content already carries the migration marker
    AlreadyMigrated,
    /// No `<header>...</header>` span in the content
    NoHeader,
    /// Content was rewritten
    Rewritten(RewrittenPage),
}

/// Rewritten page content plus what happened along the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenPage {
    pub content: String,
    pub style_block_removed: bool,
    /// `false` when no `</body>` was found and the script was not inserted
    pub body_tag_found: bool,
}

/// Compiled patterns for the page rewrite
#[derive(Debug, Clone)]
pub struct Rewriter {
    header: Regex,
    style_block: Regex,
    marker: String,
    placeholder: String,
    script_tag: String,
}

impl Rewriter {
    /// Compile the patterns for the given settings
    pub fn new(config: &MigrationConfig) -> Result<Self> {
        let header = Regex::new(HEADER_PATTERN).context("Failed to compile header pattern")?;
        let style_block = Regex::new(&style_block_pattern(&config.style_comment))
            .context("Failed to compile style block pattern")?;

        Ok(Self {
            header,
            style_block,
            marker: config.marker.clone(),
            placeholder: config.placeholder.clone(),
            script_tag: config.script_tag(),
        })
    }

    /// Classify a page and, when it is eligible, produce the migrated content
    ///
    /// The steps run in a fixed order:
    /// 1. skip pages that already contain the marker
    /// 2. skip pages without a header span
    /// 3. drop every navigation style block
    /// 4. replace the first header span with the placeholder
    /// 5. insert the script line before the first `</body>`
    pub fn rewrite(&self, text: &str) -> Rewrite {
        if text.contains(&self.marker) {
            return Rewrite::AlreadyMigrated;
        }
        if !self.header.is_match(text) {
            return Rewrite::NoHeader;
        }

        let stripped = self.style_block.replace_all(text, "");
        let style_block_removed = matches!(stripped, Cow::Owned(_));

        let mut content = self
            .header
            .replacen(&stripped, 1, NoExpand(&self.placeholder))
            .into_owned();

        let body_tag_found = match content.find(BODY_CLOSE) {
            Some(pos) => {
                content.insert_str(pos, &self.script_tag);
                true
            }
            None => false,
        };

        Rewrite::Rewritten(RewrittenPage {
            content,
            style_block_removed,
            body_tag_found,
        })
    }
}

/// Optional leading newline, `<style>`, newline, the comment line, anything up
/// to `</style>` and its trailing newline
fn style_block_pattern(comment: &str) -> String {
    format!(r"(?s)\n?<style>\n{}.*?</style>\n", regex::escape(comment))
}
