//! Walking a site and migrating each page
//!
//! Every per-file failure becomes a [`FileOutcome`]; nothing here aborts a
//! run once it has started.

use super::outcome::{FileOutcome, FileRecord, RunSummary};
use super::rewrite::{Rewrite, Rewriter};
use crate::config::MigrationConfig;
use crate::discovery::discover_html_files;
use crate::storage::{FsPageStore, PageStore};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Migrates every eligible page under a root directory
pub struct Migrator {
    root: PathBuf,
    config: MigrationConfig,
    rewriter: Rewriter,
    store: Box<dyn PageStore>,
    dry_run: bool,
}

impl Migrator {
    /// Create a migrator for `root`
    ///
    /// # Errors
    /// Fails when the settings are invalid or `root` is not a directory.
    pub fn new(root: impl AsRef<Path>, config: MigrationConfig) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            bail!("{} is not a directory", root.display());
        }
        config.validate()?;
        let rewriter = Rewriter::new(&config)?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
            rewriter,
            store: Box::new(FsPageStore),
            dry_run: false,
        })
    }

    /// Classify and rewrite in memory only, never writing a file
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Read and write pages through `store` instead of the filesystem
    pub fn with_store(mut self, store: impl PageStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Pages that a run would visit, in visiting order
    pub fn discover(&self) -> Vec<PathBuf> {
        discover_html_files(&self.root, &self.config)
    }

    /// Read, classify, rewrite and write back a single page
    pub fn migrate_file(&self, path: &Path) -> FileOutcome {
        let text = match self.store.load(path) {
            Ok(text) => text,
            Err(e) => return FileOutcome::ReadError(format!("{:#}", e)),
        };

        let rewritten = match self.rewriter.rewrite(&text) {
            Rewrite::AlreadyMigrated => return FileOutcome::AlreadyMigrated,
            Rewrite::NoHeader => return FileOutcome::NoHeader,
            Rewrite::Rewritten(rewritten) => rewritten,
        };

        if rewritten.style_block_removed {
            debug!(path = %path.display(), "Removed navigation style block");
        }
        let missing_body_tag = !rewritten.body_tag_found;

        if self.dry_run {
            return FileOutcome::Updated { missing_body_tag };
        }

        match self.store.save(path, &rewritten.content) {
            Ok(()) => FileOutcome::Updated { missing_body_tag },
            Err(e) => FileOutcome::WriteError(format!("{:#}", e)),
        }
    }

    /// Migrate every discovered page
    pub fn run(&self) -> RunSummary {
        self.run_with(|_| {})
    }

    /// Migrate every discovered page, handing each record to `on_record` as
    /// soon as the page is done
    pub fn run_with<F>(&self, mut on_record: F) -> RunSummary
    where
        F: FnMut(&FileRecord),
    {
        let mut summary = RunSummary::new(self.dry_run);
        for path in self.discover() {
            let outcome = self.migrate_file(&path);
            debug!(path = %path.display(), outcome = ?outcome, "Processed page");
            on_record(summary.record(path, outcome));
        }
        summary
    }
}
