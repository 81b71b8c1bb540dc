//! Shared navigation header migration
//!
//! Rewrites the pages of a static site so that each one loads its navigation
//! at runtime instead of carrying a copy inline. For every `.html` file under
//! a root directory (except the navigation sources `nav-de.html` and
//! `nav-en.html`) the migration:
//!
//! - drops the inline navigation `<style>` block,
//! - replaces the first `<header>...</header>` with `<header id="site-header"></header>`,
//! - inserts `<script src="/nav-loader.js"></script>` before `</body>`.
//!
//! # Architecture
//!
//! - **Discovery**: `discovery` module - sorted walk of the site tree
//! - **Rewrite**: `migration::Rewriter` - pure string transform per page
//! - **Run**: `migration::Migrator` - per-file outcomes folded into a `RunSummary`
//! - **Persistence**: `storage` module - UTF-8 page reads and writes, optional git commit
//!
//! # Example
//!
//! ```no_run
//! use nav_migrate::{MigrationConfig, Migrator};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let migrator = Migrator::new(".", MigrationConfig::default())?;
//!     let summary = migrator.run();
//!     println!("{} updated, {} skipped", summary.updated, summary.skipped);
//!     Ok(())
//! }
//! ```

pub mod config;
mod discovery;
mod git_ops;
pub mod logging;
pub mod migration;
pub mod report;
mod storage;

// Re-export commonly used types
pub use config::MigrationConfig;
pub use discovery::discover_html_files;
pub use git_ops::GitOps;
pub use migration::{FileOutcome, FileRecord, Migrator, Rewrite, Rewriter, RunSummary};
pub use storage::{FsPageStore, PageStore, normalize_line_endings};
