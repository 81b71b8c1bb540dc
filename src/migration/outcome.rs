//! Per-file outcomes and the run tally

use std::path::{Path, PathBuf};

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Rewritten (or would be, in a dry run)
    Updated {
        /// No `</body>` was found, so the loader script was not inserted
        missing_body_tag: bool,
    },
    AlreadyMigrated,
    NoHeader,
    /// The file could not be read as UTF-8 text
    ReadError(String),
    /// The rewritten content could not be written back
    WriteError(String),
}

impl FileOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, FileOutcome::ReadError(_) | FileOutcome::WriteError(_))
    }
}

/// A processed file and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Tally of one migration run
///
/// Read errors count as skipped. Write errors count as neither updated nor
/// skipped, they only show up in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dry_run: bool,
    pub updated: usize,
    pub skipped: usize,
    pub errors: usize,
    pub records: Vec<FileRecord>,
}

impl RunSummary {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Add a file's outcome to the tally
    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) -> &FileRecord {
        match &outcome {
            FileOutcome::Updated { .. } => self.updated += 1,
            FileOutcome::AlreadyMigrated | FileOutcome::NoHeader => self.skipped += 1,
            FileOutcome::ReadError(_) => {
                self.skipped += 1;
                self.errors += 1;
            }
            FileOutcome::WriteError(_) => self.errors += 1,
        }
        self.records.push(FileRecord { path, outcome });
        // Just pushed
        &self.records[self.records.len() - 1]
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Paths of the files that were rewritten, in run order
    pub fn updated_paths(&self) -> Vec<&Path> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Updated { .. }))
            .map(|r| r.path.as_path())
            .collect()
    }

    /// Outcome recorded for a path, if it was processed
    pub fn outcome_of(&self, path: &Path) -> Option<&FileOutcome> {
        self.records
            .iter()
            .find(|r| r.path == path)
            .map(|r| &r.outcome)
    }
}
