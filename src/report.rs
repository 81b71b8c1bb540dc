//! Console report for a migration run
//!
//! Progress lines go to stdout, failures and warnings to stderr.

use crate::migration::{FileOutcome, FileRecord, RunSummary};
use std::path::Path;

/// Output stream a report line belongs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Progress,
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub channel: Channel,
    pub text: String,
}

impl ReportLine {
    fn progress(text: String) -> Self {
        Self {
            channel: Channel::Progress,
            text,
        }
    }

    fn diagnostic(text: String) -> Self {
        Self {
            channel: Channel::Diagnostic,
            text,
        }
    }
}

/// Lines describing one processed file
///
/// # Arguments
/// * `record` - The processed file
/// * `root` - Run root, progress lines show paths relative to it
/// * `dry_run` - Word updates as "would update"
pub fn record_lines(record: &FileRecord, root: &Path, dry_run: bool) -> Vec<ReportLine> {
    let path = &record.path;
    let relative = path.strip_prefix(root).unwrap_or(path).display();

    match &record.outcome {
        FileOutcome::Updated { missing_body_tag } => {
            let mut lines = Vec::with_capacity(2);
            if *missing_body_tag {
                lines.push(ReportLine::diagnostic(format!(
                    "WARNING: no </body> in {}",
                    relative
                )));
            }
            let verb = if dry_run { "would update" } else { "updated" };
            lines.push(ReportLine::progress(format!("{}: {}", verb, relative)));
            lines
        }
        FileOutcome::AlreadyMigrated => {
            vec![ReportLine::progress(format!("already migrated: {}", relative))]
        }
        FileOutcome::NoHeader => {
            vec![ReportLine::progress(format!("no <header> found: {}", relative))]
        }
        FileOutcome::ReadError(e) => vec![ReportLine::diagnostic(format!(
            "SKIP (read error): {}: {}",
            path.display(),
            e
        ))],
        FileOutcome::WriteError(e) => vec![ReportLine::diagnostic(format!(
            "ERROR writing {}: {}",
            path.display(),
            e
        ))],
    }
}

/// Print one processed file to the console
pub fn print_record(record: &FileRecord, root: &Path, dry_run: bool) {
    for line in record_lines(record, root, dry_run) {
        match line.channel {
            Channel::Progress => println!("{}", line.text),
            Channel::Diagnostic => eprintln!("{}", line.text),
        }
    }
}

/// Final tally line
pub fn format_summary(summary: &RunSummary) -> String {
    let mut result = if summary.dry_run {
        format!(
            "Done (dry run). {} files would be updated, {} skipped",
            summary.updated, summary.skipped
        )
    } else {
        format!(
            "Done. {} files updated, {} skipped",
            summary.updated, summary.skipped
        )
    };
    if summary.has_errors() {
        result.push_str(&format!(", {} failed", summary.errors));
    }
    result.push('.');
    result
}
