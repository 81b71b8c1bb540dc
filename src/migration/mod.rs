//! Header-to-placeholder migration
//!
//! Pages that still carry their own `<header>...</header>` get it replaced by
//! an empty placeholder that `nav-loader.js` fills from the shared navigation
//! files at runtime.
//!
//! ## Page lifecycle
//!
//! - **Already migrated**: the placeholder marker is present, the page is left alone
//! - **No header**: nothing to replace, the page is left alone
//! - **Updated**: style block dropped, header replaced, loader script added
//!
//! A second run over the same tree changes nothing, because every updated
//! page now carries the marker.

mod migrate;
mod outcome;
mod rewrite;

pub use migrate::Migrator;
pub use outcome::{FileOutcome, FileRecord, RunSummary};
pub use rewrite::{BODY_CLOSE, HEADER_PATTERN, Rewrite, RewrittenPage, Rewriter};
