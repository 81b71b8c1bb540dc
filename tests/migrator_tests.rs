//! Integration tests for Migrator (whole-tree runs)
//!
//! These tests build small site trees in temporary directories and check
//! both the files on disk and the outcomes returned by a run.
mod common;

use common::{LEGACY_PAGE, PLACEHOLDER, SCRIPT_LINE, read_page, site, write_page};
use anyhow::{Result, bail};
use nav_migrate::{FileOutcome, FsPageStore, MigrationConfig, Migrator, PageStore};
use std::fs;
use std::path::Path;

/// Filesystem store whose writes fail for one file name
struct ReadOnlyPage {
    file_name: &'static str,
}

impl PageStore for ReadOnlyPage {
    fn load(&self, path: &Path) -> Result<String> {
        FsPageStore.load(path)
    }

    fn save(&self, path: &Path, content: &str) -> Result<()> {
        if path.file_name().and_then(|n| n.to_str()) == Some(self.file_name) {
            bail!("{} is read-only", path.display());
        }
        FsPageStore.save(path, content)
    }
}

fn migrator(root: &std::path::Path) -> Migrator {
    Migrator::new(root, MigrationConfig::default()).unwrap()
}

#[test]
fn test_basic_scenario() {
    let dir = site();
    let page = write_page(
        dir.path(),
        "index.html",
        "<html><body><header>Site Nav</header><p>hi</p></body></html>",
    );

    let summary = migrator(dir.path()).run();

    assert_eq!(summary.updated, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(
        read_page(&page),
        "<html><body><header id=\"site-header\"></header><p>hi</p>\
         <script src=\"/nav-loader.js\"></script>\n</body></html>"
    );
}

#[test]
fn test_legacy_page_fully_migrated() {
    let dir = site();
    let page = write_page(dir.path(), "de/start.html", LEGACY_PAGE);

    let summary = migrator(dir.path()).run();
    assert_eq!(
        summary.outcome_of(&page),
        Some(&FileOutcome::Updated {
            missing_body_tag: false
        })
    );

    let content = read_page(&page);
    assert_eq!(content.matches(PLACEHOLDER).count(), 1);
    assert_eq!(content.matches(SCRIPT_LINE).count(), 1);
    assert!(content.contains(&format!("{}</body>", SCRIPT_LINE)));
    assert!(!content.contains("<header>"));
    assert!(!content.contains("top-bar { display"));
    assert!(content.contains("<title>Start</title></head>"));
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = site();
    let page = write_page(dir.path(), "index.html", LEGACY_PAGE);

    let first = migrator(dir.path()).run();
    assert_eq!(first.updated, 1);
    let after_first = read_page(&page);

    let second = migrator(dir.path()).run();
    assert_eq!(second.updated, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(second.outcome_of(&page), Some(&FileOutcome::AlreadyMigrated));
    assert_eq!(read_page(&page), after_first);
}

#[test]
fn test_already_migrated_is_untouched() {
    let dir = site();
    let original = "<body><header id=\"site-header\"></header><header>x</header></body>";
    let page = write_page(dir.path(), "done.html", original);

    let summary = migrator(dir.path()).run();

    assert_eq!(summary.skipped, 1);
    assert_eq!(read_page(&page), original);
}

#[test]
fn test_no_header_is_untouched() {
    let dir = site();
    let original = "<html><body><p>plain</p></body></html>";
    let page = write_page(dir.path(), "plain.html", original);

    let summary = migrator(dir.path()).run();

    assert_eq!(summary.outcome_of(&page), Some(&FileOutcome::NoHeader));
    assert_eq!(summary.skipped, 1);
    assert_eq!(read_page(&page), original);
}

#[test]
fn test_navigation_sources_are_never_written() {
    let dir = site();
    let nav_de = write_page(dir.path(), "nav-de.html", "<header>DE</header></body>");
    let nav_en = write_page(dir.path(), "en/nav-en.html", "<header>EN</header></body>");

    let summary = migrator(dir.path()).run();

    assert!(summary.records.is_empty());
    assert_eq!(read_page(&nav_de), "<header>DE</header></body>");
    assert_eq!(read_page(&nav_en), "<header>EN</header></body>");
}

#[test]
fn test_missing_body_tag_still_written() {
    let dir = site();
    let page = write_page(dir.path(), "fragment.html", "<header>a</header><p>x</p>");

    let summary = migrator(dir.path()).run();

    assert_eq!(
        summary.outcome_of(&page),
        Some(&FileOutcome::Updated {
            missing_body_tag: true
        })
    );
    assert_eq!(summary.updated, 1);
    assert_eq!(read_page(&page), format!("{}<p>x</p>", PLACEHOLDER));
}

#[test]
fn test_read_error_is_skipped_and_run_continues() {
    let dir = site();
    let broken = dir.path().join("a-broken.html");
    fs::write(&broken, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();
    let good = write_page(dir.path(), "b-good.html", "<header>x</header></body>");

    let summary = migrator(dir.path()).run();

    assert!(matches!(
        summary.outcome_of(&broken),
        Some(FileOutcome::ReadError(_))
    ));
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.errors, 1);
    assert!(summary.has_errors());
    assert!(read_page(&good).contains(PLACEHOLDER));
    assert_eq!(fs::read(&broken).unwrap(), vec![0x3c, 0xff, 0xfe, 0x3e]);
}

#[test]
fn test_run_order_is_sorted() {
    let dir = site();
    write_page(dir.path(), "b.html", "<p></p>");
    write_page(dir.path(), "a/z.html", "<p></p>");
    write_page(dir.path(), "a.html", "<p></p>");

    let summary = migrator(dir.path()).run();
    let order: Vec<_> = summary
        .records
        .iter()
        .map(|r| r.path.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();

    assert_eq!(
        order,
        vec![
            std::path::PathBuf::from("a/z.html"),
            std::path::PathBuf::from("a.html"),
            std::path::PathBuf::from("b.html"),
        ]
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = site();
    let page = write_page(dir.path(), "index.html", LEGACY_PAGE);

    let summary = migrator(dir.path()).with_dry_run(true).run();

    assert!(summary.dry_run);
    assert_eq!(summary.updated, 1);
    assert_eq!(read_page(&page), LEGACY_PAGE);
}

#[test]
fn test_run_with_sees_every_record() {
    let dir = site();
    write_page(dir.path(), "a.html", "<header>a</header></body>");
    write_page(dir.path(), "b.html", "<p></p>");

    let mut seen = Vec::new();
    let summary = migrator(dir.path()).run_with(|record| seen.push(record.clone()));

    assert_eq!(seen, summary.records);
}

#[test]
fn test_root_must_be_a_directory() {
    let dir = site();
    let file = write_page(dir.path(), "index.html", "x");

    assert!(Migrator::new(&file, MigrationConfig::default()).is_err());
    assert!(Migrator::new(dir.path().join("missing"), MigrationConfig::default()).is_err());
}

#[test]
fn test_custom_config() {
    let dir = site();
    let config = MigrationConfig {
        skip_files: vec!["menu.html".to_string()],
        script_src: "/js/menu.js".to_string(),
        ..MigrationConfig::default()
    };
    let menu = write_page(dir.path(), "menu.html", "<header>m</header></body>");
    let nav_de = write_page(dir.path(), "nav-de.html", "<header>n</header></body>");

    let summary = Migrator::new(dir.path(), config).unwrap().run();

    assert_eq!(summary.records.len(), 1);
    assert_eq!(read_page(&menu), "<header>m</header></body>");
    assert_eq!(
        read_page(&nav_de),
        format!("{}<script src=\"/js/menu.js\"></script>\n</body>", PLACEHOLDER)
    );
}

#[test]
fn test_crlf_page_loses_style_block() {
    let dir = site();
    let page = write_page(
        dir.path(),
        "windows.html",
        "<head>\r\n<style>\r\n/* Static archive: desktop navigation layout */\r\n\
         .top-bar{}\r\n</style>\r\n</head>\r\n<body>\r\n<header>x</header>\r\n</body>\r\n",
    );

    let summary = migrator(dir.path()).run();

    assert_eq!(summary.updated, 1);
    assert_eq!(
        read_page(&page),
        "<head></head>\n<body>\n<header id=\"site-header\"></header>\n\
         <script src=\"/nav-loader.js\"></script>\n</body>\n"
    );
}

#[test]
fn test_write_error_is_reported_and_run_continues() {
    let dir = site();
    let locked = write_page(dir.path(), "a-locked.html", "<header>a</header></body>");
    let open = write_page(dir.path(), "b-open.html", "<header>b</header></body>");

    let summary = migrator(dir.path())
        .with_store(ReadOnlyPage {
            file_name: "a-locked.html",
        })
        .run();

    match summary.outcome_of(&locked) {
        Some(FileOutcome::WriteError(e)) => assert!(e.contains("read-only")),
        other => panic!("expected a write error, got {:?}", other),
    }
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.updated_paths(), vec![open.as_path()]);
    assert_eq!(read_page(&locked), "<header>a</header></body>");
    assert!(read_page(&open).contains(PLACEHOLDER));
}
