//! Common test utilities for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PLACEHOLDER: &str = r#"<header id="site-header"></header>"#;
pub const SCRIPT_LINE: &str = "<script src=\"/nav-loader.js\"></script>\n";

/// A page as it looked before the migration
pub const LEGACY_PAGE: &str = "<!DOCTYPE html>
<html>
<head>
<title>Start</title>
<style>
/* Static archive: desktop navigation layout */
.top-bar { display: flex; }
.top-bar li { margin: 0 1em; }
</style>
</head>
<body>
<header>
  <nav class=\"top-bar\">
    <ul><li><a href=\"/\">Start</a></li></ul>
  </nav>
</header>
<main><p>Hallo</p></main>
</body>
</html>
";

/// Create a temporary site root
pub fn site() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a page under the site root, creating parent directories
pub fn write_page(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

pub fn read_page(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
