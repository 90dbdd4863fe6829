#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the site-lint binary.
#[macro_export]
macro_rules! site_lint {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("site-lint"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.site-lint.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".site-lint.toml", content);
    }

    /// Writes a rendered page under `_site/`.
    pub fn create_page(&self, relative_path: &str, content: &str) {
        self.create_file(&format!("_site/{relative_path}"), content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_START: &str = r##"<!doctype html>
<html lang="en">
<head><title>Test</title></head>
<body>
<a class="skip-link" href="#main-content">Skip to main content</a>
<header class="brand-bar"><a href="https://uiowa.edu">The University of Iowa</a></header>
<main id="main-content">
"##;

const PAGE_END: &str = r#"
</main>
<footer class="brand-footer">
<a href="https://uiowa.edu/privacy">Privacy</a>
<a href="https://opsmanual.uiowa.edu/community-policies/nondiscrimination-statement">Nondiscrimination</a>
<a href="https://accessibility.uiowa.edu">Accessibility</a>
<a href="/accessibility-help/">Report an accessibility issue</a>
</footer>
</body>
</html>
"#;

/// A page passing every rule, wrapping `main` as the `<main>` content.
pub fn page(main: &str) -> String {
    format!("{PAGE_START}{main}{PAGE_END}")
}

pub fn compliant_page() -> String {
    page("<h1>Welcome</h1>\n<p>Hello</p>")
}

/// A page whose only problem is a missing `<h1>`.
pub fn page_without_h1() -> String {
    page("<p>No heading here</p>")
}

/// A page whose only problem is a warning-severity finding.
pub fn page_with_warning() -> String {
    page("<h1>Menu</h1>\n<button aria-expanded=\"false\">Open</button>")
}
