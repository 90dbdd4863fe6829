mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, SiteLintError};
use crate::output::normalize_separators;

/// A directory or file the walk could not read.
#[derive(Debug)]
pub struct UnreadableEntry {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Files found under a root, plus every entry the walk failed on.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching file paths, sorted.
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<UnreadableEntry>,
}

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if `root` is not a readable directory.
    fn scan(&self, root: &Path) -> Result<ScanResult>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn accepts(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative = PathBuf::from(normalize_separators(&relative.to_string_lossy()));
        self.filter.should_include(&relative)
    }

    fn scan_without_gitignore(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.accepts(root, entry.path()) {
                        result.files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    record_walk_error(&mut result, path, e.io_error(), &e);
                }
            }
        }
        result
    }

    fn scan_with_gitignore(&self, root: &Path) -> ScanResult {
        use ignore::WalkBuilder;

        let walker = WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build();

        let mut result = ScanResult::default();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && self.accepts(root, entry.path())
                    {
                        result.files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = ignore_error_path(&e).unwrap_or(root).to_path_buf();
                    record_walk_error(&mut result, path, e.io_error(), &e);
                }
            }
        }
        result
    }
}

/// I/O failures are kept for reporting. Anything else (a malformed ignore
/// file, a symlink loop) is only logged.
fn record_walk_error(
    result: &mut ScanResult,
    path: PathBuf,
    io_error: Option<&io::Error>,
    error: &dyn std::fmt::Display,
) {
    warn!(path = %path.display(), error = %error, "failed to read directory entry");
    if let Some(io_error) = io_error {
        result.unreadable.push(UnreadableEntry {
            path,
            error: io::Error::new(io_error.kind(), io_error.to_string()),
        });
    }
}

fn ignore_error_path(error: &ignore::Error) -> Option<&Path> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            ignore_error_path(err)
        }
        _ => None,
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanResult> {
        if !root.is_dir() {
            return Err(SiteLintError::RootNotFound(root.to_path_buf()));
        }

        let mut result = if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        };
        result.files.sort();
        debug!(
            root = %root.display(),
            files = result.files.len(),
            unreadable = result.unreadable.len(),
            "discovered files"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
