use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SiteLintError};

/// Decides whether a discovered file is linted. Paths are relative to the
/// scan root and use forward slashes.
pub trait FileFilter {
    fn should_include(&self, relative: &Path) -> bool;
}

pub struct GlobFilter {
    include: GlobSet,
    match_all: bool,
    exclude: GlobSet,
}

impl GlobFilter {
    /// Create a filter from include and exclude glob patterns. An empty
    /// include list accepts every file not excluded.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_set(include)?,
            match_all: include.is_empty(),
            exclude: build_set(exclude)?,
        })
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| SiteLintError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| SiteLintError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative: &Path) -> bool {
        (self.match_all || self.include.is_match(relative)) && !self.exclude.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
