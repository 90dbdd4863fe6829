use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::RuleId;
use crate::scanner::GlobFilter;

pub const DEFAULT_ROOT: &str = "_site";
pub const DEFAULT_INCLUDE: &str = "**/*.html";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub rules: RulesConfig,
}

/// Where to look for rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Directory scanned when no path is given on the command line.
    pub root: PathBuf,
    /// Glob patterns, relative to `root`, selecting files to lint.
    pub include: Vec<String>,
    /// Glob patterns, relative to `root`, removed from the selection.
    pub exclude: Vec<String>,
    /// Honor `.gitignore` files found under `root`.
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            include: vec![DEFAULT_INCLUDE.to_string()],
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Rule codes to skip, e.g. `["E016"]`.
    pub disable: Vec<String>,
}

impl Config {
    /// Rule codes from `rules.disable`, parsed.
    ///
    /// # Errors
    /// Returns an error naming the first code not in the catalog.
    pub fn disabled_rules(&self) -> Result<Vec<RuleId>> {
        self.rules.disable.iter().map(|code| code.parse()).collect()
    }

    /// Check everything that can be rejected before a run starts.
    ///
    /// # Errors
    /// Returns an error for unknown rule codes or invalid glob patterns.
    pub fn validate(&self) -> Result<()> {
        self.disabled_rules()?;
        GlobFilter::new(&self.scanner.include, &self.scanner.exclude)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
