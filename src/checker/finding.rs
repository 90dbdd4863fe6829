use std::fmt;
use std::path::{Path, PathBuf};

use crate::document::DocumentError;
use crate::rules::{Rule, RuleId, Severity};

use super::Violation;

/// What produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingSource {
    /// A catalog rule failed for the document.
    Rule(RuleId),
    /// The file could not be read.
    Read,
    /// The file could not be parsed into a document.
    Parse,
    /// A rule evaluator failed unexpectedly.
    Internal(RuleId),
}

impl FindingSource {
    /// Code shown in reports: the rule code, or a synthetic label.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Rule(id) => id.as_str(),
            Self::Read => "READ",
            Self::Parse => "PARSE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    #[must_use]
    pub const fn rule(self) -> Option<RuleId> {
        match self {
            Self::Rule(id) => Some(id),
            Self::Read | Self::Parse | Self::Internal(_) => None,
        }
    }
}

impl fmt::Display for FindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One emitted violation, bound to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    pub source: FindingSource,
    pub message: String,
    pub line: Option<usize>,
    pub severity: Severity,
}

impl Finding {
    pub(crate) fn from_rule(rule: &Rule, path: &Path, violation: &Violation) -> Self {
        let args: Vec<(&str, &str)> = violation
            .args
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        Self {
            path: path.to_path_buf(),
            source: FindingSource::Rule(rule.id),
            message: rule.message(&args),
            line: violation.line,
            severity: rule.severity,
        }
    }

    /// File that could not be read from disk.
    #[must_use]
    pub fn read_failure(path: &Path, error: &std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source: FindingSource::Read,
            message: format!("Could not read file: {error}"),
            line: None,
            severity: Severity::Error,
        }
    }

    pub(crate) fn parse_failure(path: &Path, error: &DocumentError) -> Self {
        Self {
            path: path.to_path_buf(),
            source: FindingSource::Parse,
            message: format!("Could not parse document: {error}"),
            line: None,
            severity: Severity::Error,
        }
    }

    pub(crate) fn internal_failure(rule: RuleId, path: &Path, reason: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            source: FindingSource::Internal(rule),
            message: format!("Rule {rule} failed: {reason}"),
            line: None,
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.source.code()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
