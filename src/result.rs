use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::checker::Finding;
use crate::rules::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Error(usize),
    Warning(usize),
}

/// Findings accumulated across a lint run.
///
/// Errors and warnings are kept in separate sequences, each in submission
/// order. The interleaving is remembered so a file's findings can be read back
/// exactly as the checker produced them. Severity is taken from the finding
/// and never adjusted here.
#[derive(Debug, Clone, Default)]
pub struct LintResult {
    errors: Vec<Finding>,
    warnings: Vec<Finding>,
    order: Vec<Slot>,
    files_checked: usize,
}

impl LintResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one checked file and everything found in it.
    pub fn add_file(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.files_checked += 1;
        for finding in findings {
            self.add(finding);
        }
    }

    pub fn add(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => {
                self.order.push(Slot::Error(self.errors.len()));
                self.errors.push(finding);
            }
            Severity::Warning => {
                self.order.push(Slot::Warning(self.warnings.len()));
                self.warnings.push(finding);
            }
        }
    }

    /// True iff at least one error-severity finding was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    #[must_use]
    pub const fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// All findings in submission order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.order.iter().map(|slot| match *slot {
            Slot::Error(i) => &self.errors[i],
            Slot::Warning(i) => &self.warnings[i],
        })
    }

    /// Findings grouped by file, each group in submission order.
    ///
    /// Files are ordered by their path string, so `blog.html` sorts before
    /// `blog/post.html`.
    #[must_use]
    pub fn by_file(&self) -> Vec<(&Path, Vec<&Finding>)> {
        let mut groups: BTreeMap<Cow<'_, str>, (&Path, Vec<&Finding>)> = BTreeMap::new();
        for finding in self.findings() {
            groups
                .entry(finding.path.to_string_lossy())
                .or_insert_with(|| (finding.path.as_path(), Vec::new()))
                .1
                .push(finding);
        }
        groups.into_values().collect()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
