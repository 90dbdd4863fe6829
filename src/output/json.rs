use std::path::PathBuf;

use serde::Serialize;

use crate::checker::Finding;
use crate::error::Result;
use crate::result::LintResult;

use super::{OutputFormatter, display_path};

/// Machine-readable report, ordered like the text report.
#[derive(Default)]
pub struct JsonFormatter {
    base: Option<PathBuf>,
}

impl JsonFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base(mut self, base: Option<PathBuf>) -> Self {
        self.base = base;
        self
    }

    fn convert(&self, finding: &Finding) -> JsonFinding {
        JsonFinding {
            file: display_path(&finding.path, self.base.as_deref()),
            code: finding.code(),
            severity: finding.severity.as_str(),
            line: finding.line,
            message: finding.message.clone(),
        }
    }
}

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    errors: usize,
    warnings: usize,
    passed: bool,
}

#[derive(Serialize)]
struct JsonFinding {
    file: String,
    code: &'static str,
    severity: &'static str,
    line: Option<usize>,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &LintResult) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files: result.files_checked(),
                errors: result.errors().len(),
                warnings: result.warnings().len(),
                passed: !result.has_errors(),
            },
            findings: result
                .by_file()
                .into_iter()
                .flat_map(|(_, findings)| findings)
                .map(|finding| self.convert(finding))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
