use std::fmt::Write;
use std::path::PathBuf;

use crate::checker::Finding;
use crate::error::Result;
use crate::result::LintResult;

use super::{ColorMode, OutputFormatter, ansi, display_path};

const PASSED: &str = "✓ All lint checks passed";

/// Human-readable report grouped by file.
pub struct TextFormatter {
    use_colors: bool,
    base: Option<PathBuf>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled_for(&std::io::stdout()),
            base: None,
        }
    }

    /// Display file paths relative to `base`.
    #[must_use]
    pub fn with_base(mut self, base: Option<PathBuf>) -> Self {
        self.base = base;
        self
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        let icon = if finding.is_error() {
            self.paint("✗", ansi::RED)
        } else {
            self.paint("⚠", ansi::YELLOW)
        };
        let line = finding.line.map(|l| format!(":{l}")).unwrap_or_default();
        writeln!(
            output,
            "  {icon} [{}]{line} {}",
            finding.code(),
            finding.message
        )
        .ok();
    }

    fn format_summary(&self, result: &LintResult) -> String {
        let errors = result.errors().len();
        let warnings = result.warnings().len();
        let errors = if errors > 0 {
            self.paint(&format!("{errors} error(s)"), ansi::RED)
        } else {
            format!("{errors} error(s)")
        };
        let warnings = if warnings > 0 {
            self.paint(&format!("{warnings} warning(s)"), ansi::YELLOW)
        } else {
            format!("{warnings} warning(s)")
        };
        format!("{errors}, {warnings}")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &LintResult) -> Result<String> {
        if result.is_clean() {
            return Ok(format!("{}\n", self.paint(PASSED, ansi::GREEN)));
        }

        let mut output = String::new();
        for (path, findings) in result.by_file() {
            writeln!(output, "\n{}", display_path(path, self.base.as_deref())).ok();
            for finding in findings {
                self.format_finding(finding, &mut output);
            }
        }
        writeln!(output, "\n{}", self.format_summary(result)).ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
