mod component;
mod content;
mod finding;
mod page;

#[cfg(test)]
pub(crate) mod fixtures;

pub use finding::{Finding, FindingSource};

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

use tracing::{debug, warn};

use crate::document::{DocumentTree, HtmlDocument};
use crate::rules::{CATALOG, Rule, RuleId};

/// One violating instance reported by a rule evaluator, before it is bound
/// to a file and rendered through the rule's template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Violation {
    args: Vec<(&'static str, String)>,
    line: Option<usize>,
}

impl Violation {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn at(line: Option<usize>) -> Self {
        Self {
            args: Vec::new(),
            line,
        }
    }

    pub(crate) fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.args.push((key, value.into()));
        self
    }
}

type RuleFn = fn(&dyn DocumentTree) -> Vec<Violation>;

/// Evaluator for a catalog rule. Style-token rules need computed styles and
/// have no tree evaluator.
fn evaluator(id: RuleId) -> Option<RuleFn> {
    let f: RuleFn = match id {
        RuleId::E001 => page::missing_lang,
        RuleId::E002 => page::missing_skip_link,
        RuleId::E003 => page::missing_skip_target,
        RuleId::E004 => page::missing_landmarks,
        RuleId::E005 => page::missing_brand_bar,
        RuleId::E006 => page::missing_brand_footer,
        RuleId::E007 => page::missing_footer_links,
        RuleId::E008 => page::missing_accessibility_help,
        RuleId::E009 => page::multiple_h1,
        RuleId::E010 => page::missing_h1,
        RuleId::E011 => page::skipped_heading_levels,
        RuleId::E012 => content::duplicate_ids,
        RuleId::E013 => content::empty_link_text,
        RuleId::E014 => content::images_missing_alt,
        RuleId::E015 => content::tables_missing_headers,
        RuleId::E016 => content::media_missing_captions,
        RuleId::E017 => content::unlabelled_controls,
        RuleId::E018 => content::unnamed_buttons,
        RuleId::S001 | RuleId::S002 | RuleId::S003 => return None,
        RuleId::C001 => component::clickable_containers,
        RuleId::C002 => component::nested_interactive,
        RuleId::C003 => component::invalid_roles,
        RuleId::C004 => component::expanded_without_controls,
    };
    Some(f)
}

/// Whether the rule has an evaluator over the HTML tree.
#[must_use]
pub fn is_evaluated(id: RuleId) -> bool {
    evaluator(id).is_some()
}

pub trait Checker {
    /// Evaluate one parsed document.
    ///
    /// Pure: the same document always yields the same findings in the same
    /// order, and no state is carried between calls.
    fn check(&self, doc: &dyn DocumentTree, path: &Path) -> Vec<Finding>;
}

/// Runs the rule catalog, in catalog order, against a document.
#[derive(Debug, Clone, Default)]
pub struct RuleChecker {
    disabled: Vec<RuleId>,
}

impl RuleChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the given rules. Remaining rules keep catalog order.
    #[must_use]
    pub fn with_disabled(mut self, rules: impl IntoIterator<Item = RuleId>) -> Self {
        self.disabled.extend(rules);
        self.disabled.sort_unstable();
        self.disabled.dedup();
        self
    }

    /// Rules this checker will run.
    pub fn active_rules(&self) -> impl Iterator<Item = &'static Rule> + '_ {
        CATALOG
            .iter()
            .filter(|rule| !self.disabled.contains(&rule.id))
    }

    /// Decode, parse and check raw file contents.
    ///
    /// Input that cannot be turned into a document yields a single
    /// [`FindingSource::Parse`] finding instead of rule findings.
    #[must_use]
    pub fn check_bytes(&self, bytes: &[u8], path: &Path) -> Vec<Finding> {
        match HtmlDocument::from_bytes(bytes) {
            Ok(doc) => self.check(&doc, path),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse document");
                vec![Finding::parse_failure(path, &e)]
            }
        }
    }

    fn run_rule(rule: &'static Rule, doc: &dyn DocumentTree, path: &Path) -> Vec<Finding> {
        let Some(evaluate) = evaluator(rule.id) else {
            return Vec::new();
        };

        match catch_unwind(AssertUnwindSafe(|| evaluate(doc))) {
            Ok(violations) => violations
                .into_iter()
                .map(|v| Finding::from_rule(rule, path, &v))
                .collect(),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!(rule = %rule.id, path = %path.display(), %reason, "rule evaluation panicked");
                vec![Finding::internal_failure(rule.id, path, &reason)]
            }
        }
    }
}

impl Checker for RuleChecker {
    fn check(&self, doc: &dyn DocumentTree, path: &Path) -> Vec<Finding> {
        let findings: Vec<_> = self
            .active_rules()
            .flat_map(|rule| Self::run_rule(rule, doc, path))
            .collect();
        debug!(path = %path.display(), findings = findings.len(), "checked document");
        findings
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
