//! Rule catalog: the fixed table of rule codes, message templates and default
//! severities evaluated by the checker.
//!
//! The table is built at compile time and shared read-only across worker
//! threads. Nothing here evaluates markup; see [`crate::checker`] for that.

mod catalog;
mod vocabulary;

pub use catalog::CATALOG;
pub use vocabulary::{LANDMARKS, Landmark, REQUIRED_FOOTER_LINKS, VALID_ROLES};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SiteLintError;

/// Stable short code identifying a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    E001,
    E002,
    E003,
    E004,
    E005,
    E006,
    E007,
    E008,
    E009,
    E010,
    E011,
    E012,
    E013,
    E014,
    E015,
    E016,
    E017,
    E018,
    S001,
    S002,
    S003,
    C001,
    C002,
    C003,
    C004,
}

impl RuleId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::E001 => "E001",
            Self::E002 => "E002",
            Self::E003 => "E003",
            Self::E004 => "E004",
            Self::E005 => "E005",
            Self::E006 => "E006",
            Self::E007 => "E007",
            Self::E008 => "E008",
            Self::E009 => "E009",
            Self::E010 => "E010",
            Self::E011 => "E011",
            Self::E012 => "E012",
            Self::E013 => "E013",
            Self::E014 => "E014",
            Self::E015 => "E015",
            Self::E016 => "E016",
            Self::E017 => "E017",
            Self::E018 => "E018",
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::C001 => "C001",
            Self::C002 => "C002",
            Self::C003 => "C003",
            Self::C004 => "C004",
        }
    }

    /// Catalog entry for this code. Every `RuleId` has exactly one.
    #[must_use]
    pub fn rule(self) -> &'static Rule {
        // CATALOG is indexed in declaration order of RuleId.
        &CATALOG[self as usize]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = SiteLintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        CATALOG
            .iter()
            .map(|rule| rule.id)
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| SiteLintError::UnknownRule(s.to_string()))
    }
}

impl Serialize for RuleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PageStructure,
    StyleToken,
    ComponentPattern,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PageStructure => "page-structure",
            Self::StyleToken => "style-token",
            Self::ComponentPattern => "component-pattern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// One immutable catalog entry.
#[derive(Debug)]
pub struct Rule {
    pub id: RuleId,
    pub category: Category,
    /// `PascalCase` identifier used by SARIF consumers.
    pub name: &'static str,
    /// Message with `{placeholder}` slots filled per violation.
    pub template: &'static str,
    pub severity: Severity,
    /// Condition the rule checks, for `site-lint rules`.
    pub description: &'static str,
}

impl Rule {
    /// Render the message template with the given placeholder values.
    #[must_use]
    pub fn message(&self, args: &[(&str, &str)]) -> String {
        render(self.template, args)
    }
}

/// Look up a rule by its code (case-insensitive).
#[must_use]
pub fn lookup(code: &str) -> Option<&'static Rule> {
    code.parse::<RuleId>().ok().map(RuleId::rule)
}

/// Substitute `{name}` placeholders in `template`.
///
/// Placeholders without a matching argument are left as written so that a
/// missing value is visible in the report rather than silently dropped.
#[must_use]
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match args.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
