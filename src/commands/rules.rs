use std::fmt::Write;

use serde::Serialize;

use crate::checker::is_evaluated;
use crate::cli::{RulesArgs, RulesFormat};
use crate::output::ErrorOutput;
use crate::rules::{CATALOG, Category, RuleId, Severity};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[derive(Serialize)]
struct RuleEntry {
    code: RuleId,
    name: &'static str,
    category: Category,
    severity: Severity,
    message: &'static str,
    description: &'static str,
    evaluated: bool,
}

#[must_use]
pub fn run_rules(args: &RulesArgs) -> i32 {
    let output = match args.format {
        RulesFormat::Text => Ok(format_rules_text()),
        RulesFormat::Json => format_rules_json(),
    };

    match output {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::stderr().report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// One line per catalog rule, in catalog order.
#[must_use]
pub fn format_rules_text() -> String {
    let mut output = String::new();
    for rule in &CATALOG {
        let _ = write!(
            output,
            "{:<6}{:<9}{:<19}{}",
            rule.id.as_str(),
            rule.severity.as_str(),
            rule.category.as_str(),
            rule.description
        );
        if !is_evaluated(rule.id) {
            output.push_str(" (not evaluated)");
        }
        output.push('\n');
    }
    output
}

/// The catalog as a JSON array.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_rules_json() -> Result<String> {
    let entries: Vec<_> = CATALOG
        .iter()
        .map(|rule| RuleEntry {
            code: rule.id,
            name: rule.name,
            category: rule.category,
            severity: rule.severity,
            message: rule.template,
            description: rule.description,
            evaluated: is_evaluated(rule.id),
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)?;
    Ok(format!("{json}\n"))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
