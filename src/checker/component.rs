//! Component pattern rules (C001-C004).

use crate::document::DocumentTree;
use crate::rules::VALID_ROLES;

use super::Violation;

const CLICKABLE_CONTAINERS: [&str; 2] = ["div", "span"];
const INTERACTIVE: [&str; 2] = ["a", "button"];

pub(super) fn clickable_containers(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.is_any(&CLICKABLE_CONTAINERS) && el.has_attr("onclick"))
        .map(|el| Violation::at(el.line()))
        .collect()
}

/// Each link or button inside another link or button, reported once however
/// deep the nesting.
pub(super) fn nested_interactive(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.is_any(&INTERACTIVE) && el.ancestors().any(|a| a.is_any(&INTERACTIVE)))
        .map(|el| Violation::at(el.line()))
        .collect()
}

pub(super) fn invalid_roles(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.has_attr("role"))
        .filter_map(|el| {
            let role = el.attr("role")?;
            (!VALID_ROLES.contains(&role))
                .then(|| Violation::at(el.line()).with("attr", format!("role=\"{role}\"")))
        })
        .collect()
}

pub(super) fn expanded_without_controls(doc: &dyn DocumentTree) -> Vec<Violation> {
    doc.select(|el| el.has_attr("aria-expanded") && el.non_empty_attr("aria-controls").is_none())
        .map(|el| {
            Violation::at(el.line()).with("attr", "aria-controls on element with aria-expanded")
        })
        .collect()
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
