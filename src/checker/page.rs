//! Page-level structure rules (E001-E011).

use crate::document::{DocumentTree, Element};
use crate::rules::{LANDMARKS, REQUIRED_FOOTER_LINKS};

use super::Violation;

const MAIN_CONTENT_ID: &str = "main-content";
const SKIP_LINK_HREF: &str = "#main-content";
const SKIP_LINK_CLASS: &str = "skip-link";
const SKIP_LINK_TEXT: &str = "Skip";

const BRAND_BAR_CLASS: &str = "brand-bar";
const BRAND_FOOTER_CLASS: &str = "brand-footer";

const A11Y_HELP_HREF: &str = "accessibility-help";
const A11Y_HELP_TEXT: &str = "Report an accessibility issue";

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

fn flag_if(violated: bool) -> Vec<Violation> {
    if violated { vec![Violation::new()] } else { Vec::new() }
}

pub(super) fn missing_lang(doc: &dyn DocumentTree) -> Vec<Violation> {
    let root = doc.root();
    if root.and_then(|html| html.non_empty_attr("lang")).is_some() {
        return Vec::new();
    }
    vec![Violation::at(root.and_then(|html| html.line()))]
}

fn is_skip_link(el: &Element<'_>) -> bool {
    el.is("a")
        && el.attr_is("href", SKIP_LINK_HREF)
        && (el.has_class(SKIP_LINK_CLASS) || el.text().contains(SKIP_LINK_TEXT))
}

pub(super) fn missing_skip_link(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(!doc.any(is_skip_link))
}

pub(super) fn missing_skip_target(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(!doc.any(|el| el.attr_is("id", MAIN_CONTENT_ID)))
}

pub(super) fn missing_landmarks(doc: &dyn DocumentTree) -> Vec<Violation> {
    LANDMARKS
        .iter()
        .filter(|landmark| {
            !doc.any(|el| el.is(landmark.element) || el.attr_is("role", landmark.role))
        })
        .map(|landmark| Violation::new().with("landmark", landmark.label))
        .collect()
}

pub(super) fn missing_brand_bar(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(!doc.any(|el| el.has_class(BRAND_BAR_CLASS)))
}

pub(super) fn missing_brand_footer(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(!doc.any(|el| el.has_class(BRAND_FOOTER_CLASS)))
}

fn in_footer(el: &Element<'_>) -> bool {
    el.ancestors()
        .any(|ancestor| ancestor.is("footer") || ancestor.has_class(BRAND_FOOTER_CLASS))
}

pub(super) fn missing_footer_links(doc: &dyn DocumentTree) -> Vec<Violation> {
    let hrefs: Vec<&str> = doc
        .select(|el| el.is("a") && in_footer(el))
        .filter_map(|link| link.attr("href"))
        .collect();

    REQUIRED_FOOTER_LINKS
        .iter()
        .filter(|required| !hrefs.iter().any(|href| href.contains(*required)))
        .map(|required| Violation::new().with("link", *required))
        .collect()
}

pub(super) fn missing_accessibility_help(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(!doc.any(|el| {
        el.is("a")
            && (el.attr("href").is_some_and(|href| href.contains(A11Y_HELP_HREF))
                || el.text().contains(A11Y_HELP_TEXT))
    }))
}

pub(super) fn multiple_h1(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(doc.by_tag("h1").count() > 1)
}

pub(super) fn missing_h1(doc: &dyn DocumentTree) -> Vec<Violation> {
    flag_if(doc.by_tag("h1").next().is_none())
}

fn heading_level(el: &Element<'_>) -> Option<usize> {
    el.tag().strip_prefix('h')?.parse().ok()
}

/// Adjacent-pair scan over headings in document order: a heading more than
/// one level deeper than the previous heading is a skip. Going shallower is
/// always allowed.
pub(super) fn skipped_heading_levels(doc: &dyn DocumentTree) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut last: Option<usize> = None;

    for heading in doc.select(|el| el.is_any(&HEADINGS)) {
        let Some(level) = heading_level(&heading) else {
            continue;
        };
        if let Some(previous) = last
            && level > previous + 1
        {
            violations.push(
                Violation::at(heading.line())
                    .with("from", previous.to_string())
                    .with("to", level.to_string()),
            );
        }
        last = Some(level);
    }

    violations
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
