use std::path::Path;

use crate::document::HtmlDocument;
use crate::rules::RuleId;

use super::{Checker, Finding, FindingSource, RuleChecker};

const PAGE_START: &str = r##"<!doctype html>
<html lang="en">
<head><title>Home</title></head>
<body>
<a class="skip-link" href="#main-content">Skip to main content</a>
<header class="brand-bar"><a href="https://uiowa.edu">The University of Iowa</a></header>
<main id="main-content">
"##;

const PAGE_END: &str = r#"
</main>
<footer class="brand-footer">
<a href="https://uiowa.edu/privacy">Privacy</a>
<a href="https://opsmanual.uiowa.edu/community-policies/nondiscrimination-statement">Nondiscrimination</a>
<a href="https://accessibility.uiowa.edu">Accessibility</a>
<a href="/accessibility-help/">Report an accessibility issue</a>
</footer>
</body>
</html>
"#;

/// A page passing every rule, with `main` as the content of `<main>`.
pub fn page(main: &str) -> String {
    format!("{PAGE_START}{main}{PAGE_END}")
}

pub fn compliant_page() -> String {
    page("<h1>Welcome</h1>\n<h2>News</h2>\n<p>Hello</p>")
}

pub fn check(html: &str) -> Vec<Finding> {
    let doc = HtmlDocument::parse(html);
    RuleChecker::new().check(&doc, Path::new("index.html"))
}

/// Findings of a single rule for `html`.
pub fn findings_for(id: RuleId, html: &str) -> Vec<Finding> {
    check(html)
        .into_iter()
        .filter(|f| f.source == FindingSource::Rule(id))
        .collect()
}

pub fn messages_for(id: RuleId, html: &str) -> Vec<String> {
    findings_for(id, html)
        .into_iter()
        .map(|f| f.message)
        .collect()
}
