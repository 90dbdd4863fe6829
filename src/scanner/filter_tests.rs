use std::path::Path;

use super::*;

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn default_include_matches_html_at_any_depth() {
    let filter = GlobFilter::new(&patterns(&["**/*.html"]), &[]).unwrap();
    assert!(filter.should_include(Path::new("index.html")));
    assert!(filter.should_include(Path::new("docs/guide/index.html")));
    assert!(!filter.should_include(Path::new("css/site.css")));
    assert!(!filter.should_include(Path::new("feed.xml")));
}

#[test]
fn exclude_wins_over_include() {
    let filter = GlobFilter::new(&patterns(&["**/*.html"]), &patterns(&["drafts/**"])).unwrap();
    assert!(filter.should_include(Path::new("posts/a.html")));
    assert!(!filter.should_include(Path::new("drafts/a.html")));
    assert!(!filter.should_include(Path::new("drafts/deep/b.html")));
}

#[test]
fn multiple_includes() {
    let filter = GlobFilter::new(&patterns(&["**/*.html", "**/*.htm"]), &[]).unwrap();
    assert!(filter.should_include(Path::new("old/page.htm")));
    assert!(filter.should_include(Path::new("page.html")));
}

#[test]
fn empty_include_accepts_everything_not_excluded() {
    let filter = GlobFilter::new(&[], &patterns(&["*.map"])).unwrap();
    assert!(filter.should_include(Path::new("anything.txt")));
    assert!(!filter.should_include(Path::new("app.js.map")));
}

#[test]
fn invalid_pattern_is_reported() {
    let Err(err) = GlobFilter::new(&patterns(&["**/[.html"]), &[]) else {
        panic!("expected an invalid pattern error");
    };
    assert!(matches!(
        err,
        SiteLintError::InvalidPattern { ref pattern, .. } if pattern == "**/[.html"
    ));
}
