//! Integration tests for the `check` command.

mod common;

use common::{TestFixture, compliant_page, page, page_with_warning, page_without_h1};
use predicates::prelude::*;

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn check_clean_site_passes() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());
    fixture.create_page("about/index.html", &compliant_page());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ All lint checks passed"))
        .stderr(predicate::str::contains("Checking 2 HTML file(s)..."));
}

#[test]
fn check_error_finding_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());
    fixture.create_page("blog/post.html", &page_without_h1());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("_site/blog/post.html"))
        .stdout(predicate::str::contains("✗ [E010]"))
        .stdout(predicate::str::contains("1 error(s), 0 warning(s)"));
}

#[test]
fn check_warnings_only_exits_zero() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &page_with_warning());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠ [C004]"))
        .stdout(predicate::str::contains("0 error(s), 1 warning(s)"));
}

#[test]
fn check_missing_root_exits_two() {
    let fixture = TestFixture::new();

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Site root not found"))
        .stderr(predicate::str::contains("Build the site first"));
}

#[test]
fn check_root_without_pages_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_file("_site/style.css", "body {}");

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No HTML files found"));
}

#[test]
fn check_invalid_exclude_pattern_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "-x", "[unclosed"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}

// =============================================================================
// Discovery and Overrides
// =============================================================================

#[test]
fn check_positional_root_overrides_default() {
    let fixture = TestFixture::new();
    fixture.create_file("public/index.html", &page_without_h1());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "check", "public"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("public/index.html"));
}

#[test]
fn check_disable_skips_rule() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &page_without_h1());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "--disable", "E010"])
        .assert()
        .success();
}

#[test]
fn check_unknown_disabled_rule_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "--disable", "Z123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule code: Z123"))
        .stderr(predicate::str::contains("site-lint rules"));
}

#[test]
fn check_reads_local_config() {
    let fixture = TestFixture::new();
    fixture.create_file("public/index.html", &page_without_h1());
    fixture.create_file(
        "public/drafts/wip.html",
        &page("<h1>Draft</h1>\n<img src=\"a.png\">"),
    );
    fixture.create_config(
        "[scanner]\nroot = \"public\"\nexclude = [\"drafts/**\"]\n\n[rules]\ndisable = [\"E010\"]\n",
    );

    site_lint!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .success();
}

#[test]
fn check_no_config_ignores_local_config() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &page_without_h1());
    fixture.create_config("[rules]\ndisable = [\"E010\"]\n");

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check"])
        .assert()
        .code(1);
}

#[test]
fn check_malformed_config_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());
    fixture.create_config("[scanner\nroot = 1\n");

    site_lint!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn check_undecodable_page_is_a_parse_finding() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());
    let broken = fixture.path().join("_site/broken.html");
    std::fs::write(broken, [0x3c, 0x68, 0x31, 0x3e, 0xff, 0xfe, 0x00]).unwrap();

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[PARSE]"));
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn check_json_output() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &page_without_h1());

    let output = site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "-f", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["summary"]["passed"], false);
    assert_eq!(json["findings"][0]["code"], "E010");
    assert_eq!(json["findings"][0]["file"], "_site/index.html");
}

#[test]
fn check_sarif_output_to_file() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &page_with_warning());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "-f", "sarif", "-o", "out/lint.sarif"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(fixture.path().join("out/lint.sarif")).unwrap();
    let sarif: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(sarif["version"], "2.1.0");
    assert_eq!(sarif["runs"][0]["results"][0]["ruleId"], "C004");
    assert_eq!(sarif["runs"][0]["results"][0]["level"], "warning");
}

#[test]
fn check_quiet_suppresses_header() {
    let fixture = TestFixture::new();
    fixture.create_page("index.html", &compliant_page());

    site_lint!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Checking").not());
}
