use std::path::PathBuf;

use serde_json::Value;

use super::*;
use crate::rules::RuleId;

fn render(result: &LintResult) -> Value {
    let output = SarifFormatter::new().format(result).unwrap();
    serde_json::from_str(&output).unwrap()
}

fn finding(id: RuleId, line: Option<usize>) -> Finding {
    let rule = id.rule();
    Finding {
        path: PathBuf::from("_site/index.html"),
        source: FindingSource::Rule(id),
        message: rule.template.to_string(),
        line,
        severity: rule.severity,
    }
}

#[test]
fn log_header_and_driver() {
    let json = render(&LintResult::new());
    assert_eq!(json["version"], "2.1.0");
    assert!(json["$schema"].as_str().unwrap().contains("sarif-schema-2.1.0"));

    let driver = &json["runs"][0]["tool"]["driver"];
    assert_eq!(driver["name"], "site-lint");
    let rules = driver["rules"].as_array().unwrap();
    assert_eq!(rules.len(), CATALOG.len() + 3);
    assert_eq!(rules[0]["id"], "E001");
    assert_eq!(rules[0]["name"], "MissingLang");
    assert_eq!(rules[0]["properties"]["category"], "page-structure");
    assert_eq!(rules[24]["id"], "C004");
    assert_eq!(rules[24]["defaultConfiguration"]["level"], "warning");
    assert_eq!(rules[CATALOG.len()]["id"], "READ");
    assert!(json["runs"][0]["results"].as_array().unwrap().is_empty());
}

#[test]
fn results_reference_catalog_entries() {
    let mut result = LintResult::new();
    result.add_file(vec![finding(RuleId::E014, Some(4)), finding(RuleId::C004, None)]);
    let json = render(&result);
    let results = json["runs"][0]["results"].as_array().unwrap();
    let rules = json["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["ruleId"], "E014");
    assert_eq!(results[0]["level"], "error");
    assert_eq!(results[0]["message"]["text"], "Image missing alt attribute");
    let index = usize::try_from(results[0]["ruleIndex"].as_u64().unwrap()).unwrap();
    assert_eq!(rules[index]["id"], "E014");

    let location = &results[0]["locations"][0]["physicalLocation"];
    assert_eq!(location["artifactLocation"]["uri"], "_site/index.html");
    assert_eq!(location["region"]["startLine"], 4);

    assert_eq!(results[1]["level"], "warning");
    assert!(results[1]["locations"][0]["physicalLocation"]["region"].is_null());
}

#[test]
fn synthetic_findings_point_at_synthetic_descriptors() {
    let mut result = LintResult::new();
    result.add_file(vec![Finding {
        path: PathBuf::from("bad.html"),
        source: FindingSource::Internal(RuleId::C003),
        message: "Rule C003 failed: boom".to_string(),
        line: None,
        severity: Severity::Error,
    }]);
    let json = render(&result);
    let sarif_result = &json["runs"][0]["results"][0];
    assert_eq!(sarif_result["ruleId"], "INTERNAL");
    let index = usize::try_from(sarif_result["ruleIndex"].as_u64().unwrap()).unwrap();
    assert_eq!(json["runs"][0]["tool"]["driver"]["rules"][index]["id"], "INTERNAL");
}
