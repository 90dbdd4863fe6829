use std::path::PathBuf;

use serde::Serialize;

use crate::checker::{Finding, FindingSource};
use crate::error::Result;
use crate::result::LintResult;
use crate::rules::{CATALOG, Rule, Severity};

use super::{OutputFormatter, display_path};

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
#[derive(Default)]
pub struct SarifFormatter {
    base: Option<PathBuf>,
}

impl SarifFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base(mut self, base: Option<PathBuf>) -> Self {
        self.base = base;
        self
    }
}

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = "site-lint";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Descriptors for findings that do not come from a catalog rule. They are
/// listed after the catalog in `tool.driver.rules`.
const SYNTHETIC_RULES: [(&str, &str, &str); 3] = [
    ("READ", "UnreadableFile", "The file could not be read"),
    ("PARSE", "UnparsableDocument", "The file could not be decoded as an HTML document"),
    ("INTERNAL", "RuleFailure", "A rule failed unexpectedly while checking the file"),
];

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
struct ReportingDescriptor {
    id: &'static str,
    name: &'static str,
    #[serde(rename = "shortDescription")]
    short_description: MultiformatMessageString,
    #[serde(rename = "fullDescription")]
    full_description: MultiformatMessageString,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: ReportingConfiguration,
    properties: DescriptorProperties,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
struct DescriptorProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'static str>,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: &'static str,
    #[serde(rename = "ruleIndex")]
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
struct Location {
    #[serde(rename = "physicalLocation")]
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
struct PhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: ArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<Region>,
}

#[derive(Serialize)]
struct ArtifactLocation {
    uri: String,
    #[serde(rename = "uriBaseId")]
    uri_base_id: &'static str,
}

#[derive(Serialize)]
struct Region {
    #[serde(rename = "startLine")]
    start_line: usize,
}

const fn level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

fn describe(rule: &Rule) -> ReportingDescriptor {
    ReportingDescriptor {
        id: rule.id.as_str(),
        name: rule.name,
        short_description: MultiformatMessageString {
            text: rule.template,
        },
        full_description: MultiformatMessageString {
            text: rule.description,
        },
        default_configuration: ReportingConfiguration {
            level: level(rule.severity),
        },
        properties: DescriptorProperties {
            category: Some(rule.category.as_str()),
        },
    }
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        let synthetic = SYNTHETIC_RULES
            .iter()
            .map(|&(id, name, text)| ReportingDescriptor {
                id,
                name,
                short_description: MultiformatMessageString { text },
                full_description: MultiformatMessageString { text },
                default_configuration: ReportingConfiguration { level: "error" },
                properties: DescriptorProperties { category: None },
            });
        CATALOG.iter().map(describe).chain(synthetic).collect()
    }

    fn rule_index(source: FindingSource) -> usize {
        match source {
            FindingSource::Rule(id) => id as usize,
            FindingSource::Read => CATALOG.len(),
            FindingSource::Parse => CATALOG.len() + 1,
            FindingSource::Internal(_) => CATALOG.len() + 2,
        }
    }

    fn convert_finding(&self, finding: &Finding) -> SarifResult {
        SarifResult {
            rule_id: finding.code(),
            rule_index: Self::rule_index(finding.source),
            level: level(finding.severity),
            message: Message {
                text: finding.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri: display_path(&finding.path, self.base.as_deref()),
                        uri_base_id: "%SRCROOT%",
                    },
                    region: finding.line.map(|start_line| Region { start_line }),
                },
            }],
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, result: &LintResult) -> Result<String> {
        let results = result
            .by_file()
            .into_iter()
            .flat_map(|(_, findings)| findings)
            .map(|finding| self.convert_finding(finding))
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
