use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::checker::{Finding, RuleChecker};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, SiteLintError};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, SarifFormatter,
    ScanProgress, TextFormatter,
};
use crate::result::LintResult;
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter, ScanResult};
use crate::{EXIT_CONFIG_ERROR, EXIT_LINT_ERRORS, EXIT_SUCCESS};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs a full lint pass and returns the process exit code.
///
/// # Errors
/// Returns an error for setup failures: configuration, patterns, a missing
/// root, no input files, or an unwritable output file. Per-file problems are
/// reported as findings instead.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    // 3. Discover pages
    let scan = discover_files(&config)?;

    // 4. Check every page
    let checker = RuleChecker::new().with_disabled(config.disabled_rules()?);
    if !cli.quiet {
        eprintln!("Checking {} HTML file(s)...", scan.files.len());
    }
    let mut result = check_files(&scan.files, &checker, cli.quiet);
    for entry in &scan.unreadable {
        result.add(Finding::read_failure(&entry.path, &entry.error));
    }
    info!(
        files = result.files_checked(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "lint finished"
    );

    // 5. Format and write the report
    let base = std::env::current_dir().ok();
    let output = format_output(args.format, &result, cli.color.into(), base)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    if result.has_errors() {
        Ok(EXIT_LINT_ERRORS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(loaded.config)
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(root) = &args.root {
        config.scanner.root.clone_from(root);
    }

    // --include replaces the configured selection, --exclude narrows it further
    if !args.include.is_empty() {
        config.scanner.include.clone_from(&args.include);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if args.gitignore {
        config.scanner.gitignore = true;
    }

    config.rules.disable.extend(args.disable.iter().cloned());
}

/// Unreadable entries under the root are kept for reporting. The run only
/// fails as "no input" when the walk found nothing at all.
fn discover_files(config: &Config) -> Result<ScanResult> {
    let filter = GlobFilter::new(&config.scanner.include, &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);

    let root = &config.scanner.root;
    let scan = scanner.scan(root)?;
    if scan.files.is_empty() && scan.unreadable.is_empty() {
        return Err(SiteLintError::NoInputFiles { root: root.clone() });
    }
    Ok(scan)
}

fn check_files(files: &[PathBuf], checker: &RuleChecker, quiet: bool) -> LintResult {
    let progress = ScanProgress::new(files.len() as u64, quiet);

    let per_file: Vec<Vec<Finding>> = files
        .par_iter()
        .map(|path| {
            let findings = check_file(path, checker);
            progress.inc();
            findings
        })
        .collect();

    progress.finish();

    let mut result = LintResult::new();
    for findings in per_file {
        result.add_file(findings);
    }
    result
}

/// Read and check one page. An unreadable file yields a single read finding.
#[must_use]
pub fn check_file(path: &Path, checker: &RuleChecker) -> Vec<Finding> {
    match fs::read(path) {
        Ok(bytes) => checker.check_bytes(&bytes, path),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read file");
            vec![Finding::read_failure(path, &e)]
        }
    }
}

fn format_output(
    format: OutputFormat,
    result: &LintResult,
    color_mode: ColorMode,
    base: Option<PathBuf>,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_base(base)
            .format(result),
        OutputFormat::Json => JsonFormatter::new().with_base(base).format(result),
        OutputFormat::Sarif => SarifFormatter::new().with_base(base).format(result),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
