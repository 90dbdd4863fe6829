use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "site-lint")]
#[command(author, version, about = "Accessibility and page-structure linter for rendered static sites")]
#[command(long_about = "Checks every rendered HTML page of a static site against a fixed catalog \
    of accessibility, landmark, heading and component rules.\n\n\
    Exit codes:\n  \
    0 - No error-severity findings (warnings allowed)\n  \
    1 - At least one error-severity finding\n  \
    2 - Configuration, discovery or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint rendered HTML pages
    Check(CheckArgs),

    /// List the rule catalog
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Site output directory to scan (overrides config `scanner.root`)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Include patterns relative to the root (glob syntax, replaces config `scanner.include`)
    #[arg(long)]
    pub include: Vec<String>,

    /// Exclude patterns relative to the root (glob syntax, added to config `scanner.exclude`)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Skip files ignored by .gitignore
    #[arg(long)]
    pub gitignore: bool,

    /// Rule codes to skip (comma-separated, e.g. E016,C004)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// Output format [possible values: text, json, sarif]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format for the rule listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RulesFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: RulesFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = ".site-lint.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
