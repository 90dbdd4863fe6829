use std::fs;

use crate::cli::InitArgs;
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SiteLintError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::stderr().report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SiteLintError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# site-lint configuration file

[scanner]
# Directory scanned when no path is given on the command line
root = "_site"

# Pages to lint, relative to root (glob syntax)
include = ["**/*.html"]

# Pages to skip, relative to root (glob syntax)
exclude = []

# Skip files ignored by .gitignore files under root
gitignore = false

[rules]
# Rule codes to skip. Run `site-lint rules` for the full list.
# disable = ["E016", "C004"]
disable = []
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
