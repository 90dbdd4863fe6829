use clap::Parser;
use tracing_subscriber::EnvFilter;

use site_lint::cli::{Cli, Commands};
use site_lint::commands::{run_check, run_init, run_rules};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

/// Diagnostics go to stderr so reports on stdout stay machine-readable.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "site_lint=warn",
        1 => "site_lint=info",
        _ => "site_lint=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
