//! bundle-adapter - command line harness
//!
//! Runs the adapter against a single file outside of the host pipeline, which
//! is handy when debugging eligibility rules or bundler failures.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::Context;

/// Install the stderr log subscriber
///
/// `--verbose` turns on debug output for the adapter; otherwise `RUST_LOG`
/// applies, falling back to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bundle_adapter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let context = Context {
        root: cli.root,
        config: cli.config,
        env: cli.env,
    };

    let result = match cli.command {
        Commands::Process(args) => commands::process::run(&context, args),
        Commands::Deps(args) => commands::deps::run(&context, args),
        Commands::Check(args) => commands::check::run(&context, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
