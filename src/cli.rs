//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bundle-adapter - run the asset pipeline's bundler step by hand
#[derive(Parser, Debug)]
#[command(
    name = "bundle-adapter",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Hand CommonJS modules in an asset pipeline to an external bundler",
    long_about = "Runs the same decision the asset pipeline makes for a single file: \
                  check the eligibility rules, detect CommonJS modules, run the bundler \
                  and report the asset dependencies the pipeline would watch.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  bundle-adapter process app/assets/javascripts/main.js\n    \
                  bundle-adapter --env production process app/assets/javascripts/main.js\n    \
                  bundle-adapter deps app/assets/javascripts/main.js\n    \
                  bundle-adapter check app/assets/javascripts/legacy.js"
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'r', global = true)]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to bundle-adapter.yaml in the project root)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Current environment; decides whether source maps are generated
    #[arg(
        long,
        global = true,
        env = "BUNDLE_ADAPTER_ENV",
        default_value = "development"
    )]
    pub env: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a file and print the resulting content
    Process(ProcessArgs),

    /// Print the asset dependencies of a file
    Deps(FileArgs),

    /// Print what would happen to a file without bundling it
    Check(FileArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the process command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print bundled output:\n    bundle-adapter process app/assets/javascripts/main.js\n\n\
                  Print output and dependencies as JSON:\n    bundle-adapter process app/assets/javascripts/main.js --json")]
pub struct ProcessArgs {
    /// Source file to process
    pub file: PathBuf,

    /// Print decision, content and dependencies as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for commands taking a single source file
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Source file
    pub file: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundle-adapter completions --shell bash > ~/.bash_completion.d/bundle-adapter\n\n\
                  Generate zsh completions:\n    bundle-adapter completions --shell zsh > ~/.zfunc/_bundle-adapter")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
