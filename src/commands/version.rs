//! Version command implementation

use bundle_adapter::config::DEFAULT_TOOL_PATH;
use bundle_adapter::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("bundle-adapter {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Default bundler: {DEFAULT_TOOL_PATH}");

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
