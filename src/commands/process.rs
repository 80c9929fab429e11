//! Process command implementation
//!
//! Runs the full evaluation for one file, the way the asset pipeline would,
//! and prints the content the pipeline would serve.

use std::io::Write;

use bundle_adapter::error::Result;

use crate::cli::ProcessArgs;
use crate::commands::Context;

/// Run process command
pub fn run(context: &Context, args: ProcessArgs) -> Result<()> {
    let adapter = context.adapter()?;
    let file = context.source_file(&args.file)?;
    let processed = adapter.process(&file)?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &processed)?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(processed.content.as_bytes())?;
    }
    stdout.flush()?;

    Ok(())
}
