//! Check command implementation

use bundle_adapter::error::Result;

use crate::cli::FileArgs;
use crate::commands::Context;

/// Run check command
pub fn run(context: &Context, args: FileArgs) -> Result<()> {
    let adapter = context.adapter()?;
    let file = context.source_file(&args.file)?;

    let decision = adapter.classify(&file)?;
    println!("{}", decision.as_str());

    Ok(())
}
