//! Deps command implementation

use bundle_adapter::error::Result;

use crate::cli::FileArgs;
use crate::commands::Context;

/// Run deps command
///
/// Prints one asset dependency per line; prints nothing for files that would
/// be passed through.
pub fn run(context: &Context, args: FileArgs) -> Result<()> {
    let adapter = context.adapter()?;
    let file = context.source_file(&args.file)?;

    for path in adapter.asset_dependencies(&file)? {
        println!("{}", path.display());
    }

    Ok(())
}
