//! Shell completions command

use clap::CommandFactory;

use bundle_adapter::error::Result;

use crate::cli::CompletionsArgs;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        args.shell,
        &mut cmd,
        "bundle-adapter",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: clap_complete::Shell::Bash,
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_fish() {
        let args = CompletionsArgs {
            shell: clap_complete::Shell::Fish,
        };
        assert!(run(args).is_ok());
    }
}
