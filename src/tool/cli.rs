//! Bundler invoked as a subprocess
//!
//! Arguments are passed as a vector, never through a shell, so file names with
//! spaces or shell metacharacters reach the bundler unchanged.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::AdapterConfig;
use crate::error::{Result, tool as tool_error};
use crate::tool::{Bundler, LIST_FLAG, SOURCE_MAP_FLAG};

/// Runs the bundler binary from the project's `node_modules`
#[derive(Debug, Clone)]
pub struct CliBundler {
    binary: PathBuf,
    options: Vec<String>,
    working_dir: PathBuf,
}

impl CliBundler {
    /// Create a bundler for the binary, options and project root in `config`
    pub fn from_config(config: &AdapterConfig) -> Self {
        Self {
            binary: config.tool_binary(),
            options: config.tool_options().to_vec(),
            working_dir: config.project_root().to_path_buf(),
        }
    }

    /// Return the binary path, failing if it is not installed
    pub fn locate(&self) -> Result<&Path> {
        if !self.binary.exists() {
            return Err(tool_error::not_found(self.binary.display().to_string()));
        }
        Ok(&self.binary)
    }

    fn describe(&self, args: &[&str]) -> String {
        std::iter::once(self.binary.display().to_string())
            .chain(self.options.iter().cloned())
            .chain(args.iter().map(|arg| (*arg).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the bundler with `args` followed by `file`, returning stdout
    fn run(&self, args: &[&str], file: &Path) -> Result<String> {
        let binary = self.locate()?;
        let command_line = self.describe(args);

        tracing::debug!(command = %command_line, file = %file.display(), "running bundler");

        let output = Command::new(binary)
            .args(&self.options)
            .args(args)
            .arg(file)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| tool_error::execution_failed(&command_line, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {stderr}", output.status)
            };
            return Err(tool_error::execution_failed(command_line, reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Bundler for CliBundler {
    fn list_dependencies(&self, file: &Path) -> Result<String> {
        self.run(&[LIST_FLAG], file)
    }

    fn bundle(&self, file: &Path, source_maps: bool) -> Result<String> {
        if source_maps {
            self.run(&[SOURCE_MAP_FLAG], file)
        } else {
            self.run(&[], file)
        }
    }
}
