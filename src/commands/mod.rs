//! Command implementations for bundle-adapter CLI

pub mod check;
pub mod completions;
pub mod deps;
pub mod process;
pub mod version;

use std::path::{Path, PathBuf};

use bundle_adapter::error::{Result, fs as fs_error};
use bundle_adapter::{AdapterConfig, BundleAdapter, SourceFile};

/// Global options shared by the file commands
#[derive(Debug, Clone)]
pub struct Context {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub env: String,
}

impl Context {
    /// Project root from `--root`, or the current directory
    ///
    /// A relative `--root` is taken relative to the current directory.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) if root.is_absolute() => Ok(root.clone()),
            Some(root) => Ok(current_dir()?.join(root)),
            None => current_dir(),
        }
    }

    /// Load the configuration and build an adapter for it
    pub fn adapter(&self) -> Result<BundleAdapter> {
        let root = self.project_root()?;
        let config = AdapterConfig::load(&root, self.config.as_deref())?
            .with_environment(self.env.clone());
        Ok(BundleAdapter::new(config))
    }

    /// Read a source file named on the command line
    ///
    /// Relative paths are taken relative to the current directory, as a shell
    /// user would expect, not to the project root.
    pub fn source_file(&self, file: &Path) -> Result<SourceFile> {
        let path = if file.is_absolute() {
            file.to_path_buf()
        } else {
            current_dir()?.join(file)
        };
        SourceFile::read(path)
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {e}")))
}
