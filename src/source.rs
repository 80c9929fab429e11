//! Source files handed to the adapter by the host pipeline

use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Literal that marks a file as a CommonJS module
pub const EXPORT_MARKER: &str = "module.exports";

/// A source file as seen by the asset pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a source file from disk
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))?;
        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the raw content contains a module export statement
    pub fn has_export_marker(&self) -> bool {
        self.content.contains(EXPORT_MARKER)
    }
}
