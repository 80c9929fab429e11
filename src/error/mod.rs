//! Error types and handling for bundle-adapter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`tool`]: Bundler binary lookup and subprocess errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for adapter operations
#[derive(Error, Diagnostic, Debug)]
pub enum AdapterError {
    // Tool errors
    #[error("Bundler could not be found at {path}")]
    #[diagnostic(
        code(bundle_adapter::tool::not_found),
        help("Please run 'npm install' in the project root")
    )]
    ToolNotFound { path: String },

    #[error("Error while running `{command}`: {reason}")]
    #[diagnostic(code(bundle_adapter::tool::execution_failed))]
    ToolExecutionFailed { command: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(bundle_adapter::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(bundle_adapter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(bundle_adapter::config::invalid),
        help("Rules are written as `glob: <pattern>`, `regex: <pattern>` or `prefix: <path>`")
    )]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(bundle_adapter::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundle_adapter::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AdapterError {
    fn from(err: std::io::Error) -> Self {
        AdapterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AdapterError {
    fn from(err: serde_yaml::Error) -> Self {
        AdapterError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AdapterError>;
