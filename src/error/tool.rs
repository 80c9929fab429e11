//! Bundler tool errors

use super::AdapterError;

/// Creates a tool not found error
pub fn not_found(path: impl Into<String>) -> AdapterError {
    AdapterError::ToolNotFound { path: path.into() }
}

/// Creates a tool execution failed error
pub fn execution_failed(command: impl Into<String>, reason: impl Into<String>) -> AdapterError {
    AdapterError::ToolExecutionFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
