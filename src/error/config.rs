//! Configuration errors

use super::AdapterError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> AdapterError {
    AdapterError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AdapterError {
    AdapterError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AdapterError {
    AdapterError::ConfigInvalid {
        message: message.into(),
    }
}
