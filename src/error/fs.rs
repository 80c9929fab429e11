//! File system errors

use super::AdapterError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AdapterError {
    AdapterError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AdapterError {
    AdapterError::IoError {
        message: message.into(),
    }
}
