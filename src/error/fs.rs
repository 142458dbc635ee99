//! File system errors

use std::path::Path;

use super::UpdateError;

/// Directory creation failed at `path`
pub fn create_dir_failed(path: &Path, err: &std::io::Error) -> UpdateError {
    UpdateError::CreateDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Writing a file at `path` failed
pub fn write_failed(path: &Path, err: &std::io::Error) -> UpdateError {
    UpdateError::WriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Reading a file or directory listing at `path` failed
pub fn read_failed(path: &Path, err: &std::io::Error) -> UpdateError {
    UpdateError::ReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
