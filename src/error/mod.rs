//! Error types and handling for updatekit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Path-carrying constructors live in [`fs`] so call sites can wrap an
//! `std::io::Error` together with the path it happened on.

pub mod fs;

pub use fs::{create_dir_failed, read_failed, write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for updatekit operations
#[derive(Error, Diagnostic, Debug)]
pub enum UpdateError {
    // Scaffolding errors
    #[error("Update name cannot be empty")]
    #[diagnostic(
        code(updatekit::update::empty_name),
        help("Pass a name such as 'week-7-status'")
    )]
    EmptyName,

    #[error("Update '{name}' already exists!")]
    #[diagnostic(
        code(updatekit::update::exists),
        help("Pick another name or remove {path} first")
    )]
    UpdateExists { name: String, path: String },

    #[error("Could not read update name: {message}")]
    #[diagnostic(code(updatekit::update::prompt_failed))]
    PromptFailed { message: String },

    // Layout errors
    #[error("Updates directory not found: {path}")]
    #[diagnostic(
        code(updatekit::layout::updates_root_not_found),
        help("Run 'updatekit new' to create the first update, or pass --root")
    )]
    UpdatesRootNotFound { path: String },

    // File system errors
    #[error("Error creating directory {path}: {reason}")]
    #[diagnostic(code(updatekit::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Error writing {path}: {reason}")]
    #[diagnostic(code(updatekit::fs::write_failed))]
    WriteFailed { path: String, reason: String },

    #[error("Error reading {path}: {reason}")]
    #[diagnostic(code(updatekit::fs::read_failed))]
    ReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(updatekit::fs::io_error))]
    IoError { message: String },

    // Bundle errors
    #[error("Error creating {path}: {reason}")]
    #[diagnostic(code(updatekit::bundle::archive_failed))]
    ArchiveFailed { path: String, reason: String },

    #[error("{failed} of {total} bundles failed to build")]
    #[diagnostic(
        code(updatekit::bundle::build_incomplete),
        help("Fix the errors above and run 'updatekit build' again")
    )]
    BuildIncomplete { failed: usize, total: usize },

    // Output errors
    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(updatekit::output::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(updatekit::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for UpdateError {
    fn from(err: std::io::Error) -> Self {
        UpdateError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for UpdateError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        UpdateError::ReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for UpdateError {
    fn from(err: zip::result::ZipError) -> Self {
        UpdateError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for UpdateError {
    fn from(err: serde_json::Error) -> Self {
        UpdateError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for UpdateError {
    fn from(err: serde_yaml::Error) -> Self {
        UpdateError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for UpdateError {
    fn from(err: inquire::InquireError) -> Self {
        UpdateError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UpdateError>;
