mod codes;

pub use codes::ExitCode;

use export_versioner::profile::{ProfileError, KNOWN_PROFILES};
use export_versioner::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Export directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Invalid encoding profile {profile:?}")]
    InvalidProfile {
        profile: String,
        #[source]
        source: ProfileError,
    },

    #[error("Version detection failed: {message}")]
    ResolutionFailed { message: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidProfile { .. } => ExitCode::InvalidArguments,
            AppError::ResolutionFailed { .. } => ExitCode::ResolutionFailed,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The export directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide the export directory, not a file inside it.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check directory permissions.",
                    path.display()
                )
            }

            AppError::InvalidProfile { profile, source } => {
                format!(
                    "Invalid encoding profile {:?}: {}\n\n\
                     Known profiles: {}",
                    profile,
                    source,
                    KNOWN_PROFILES.join(", ")
                )
            }

            AppError::ResolutionFailed { message } => {
                format!(
                    "Could not determine the next version:\n  {}\n\n\
                     No file was created or renamed.",
                    message
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}
