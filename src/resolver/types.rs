use crate::profile::EncodingProfile;
use crate::scanner::{FileEntry, ScannerError};
use crate::version::{Notation, VersionInfo};
use serde::Serialize;
use thiserror::Error;

/// Inputs for a single resolution
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub profile: EncodingProfile,
    /// Base name for a fresh export when the directory has no prior version
    pub override_base_name: Option<String>,
    /// Clean project label, used when no better base name is available
    pub project_label: String,
}

impl ResolveOptions {
    pub fn new(profile: EncodingProfile, project_label: impl Into<String>) -> Self {
        Self {
            profile,
            override_base_name: None,
            project_label: project_label.into(),
        }
    }

    pub fn with_override(mut self, base_name: Option<String>) -> Self {
        self.override_base_name = base_name;
        self
    }
}

/// A scanned file paired with the version marker found in its name
#[derive(Debug, Clone)]
pub struct VersionedCandidate {
    pub entry: FileEntry,
    pub version: VersionInfo,
}

/// Outcome of a resolution, successful or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub success: bool,
    /// Name of the highest versioned file found, if any
    pub prior_filename: Option<String>,
    pub prior_version_number: u32,
    pub next_version_number: u32,
    /// Notation the new version string is written in
    pub notation: Notation,
    pub base_name: String,
    pub final_filename: String,
    pub error: Option<String>,
}

impl ResolutionResult {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            prior_filename: None,
            prior_version_number: 0,
            next_version_number: 0,
            notation: Notation::None,
            base_name: String::new(),
            final_filename: String::new(),
            error: Some(message.into()),
        }
    }

    pub fn has_prior_version(&self) -> bool {
        self.prior_filename.is_some()
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("empty export directory")]
    EmptyExportDir,

    #[error(transparent)]
    Scanner(#[from] ScannerError),

    #[error("Version {0} cannot be incremented")]
    VersionOverflow(u32),
}
