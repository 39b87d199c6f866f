//! Versioned export naming: scan an export directory for previous media
//! exports, find the highest version marker and derive the next filename.

pub mod config;
pub mod normalize;
pub mod profile;
pub mod project;
pub mod resolver;
pub mod scanner;
pub mod version;

pub use normalize::{remove_date_markers, trim_symbols};
pub use profile::{Container, EncodingProfile, ProfileError};
pub use project::{clean_project_label, DEFAULT_PROJECT_LABEL};
pub use resolver::{
    resolve_next_filename, resolve_next_filename_with, ResolutionResult, ResolveError,
    ResolveOptions, VersionedCandidate,
};
pub use scanner::{
    collect_media_files, DirectoryListing, EntryKind, FileEntry, FsListing, ScannerError,
};
pub use version::{extract_version, Notation, VersionInfo};
