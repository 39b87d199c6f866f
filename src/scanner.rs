use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Container extensions treated as exported media, compared case-insensitively.
pub const MEDIA_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "mxf"];

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, fifos, dangling or directory symlinks
    Other,
}

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl FileEntry {
    pub fn new(name: String, path: PathBuf, kind: EntryKind) -> Self {
        Self { name, path, kind }
    }

    pub fn file(dir: &Path, name: &str) -> Self {
        Self::new(name.to_string(), dir.join(name), EntryKind::File)
    }

    pub fn directory(dir: &Path, name: &str) -> Self {
        Self::new(name.to_string(), dir.join(name), EntryKind::Directory)
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Capability to list the immediate children of a directory.
pub trait DirectoryListing {
    /// Check that `root` can be scanned at all.
    fn validate_root(&self, root: &Path) -> Result<(), ScannerError>;

    fn list_entries(&self, dir: &Path) -> io::Result<Vec<FileEntry>>;
}

/// Directory listing backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsListing;

impl DirectoryListing for FsListing {
    fn validate_root(&self, root: &Path) -> Result<(), ScannerError> {
        if !root.exists() {
            return Err(ScannerError::PathNotFound(root.to_path_buf()));
        }

        if !root.is_dir() {
            return Err(ScannerError::NotADirectory(root.to_path_buf()));
        }

        fs::read_dir(root).map(|_| ()).map_err(|e| {
            if e.kind() == io::ErrorKind::PermissionDenied {
                ScannerError::PermissionDenied(root.to_path_buf())
            } else {
                ScannerError::IoError(e)
            }
        })
    }

    fn list_entries(&self, dir: &Path) -> io::Result<Vec<FileEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = ?dir, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // Directory symlinks are not followed so a link cycle cannot recurse forever
            let kind = match entry.file_type() {
                Ok(ft) if ft.is_dir() => EntryKind::Directory,
                Ok(ft) if ft.is_file() => EntryKind::File,
                Ok(ft) if ft.is_symlink() && path.is_file() => EntryKind::File,
                Ok(_) => EntryKind::Other,
                Err(e) => {
                    warn!(path = ?path, error = %e, "Cannot determine entry type");
                    EntryKind::Other
                }
            };

            entries.push(FileEntry::new(name, path, kind));
        }

        Ok(entries)
    }
}

/// Whether `name` carries one of the [`MEDIA_EXTENSIONS`].
pub fn is_media_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => MEDIA_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Recursively collect every media file under `root`, in listing order.
///
/// A directory that cannot be listed is logged and skipped; everything
/// gathered from the rest of the tree is still returned.
pub fn collect_media_files<L: DirectoryListing + ?Sized>(listing: &L, root: &Path) -> Vec<FileEntry> {
    debug!(path = ?root, "Scanning export directory");

    let mut files = Vec::new();
    walk(listing, root, &mut files);

    debug!(count = files.len(), "Scan complete");
    files
}

fn walk<L: DirectoryListing + ?Sized>(listing: &L, dir: &Path, files: &mut Vec<FileEntry>) {
    let entries = match listing.list_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = ?dir, error = %e, "Failed to list directory, skipping subtree");
            return;
        }
    };

    for entry in entries {
        match entry.kind {
            EntryKind::Directory => {
                trace!(name = %entry.name, "Descending into subdirectory");
                walk(listing, &entry.path, files);
            }
            EntryKind::File if is_media_file(&entry.name) => {
                debug!(name = %entry.name, "Found media file");
                files.push(entry);
            }
            _ => {
                trace!(name = %entry.name, "Skipping non-media entry");
            }
        }
    }
}
