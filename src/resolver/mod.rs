mod name_builder;
mod types;

pub use name_builder::{build_filename, reconstruct_base_name, sanitize_filename};
pub use types::*;

use crate::project::DEFAULT_PROJECT_LABEL;
use crate::scanner::{collect_media_files, DirectoryListing, FileEntry, FsListing};
use crate::version::{extract_version, Notation};
use std::path::Path;
use tracing::{debug, info, warn};

/// Work out the next versioned filename for `export_dir` on the local filesystem.
///
/// Never fails outright: any problem is reported through
/// [`ResolutionResult::error`] with `success == false`.
pub fn resolve_next_filename(export_dir: &Path, options: &ResolveOptions) -> ResolutionResult {
    resolve_next_filename_with(&FsListing, export_dir, options)
}

/// Same as [`resolve_next_filename`] over any directory listing.
pub fn resolve_next_filename_with<L: DirectoryListing + ?Sized>(
    listing: &L,
    export_dir: &Path,
    options: &ResolveOptions,
) -> ResolutionResult {
    match try_resolve(listing, export_dir, options) {
        Ok(result) => result,
        Err(e) => {
            warn!(dir = ?export_dir, error = %e, "Version resolution failed");
            ResolutionResult::failed(e.to_string())
        }
    }
}

fn try_resolve<L: DirectoryListing + ?Sized>(
    listing: &L,
    export_dir: &Path,
    options: &ResolveOptions,
) -> Result<ResolutionResult, ResolveError> {
    if export_dir.as_os_str().is_empty() {
        return Err(ResolveError::EmptyExportDir);
    }

    listing.validate_root(export_dir)?;

    let files = collect_media_files(listing, export_dir);
    info!("Found {} media files", files.len());

    let Some(latest) = select_latest(collect_candidates(files)) else {
        info!("No prior versions, starting at V1");
        return Ok(fresh_result(options));
    };

    let prior = latest.version.number;
    let next = prior
        .checked_add(1)
        .ok_or(ResolveError::VersionOverflow(prior))?;

    info!(
        file = %latest.entry.name,
        prior,
        next,
        "Latest version detected"
    );

    let mut base_name = reconstruct_base_name(&latest.entry.name, &latest.version);
    if base_name.is_empty() {
        warn!(file = %latest.entry.name, "Base name empty after cleanup, using project label");
        base_name = project_label(options);
    }

    Ok(assemble(
        options,
        Some(latest.entry.name),
        prior,
        next,
        latest.version.notation,
        &base_name,
    ))
}

/// Extract versions for every file, keeping only those with a marker.
fn collect_candidates(files: Vec<FileEntry>) -> Vec<VersionedCandidate> {
    files
        .into_iter()
        .filter_map(|entry| {
            let version = extract_version(&entry.name);
            if version.found() {
                debug!(name = %entry.name, number = version.number, "Versioned file");
                Some(VersionedCandidate { entry, version })
            } else {
                debug!(name = %entry.name, "No version marker, skipping");
                None
            }
        })
        .collect()
}

/// Highest version wins; on a tie the first file in scan order wins.
fn select_latest(mut candidates: Vec<VersionedCandidate>) -> Option<VersionedCandidate> {
    // sort_by is stable, which keeps scan order among equal versions
    candidates.sort_by(|a, b| b.version.number.cmp(&a.version.number));
    candidates.into_iter().next()
}

fn fresh_result(options: &ResolveOptions) -> ResolutionResult {
    let base_name = match options.override_base_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => project_label(options),
    };

    assemble(options, None, 0, 1, Notation::Latin, &base_name)
}

fn project_label(options: &ResolveOptions) -> String {
    let label = options.project_label.trim();
    if label.is_empty() {
        warn!("Project label is blank, using {}", DEFAULT_PROJECT_LABEL);
        return DEFAULT_PROJECT_LABEL.to_string();
    }
    label.to_string()
}

fn assemble(
    options: &ResolveOptions,
    prior_filename: Option<String>,
    prior: u32,
    next: u32,
    notation: Notation,
    base_name: &str,
) -> ResolutionResult {
    let base_name = sanitize_filename(base_name);
    let version = notation.format_version(next);
    let final_filename = build_filename(&base_name, &options.profile, &version);

    info!(filename = %final_filename, "Generated next filename");

    ResolutionResult {
        success: true,
        prior_filename,
        prior_version_number: prior,
        next_version_number: next,
        notation,
        base_name,
        final_filename,
        error: None,
    }
}
