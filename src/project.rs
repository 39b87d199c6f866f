use crate::normalize::{remove_date_markers, trim_symbols};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Label used when no project name survives cleanup.
pub const DEFAULT_PROJECT_LABEL: &str = "导出";

static PROJECT_EXTENSION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.prproj$").unwrap());

/// Turn a project name or project file path into a clean base-name label.
///
/// Takes the leaf of a path, drops a `.prproj` extension, removes date
/// markers and trims separator clutter. Never returns an empty string.
pub fn clean_project_label(raw: &str) -> String {
    let leaf = Path::new(raw.trim())
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let without_ext = PROJECT_EXTENSION_REGEX.replace(&leaf, "");
    let label = trim_symbols(&remove_date_markers(&without_ext));

    let label = if label.is_empty() {
        DEFAULT_PROJECT_LABEL.to_string()
    } else {
        label
    };

    debug!(raw = %raw, label = %label, "Cleaned project label");
    label
}
