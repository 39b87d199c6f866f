use crate::normalize::{remove_date_markers, trim_symbols};
use crate::profile::EncodingProfile;
use crate::version::{strip_extension, VersionInfo};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Bitrate tag left by H.264 exports: _10mbps, _48Mbps
static BITRATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)_[0-9]+mbps").unwrap());

static PRORES_422_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)_prores422").unwrap());
static PRORES_444_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)_prores444").unwrap());

/// Recover the base name from a previously exported filename.
///
/// Removes, in order: the extension, the version marker, the first bitrate
/// tag, the first ProRes tags, date markers, and separator clutter at both
/// ends. The result may be empty.
pub fn reconstruct_base_name(filename: &str, version: &VersionInfo) -> String {
    let mut base = strip_extension(filename).to_string();
    debug!(step = "extension", base = %base);

    if let Some(span) = &version.matched_span {
        base = base.replacen(span.as_str(), "", 1).trim().to_string();
        debug!(step = "version", base = %base);
    }

    base = BITRATE_REGEX.replace(&base, "").trim().to_string();
    base = PRORES_422_REGEX.replace(&base, "").trim().to_string();
    base = PRORES_444_REGEX.replace(&base, "").trim().to_string();
    debug!(step = "encoding tags", base = %base);

    base = remove_date_markers(&base);
    debug!(step = "dates", base = %base);

    base = trim_symbols(&base);
    debug!(step = "symbols", base = %base);

    base
}

/// Assemble `<base>_<profile>_<version><ext>`.
pub fn build_filename(base_name: &str, profile: &EncodingProfile, version: &str) -> String {
    format!(
        "{}_{}_{}{}",
        base_name,
        profile,
        version,
        profile.container().extension()
    )
}

/// Replace characters that are invalid in filenames on common platforms
pub fn sanitize_filename(name: &str) -> String {
    let invalid_chars = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

    name.chars()
        .map(|c| {
            if invalid_chars.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
