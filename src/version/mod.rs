mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

// Latin notation: V1, v12 anywhere in the name
static LATIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[Vv]([0-9]+)").unwrap());

// Ordinal notation: 第一版 ... 第十版
static ORDINAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"第([一二三四五六七八九十]+)版").unwrap());

/// Strip the extension (last `.` onward) from a filename.
///
/// A trailing dot with nothing after it is kept, as is any name whose last
/// dot comes before a path separator.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() && !filename[idx + 1..].contains('/') => {
            &filename[..idx]
        }
        _ => filename,
    }
}

/// Extract the version marker from a filename.
///
/// Latin notation wins over ordinal notation; only the first marker of the
/// winning notation is considered.
pub fn extract_version(filename: &str) -> VersionInfo {
    let stem = strip_extension(filename);

    let info = try_latin(stem)
        .or_else(|| try_ordinal(stem))
        .unwrap_or_else(VersionInfo::none);

    trace!(
        filename = %filename,
        found = info.found(),
        number = info.number,
        span = ?info.matched_span,
        "Extracted version"
    );

    info
}

fn try_latin(stem: &str) -> Option<VersionInfo> {
    let captures = LATIN_REGEX.captures(stem)?;
    let span = captures.get(0)?.as_str();

    match captures.get(1)?.as_str().parse::<u32>() {
        Ok(number) => Some(VersionInfo::latin(number, span)),
        Err(_) => {
            warn!(span = %span, "Latin version marker out of range, ignoring");
            None
        }
    }
}

fn try_ordinal(stem: &str) -> Option<VersionInfo> {
    let captures = ORDINAL_REGEX.captures(stem)?;
    let span = captures.get(0)?.as_str();
    let glyphs = captures.get(1)?.as_str();

    Some(VersionInfo::ordinal(ordinal_value(glyphs), span))
}

/// Map an ordinal glyph sequence to its number. Only single glyphs are in
/// the table; compound ordinals such as 十一 are read as 1.
fn ordinal_value(glyphs: &str) -> u32 {
    let mut chars = glyphs.chars();

    if let (Some(glyph), None) = (chars.next(), chars.next()) {
        if let Some(idx) = ORDINAL_GLYPHS.iter().position(|&g| g == glyph) {
            return idx as u32 + 1;
        }
    }

    warn!(glyphs = %glyphs, "Compound ordinal is not in the lookup table, reading as 1");
    1
}
