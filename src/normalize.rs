//! Label cleanup shared by base-name reconstruction and project labels.
//!
//! Date-like tokens are only removed when they stand on their own: a digit
//! at either edge of a match must not touch an ASCII letter or digit. An
//! underscore, hyphen, space or CJK character counts as a separator, so
//! `宣传片_2025-08-19` loses its date while `Ep1_2` keeps its digits.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

// 2025-08-19, 2025_8_3, 2025.02.03
static YEAR_MONTH_DAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}[-_.][0-9]{1,2}[-_.][0-9]{1,2}").unwrap());

// 8_19, 12_25
static MONTH_DAY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,2}_[0-9]{1,2}").unwrap());

// 2025年8月19日, 2025年8月
static CJK_YEAR_MONTH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,4}年[0-9]{1,2}月(?:[0-9]{1,2}日)?").unwrap());

// 8月19日
static CJK_MONTH_DAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,2}月[0-9]{1,2}日").unwrap());

// 2025年
static CJK_YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}年").unwrap());

/// Characters stripped from both ends of a label, ASCII and full-width.
const TRIM_SYMBOLS: &[char] = &[
    '-', '_', '.', ',', '/', '\\', '(', ')', '（', '）', '【', '】', '[', ']',
];

/// Remove every standalone date token from `text`.
///
/// The full year-month-day form runs before the short month_day form so
/// that `2025_08_19` is removed whole instead of leaving `2025_` behind.
/// Passes repeat until nothing changes, since a removal can join its
/// neighbours into a new standalone token (`1_2025年3` becomes `1_3`).
pub fn remove_date_markers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_string();
    loop {
        let next = strip_all_patterns(&cleaned);
        // Each pass only removes text, so this terminates
        if next == cleaned {
            break;
        }
        cleaned = next;
    }

    trace!(original = %text, cleaned = %cleaned, "Removed date markers");
    cleaned
}

/// Trim whitespace and separator punctuation from both ends of `text`.
pub fn trim_symbols(text: &str) -> String {
    let cleaned = text
        .trim_matches(|c: char| c.is_whitespace() || TRIM_SYMBOLS.contains(&c))
        .to_string();

    trace!(original = %text, cleaned = %cleaned, "Trimmed symbols");
    cleaned
}

fn strip_all_patterns(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in [
        &*YEAR_MONTH_DAY_REGEX,
        &*MONTH_DAY_REGEX,
        &*CJK_YEAR_MONTH_REGEX,
        &*CJK_MONTH_DAY_REGEX,
        &*CJK_YEAR_REGEX,
    ] {
        cleaned = strip_standalone(pattern, &cleaned);
    }
    cleaned
}

/// Left-to-right, non-overlapping removal of matches that stand alone.
fn strip_standalone(pattern: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search_from = 0;

    while search_from < text.len() {
        let Some(m) = pattern.find_at(text, search_from) else {
            break;
        };

        if is_standalone(text, m.start(), m.end()) {
            out.push_str(&text[copied..m.start()]);
            copied = m.end();
            search_from = m.end();
        } else {
            // Every pattern starts with an ASCII digit, so the next char is one byte on.
            search_from = m.start() + 1;
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let touches_word = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());

    let before = text[..start].chars().next_back();
    let last = text[..end].chars().next_back();
    let after = text[end..].chars().next();

    if touches_word(before) {
        return false;
    }

    let ends_with_digit = last.is_some_and(|c| c.is_ascii_digit());
    !(ends_with_digit && touches_word(after))
}
