use serde::Serialize;

/// The ten canonical ordinal glyphs, index 0 is 一 (1).
pub const ORDINAL_GLYPHS: [char; 10] = ['一', '二', '三', '四', '五', '六', '七', '八', '九', '十'];

/// How a version marker is written in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// No marker was found
    None,
    /// `V3`, `v12`
    Latin,
    /// `第三版`
    Ordinal,
}

impl Notation {
    /// Render `number` in this notation. `None` renders as Latin.
    ///
    /// Ordinals above ten fall back to `第11版` since only the ten canonical
    /// glyphs have a single-character form.
    pub fn format_version(&self, number: u32) -> String {
        match self {
            Notation::Ordinal => match ordinal_glyph(number) {
                Some(glyph) => format!("第{}版", glyph),
                None => format!("第{}版", number),
            },
            Notation::Latin | Notation::None => format!("V{}", number),
        }
    }
}

fn ordinal_glyph(number: u32) -> Option<char> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    ORDINAL_GLYPHS.get(index).copied()
}

/// Version marker extracted from a single filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub number: u32,
    pub notation: Notation,
    /// The marker text as it appears in the filename, e.g. `v3` or `第三版`
    pub matched_span: Option<String>,
}

impl VersionInfo {
    pub fn none() -> Self {
        Self {
            number: 0,
            notation: Notation::None,
            matched_span: None,
        }
    }

    pub fn latin(number: u32, span: &str) -> Self {
        Self {
            number,
            notation: Notation::Latin,
            matched_span: Some(span.to_string()),
        }
    }

    pub fn ordinal(number: u32, span: &str) -> Self {
        Self {
            number,
            notation: Notation::Ordinal,
            matched_span: Some(span.to_string()),
        }
    }

    pub fn found(&self) -> bool {
        self.notation != Notation::None
    }
}
