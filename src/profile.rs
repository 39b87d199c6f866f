use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Profiles the export panel offers. Other identifiers are accepted and
/// exported as `.mp4`.
pub const KNOWN_PROFILES: [&str; 4] = ["10mbps", "48mbps", "prores422", "prores444"];

const PRORES_PROFILES: [&str; 2] = ["prores422", "prores444"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Encoding profile must not be empty")]
    Empty,

    #[error("Encoding profile contains an invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// Output container selected by an encoding profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    Mp4,
    Mov,
}

impl Container {
    pub fn extension(&self) -> &'static str {
        match self {
            Container::Mp4 => ".mp4",
            Container::Mov => ".mov",
        }
    }
}

/// Encoding profile identifier, written verbatim into generated filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodingProfile(String);

impl EncodingProfile {
    pub fn new(id: impl Into<String>) -> Result<Self, ProfileError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(ProfileError::Empty);
        }

        if let Some(c) = id.chars().find(|c| matches!(c, '/' | '\\') || c.is_control()) {
            return Err(ProfileError::InvalidCharacter(c));
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ProRes profiles go into a `.mov` container, everything else `.mp4`.
    pub fn container(&self) -> Container {
        if PRORES_PROFILES.contains(&self.0.as_str()) {
            Container::Mov
        } else {
            Container::Mp4
        }
    }

    pub fn is_known(&self) -> bool {
        KNOWN_PROFILES.contains(&self.0.as_str())
    }
}

impl FromStr for EncodingProfile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for EncodingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prores_uses_mov() {
        for id in ["prores422", "prores444"] {
            let profile = EncodingProfile::new(id).unwrap();
            assert_eq!(profile.container(), Container::Mov);
            assert_eq!(profile.container().extension(), ".mov");
        }
    }

    #[test]
    fn test_bitrate_profiles_use_mp4() {
        for id in ["10mbps", "48mbps", "35mbps"] {
            let profile = EncodingProfile::new(id).unwrap();
            assert_eq!(profile.container().extension(), ".mp4");
        }
    }

    #[test]
    fn test_unknown_profile_defaults_to_mp4() {
        let profile: EncodingProfile = "h265_master".parse().unwrap();
        assert!(!profile.is_known());
        assert_eq!(profile.container(), Container::Mp4);
    }

    #[test]
    fn test_container_match_is_case_sensitive() {
        let profile = EncodingProfile::new("ProRes422").unwrap();
        assert_eq!(profile.container(), Container::Mp4);
    }

    #[test]
    fn test_profile_kept_verbatim() {
        let profile = EncodingProfile::new("48mbps").unwrap();
        assert_eq!(profile.as_str(), "48mbps");
        assert_eq!(profile.to_string(), "48mbps");
        assert!(profile.is_known());
    }

    #[test]
    fn test_rejects_empty_profile() {
        assert_eq!(EncodingProfile::new(""), Err(ProfileError::Empty));
        assert_eq!(EncodingProfile::new("   "), Err(ProfileError::Empty));
    }

    #[test]
    fn test_rejects_path_separators() {
        assert_eq!(
            EncodingProfile::new("a/b"),
            Err(ProfileError::InvalidCharacter('/'))
        );
    }
}
