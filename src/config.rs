use std::env;

/// Environment variable holding the default encoding profile
pub const ENV_PROFILE: &str = "EXPORT_VERSIONER_PROFILE";
/// Environment variable holding the default project name or project file path
pub const ENV_PROJECT: &str = "EXPORT_VERSIONER_PROJECT";

pub const DEFAULT_PROFILE: &str = "10mbps";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub profile: String,
    pub project: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            project: None,
        }
    }
}

/// Load defaults from environment variables
///
/// Recognized environment variables:
/// - `EXPORT_VERSIONER_PROFILE`: encoding profile used when `--profile` is absent
/// - `EXPORT_VERSIONER_PROJECT`: project label used when `--project` is absent
///
/// These can be set in a `.env` file in the working directory.
pub fn config_from_env() -> Config {
    let profile = env::var(ENV_PROFILE)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let project = env::var(ENV_PROJECT).ok().filter(|v| !v.trim().is_empty());

    Config { profile, project }
}
