//! Configuration management for reviewer requests
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Action inputs exported by the runner (`INPUT_*`)
//! 3. Config file (~/.config/request-reviewers/config.toml)
//! 4. Default values
//!
//! The API token is deliberately not part of this structure; see
//! [`crate::secrets`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::secrets::Token;
use crate::{Error, Result};

/// Environment variable the runner uses for the `users` input
pub const USERS_ENV: &str = "INPUT_USERS";

/// Environment variable the runner uses for the `ignore-drafts` input
pub const IGNORE_DRAFTS_ENV: &str = "INPUT_IGNORE-DRAFTS";

/// Reviewer selection settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewersConfig {
    /// Comma-separated list of users to request
    pub users: Option<String>,

    /// Skip draft pull requests
    pub ignore_drafts: Option<bool>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reviewer selection settings
    pub reviewers: ReviewersConfig,
}

/// Fully resolved inputs for a single run
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    /// API token, if one was provided
    pub token: Option<Token>,

    /// Raw comma-separated user list
    pub users: Option<String>,

    /// Whether draft pull requests are skipped
    pub ignore_drafts: bool,
}

/// Interpret an `ignore-drafts` style flag
///
/// Blank values and the usual spellings of "false" disable the flag; any
/// other value enables it.
pub fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "false" | "0" | "no" | "off"
    )
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading config file");
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/request-reviewers/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("request-reviewers").join("config.toml"))
    }

    /// Apply overrides from the `INPUT_*` environment variables
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply input overrides from an arbitrary variable source
    ///
    /// Blank values count as not provided.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(users) = get(USERS_ENV) {
            self.reviewers.users = Some(users);
        }

        if let Some(flag) = get(IGNORE_DRAFTS_ENV) {
            self.reviewers.ignore_drafts = Some(parse_flag(&flag));
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        users: Option<String>,
        ignore_drafts: Option<String>,
    ) -> Self {
        if let Some(users) = users {
            self.reviewers.users = Some(users);
        }

        if let Some(flag) = ignore_drafts {
            self.reviewers.ignore_drafts = Some(parse_flag(&flag));
        }

        self
    }

    /// Load from an explicit path, or the default location when `None`
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Load configuration with all overrides applied
    pub fn load_with_overrides(
        path: Option<&Path>,
        users: Option<String>,
        ignore_drafts: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load_from(path)?
            .with_env_overrides()
            .with_cli_overrides(users, ignore_drafts))
    }

    /// Combine with the token into the inputs for one run
    pub fn into_inputs(self, token: Option<Token>) -> Inputs {
        Inputs {
            token,
            users: self.reviewers.users,
            ignore_drafts: self.reviewers.ignore_drafts.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let inputs = Config::default().into_inputs(None);
        assert!(inputs.token.is_none());
        assert!(inputs.users.is_none());
        assert!(!inputs.ignore_drafts);
    }

    #[test]
    fn test_parse_flag() {
        for enabled in ["true", "TRUE", "yes", "1", "on", "anything"] {
            assert!(parse_flag(enabled), "{enabled} should enable");
        }
        for disabled in ["", "  ", "false", "False", "0", "no", "off"] {
            assert!(!parse_flag(disabled), "{disabled:?} should disable");
        }
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[reviewers]
users = "alice,bob"
ignore_drafts = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.reviewers.users.as_deref(), Some("alice,bob"));
        assert_eq!(config.reviewers.ignore_drafts, Some(true));
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("[reviewers]\nusers = \"alice\"\n").unwrap();
        assert_eq!(config.reviewers.users.as_deref(), Some("alice"));
        assert!(config.reviewers.ignore_drafts.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[reviewers]\nusers = \"carol\"\nignore_drafts = false").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.reviewers.users.as_deref(), Some("carol"));
        assert_eq!(config.reviewers.ignore_drafts, Some(false));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[reviewers]\nusers = 12").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load_with_overrides(
            Some(Path::new("/nonexistent/request-reviewers.toml")),
            None,
            None,
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env = vars(&[(USERS_ENV, "alice, bob"), (IGNORE_DRAFTS_ENV, "true")]);
        let config = Config::default().with_overrides_from(|k| env.get(k).cloned());

        assert_eq!(config.reviewers.users.as_deref(), Some("alice, bob"));
        assert_eq!(config.reviewers.ignore_drafts, Some(true));
    }

    #[test]
    fn test_blank_env_keeps_file_values() {
        let mut config = Config::default();
        config.reviewers.users = Some("from_file".to_string());
        config.reviewers.ignore_drafts = Some(true);

        let env = vars(&[(USERS_ENV, ""), (IGNORE_DRAFTS_ENV, " ")]);
        let config = config.with_overrides_from(|k| env.get(k).cloned());

        assert_eq!(config.reviewers.users.as_deref(), Some("from_file"));
        assert_eq!(config.reviewers.ignore_drafts, Some(true));
    }

    #[test]
    fn test_literal_false_disables_drafts() {
        let env = vars(&[(IGNORE_DRAFTS_ENV, "false")]);
        let inputs = Config::default()
            .with_overrides_from(|k| env.get(k).cloned())
            .into_inputs(None);

        assert!(!inputs.ignore_drafts);
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = vars(&[(USERS_ENV, "alice"), (IGNORE_DRAFTS_ENV, "true")]);
        let config = Config::default()
            .with_overrides_from(|k| env.get(k).cloned())
            .with_cli_overrides(Some("bob".to_string()), Some("no".to_string()));

        assert_eq!(config.reviewers.users.as_deref(), Some("bob"));
        assert_eq!(config.reviewers.ignore_drafts, Some(false));
    }
}
