//! config
//!
//! Configuration schema, loading, and persistence.
//!
//! # Overview
//!
//! glpick keeps a single per-user configuration file at `<home>/config.json`
//! with three required fields: the GitLab base URL (trailing slash expected),
//! the group identifier, and the access token. The file is read on every run;
//! when it is absent or any required field is blank, the CLI collects all
//! three interactively and persists them verbatim for future runs.
//!
//! A few optional knobs ride along in the same file. They are omitted from
//! the serialized form when unset, so a first-run file contains exactly the
//! three required keys.
//!
//! # Example
//!
//! ```no_run
//! use glpick::config::Config;
//!
//! let path = Config::default_path().unwrap();
//! if let Some(config) = Config::load(&path).unwrap() {
//!     if config.is_complete() {
//!         println!("listing group {}", config.group_id);
//!     }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the configuration file under the home directory.
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    EncodeError(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Per-user configuration.
///
/// The three string fields are required; an empty string counts as missing
/// and triggers interactive collection. The optional fields unify the two
/// historical behavior variants behind one configurable fetch and default
/// to the richer variant (subgroups included, platform tags shown).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the GitLab instance, used as a path prefix
    /// (e.g. `https://gitlab.example.com/`).
    #[serde(default)]
    pub gitlab_url: String,
    /// Identifier of the group whose projects are listed.
    #[serde(default)]
    pub group_id: String,
    /// Private token, sent as a query parameter on the listing request.
    #[serde(default)]
    pub access_token: String,

    /// Include projects of subgroups in the listing. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_subgroups: Option<bool>,
    /// Derive android/ios platform tags in the listing. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_platforms: Option<bool>,
    /// Request timeout in seconds. Unset means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the canonical path of the configuration file.
    ///
    /// Returns `<home>/config.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if the home directory cannot be
    /// determined.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist. A file that exists but
    /// cannot be read or parsed is an error; there is no fallback.
    pub fn load(path: &Path) -> Result<Option<Config>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Some(config))
    }

    /// Check that all required fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.gitlab_url.is_empty() && !self.group_id.is_empty() && !self.access_token.is_empty()
    }

    /// Persist the configuration to `path`, overwriting any existing file.
    ///
    /// The file is written with mode 0644 (owner read/write, group/other
    /// read). The token is stored in the clear; the file is no more secret
    /// than the original it replaces.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents =
            serde_json::to_string(self).map_err(|e| ConfigError::EncodeError(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|e| {
                ConfigError::WriteError {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
        }

        Ok(())
    }

    /// Whether subgroup projects are included in the listing.
    ///
    /// Defaults to `true` if not configured.
    pub fn include_subgroups(&self) -> bool {
        self.include_subgroups.unwrap_or(true)
    }

    /// Whether platform tags are derived in the listing.
    ///
    /// Defaults to `true` if not configured.
    pub fn tag_platforms(&self) -> bool {
        self.tag_platforms.unwrap_or(true)
    }

    /// The request timeout, if one is configured.
    ///
    /// `None` preserves the historical unbounded behavior.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn complete_config() -> Config {
        Config {
            gitlab_url: "https://gitlab.example.com/".to_string(),
            group_id: "42".to_string(),
            access_token: "tok123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn load_missing_file_returns_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let config = complete_config();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap().unwrap();
        assert_eq!(loaded.gitlab_url, "https://gitlab.example.com/");
        assert_eq!(loaded.group_id, "42");
        assert_eq!(loaded.access_token, "tok123");
        assert!(loaded.is_complete());
    }

    #[test]
    fn saved_file_contains_exactly_the_required_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        complete_config().save(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            r#"{"gitlab_url":"https://gitlab.example.com/","group_id":"42","access_token":"tok123"}"#
        );
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        complete_config().save(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn blank_field_is_incomplete() {
        let mut config = complete_config();
        config.access_token = String::new();
        assert!(!config.is_complete());

        let mut config = complete_config();
        config.gitlab_url = String::new();
        assert!(!config.is_complete());

        let mut config = complete_config();
        config.group_id = String::new();
        assert!(!config.is_complete());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn optional_knobs_parse_and_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"gitlab_url":"u/","group_id":"g","access_token":"t",
                "include_subgroups":false,"timeout_secs":30}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert!(!config.include_subgroups());
        assert!(config.tag_platforms());
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

        let defaults = complete_config();
        assert!(defaults.include_subgroups());
        assert!(defaults.tag_platforms());
        assert_eq!(defaults.timeout(), None);
    }

    #[test]
    fn missing_keys_decode_as_blank_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"gitlab_url":"https://gitlab.example.com/"}"#).unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert!(!config.is_complete());
        assert_eq!(config.group_id, "");
        assert_eq!(config.access_token, "");
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{"gitlab_url":"u/","group_id":"g","access_token":"t","extra":true}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert!(config.is_complete());
    }
}
