//! Session configuration handling for saving and loading presentation setups.
//!
//! A session is the selected (language, version, audience) triple plus the
//! export directory. Saved as JSON; the typed enums prevent invalid tokens
//! from round-tripping through a config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Audience, Language, Version};

/// Presentation session that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub language: Language,
    pub version: Version,
    pub audience: Audience,
    /// Directory export files are written to
    pub export_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            version: Version::default(),
            audience: Audience::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl SessionConfig {
    /// Save the session to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize session to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write session to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a session from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse session JSON")?;

        Ok(config)
    }

    /// Validate the session
    pub fn validate(&self) -> Result<()> {
        if self.export_dir.as_os_str().is_empty() {
            anyhow::bail!("Export directory must be specified");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_empty_export_dir_is_rejected() {
        let config = SessionConfig {
            export_dir: PathBuf::new(),
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let config = SessionConfig {
            language: Language::En,
            version: Version::Pro,
            audience: Audience::Leader,
            export_dir: PathBuf::from("/tmp/exports"),
        };
        config.save_to_file(&path).unwrap();

        let loaded = SessionConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_tokens_fail_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"language":"fr","version":"basic","audience":"developer","export_dir":"."}"#,
        )
        .unwrap();

        assert!(SessionConfig::load_from_file(&path).is_err());
    }
}
