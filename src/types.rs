//! Type-safe selection tokens for agentmap
//!
//! This module replaces stringly-typed selections with proper Rust enums
//! that provide compile-time validation and exhaustive matching. The string
//! forms are the canonical tokens accepted at the CLI boundary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{AgentmapError, Result};

/// Product maturity tier gating which features and scenarios are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Version {
    #[default]
    #[strum(serialize = "basic")]
    Basic,
    #[strum(serialize = "advanced")]
    Advanced,
    #[strum(serialize = "pro")]
    Pro,
}

impl Version {
    /// Parse a canonical CLI token, with a lookup error naming the valid set.
    pub fn parse_token(s: &str) -> Result<Self> {
        s.parse().map_err(|_| {
            AgentmapError::not_found(format!(
                "version '{s}' (expected basic, advanced, pro)"
            ))
        })
    }
}

/// Viewer role used to select a tailored recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    #[strum(serialize = "developer")]
    Developer,
    #[strum(serialize = "business")]
    Business,
    #[strum(serialize = "leader")]
    Leader,
}

impl Audience {
    /// Parse a canonical CLI token, with a lookup error naming the valid set.
    pub fn parse_token(s: &str) -> Result<Self> {
        s.parse().map_err(|_| {
            AgentmapError::not_found(format!(
                "audience '{s}' (expected developer, business, leader)"
            ))
        })
    }
}

/// Display language for all rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[strum(serialize = "zh")]
    Zh,
    #[strum(serialize = "en")]
    En,
}

impl Language {
    /// Parse a canonical CLI token, with a lookup error naming the valid set.
    pub fn parse_token(s: &str) -> Result<Self> {
        s.parse()
            .map_err(|_| AgentmapError::not_found(format!("language '{s}' (expected zh, en)")))
    }

    /// Self-describing name shown in the language selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_version_tokens() {
        assert_eq!(Version::parse_token("basic").unwrap(), Version::Basic);
        assert_eq!(Version::parse_token("pro").unwrap(), Version::Pro);
        assert_eq!(Version::Advanced.to_string(), "advanced");
    }

    #[test]
    fn test_unknown_tokens_are_not_found() {
        assert!(matches!(
            Version::parse_token("ultra"),
            Err(AgentmapError::NotFound(_))
        ));
        assert!(matches!(
            Audience::parse_token("tester"),
            Err(AgentmapError::NotFound(_))
        ));
        assert!(matches!(
            Language::parse_token("fr"),
            Err(AgentmapError::NotFound(_))
        ));
    }

    #[test]
    fn test_enum_domains() {
        assert_eq!(Version::iter().count(), 3);
        assert_eq!(Audience::iter().count(), 3);
        assert_eq!(Language::iter().count(), 2);
    }

    #[test]
    fn test_defaults() {
        // The original presentation opens on the Chinese basic view
        assert_eq!(Version::default(), Version::Basic);
        assert_eq!(Audience::default(), Audience::Developer);
        assert_eq!(Language::default(), Language::Zh);
    }
}
