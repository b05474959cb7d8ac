//! Engine configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StyleError};
use crate::origin::Origin;

/// Host-tunable engine settings.
///
/// Every key is optional; missing keys take the [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Base URL handed to the URI resolver.
    pub base_url: String,
    /// Ceiling, in code words, for every style buffer. Exceeding it is
    /// reported as an allocation failure.
    pub buffer_limit: Option<usize>,
    /// Origin assigned to declarations fed through the CLI.
    pub origin: Origin,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "about:blank".to_string(),
            buffer_limit: None,
            origin: Origin::Author,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.buffer_limit == Some(0) {
            return Err(StyleError::Config("buffer_limit must be positive".into()));
        }
        if self.base_url.is_empty() {
            return Err(StyleError::Config("base_url must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.base_url, "about:blank");
        assert_eq!(cfg.buffer_limit, None);
        assert_eq!(cfg.origin, Origin::Author);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn all_keys() {
        let cfg = EngineConfig::from_toml_str(
            "base_url = \"https://example.com/css/\"\nbuffer_limit = 64\norigin = \"user-agent\"\n",
        )
        .unwrap();
        assert_eq!(cfg.base_url, "https://example.com/css/");
        assert_eq!(cfg.buffer_limit, Some(64));
        assert_eq!(cfg.origin, Origin::UserAgent);
    }

    #[test]
    fn zero_buffer_limit_rejected() {
        let err = EngineConfig::from_toml_str("buffer_limit = 0").unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
    }

    #[test]
    fn empty_base_url_rejected() {
        let err = EngineConfig::from_toml_str("base_url = \"\"").unwrap_err();
        assert!(matches!(err, StyleError::Config(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, StyleError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "origin = \"user\"\n").unwrap();
        let cfg = EngineConfig::load(&path).unwrap();
        assert_eq!(cfg.origin, Origin::User);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, StyleError::Io(_)));
    }
}
