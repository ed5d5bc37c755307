//! Lint configuration.
//!
//! House-rule vocabulary and strictness settings, loaded from TOML. The
//! configuration only affects linting; serializing and parsing never read it.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Errors raised while loading an [`EnricherConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings for `lint`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnricherConfig {
    /// Extra skill names accepted alongside the built-in eighteen.
    pub house_skills: Vec<String>,
    /// Tool names to accept. When empty, tools are not checked at all.
    pub house_tools: Vec<String>,
    /// Extra ability names accepted alongside the built-in six.
    pub house_abilities: Vec<String>,
    /// Treat commands that do not match their canonical text as failures.
    pub deny_noncanonical: bool,
}

impl EnricherConfig {
    /// Load a config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn load(path: &Path) -> Result<EnricherConfig, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file, falling back to defaults (with a warning) if it
    /// is missing or malformed.
    pub fn load_or_default(path: &Path) -> EnricherConfig {
        match Self::load(path) {
            Ok(config) => {
                info!("lint config loaded from '{}'", path.display());
                config
            },
            Err(e) => {
                warn!("{e}. Using default lint config.");
                EnricherConfig::default()
            },
        }
    }

    pub fn accepts_skill(&self, skill: &str) -> bool {
        self.house_skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    pub fn accepts_ability(&self, ability: &str) -> bool {
        self.house_abilities.iter().any(|a| a.eq_ignore_ascii_case(ability))
    }

    /// `None` when tools are unchecked.
    pub fn accepts_tool(&self, tool: &str) -> Option<bool> {
        if self.house_tools.is_empty() {
            None
        } else {
            Some(self.house_tools.iter().any(|t| t.eq_ignore_ascii_case(tool)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let config: EnricherConfig = toml::from_str("house_skills = [\"sanity\"]").expect("valid toml");
        assert_eq!(config.house_skills, vec!["sanity"]);
        assert!(config.house_tools.is_empty());
        assert!(!config.deny_noncanonical);
    }

    #[test]
    fn house_lists_ignore_case() {
        let config = EnricherConfig {
            house_skills: vec!["Sanity".into()],
            ..EnricherConfig::default()
        };
        assert!(config.accepts_skill("sanity"));
        assert!(!config.accepts_ability("sanity"));
        assert_eq!(config.accepts_tool("lute"), None);
    }

    #[test]
    fn missing_file_falls_back() {
        let config = EnricherConfig::load_or_default(Path::new("/definitely/not/here.toml"));
        assert_eq!(config, EnricherConfig::default());
        assert!(matches!(
            EnricherConfig::load(Path::new("/definitely/not/here.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
