//! Configuration loaded from environment variables.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory searched for bare form definition names (default: ./forms).
    pub definitions_dir: PathBuf,

    /// Pretty-print JSON output (default: true).
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let definitions_dir = lookup("CUSTOMFORM_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./forms"));

        let pretty = lookup("CUSTOMFORM_PRETTY")
            .unwrap_or_else(|| "true".to_string())
            .to_lowercase()
            .parse()
            .context("CUSTOMFORM_PRETTY must be true or false")?;

        Ok(Self {
            definitions_dir,
            pretty,
        })
    }

    /// Resolve a definition argument to a file path.
    ///
    /// A bare name such as `survey` becomes `<definitions_dir>/survey.toml`;
    /// anything with an extension or a path separator is used as given.
    pub fn resolve_definition(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.extension().is_some() || path.components().count() > 1 {
            path.to_path_buf()
        } else {
            self.definitions_dir.join(format!("{name}.toml"))
        }
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.definitions_dir, PathBuf::from("./forms"));
        assert!(config.pretty);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[("CUSTOMFORM_DIR", "/srv/forms"), ("CUSTOMFORM_PRETTY", "FALSE")])
            .unwrap();
        assert_eq!(config.definitions_dir, PathBuf::from("/srv/forms"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_invalid_pretty() {
        assert!(config(&[("CUSTOMFORM_PRETTY", "sometimes")]).is_err());
    }

    #[test]
    fn test_resolve_definition() {
        let config = config(&[("CUSTOMFORM_DIR", "/srv/forms")]).unwrap();
        assert_eq!(
            config.resolve_definition("survey"),
            PathBuf::from("/srv/forms/survey.toml")
        );
        assert_eq!(
            config.resolve_definition("local/survey.toml"),
            PathBuf::from("local/survey.toml")
        );
        assert_eq!(
            config.resolve_definition("other.toml"),
            PathBuf::from("other.toml")
        );
    }
}
