//! Pipeline configuration, loaded from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Input configuration for one pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URL of the zip archive to fetch.
    pub url: String,

    /// Version string reported in the gallery footer.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "dev".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_url_and_version() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"url": "https://example.com/icons.zip", "version": "14.0"}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.url, "https://example.com/icons.zip");
        assert_eq!(config.version, "14.0");
    }

    #[test]
    fn version_defaults_when_absent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"url": "https://example.com/icons.zip"}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.version, "dev");
    }

    #[test]
    fn missing_url_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"version": "14.0"}}"#).unwrap();

        assert!(Config::load(file.path()).is_err());
    }
}
