//! TOML configuration: credentials plus a few output knobs.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub username: String,
    pub password: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Language slug passed when fetching the latest submission.
    #[serde(default = "default_language")]
    pub language: String,
    /// Site root. Only overridden in tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("solutions")
}

fn default_language() -> String {
    "javascript".to_string()
}

fn default_base_url() -> String {
    "https://leetcode-cn.com".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_optional_keys() {
        let config: Config = toml::from_str(
            r#"
            username = "grace"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("solutions"));
        assert_eq!(config.language, "javascript");
        assert_eq!(config.base_url, "https://leetcode-cn.com");
    }

    #[test]
    fn missing_credential_names_the_key() {
        let err = toml::from_str::<Config>(r#"username = "grace""#).unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn load_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "username = \"grace\"\npassword = \"hunter2\"\noutput_dir = \"docs\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.username, "grace");
        assert_eq!(config.output_dir, PathBuf::from("docs"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
