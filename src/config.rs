//! User configuration — loads optional ~/.beepc/config.yaml.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What the compiler writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 8-bit mono WAV file.
    #[default]
    Wav,
    /// A `beep` command line.
    Beep,
}

/// Configuration loaded from ~/.beepc/config.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Directory for output files when no explicit path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format when none is given on the command line.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Get the config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".beepc").join("config.yaml"))
}

/// Load configuration from ~/.beepc/config.yaml.
///
/// A missing file (or no home directory) gives the defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load configuration from `path`, falling back to defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.format, OutputFormat::Wav);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_yaml_config() {
        let yaml = r#"
output_dir: /tmp/music
format: beep
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/music"));
        assert_eq!(config.format, OutputFormat::Beep);
    }

    #[test]
    fn partial_yaml_config() {
        let config: Config = serde_yaml::from_str("format: wav\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output_dir: songs\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("songs"));
        assert_eq!(config.format, OutputFormat::Wav);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "format: [not, a, format]\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
