//! Configuration loading
//!
//! Settings are layered, later sources winning:
//! 1. built-in defaults
//! 2. `neu.toml` (or any format `config` understands) in the working
//!    directory, or the file named by `NEU_CONFIG_PATH`
//! 3. `NEU_*` environment variables (a `.env` file is loaded first)
//!
//! Command-line flags are applied on top by the CLI.

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for `neu`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Surface nucleus faults instead of unwinding
    #[serde(default)]
    pub debug: bool,

    /// Reject unrecognized instructions at read time
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// Level marker, a single character
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Inputs that end the session
    #[serde(default = "default_quit_words")]
    pub quit_words: Vec<String>,

    /// Outline read and thought before the interactive shell starts
    #[serde(default)]
    pub startup_script: Option<PathBuf>,
}

fn default_strict() -> bool {
    true
}

fn default_marker() -> String {
    "*".to_string()
}

fn default_quit_words() -> Vec<String> {
    vec!["quit".to_string(), "exit".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            strict: default_strict(),
            marker: default_marker(),
            quit_words: default_quit_words(),
            startup_script: None,
        }
    }
}

impl Config {
    /// Load configuration from `.env`, `NEU_CONFIG_PATH` or `neu.*`, and `NEU_*`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path = std::env::var("NEU_CONFIG_PATH").ok();
        Self::load_from(path.as_deref())
    }

    /// Load configuration from an explicit file (required) or the default
    /// search (optional), plus the environment
    pub fn load_from(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name("neu").required(false),
        };

        let config: Config = config::Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("NEU")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("quit_words"),
            )
            .build()?
            .try_deserialize()?;

        config.marker_char()?;
        Ok(config)
    }

    /// The marker as a character
    pub fn marker_char(&self) -> Result<char, ConfigError> {
        let mut chars = self.marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(c),
            _ => Err(ConfigError::Message(format!(
                "marker must be a single non-space character, got '{}'",
                self.marker
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.debug);
        assert!(config.strict);
        assert_eq!(config.marker_char().unwrap(), '*');
        assert_eq!(config.quit_words, vec!["quit", "exit"]);
        assert_eq!(config.startup_script, None);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r##"
debug = true
strict = false
marker = "#"
quit_words = ["bye"]
startup_script = "start.neu"
"##,
        );

        let config = Config::load_from(file.path().to_str()).unwrap();
        assert!(config.debug);
        assert!(!config.strict);
        assert_eq!(config.marker_char().unwrap(), '#');
        assert_eq!(config.quit_words, vec!["bye"]);
        assert_eq!(config.startup_script, Some(PathBuf::from("start.neu")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("debug = true\n");

        let config = Config::load_from(file.path().to_str()).unwrap();
        assert!(config.debug);
        assert!(config.strict);
        assert_eq!(config.marker, "*");
    }

    #[test]
    fn test_bad_marker_rejected() {
        let file = write_config("marker = \"**\"\n");
        assert!(Config::load_from(file.path().to_str()).is_err());

        let config = Config {
            marker: " ".to_string(),
            ..Config::default()
        };
        assert!(config.marker_char().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Config::load_from(Some("/nonexistent/neu-config.toml")).is_err());
    }
}
