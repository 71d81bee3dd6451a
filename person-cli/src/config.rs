use std::env;
use std::str::FromStr;

use person_core::{CoreError, Result};

/// How records are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CoreError::Config(format!(
                "PEOPLE_OUTPUT must be 'text' or 'json', got '{}'",
                other
            ))),
        }
    }
}

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Optional log file; tracing output is teed to it when set. Env: `PEOPLE_LOG_FILE`.
    pub log_file: Option<String>,
    /// Env: `PEOPLE_OUTPUT` (`text` | `json`), default `text`.
    pub output: OutputFormat,
}

impl AppConfig {
    /// Loads config from the environment. `json` from the command line overrides `PEOPLE_OUTPUT`.
    pub fn load(json: bool) -> Result<Self> {
        let log_file = env::var("PEOPLE_LOG_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty());
        let output = if json {
            OutputFormat::Json
        } else {
            match env::var("PEOPLE_OUTPUT") {
                Ok(value) => value.parse()?,
                Err(_) => OutputFormat::default(),
            }
        };

        Ok(Self { log_file, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("PEOPLE_LOG_FILE");
        env::remove_var("PEOPLE_OUTPUT");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = AppConfig::load(false).unwrap();

        assert!(config.log_file.is_none());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    #[serial]
    fn test_load_config_from_env() {
        clear_env();
        env::set_var("PEOPLE_LOG_FILE", "logs/people.log");
        env::set_var("PEOPLE_OUTPUT", "JSON");

        let config = AppConfig::load(false).unwrap();

        assert_eq!(config.log_file.as_deref(), Some("logs/people.log"));
        assert_eq!(config.output, OutputFormat::Json);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_json_flag_overrides_env() {
        clear_env();
        env::set_var("PEOPLE_OUTPUT", "text");

        let config = AppConfig::load(true).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_output_is_config_error() {
        clear_env();
        env::set_var("PEOPLE_OUTPUT", "yaml");

        let err = AppConfig::load(false).unwrap_err();

        assert!(matches!(err, CoreError::Config(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_log_file_is_ignored() {
        clear_env();
        env::set_var("PEOPLE_LOG_FILE", "  ");

        let config = AppConfig::load(false).unwrap();

        assert!(config.log_file.is_none());
        clear_env();
    }
}
