//! Configuration loading and logging initialization.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub runtime: RuntimeConfig,
    /// Function gateway; absent when function workloads are not in use.
    pub functions: Option<FunctionsConfig>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    pub api_url: String,
}

#[derive(Debug, Deserialize)]
pub struct FunctionsConfig {
    pub api_url: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig {
                api_url: "http://127.0.0.1:7123".into(),
            },
            functions: None,
            logging: LoggingConfig {
                level: "info".into(),
                format: "pretty".into(),
            },
        }
    }
}

impl Config {
    /// Default config path: `~/.config/berth/config.toml`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("berth")
            .join("config.toml")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.runtime.api_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "runtime.api_url",
            }
            .into());
        }
        Url::parse(&self.runtime.api_url).map_err(|e| ConfigError::InvalidValue {
            field: "runtime.api_url",
            reason: e.to_string(),
        })?;
        if let Some(functions) = &self.functions {
            Url::parse(&functions.api_url).map_err(|e| ConfigError::InvalidValue {
                field: "functions.api_url",
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::error::Error;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn loads_minimal_config() {
        let file = write_config(
            "[runtime]\napi_url = \"http://127.0.0.1:7123\"\n\n[logging]\nlevel = \"info\"\nformat = \"pretty\"\n",
        );

        let config = Config::load(file.path()).unwrap();
        assert!(config.functions.is_none());
        assert_eq!(config.runtime.api_url, "http://127.0.0.1:7123");
    }

    #[test]
    fn loads_functions_section_when_present() {
        let file = write_config(
            "[runtime]\napi_url = \"http://127.0.0.1:7123\"\n\n[functions]\napi_url = \"http://127.0.0.1:7124\"\n\n[logging]\nlevel = \"info\"\nformat = \"json\"\n",
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.functions.map(|f| f.api_url),
            Some("http://127.0.0.1:7124".to_string())
        );
    }

    #[test]
    fn rejects_unparseable_runtime_url() {
        let file = write_config(
            "[runtime]\napi_url = \"not a url\"\n\n[logging]\nlevel = \"info\"\nformat = \"pretty\"\n",
        );

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "runtime.api_url",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load("/nonexistent/berth.toml").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
    }

    #[test]
    fn default_config_passes_validation() {
        Config::default().validate().unwrap();
    }
}
