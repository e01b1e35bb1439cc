use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A single instance that could not be torn down.
#[derive(Debug, Clone)]
pub struct TeardownFailure {
    /// Display name of the failing instance.
    pub instance: String,
    /// Why the removal failed.
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// One or more instances in a resolved batch failed to tear down.
    ///
    /// The batch is failed as a whole, but already-removed instances stay
    /// removed; a repeated call resolves again and removes whatever is
    /// left.
    #[error("teardown incomplete: {} removed, {} failed", removed.len(), failed.len())]
    Teardown {
        removed: Vec<String>,
        failed: Vec<TeardownFailure>,
    },

    #[error("plugin '{plugin}' failed: {message}")]
    Plugin {
        plugin: &'static str,
        message: String,
    },

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
