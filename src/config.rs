use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_CONFIG: &str = "DECO_CONFIG";
pub const ENV_TRACE_INDENT: &str = "DECO_TRACE_INDENT";
pub const ENV_MEMO: &str = "DECO_MEMO";
pub const ENV_FIB_N: &str = "DECO_FIB_N";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Settings for the demo binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// One level of trace indentation.
    pub trace_indent: String,
    /// When false every memoization layer is swapped for `Disable`.
    pub memoize: bool,
    /// Argument of the traced Fibonacci call in the demo.
    pub fib_n: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            trace_indent: "####".to_string(),
            memoize: true,
            fib_n: 5,
        }
    }
}

impl DemoConfig {
    /// Defaults, then the JSON file named by `DECO_CONFIG`, then the
    /// individual `DECO_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };

        if let Some(indent) = lookup(ENV_TRACE_INDENT) {
            config.trace_indent = indent;
        }
        if let Some(value) = lookup(ENV_MEMO) {
            config.memoize = parse_flag(ENV_MEMO, value)?;
        }
        if let Some(value) = lookup(ENV_FIB_N) {
            config.fib_n = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv { var: ENV_FIB_N, value })?;
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidEnv { var, value }),
    }
}
