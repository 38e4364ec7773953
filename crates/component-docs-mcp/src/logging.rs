//! Tracing subscriber setup.
//!
//! Stdout carries the RPC stream, so log lines go to stderr or to an
//! append-only file.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_LEVEL;
use crate::types::{McpError, McpResult};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub enabled: bool,
    /// Level name or full `EnvFilter` directive.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|e| {
            eprintln!("Invalid log level '{}': {e}; using {DEFAULT_LOG_LEVEL}", self.level);
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        })
    }
}

/// Install the global subscriber described by `config`.
pub fn init(config: &LogConfig) -> McpResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let builder = tracing_subscriber::fmt().with_env_filter(config.filter());

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| McpError::InternalError(format!("logging setup failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LogConfig {
            enabled: false,
            ..LogConfig::default()
        };
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_unopenable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            file: Some(dir.path().join("missing").join("server.log")),
            ..LogConfig::default()
        };
        assert!(matches!(init(&config), Err(McpError::Io(_))));
    }
}
