//! Configuration resolution: CLI flag, then environment, then default.

use std::path::PathBuf;

use component_docs::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

use crate::logging::LogConfig;

pub const ENV_DOCS_DIR: &str = "COMPONENT_DOCS_DIR";
pub const ENV_BASE_URL: &str = "COMPONENT_DOCS_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "COMPONENT_DOCS_TIMEOUT_MS";
pub const ENV_LOG_FILE: &str = "COMPONENT_DOCS_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "RUST_LOG";

/// Directory used when nothing else names one and it exists.
pub const DEFAULT_DOCS_DIR: &str = "docs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings that can be given on the command line.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Local Markdown documentation directory.
    #[arg(long, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Base URL the field pages live under.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Page fetch timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log level or filter directive (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely.
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub docs_dir: Option<PathBuf>,
    pub base_url: String,
    pub timeout_ms: u64,
    pub log: LogConfig,
}

impl ServerConfig {
    /// Resolve against the process environment.
    pub fn resolve(args: &ConfigArgs) -> Self {
        Self::resolve_with(args, |key| std::env::var(key).ok())
    }

    /// Resolve using `env` for environment lookups.
    pub fn resolve_with(args: &ConfigArgs, env: impl Fn(&str) -> Option<String>) -> Self {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let docs_dir = args
            .docs_dir
            .clone()
            .or_else(|| env(ENV_DOCS_DIR).map(PathBuf::from))
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_DOCS_DIR);
                fallback.is_dir().then_some(fallback)
            });

        let base_url = args
            .base_url
            .clone()
            .or_else(|| env(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_ms = args
            .timeout_ms
            .or_else(|| {
                let raw = env(ENV_TIMEOUT_MS)?;
                match raw.trim().parse() {
                    Ok(ms) => Some(ms),
                    Err(_) => {
                        eprintln!("Ignoring invalid {ENV_TIMEOUT_MS}={raw}");
                        None
                    }
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let log = LogConfig {
            enabled: !args.quiet,
            level: args
                .log_level
                .clone()
                .or_else(|| env(ENV_LOG_LEVEL))
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            file: args
                .log_file
                .clone()
                .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from)),
        };

        Self {
            docs_dir,
            base_url,
            timeout_ms,
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::resolve_with(&ConfigArgs::default(), env_of(&[]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.log.level, "info");
        assert!(config.log.enabled);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_env_fills_missing_flags() {
        let env = env_of(&[
            (ENV_DOCS_DIR, "/srv/docs"),
            (ENV_BASE_URL, "http://localhost:8080/fields"),
            (ENV_TIMEOUT_MS, "2500"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FILE, "/tmp/docs.log"),
        ]);
        let config = ServerConfig::resolve_with(&ConfigArgs::default(), env);
        assert_eq!(config.docs_dir, Some(PathBuf::from("/srv/docs")));
        assert_eq!(config.base_url, "http://localhost:8080/fields");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/docs.log")));
    }

    #[test]
    fn test_flags_win_over_env() {
        let args = ConfigArgs {
            docs_dir: Some(PathBuf::from("./manual")),
            base_url: Some("http://flag".into()),
            timeout_ms: Some(100),
            log_level: Some("warn".into()),
            log_file: None,
            quiet: true,
        };
        let env = env_of(&[
            (ENV_DOCS_DIR, "/srv/docs"),
            (ENV_BASE_URL, "http://env"),
            (ENV_TIMEOUT_MS, "2500"),
            (ENV_LOG_LEVEL, "debug"),
        ]);
        let config = ServerConfig::resolve_with(&args, env);
        assert_eq!(config.docs_dir, Some(PathBuf::from("./manual")));
        assert_eq!(config.base_url, "http://flag");
        assert_eq!(config.timeout_ms, 100);
        assert_eq!(config.log.level, "warn");
        assert!(!config.log.enabled);
    }

    #[test]
    fn test_bad_timeout_falls_back_to_default() {
        let config =
            ServerConfig::resolve_with(&ConfigArgs::default(), env_of(&[(ENV_TIMEOUT_MS, "soon")]));
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
