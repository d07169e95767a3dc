use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_LOG_FILTER: &str = "info,learner_profile=debug";

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Used when RUST_LOG is not set
    pub log_filter: String,
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(
            env::var("PROFILE_CLI_LOG").ok(),
            env::var("PROFILE_CLI_PRETTY").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, pretty: Option<String>) -> Result<Self> {
        let pretty = match pretty.as_deref() {
            None | Some("") => false,
            Some(value) => parse_flag(value)
                .with_context(|| format!("PROFILE_CLI_PRETTY must be a boolean, got {:?}", value))?,
        };

        Ok(Self {
            log_filter: log_filter
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            pretty,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
