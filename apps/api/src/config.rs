use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_STATS_PATH: &str = "data/github-stats.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Stats snapshot injected into the content model at startup.
    pub stats_path: PathBuf,
    /// Filler text file; the bundled filler is used when unset.
    pub filler_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            stats_path: optional_env("STATS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH)),
            filler_path: optional_env("FILLER_PATH").map(PathBuf::from),
        })
    }
}

/// Reads `key`, treating an unset or blank variable as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
