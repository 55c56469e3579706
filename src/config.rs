//! Runtime configuration utilities for quizbench.

use std::env;

use serde::Deserialize;

/// Base URL used when the environment provides none.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the quiz-generation backend.
    pub base_url: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let base_url =
            env::var("QUIZBENCH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        // Trailing slashes would double up when endpoint paths are appended.
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { base_url })
    }
}
