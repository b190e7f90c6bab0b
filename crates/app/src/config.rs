//! Configuration

use std::{env, time::Duration};

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Settings for reaching the POS backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend API, e.g. `http://localhost:5000/api`.
    pub base_url: String,

    /// Upper bound on any single request, order submission included. A hung
    /// submission surfaces as a transport failure instead of leaving the
    /// checkout stuck in flight.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ApiConfig {
    /// Load settings from the environment, after a best-effort `.env` load.
    ///
    /// `TILL_API_URL` overrides the base URL and `TILL_API_TIMEOUT_SECONDS`
    /// the request timeout; both fall back to the defaults when unset or
    /// unparseable.
    pub fn from_env() -> Self {
        let _env = dotenvy::dotenv();

        Self {
            base_url: env::var("TILL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
            timeout: timeout_from(env::var("TILL_API_TIMEOUT_SECONDS").ok()),
        }
    }
}

fn timeout_from(raw: Option<String>) -> Duration {
    raw.and_then(|value| value.parse().ok())
        .map_or(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS), Duration::from_secs)
}
