use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_REGISTER_URL: &str = "https://unstop.com/competitions/1170040/register";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Runtime settings for the portal controllers and the profile client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host the profile endpoint lives on, without a trailing slash.
    pub api_base_url: String,
    /// Upper bound for token acquisition plus the POST.
    pub request_timeout: Duration,
    /// Where the "Register" action of a hackathon detail points to.
    pub register_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            register_url: DEFAULT_REGISTER_URL.to_string(),
        }
    }
}

impl Config {
    /// Load settings from `HACKHUB_*` environment variables, keeping the
    /// default for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: try_load("HACKHUB_API_BASE_URL", defaults.api_base_url)
                .trim_end_matches('/')
                .to_string(),
            request_timeout: Duration::from_secs(try_load(
                "HACKHUB_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            register_url: try_load("HACKHUB_REGISTER_URL", defaults.register_url),
        }
    }

    /// Full URL of the profile submission endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.api_base_url.trim_end_matches('/'))
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
