//! # Client Configuration Module
//!
//! Loads the settings of the provider client from environment variables,
//! falling back to defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_URL`: Base URL of the provider service (default: "http://localhost:3001/")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Whole-request timeout (default: none)
//! - `CLEAR_ERROR_ON_SUCCESS`: Clear the error message after a successful operation (default: false)

use std::{env, time::Duration};

use eyre::{Result, WrapErr};
use telehealth_core::state::ErrorPolicy;
use tracing::Level;
use url::Url;

use crate::http::with_trailing_slash;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/";

/// Configuration for the provider client
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use telehealth_client::config::ClientConfig;
///
/// fn example() -> Result<()> {
///     let config = ClientConfig::from_env()?;
///     println!("Talking to {}", config.api_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is resolved against
    pub api_url: Url,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout; `None` leaves reqwest's defaults in place
    pub request_timeout: Option<Duration>,

    /// Whether a success clears the error slot
    pub error_policy: ErrorPolicy,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `API_URL` is set but is not a valid URL
    /// - `API_REQUEST_TIMEOUT_SECONDS` is set but is not a whole number
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = var("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url =
            Url::parse(&raw_url).wrap_err_with(|| format!("Invalid API_URL value: {}", raw_url))?;

        let log_level = match var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")
            })
            .transpose()?;

        let error_policy = match var("CLEAR_ERROR_ON_SUCCESS").as_deref().map(str::trim) {
            Some("true") | Some("1") => ErrorPolicy::ClearOnSuccess,
            _ => ErrorPolicy::Sticky,
        };

        Ok(Self {
            api_url: with_trailing_slash(api_url),
            log_level,
            request_timeout,
            error_policy,
        })
    }
}
