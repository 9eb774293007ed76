use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CARD_API_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Endpoint of the external card database (`cardinfo.php`).
    pub card_api_url: Url,
    /// Per-request timeout for card lookups; reqwest's default (none) when unset.
    pub card_api_timeout: Option<Duration>,

    /// Origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: optional_var("PORT")
                .map(|value| parse_var("PORT", value))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),
            card_api_url: parse_url(
                optional_var("CARD_API_URL").unwrap_or_else(|| DEFAULT_CARD_API_URL.to_string()),
            )?,
            card_api_timeout: optional_var("CARD_API_TIMEOUT_SECS")
                .map(|value| parse_var::<u64>("CARD_API_TIMEOUT_SECS", value))
                .transpose()?
                .map(Duration::from_secs),
            cors_allowed_origin: optional_var("CORS_ALLOWED_ORIGIN"),
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
        value,
    })
}

fn parse_url(value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CARD_API_URL".to_string(),
        reason: e.to_string(),
        value,
    })
}
