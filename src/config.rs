//! Configuration Module
//!
//! Handles loading widget configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Duration;

use crate::autocomplete::DEFAULT_SUGGESTION_LIMIT;
use crate::cache::DEFAULT_EXPIRATION_SECS;

/// Default OpenWeather current-conditions endpoint
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Widget configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeather application key
    pub api_key: String,
    /// Current-conditions endpoint
    pub api_base_url: String,
    /// Unit system passed to the API (`metric`, `imperial`, `standard`)
    pub units: String,
    /// Language for weather descriptions
    pub lang: String,
    /// Cache expiration window in seconds
    pub cache_ttl: u64,
    /// Maximum number of autocomplete suggestions
    pub suggestion_limit: usize,
    /// JSON city list
    pub cities_path: PathBuf,
    /// Backing file of the persistent cache
    pub cache_path: PathBuf,
    /// Optional fetch timeout in seconds; unset means no timeout
    pub request_timeout: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WEATHER_API_KEY` - API key (default: empty)
    /// - `WEATHER_API_URL` - Endpoint (default: OpenWeather current weather)
    /// - `WEATHER_UNITS` - Units (default: metric)
    /// - `WEATHER_LANG` - Description language (default: ru)
    /// - `CACHE_TTL_SECS` - Expiration window in seconds (default: 1800)
    /// - `SUGGESTION_LIMIT` - Suggestion count (default: 10)
    /// - `CITIES_PATH` - City list file (default: cities.json)
    /// - `CACHE_PATH` - Cache file (default: weather_cache.json)
    /// - `REQUEST_TIMEOUT_SECS` - Fetch timeout (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("WEATHER_API_KEY").unwrap_or(defaults.api_key),
            api_base_url: env::var("WEATHER_API_URL").unwrap_or(defaults.api_base_url),
            units: env::var("WEATHER_UNITS").unwrap_or(defaults.units),
            lang: env::var("WEATHER_LANG").unwrap_or(defaults.lang),
            cache_ttl: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            suggestion_limit: parse_var("SUGGESTION_LIMIT").unwrap_or(defaults.suggestion_limit),
            cities_path: env::var("CITIES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.cities_path),
            cache_path: env::var("CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_path),
            request_timeout: parse_var("REQUEST_TIMEOUT_SECS"),
        }
    }

    /// Cache expiration window. Values too large for a duration fall back to
    /// the 30 minute default.
    pub fn cache_window(&self) -> Duration {
        i64::try_from(self.cache_ttl)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(DEFAULT_EXPIRATION_SECS))
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_URL.to_string(),
            units: "metric".to_string(),
            lang: "ru".to_string(),
            cache_ttl: DEFAULT_EXPIRATION_SECS as u64,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            cities_path: PathBuf::from("cities.json"),
            cache_path: PathBuf::from("weather_cache.json"),
            request_timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 1800);
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.units, "metric");
        assert_eq!(config.lang, "ru");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_cache_window() {
        let config = Config::default();
        assert_eq!(config.cache_window(), Duration::minutes(30));

        let huge = Config {
            cache_ttl: u64::MAX,
            ..Config::default()
        };
        assert_eq!(huge.cache_window(), Duration::minutes(30));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("WEATHER_UNITS");
        env::set_var("CACHE_TTL_SECS", "60");
        env::set_var("SUGGESTION_LIMIT", "not-a-number");
        env::set_var("REQUEST_TIMEOUT_SECS", "5");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 60);
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.units, "metric");
        assert_eq!(config.request_timeout, Some(5));

        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("SUGGESTION_LIMIT");
        env::remove_var("REQUEST_TIMEOUT_SECS");
    }
}
