//! Weather API Client
//!
//! Fetches current conditions from the OpenWeather current-weather endpoint.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, WidgetError};
use crate::weather::types::{ApiResponse, WeatherRecord};

// == Weather Source ==
/// Anything that can produce current conditions for a city name.
pub trait WeatherSource {
    fn fetch(&self, city: &str) -> impl Future<Output = Result<WeatherRecord>>;
}

// == OpenWeather Client ==
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl OpenWeatherClient {
    /// Builds a client from configuration.
    ///
    /// No request timeout is applied unless `request_timeout` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: Arc::new(builder.build()?),
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }
}

impl WeatherSource for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherRecord> {
        debug!(city, "fetching current weather");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: ApiResponse =
            serde_json::from_str(&body).map_err(|e| WidgetError::Parse(e.to_string()))?;
        let record = WeatherRecord::from(parsed);

        info!(city, temperature = record.temperature, "fetched current weather");
        Ok(record)
    }
}
