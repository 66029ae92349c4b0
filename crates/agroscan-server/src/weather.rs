//! Open-Meteo forecast passthrough client.

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const HOURLY_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation_probability";
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,wind_speed_10m_max,precipitation_probability_max";

/// HTTP client for the upstream forecast API.
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, timeout_s: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_s))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the hourly and daily forecast for a position.
    ///
    /// The upstream payload is forwarded verbatim; interpreting it is the
    /// caller's problem.
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<Value> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .context("weather request failed")?;

        if !response.status().is_success() {
            anyhow::bail!("weather upstream returned {}", response.status());
        }

        response
            .json()
            .await
            .context("weather response was not JSON")
    }
}
