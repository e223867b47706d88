use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{
    config::ApiSettings,
    failure::FailureReason,
    interpret::{HttpOutcome, TransportFailure, interpret},
    model::{WeatherQuery, WeatherReading},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { api_key: settings.api_key, base_url: settings.base_url, http })
    }

    /// Perform the request and capture whatever came back, without judging it.
    async fn fetch(&self, city: &str) -> HttpOutcome {
        let sent = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await;

        let res = match sent {
            Ok(res) => res,
            Err(err) => return HttpOutcome::Transport(TransportFailure::from(err)),
        };

        let status = res.status().as_u16();
        debug!(status, "OpenWeather responded");

        match res.text().await {
            Ok(body) => HttpOutcome::Response { status, body },
            Err(err) => HttpOutcome::Transport(TransportFailure::from(err)),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReading, FailureReason> {
        info!(city = query.city(), "requesting current weather");

        let result = interpret(self.fetch(query.city()).await);

        match &result {
            Ok(reading) => debug!(
                code = reading.condition_code(),
                kelvin = reading.temperature_kelvin(),
                "weather lookup succeeded"
            ),
            Err(reason) => {
                warn!(kind = reason.kind(), status = ?reason.status(), "weather lookup failed")
            }
        }

        result
    }
}
