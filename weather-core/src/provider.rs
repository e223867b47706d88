use crate::{FailureReason, WeatherQuery, WeatherReading};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current conditions for a city.
///
/// Each call is one terminal attempt: implementations do not retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherReading, FailureReason>;
}
