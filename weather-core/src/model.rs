use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::condition::{ConditionCategory, classify};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("City name must not be empty")]
    EmptyCity,
}

/// A single lookup, created per user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    pub fn new(city: &str) -> Result<Self, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current conditions extracted from a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    temperature_kelvin: f64,
    condition_code: i32,
    description: String,
    location: Option<String>,
    observed_at: Option<DateTime<Utc>>,
}

impl WeatherReading {
    pub fn new(
        temperature_kelvin: f64,
        condition_code: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            temperature_kelvin,
            condition_code,
            description: description.into(),
            location: None,
            observed_at: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = Some(observed_at);
        self
    }

    pub fn temperature_kelvin(&self) -> f64 {
        self.temperature_kelvin
    }

    pub fn condition_code(&self) -> i32 {
        self.condition_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.observed_at
    }

    /// Temperature in Celsius, unrounded.
    pub fn celsius(&self) -> f64 {
        self.temperature_kelvin - KELVIN_OFFSET
    }

    /// Temperature rounded to a whole degree, e.g. `27°C`. Exact halves
    /// round to the even neighbour.
    pub fn display_temperature(&self) -> String {
        // Going through i64 keeps -0.4 from printing as "-0".
        let degrees = self.celsius().round_ties_even() as i64;
        format!("{degrees}°C")
    }

    pub fn category(&self) -> ConditionCategory {
        classify(self.condition_code)
    }
}
