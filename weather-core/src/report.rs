use serde::Serialize;

use crate::{condition::ConditionCategory, failure::FailureReason, model::WeatherReading};

/// The three fields shown to the user after a lookup.
///
/// On failure `temperature` holds the failure message, and the other two are
/// left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub temperature: String,
    pub category: Option<ConditionCategory>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<&'static str>,
}

impl Report {
    pub fn from_result(result: &Result<WeatherReading, FailureReason>) -> Self {
        match result {
            Ok(reading) => Self::from_reading(reading),
            Err(reason) => Self::from_failure(reason),
        }
    }

    pub fn from_reading(reading: &WeatherReading) -> Self {
        Self {
            temperature: reading.display_temperature(),
            category: Some(reading.category()),
            description: reading.description().to_string(),
            location: reading.location().map(str::to_string),
            failure: None,
        }
    }

    pub fn from_failure(reason: &FailureReason) -> Self {
        Self {
            temperature: reason.to_string(),
            category: None,
            description: String::new(),
            location: None,
            failure: Some(reason.kind()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}
