//! Turns the raw result of an HTTP exchange into either a [`WeatherReading`]
//! or a [`FailureReason`].
//!
//! Nothing here touches the network or the environment, so every branch can
//! be exercised with hand-built [`HttpOutcome`] values.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::{failure::FailureReason, model::WeatherReading};

/// Everything the interpreter needs to know about one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    /// A response arrived, whatever its status.
    Response { status: u16, body: String },
    /// No response was received.
    Transport(TransportFailure),
}

/// Why no response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Connect,
    Timeout,
    Redirect,
    Other(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        // A connect timeout reports both; it counts as a connection failure.
        if err.is_connect() {
            TransportFailure::Connect
        } else if err.is_timeout() {
            TransportFailure::Timeout
        } else if err.is_redirect() {
            TransportFailure::Redirect
        } else {
            // The request URL carries the API key.
            TransportFailure::Other(err.without_url().to_string())
        }
    }
}

impl From<TransportFailure> for FailureReason {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Connect => FailureReason::Connection,
            TransportFailure::Timeout => FailureReason::Timeout,
            TransportFailure::Redirect => FailureReason::TooManyRedirects,
            TransportFailure::Other(detail) => FailureReason::OtherRequest(detail),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: Option<i32>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    cod: Option<Value>,
    name: Option<String>,
    dt: Option<i64>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

const SUCCESS_CODE: i64 = 200;

/// Interpret one HTTP exchange.
pub fn interpret(outcome: HttpOutcome) -> Result<WeatherReading, FailureReason> {
    match outcome {
        HttpOutcome::Transport(failure) => Err(failure.into()),
        HttpOutcome::Response { status, body } => {
            if !(200..300).contains(&status) {
                return Err(FailureReason::from_status(status));
            }
            parse_current(&body)
        }
    }
}

fn parse_current(body: &str) -> Result<WeatherReading, FailureReason> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|err| FailureReason::MalformedResponse(format!("invalid JSON: {err}")))?;

    check_code(parsed.cod.as_ref())?;

    let temp = parsed
        .main
        .and_then(|main| main.temp)
        .ok_or_else(|| malformed("missing main.temp"))?;

    let weather = parsed.weather.into_iter().next().ok_or_else(|| malformed("missing weather[0]"))?;
    let id = weather.id.ok_or_else(|| malformed("missing weather[0].id"))?;
    let description = weather
        .description
        .ok_or_else(|| malformed("missing weather[0].description"))?;

    let mut reading = WeatherReading::new(temp, id, description);
    if let Some(name) = parsed.name.filter(|n| !n.is_empty()) {
        reading = reading.with_location(name);
    }
    if let Some(observed_at) = parsed.dt.and_then(|ts| DateTime::from_timestamp(ts, 0)) {
        reading = reading.with_observed_at(observed_at);
    }

    Ok(reading)
}

/// OpenWeather sends `cod` as a number on success and sometimes as a string.
fn check_code(cod: Option<&Value>) -> Result<(), FailureReason> {
    let cod = cod.ok_or_else(|| malformed("missing cod"))?;
    let (code, shown) = match cod {
        Value::String(s) => (s.trim().parse::<i64>().ok(), s.clone()),
        other => (other.as_i64(), other.to_string()),
    };

    if code == Some(SUCCESS_CODE) {
        Ok(())
    } else {
        Err(FailureReason::UnexpectedCode(shown))
    }
}

fn malformed(detail: &str) -> FailureReason {
    FailureReason::MalformedResponse(detail.to_string())
}
