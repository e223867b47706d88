//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Condition-code classification and the failure taxonomy
//! - Interpretation of raw HTTP outcomes into readings or failures
//! - Configuration (environment and on-disk) for the weather API
//! - The OpenWeather provider and the display-ready [`Report`]
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod failure;
pub mod interpret;
pub mod model;
pub mod provider;
pub mod report;

pub use condition::{ConditionCategory, classify};
pub use config::{ApiSettings, Config, ConfigError};
pub use failure::FailureReason;
pub use interpret::{HttpOutcome, TransportFailure, interpret};
pub use model::{QueryError, WeatherQuery, WeatherReading};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use report::Report;
