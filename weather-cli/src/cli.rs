use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::process::ExitCode;
use tracing::debug;
use weather_core::{
    ApiSettings, Config, OpenWeatherProvider, Report, WeatherProvider, WeatherQuery,
    config::OPENWEATHER_CURRENT_URL,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and endpoint in the config file.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, json } => show(&city, json).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn show(city: &str, json: bool) -> anyhow::Result<ExitCode> {
    let query = WeatherQuery::new(city)?;

    let stored = Config::load()?;
    let settings = ApiSettings::from_env(&stored)?;
    debug!(base_url = %settings.base_url, timeout = ?settings.timeout, "resolved settings");

    let provider = OpenWeatherProvider::new(settings)?;
    let result = provider.current(&query).await;
    let report = Report::from_result(&result);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        println!("{}", render::text(&report, result.as_ref().ok()));
    }

    Ok(if report.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_url = cfg.base_url.clone().unwrap_or_else(|| OPENWEATHER_CURRENT_URL.to_string());
    let base_url = Text::new("Base URL:")
        .with_default(&default_url)
        .prompt()
        .context("Failed to read base URL")?;

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        cfg.api_key = Some(api_key.to_string());
    }
    cfg.base_url = Some(base_url.trim().to_string());

    let path = cfg.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
