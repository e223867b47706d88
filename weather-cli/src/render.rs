use chrono::Local;
use weather_core::{Report, WeatherReading};

/// Plain-text rendering of a report: temperature, icon line, description.
pub fn text(report: &Report, reading: Option<&WeatherReading>) -> String {
    let mut lines = Vec::new();

    if let Some(location) = &report.location {
        lines.push(location.clone());
    }

    lines.push(report.temperature.clone());

    if let Some(category) = report.category {
        lines.push(format!("{} {}", category.emoji(), category));
    }

    if !report.description.is_empty() {
        lines.push(report.description.clone());
    }

    if let Some(observed) = reading.and_then(WeatherReading::observed_at) {
        lines.push(format!(
            "observed {}",
            observed.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }

    lines.join("\n")
}
