//! Terminal rendering of a search outcome

use application::{SearchError, SearchErrorKind};
use domain::chart::MAX_BAR_HEIGHT;
use domain::{BarHeights, DisplayWeather};
use serde::Serialize;

/// Width of the weekly range bars, in terminal columns
const BAR_COLUMNS: usize = 24;

/// Render the forecast as plain text
pub fn render_text(weather: &DisplayWeather) -> String {
    let current = &weather.current;
    let mut lines = vec![
        format!("📍 {}", weather.place.label()),
        String::new(),
        format!(
            "{}  {}°  ({})",
            weather.condition.icon.emoji(),
            current.rounded_temp(),
            weather.condition.icon.glyph()
        ),
        weather.headline(),
        format!(
            "Sensação térmica {}°  ·  Umidade {}  ·  Vento {} km/h",
            current.rounded_feels_like(),
            current.humidity,
            current.wind_speed.rounded_kmh()
        ),
        String::new(),
        "Previsão de 7 dias".to_string(),
    ];

    for (day, bar) in weather.week.iter().zip(&weather.chart.bars) {
        lines.push(format!(
            "{:<4} {:>4}° {:>4}°  ▕{}▏ {}",
            day.weekday_label(),
            day.rounded_max(),
            day.rounded_min(),
            range_bar(bar),
            day.icon.emoji()
        ));
    }

    lines.join("\n")
}

/// Render the forecast as pretty JSON
pub fn render_json(weather: &DisplayWeather) -> serde_json::Result<String> {
    serde_json::to_string_pretty(weather)
}

#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    kind: SearchErrorKind,
    message: &'a str,
    detail: String,
}

/// Render a search error as pretty JSON
pub fn render_error_json(err: &SearchError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "error": ErrorOutput {
            kind: err.kind(),
            message: err.user_message(),
            detail: err.to_string(),
        }
    }))
}

/// Columns a bar of `height` reaches
#[allow(clippy::cast_sign_loss)]
fn columns(height: f64) -> usize {
    let scaled = (height / MAX_BAR_HEIGHT * BAR_COLUMNS as f64).round();
    if scaled.is_finite() {
        (scaled.max(0.0) as usize).min(BAR_COLUMNS)
    } else {
        0
    }
}

/// One day's min-to-max span, at least one column wide
fn range_bar(bar: &BarHeights) -> String {
    let start = columns(bar.min).min(BAR_COLUMNS - 1);
    let end = columns(bar.max).max(start + 1);
    format!(
        "{}{}{}",
        " ".repeat(start),
        "█".repeat(end - start),
        " ".repeat(BAR_COLUMNS - end)
    )
}
