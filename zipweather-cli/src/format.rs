//! Colored terminal rendering of a weather report.

use colored::{Color, Colorize};

use zipweather_core::{WeatherAlert, WeatherReport};

pub fn format_report(report: &WeatherReport) -> String {
    let rule = "=".repeat(50);
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push(format!(
        "天気情報 - {} (郵便番号: {})",
        report.location_name, report.postal_code
    ));
    lines.push(rule.clone());
    lines.push(String::new());

    lines.push(format!("気温: {}", format_temperature(report.temperature)));
    lines.push(format!(
        "降水確率: {}",
        format_precipitation(report.precipitation_probability)
    ));

    if !report.alerts.is_empty() {
        lines.push(String::new());
        lines.push(format_alerts(&report.alerts));
    }

    lines.push(String::new());
    lines.push(rule);

    lines.join("\n")
}

// Cold is blue, comfortable is green, hot is red.
fn temperature_color(temp: f64) -> Color {
    if temp < 10.0 {
        Color::Blue
    } else if temp < 25.0 {
        Color::Green
    } else {
        Color::Red
    }
}

// Low chance is muted, middling is yellow, likely rain is red.
fn precipitation_color(probability: f64) -> Color {
    if probability < 30.0 {
        Color::BrightBlack
    } else if probability < 70.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn format_temperature(temp: f64) -> String {
    format!("{temp:.1}°C")
        .color(temperature_color(temp))
        .to_string()
}

fn format_precipitation(probability: f64) -> String {
    format!("{probability:.0}%")
        .color(precipitation_color(probability))
        .to_string()
}

fn format_alerts(alerts: &[WeatherAlert]) -> String {
    let mut lines = Vec::new();

    lines.push("⚠ 気象警報 ⚠".white().on_red().to_string());
    lines.push(String::new());

    for alert in alerts {
        lines.push(format!("【{}】", alert.alert_type).red().to_string());
        lines.push(format!("  {}", alert.description));
        lines.push(format!("  重要度: {}", alert.severity));
        lines.push(String::new());
    }

    lines.join("\n")
}
