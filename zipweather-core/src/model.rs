use serde::{Deserialize, Serialize};

/// A single weather alert in effect for the resolved location.
///
/// `severity` is the first tag reported by the provider, or `不明` when the
/// provider sends no tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub alert_type: String,
    pub description: String,
    pub severity: String,
}

/// The assembled result of one resolution.
///
/// Field names are the JSON contract of the web API; `postal_code` is the
/// caller's validated input, not a normalized form. `temperature` is in
/// Celsius, `precipitation_probability` a percentage in 0–100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub postal_code: String,
    pub location_name: String,
    pub temperature: f64,
    pub precipitation_probability: f64,
    pub alerts: Vec<WeatherAlert>,
}
