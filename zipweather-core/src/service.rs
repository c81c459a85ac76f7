use tracing::debug;

use crate::error::WeatherError;
use crate::model::WeatherReport;
use crate::provider::OpenWeatherClient;

/// Resolves a postal code into a [`WeatherReport`] by sequencing the
/// geocoding, current-conditions, and alert fetches.
///
/// The pipeline is linear and single-attempt: validation, then geocoding,
/// then conditions (both mandatory), then alerts (best-effort). Nothing is
/// retried and nothing is cached; concurrent resolutions share no state
/// beyond the immutable credential.
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: OpenWeatherClient,
}

impl WeatherService {
    /// Build a service around an OpenWeatherMap API key.
    ///
    /// The key is trimmed; an empty or whitespace-only key fails with
    /// [`WeatherError::MissingApiKey`] before any request is made.
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        Ok(Self {
            client: OpenWeatherClient::new(api_key.to_string()),
        })
    }

    /// Like [`WeatherService::new`], but with the provider host replaced.
    /// Tests point this at a local mock server.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        Ok(Self {
            client: OpenWeatherClient::with_base_url(api_key.to_string(), base_url.to_string()),
        })
    }

    /// Resolve a postal code into a weather report.
    pub async fn weather_for_postal_code(
        &self,
        postal_code: &str,
    ) -> Result<WeatherReport, WeatherError> {
        validate_postal_code(postal_code)?;

        let location = self.client.geocode(postal_code).await?;
        debug!(
            "postal code {postal_code} resolved to {} ({}, {})",
            location.place_name, location.latitude, location.longitude
        );

        let conditions = self
            .client
            .current_conditions(location.latitude, location.longitude)
            .await?;

        let alerts = self
            .client
            .weather_alerts(location.latitude, location.longitude)
            .await;

        Ok(WeatherReport {
            postal_code: postal_code.to_string(),
            location_name: location.place_name,
            temperature: conditions.temperature,
            precipitation_probability: conditions.precipitation_probability,
            alerts,
        })
    }
}

/// Accepts exactly 7 ASCII digits; everything else is
/// [`WeatherError::InvalidPostalCode`]. Runs before any network call so a
/// malformed input never costs a request.
pub fn validate_postal_code(postal_code: &str) -> Result<(), WeatherError> {
    if postal_code.len() == 7 && postal_code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(WeatherError::InvalidPostalCode)
    }
}
