//! Request handlers for the form page and the weather JSON API.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::warn;

use zipweather_core::{WeatherError, WeatherService};

use crate::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// GET /: the lookup form, pre-filled with the stored default postal code.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let default_postal_code = state.config.default_postal_code().unwrap_or_default();

    Html(INDEX_TEMPLATE.replace("{{default_postal_code}}", &escape_html(default_postal_code)))
}

/// POST /api/weather: resolve a postal code and return the report as JSON.
///
/// 400 carries missing/invalid input, 500 carries everything else; both use
/// an `{"error": …}` body. Success is `{"success": true, "data": …}`.
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Json(query): Json<WeatherQuery>,
) -> (StatusCode, Json<Value>) {
    let requested = query.postal_code.unwrap_or_default().trim().to_string();

    let postal_code = if requested.is_empty() {
        match state.config.default_postal_code() {
            Some(code) => code.to_string(),
            None => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "郵便番号が指定されていません",
                );
            }
        }
    } else {
        requested
    };

    let Some(api_key) = state.config.api_key() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &WeatherError::MissingApiKey.to_string(),
        );
    };

    let service = match WeatherService::new(api_key) {
        Ok(service) => service,
        Err(err) => return weather_error_response(&err),
    };

    match service.weather_for_postal_code(&postal_code).await {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": report })),
        ),
        Err(err) => {
            warn!("weather lookup for {postal_code} failed: {err}");
            weather_error_response(&err)
        }
    }
}

fn weather_error_response(err: &WeatherError) -> (StatusCode, Json<Value>) {
    let status = match err {
        WeatherError::InvalidPostalCode => StatusCode::BAD_REQUEST,
        WeatherError::MissingApiKey | WeatherError::Api(_) | WeatherError::Network(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    error_response(status, &err.to_string())
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
