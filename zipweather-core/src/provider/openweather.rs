use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::alert::classify_alert_type;
use crate::error::WeatherError;
use crate::model::WeatherAlert;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const GEOCODING_PATH: &str = "/geo/1.0/zip";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const ONE_CALL_PATH: &str = "/data/3.0/onecall";

/// Postal codes are resolved within this country only.
const COUNTRY_CODE: &str = "JP";

/// Every request runs to completion or this deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sentinel used when the provider omits a value.
const UNKNOWN: &str = "不明";

/// Geocoding result: where a postal code points, plus the place name.
/// Consumed immediately by the conditions and alerts fetches, never stored.
#[derive(Debug, Clone)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub place_name: String,
}

/// Temperature plus the best-effort precipitation probability.
#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub precipitation_probability: f64,
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Tests use this to stand up a
    /// local mock server in place of the real provider.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Resolve a postal code to coordinates and a place name.
    pub async fn geocode(&self, postal_code: &str) -> Result<Coordinates, WeatherError> {
        let url = format!("{}{}", self.base_url, GEOCODING_PATH);
        let zip = format!("{postal_code},{COUNTRY_CODE}");

        let parsed: GeoResponse = self
            .get_json(&url, &[("zip", zip), ("appid", self.api_key.clone())])
            .await?;

        Ok(Coordinates {
            latitude: parsed.lat,
            longitude: parsed.lon,
            place_name: parsed.name.unwrap_or_else(|| UNKNOWN.to_string()),
        })
    }

    /// Fetch the current temperature, then try to enrich it with the
    /// near-term precipitation probability from the one-call endpoint.
    ///
    /// The temperature request is mandatory and its errors propagate; the
    /// precipitation request is best-effort and degrades to 0.0.
    pub async fn current_conditions(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let parsed: CurrentResponse = self
            .get_json(
                &url,
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("appid", self.api_key.clone()),
                    ("units", "metric".to_string()),
                    ("lang", "ja".to_string()),
                ],
            )
            .await?;

        let precipitation_probability = match self.fetch_one_call(lat, lon).await {
            Ok(one_call) => one_call
                .hourly
                .as_deref()
                .and_then(|hourly| hourly.first())
                .and_then(|hour| hour.pop)
                .unwrap_or(0.0)
                * 100.0,
            Err(err) => {
                warn!("precipitation probability unavailable: {err}");
                0.0
            }
        };

        Ok(CurrentConditions {
            temperature: parsed.main.temp,
            precipitation_probability,
        })
    }

    /// Fetch the active alerts for a location.
    ///
    /// The whole fetch is best-effort: any failure degrades to an empty
    /// list, so alerts can never abort an otherwise-successful resolution.
    pub async fn weather_alerts(&self, lat: f64, lon: f64) -> Vec<WeatherAlert> {
        match self.fetch_one_call(lat, lon).await {
            Ok(one_call) => one_call
                .alerts
                .unwrap_or_default()
                .into_iter()
                .map(|raw| {
                    let event = raw.event.unwrap_or_default().to_lowercase();

                    WeatherAlert {
                        alert_type: classify_alert_type(&event),
                        description: raw.description.unwrap_or_default(),
                        severity: raw
                            .tags
                            .filter(|tags| !tags.is_empty())
                            .map(|mut tags| tags.remove(0))
                            .unwrap_or_else(|| UNKNOWN.to_string()),
                    }
                })
                .collect(),
            Err(err) => {
                warn!("weather alerts unavailable: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch_one_call(&self, lat: f64, lon: f64) -> Result<OneCallResponse, WeatherError> {
        let url = format!("{}{}", self.base_url, ONE_CALL_PATH);

        self.get_json(
            &url,
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("exclude", "minutely,daily".to_string()),
                ("units", "metric".to_string()),
                ("lang", "ja".to_string()),
            ],
        )
        .await
    }

    /// Issue one GET and decode the body. Every endpoint call goes through
    /// here; the status-to-error mapping below is the only one.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        debug!("requesting {url}");

        let res = self
            .http
            .get(url)
            .query(params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(network_error)?;

        let status = res.status();
        let body = res.text().await.map_err(network_error)?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| WeatherError::Api(format!("APIレスポンスの解析に失敗しました: {e}")))
    }
}

/// The authoritative status-to-error table, applied identically to every
/// endpoint.
fn api_error(status: StatusCode, body: &str) -> WeatherError {
    let message = match status.as_u16() {
        401 => "無効なAPIキーです。設定を確認してください。".to_string(),
        404 => "指定された場所のデータが見つかりませんでした。".to_string(),
        429 => "APIレート制限を超えました。しばらく待ってから再試行してください。".to_string(),
        500..=599 => "天気サービスが一時的に利用できません。後でもう一度お試しください。".to_string(),
        code => format!(
            "天気サービスがエラーを返しました (ステータス {code}): {}",
            truncate_body(body)
        ),
    };

    WeatherError::Api(message)
}

fn network_error(err: reqwest::Error) -> WeatherError {
    if err.is_timeout() || err.is_connect() {
        WeatherError::Network(
            "ネットワーク接続に失敗しました。インターネット接続を確認してください。".to_string(),
        )
    } else {
        WeatherError::Network(format!("ネットワーク接続に失敗しました: {err}"))
    }
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    lat: f64,
    lon: f64,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    main: CurrentMain,
}

#[derive(Debug, Deserialize)]
struct OneCallHour {
    pop: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OneCallAlert {
    event: Option<String>,
    description: Option<String>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    hourly: Option<Vec<OneCallHour>>,
    alerts: Option<Vec<OneCallAlert>>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
