use thiserror::Error;

/// Every way a weather resolution can fail.
///
/// Callers match exhaustively; there is no catch-all variant. Display
/// messages are the user-facing Japanese text printed by the CLI and
/// returned in web error bodies.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The input was not a 7-digit postal code. Raised before any network
    /// call is made.
    #[error("無効な郵便番号形式です。7桁の数字を入力してください。")]
    InvalidPostalCode,

    /// The API key was empty or whitespace-only. Raised at service
    /// construction, before any network call is made.
    #[error("APIキーが設定されていません。OpenWeatherMapからAPIキーを取得してください。")]
    MissingApiKey,

    /// The provider responded with a non-success status, or a success body
    /// that could not be parsed.
    #[error("{0}")]
    Api(String),

    /// Transport-level failure: timeout, connection refused, or another
    /// error before a response was received.
    #[error("{0}")]
    Network(String),
}
