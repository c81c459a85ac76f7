use zipweather_core::Config;

/// Shared state of the web server: the settings loaded at startup.
/// Everything else is created per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
