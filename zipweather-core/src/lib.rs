//! Core library for the `zipweather` postal-code weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client (geocoding, current conditions, forecast)
//! - The resolution pipeline turning a postal code into a weather report
//! - Shared domain models and the error taxonomy
//!
//! It is used by `zipweather-cli` and `zipweather-web`, but can also be
//! reused by other binaries or services.

pub mod alert;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use config::Config;
pub use error::WeatherError;
pub use model::{WeatherAlert, WeatherReport};
pub use service::WeatherService;
