//! Weather provider clients. OpenWeatherMap is the only provider; a
//! multi-provider abstraction is deliberately out of scope.

pub mod openweather;

pub use openweather::{Coordinates, OpenWeatherClient};
