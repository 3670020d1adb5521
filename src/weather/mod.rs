//! Weather Module
//!
//! Current-conditions record and the client that fetches it.

mod client;
mod types;

pub use client::{OpenWeatherClient, WeatherSource};
pub use types::WeatherRecord;
