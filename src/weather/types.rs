//! Weather record and the subset of the OpenWeather response it is built from.

use serde::{Deserialize, Serialize};

// == Weather Record ==
/// Current conditions for one city, as cached and rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// City name as reported by the API
    pub city: String,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Sea-level pressure, hPa
    pub pressure: u32,
    pub wind_speed: f64,
    /// Rain plus snow over the last hour, mm
    pub precipitation: f64,
    pub description: String,
}

// == API Response ==
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    name: String,
    main: ApiMain,
    #[serde(default)]
    wind: ApiWind,
    #[serde(default)]
    weather: Vec<ApiCondition>,
    rain: Option<ApiVolume>,
    snow: Option<ApiVolume>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Default, Deserialize)]
struct ApiWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiVolume {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

impl From<ApiResponse> for WeatherRecord {
    fn from(resp: ApiResponse) -> Self {
        let precipitation = resp.rain.map_or(0.0, |v| v.one_hour)
            + resp.snow.map_or(0.0, |v| v.one_hour);

        Self {
            city: resp.name,
            temperature: resp.main.temp,
            temp_min: resp.main.temp_min,
            temp_max: resp.main.temp_max,
            humidity: resp.main.humidity,
            pressure: resp.main.pressure,
            wind_speed: resp.wind.speed,
            precipitation,
            description: resp
                .weather
                .into_iter()
                .next()
                .map(|c| c.description)
                .unwrap_or_default(),
        }
    }
}
