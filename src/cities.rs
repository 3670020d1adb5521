//! City List Module
//!
//! Loads the static list of city names offered by autocomplete.
//!
//! The list file is a JSON object with the cities under the `city` key:
//! `{"city": [{"name": "Moscow"}, {"name": "Omsk"}]}`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::{Result, WidgetError};

/// One entry of the city list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// == Parse ==
/// Parses a city list document, preserving source order.
pub fn parse_cities(raw: &str) -> Result<Vec<City>> {
    let mut doc: Value =
        serde_json::from_str(raw).map_err(|e| WidgetError::CityList(e.to_string()))?;

    match doc.get_mut("city").map(Value::take) {
        Some(list @ Value::Array(_)) => {
            serde_json::from_value(list).map_err(|e| WidgetError::CityList(e.to_string()))
        }
        _ => Err(WidgetError::CityList(
            "cities.json must contain an array under the 'city' key".to_string(),
        )),
    }
}

// == Load ==
/// Reads and parses the city list at `path`.
pub async fn load_cities(path: &Path) -> Result<Vec<City>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| WidgetError::CityList(format!("{}: {}", path.display(), e)))?;

    let cities = parse_cities(&raw)?;
    info!("Loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}
