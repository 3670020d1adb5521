//! Weather Widget - city weather lookup with a local expiring cache
//!
//! Provides an autocomplete selector over a static city list, a
//! time-bounded cache of weather records, and the orchestration that ties
//! them to a weather API.

pub mod autocomplete;
pub mod cache;
pub mod cities;
pub mod config;
pub mod error;
pub mod render;
pub mod storage;
pub mod weather;
pub mod widget;

pub use config::Config;
pub use error::{Result, WidgetError};
pub use widget::{Dispatch, Lookup, LookupSource, WeatherWidget, WidgetEvent};
