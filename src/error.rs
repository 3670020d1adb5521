//! Error types for the weather widget
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Widget Error Enum ==
/// Errors that reach the orchestration layer.
///
/// Cache-layer failures never show up here; they are absorbed inside
/// [`crate::cache::ExpiringCache`] as [`StorageError`]s.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Lookup submitted with an empty or whitespace-only city name
    #[error("Введите имя города")]
    EmptyInput,

    /// Weather API answered with a non-success status
    #[error("Ошибка {status}: {reason}")]
    Http { status: u16, reason: String },

    /// Transport failure talking to the weather API
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Weather API body did not match the expected schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// City list could not be loaded
    #[error("City list error: {0}")]
    CityList(String),
}

// == Storage Error Enum ==
/// Failures of a persistent key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the weather widget.
pub type Result<T> = std::result::Result<T, WidgetError>;
