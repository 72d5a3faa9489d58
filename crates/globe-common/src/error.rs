//! Error types for park-globe crates.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for map generation.
#[derive(Debug, Error)]
pub enum MapError {
    // === Input Data Errors ===
    #[error("Missing input data: {0}")]
    MissingData(String),

    #[error("Invalid input data: {0}")]
    InvalidData(String),

    #[error("Invalid GeoJSON: {0}")]
    GeoJson(String),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
