use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the odds calculator
#[derive(Error, Debug)]
pub enum ParlayError {
    // Odds math errors
    #[error("Invalid American odds: zero has no defined multiplier direction")]
    InvalidOdds,

    #[error("Decimal odds {0} have no American representation (must be > 1)")]
    DegenerateDecimalOdds(Decimal),

    #[error("Parlay must contain at least one leg")]
    EmptyParlay,

    #[error("Odds value out of range: {0}")]
    OddsOutOfRange(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ParlayError
pub type Result<T> = std::result::Result<T, ParlayError>;
