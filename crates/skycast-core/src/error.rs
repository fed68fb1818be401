//! Centralized error types for the Skycast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the Skycast application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Weather collaborator errors (lookup, forecast stream, details fetch).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The location lookup call failed (network or backend).
    #[error("Location lookup failed: {0}")]
    Lookup(String),

    /// The forecast update stream reported an error.
    #[error("Forecast stream error: {0}")]
    Stream(String),

    /// Fetching/persisting details for a location failed.
    #[error("Details fetch failed for location {location_id}: {message}")]
    Details { location_id: i64, message: String },

    /// No location exists for the given id.
    #[error("Location not found: {0}")]
    NotFound(i64),
}

impl WeatherError {
    /// Create a lookup error.
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup(message.into())
    }

    /// Create a forecast stream error.
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream(message.into())
    }

    /// Create a details fetch error.
    pub fn details(location_id: i64, message: impl Into<String>) -> Self {
        Self::Details {
            location_id,
            message: message.into(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Lookup(_) => "Unable to search locations. Check your connection.",
            WeatherError::Stream(_) => "Forecast updates are unavailable right now.",
            WeatherError::Details { .. } => "Unable to load location details. Please try again.",
            WeatherError::NotFound(_) => "That location could not be found.",
        }
    }
}

/// Configuration errors (loading, parsing, validation).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Read(_) => "Could not read the configuration file.",
            ConfigError::Parse(_) => "The configuration file is malformed.",
            ConfigError::Invalid(_) => "A configuration value is invalid.",
        }
    }
}
