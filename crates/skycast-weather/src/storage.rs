//! Stored (persisted) shapes and the pure mappers to and from the domain
//! layer.
//!
//! Mapping is total and lossless for the fields each layer defines: same
//! input always produces the same output, no side effects, no retained
//! state. The stored location deliberately carries no forecast list, so
//! reconstructing a domain location from storage always yields an empty
//! forecast sequence.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{Forecast, Location};

/// Location row as the storage collaborator persists it. No forecast list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLocation {
    pub id: i64,
    pub title: String,
    pub time: DateTime<FixedOffset>,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

/// Forecast row as the storage collaborator persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredForecast {
    pub id: i64,
    pub state: String,
    pub state_abbr: String,
    pub wind_direction: f64,
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub temp: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    pub humidity: i32,
    pub visibility: f64,
    pub predictability: i32,
}

/// Reconstruct a domain location from its stored row.
///
/// The forecast sequence is always empty here; forecasts are populated by a
/// separate retrieval, never invented by the mapper.
pub fn location_to_domain(stored: StoredLocation) -> Location {
    Location {
        id: stored.id,
        title: stored.title,
        time: stored.time,
        sunrise: stored.sunrise,
        sunset: stored.sunset,
        forecasts: Vec::new(),
    }
}

/// Project a domain location onto its stored row.
///
/// Drops the forecast sequence (lossy by design; forecasts are not persisted
/// alongside the location record).
pub fn location_to_stored(location: &Location) -> StoredLocation {
    StoredLocation {
        id: location.id,
        title: location.title.clone(),
        time: location.time,
        sunrise: location.sunrise,
        sunset: location.sunset,
    }
}

/// Element-wise stored-to-domain forecast mapping, order-preserving.
pub fn forecasts_to_domain(stored: Vec<StoredForecast>) -> Vec<Forecast> {
    stored
        .into_iter()
        .map(|f| Forecast {
            id: f.id,
            state: f.state,
            state_abbr: f.state_abbr,
            wind_direction: f.wind_direction,
            date: f.date,
            min_temp: f.min_temp,
            max_temp: f.max_temp,
            temp: f.temp,
            wind_speed: f.wind_speed,
            pressure: f.pressure,
            humidity: f.humidity,
            visibility: f.visibility,
            predictability: f.predictability,
        })
        .collect()
}

/// Element-wise domain-to-stored forecast mapping, order-preserving.
pub fn forecasts_to_stored(forecasts: &[Forecast]) -> Vec<StoredForecast> {
    forecasts
        .iter()
        .map(|f| StoredForecast {
            id: f.id,
            state: f.state.clone(),
            state_abbr: f.state_abbr.clone(),
            wind_direction: f.wind_direction,
            date: f.date,
            min_temp: f.min_temp,
            max_temp: f.max_temp,
            temp: f.temp,
            wind_speed: f.wind_speed,
            pressure: f.pressure,
            humidity: f.humidity,
            visibility: f.visibility,
            predictability: f.predictability,
        })
        .collect()
}
