use chrono::{DateTime, FixedOffset, NaiveDate};

/// A location and its attached forecasts.
///
/// Immutable value snapshot: a change produces a new instance, never a
/// mutation in place. The id is stable across the stored and display layers
/// and is the join key between a location and its forecasts.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i64,
    pub title: String,
    pub time: DateTime<FixedOffset>,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    /// Ordered as delivered by the source; empty when reconstructed from
    /// storage (forecasts come from a separate retrieval).
    pub forecasts: Vec<Forecast>,
}

/// A single day's forecast for a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
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
