//! Display-ready shapes for the rendering layer.
//!
//! Same contract as the storage mappers: pure, total, order-preserving,
//! field-renaming only. Items are derived per emission, consumed once by the
//! rendering layer, and discarded.

use chrono::NaiveDate;

use crate::types::{Forecast, Location};

/// Location entry in the search result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationItem {
    pub id: i64,
    pub title: String,
}

/// Forecast entry ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastItem {
    pub id: i64,
    pub date: NaiveDate,
    pub state: String,
    pub state_abbr: String,
    pub temp: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub pressure: f64,
    pub humidity: i32,
    pub visibility: f64,
    pub predictability: i32,
}

/// Map domain locations to display items, preserving order.
pub fn location_items(locations: &[Location]) -> Vec<LocationItem> {
    locations
        .iter()
        .map(|l| LocationItem {
            id: l.id,
            title: l.title.clone(),
        })
        .collect()
}

/// Map domain forecasts to display items, preserving order.
pub fn forecast_items(forecasts: &[Forecast]) -> Vec<ForecastItem> {
    forecasts
        .iter()
        .map(|f| ForecastItem {
            id: f.id,
            date: f.date,
            state: f.state.clone(),
            state_abbr: f.state_abbr.clone(),
            temp: f.temp,
            min_temp: f.min_temp,
            max_temp: f.max_temp,
            wind_speed: f.wind_speed,
            wind_direction: f.wind_direction,
            pressure: f.pressure,
            humidity: f.humidity,
            visibility: f.visibility,
            predictability: f.predictability,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn location(id: i64, title: &str) -> Location {
        Location {
            id,
            title: title.to_string(),
            time: DateTime::parse_from_rfc3339("2026-08-22T09:58:08+01:00").unwrap(),
            sunrise: DateTime::parse_from_rfc3339("2026-08-22T05:54:00+01:00").unwrap(),
            sunset: DateTime::parse_from_rfc3339("2026-08-22T20:12:00+01:00").unwrap(),
            forecasts: Vec::new(),
        }
    }

    fn forecast(id: i64) -> Forecast {
        Forecast {
            id,
            state: "Light Rain".to_string(),
            state_abbr: "lr".to_string(),
            wind_direction: 188.0,
            date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
            min_temp: 11.0,
            max_temp: 21.0,
            temp: 18.5,
            wind_speed: 4.1,
            pressure: 1008.5,
            humidity: 81,
            visibility: 12.4,
            predictability: 75,
        }
    }

    #[test]
    fn test_location_items_preserve_order() {
        let locations = vec![location(1, "London"), location(2, "Londrina")];
        let items = location_items(&locations);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], LocationItem { id: 1, title: "London".into() });
        assert_eq!(items[1].title, "Londrina");
    }

    #[test]
    fn test_forecast_items_copy_every_field() {
        let source = forecast(7);
        let items = forecast_items(std::slice::from_ref(&source));

        let item = &items[0];
        assert_eq!(item.id, source.id);
        assert_eq!(item.date, source.date);
        assert_eq!(item.state, source.state);
        assert_eq!(item.state_abbr, source.state_abbr);
        assert_eq!(item.temp, source.temp);
        assert_eq!(item.min_temp, source.min_temp);
        assert_eq!(item.max_temp, source.max_temp);
        assert_eq!(item.wind_speed, source.wind_speed);
        assert_eq!(item.wind_direction, source.wind_direction);
        assert_eq!(item.pressure, source.pressure);
        assert_eq!(item.humidity, source.humidity);
        assert_eq!(item.visibility, source.visibility);
        assert_eq!(item.predictability, source.predictability);
    }

    #[test]
    fn test_empty_inputs_yield_empty_lists() {
        assert!(location_items(&[]).is_empty());
        assert!(forecast_items(&[]).is_empty());
    }
}
