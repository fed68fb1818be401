//! Weather data model for Skycast
//!
//! Defines the three layered shapes of the two weather entities (stored,
//! domain, display), the pure mappers between them, and the repository
//! trait the reactive pipelines consume.

pub mod repository;
pub mod storage;
pub mod types;
pub mod view;

pub use repository::WeatherRepository;
pub use storage::{
    forecasts_to_domain, forecasts_to_stored, location_to_domain, location_to_stored,
    StoredForecast, StoredLocation,
};
pub use types::{Forecast, Location};
pub use view::{forecast_items, location_items, ForecastItem, LocationItem};
