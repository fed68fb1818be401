//! Repository trait the reactive pipelines consume.
//!
//! Transport, persistence, and caching live behind this seam; the pipelines
//! only rely on the temporal contract documented per method.

use async_trait::async_trait;
use tokio::sync::broadcast;

use skycast_core::WeatherError;

use crate::types::{Forecast, Location};

/// Asynchronous weather data source.
#[async_trait]
pub trait WeatherRepository: Send + Sync {
    /// Look up locations matching a free-text query.
    ///
    /// Cancellable by dropping the returned future; the remote call may still
    /// run to completion, but its result is discarded locally.
    ///
    /// # Errors
    /// Returns `WeatherError::Lookup` on network or backend failure.
    async fn find_locations(&self, query: &str) -> Result<Vec<Location>, WeatherError>;

    /// Subscribe to the continuous stream of forecast batches.
    ///
    /// Push-based and long-lived; each batch is delivered in source order.
    /// When the source terminates, the channel closes and no further updates
    /// arrive (no automatic resubscription is provided here).
    fn forecast_updates(&self) -> broadcast::Receiver<Vec<Forecast>>;

    /// Fetch and persist full details for a location id.
    ///
    /// Fire-and-forget from the pipeline's perspective; the caller logs
    /// failures instead of propagating them.
    ///
    /// # Errors
    /// Returns `WeatherError::Details` on fetch failure or
    /// `WeatherError::NotFound` for an unknown id.
    async fn fetch_location_details(&self, location_id: i64) -> Result<(), WeatherError>;
}
