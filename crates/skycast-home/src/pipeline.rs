//! Pipeline host: owns both home-screen streams and their shared lifetime.
//!
//! The host exposes a write-only ingress for raw query text, read-only
//! observables for both outputs, and a fire-and-forget details trigger.
//! Dropping the host (or calling `shutdown`) cancels all in-flight debounce
//! timers and lookups; no emission can reach an observer afterwards.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use skycast_core::SearchConfig;
use skycast_weather::{ForecastItem, LocationItem, WeatherRepository};

use crate::projection::ForecastProjection;
use crate::search::SearchPipeline;

pub struct HomePipeline {
    query_tx: watch::Sender<String>,
    locations_rx: watch::Receiver<Vec<LocationItem>>,
    forecasts_rx: watch::Receiver<Vec<ForecastItem>>,
    repository: Arc<dyn WeatherRepository>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl HomePipeline {
    /// Spawn the search pipeline and forecast projection on the current
    /// runtime. The projection subscribes to the forecast source before this
    /// returns, so no batch published afterwards is missed.
    pub fn spawn(repository: Arc<dyn WeatherRepository>, config: SearchConfig) -> Self {
        let cancel = CancellationToken::new();
        let (query_tx, query_rx) = watch::channel(String::new());
        let (locations_tx, locations_rx) = watch::channel(Vec::new());
        let (forecasts_tx, forecasts_rx) = watch::channel(Vec::new());

        let search = SearchPipeline::new(
            query_rx,
            locations_tx,
            repository.clone(),
            config,
            cancel.child_token(),
        );
        let projection = ForecastProjection::new(
            repository.forecast_updates(),
            forecasts_tx,
            cancel.child_token(),
        );

        let tasks = vec![tokio::spawn(search.run()), tokio::spawn(projection.run())];
        tracing::debug!(
            "home pipeline started (debounce {}ms, min query length {})",
            config.debounce_ms,
            config.min_query_len
        );

        Self {
            query_tx,
            locations_rx,
            forecasts_rx,
            repository,
            cancel,
            tasks,
        }
    }

    /// Submit the newest raw query text. Non-blocking; unconditionally
    /// overwrites any not-yet-processed previous value. Ignored after
    /// shutdown.
    pub fn submit_query(&self, text: &str) {
        if self.cancel.is_cancelled() {
            return;
        }
        let _ = self.query_tx.send(text.to_string());
    }

    /// Latest emitted display location list, updated asynchronously.
    /// Late subscribers see the most recent value immediately.
    pub fn observe_locations(&self) -> watch::Receiver<Vec<LocationItem>> {
        self.locations_rx.clone()
    }

    /// Latest emitted display forecast list, updated asynchronously.
    pub fn observe_forecasts(&self) -> watch::Receiver<Vec<ForecastItem>> {
        self.forecasts_rx.clone()
    }

    /// Ask the repository to fetch and persist details for a location id.
    /// Fire-and-forget: failures are logged here, never re-raised.
    pub fn request_location_details(&self, location_id: i64) {
        if self.cancel.is_cancelled() {
            return;
        }

        let repository = self.repository.clone();
        let cancel = self.cancel.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = repository.fetch_location_details(location_id) => {
                    if let Err(e) = result {
                        tracing::warn!("fetching details for location {} failed: {}", location_id, e);
                    }
                }
            }
        });
    }

    /// Cancel both pipelines and any outstanding detail fetches. New
    /// submissions are refused from the moment this returns.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// Shut down and wait for both pipeline tasks to finish.
    pub async fn shutdown_and_wait(mut self) {
        self.cancel.cancel();
        for task in self.tasks.drain(..) {
            let _ = task.await;
        }
    }
}

impl Drop for HomePipeline {
    fn drop(&mut self) {
        // The hosting context ended; make sure nothing keeps emitting.
        self.cancel.cancel();
    }
}
