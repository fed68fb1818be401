//! Debounced location search with cancel-on-supersede lookup.
//!
//! Raw query text arrives through a watch channel, which is exactly the
//! single-slot latest-wins buffer the search needs: an unread value is
//! overwritten by a newer one, never queued. A value must survive the quiet
//! interval before a lookup is issued, and a newer value arriving while a
//! lookup is in flight drops that lookup's future, so a stale result can
//! never overwrite a fresher one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use skycast_core::SearchConfig;
use skycast_weather::{location_items, LocationItem, WeatherRepository};

pub(crate) struct SearchPipeline {
    query_rx: watch::Receiver<String>,
    locations_tx: watch::Sender<Vec<LocationItem>>,
    repository: Arc<dyn WeatherRepository>,
    debounce: Duration,
    min_query_len: usize,
    cancel: CancellationToken,
}

impl SearchPipeline {
    pub(crate) fn new(
        query_rx: watch::Receiver<String>,
        locations_tx: watch::Sender<Vec<LocationItem>>,
        repository: Arc<dyn WeatherRepository>,
        config: SearchConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            query_rx,
            locations_tx,
            repository,
            debounce: config.debounce(),
            min_query_len: config.min_query_len,
            cancel,
        }
    }

    /// Drive the pipeline until cancellation or until the query sender is
    /// dropped. Lookup failures are contained here: logged, no emission, the
    /// previously emitted list stays last-known-good for observers.
    pub(crate) async fn run(mut self) {
        'idle: loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break 'idle,
                changed = self.query_rx.changed() => {
                    if changed.is_err() {
                        break 'idle;
                    }
                }
            }

            'cycle: loop {
                // Quiet interval; every newer keystroke restarts the timer
                // and the held value is discarded unprocessed.
                loop {
                    tokio::select! {
                        _ = self.cancel.cancelled() => break 'idle,
                        changed = self.query_rx.changed() => {
                            if changed.is_err() {
                                break 'idle;
                            }
                        }
                        _ = tokio::time::sleep(self.debounce) => {
                            // A keystroke that raced the timer has not had its
                            // own quiet interval yet; hold the value again.
                            match self.query_rx.has_changed() {
                                Ok(true) => {}
                                Ok(false) => break,
                                Err(_) => break 'idle,
                            }
                        }
                    }
                }

                let query = self.query_rx.borrow_and_update().clone();

                // Defined short-circuit, not an error: no lookup for short input.
                if query.chars().count() < self.min_query_len {
                    let _ = self.locations_tx.send(Vec::new());
                    break 'cycle;
                }

                tracing::debug!("looking up locations for {:?}", query);
                tokio::select! {
                    _ = self.cancel.cancelled() => break 'idle,
                    changed = self.query_rx.changed() => {
                        if changed.is_err() {
                            break 'idle;
                        }
                        // Superseded mid-flight: the lookup future is dropped
                        // and the newer value gets its own quiet interval.
                        tracing::debug!("lookup for {:?} superseded", query);
                        continue 'cycle;
                    }
                    result = self.repository.find_locations(&query) => match result {
                        Ok(locations) => {
                            let _ = self.locations_tx.send(location_items(&locations));
                        }
                        Err(e) => {
                            tracing::warn!("location lookup for {:?} failed: {}", query, e);
                        }
                    },
                }
                break 'cycle;
            }
        }

        tracing::debug!("search pipeline stopped");
    }
}
