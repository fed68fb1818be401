//! Continuous forecast projection: domain batches in, display batches out.
//!
//! No debouncing, filtering, or supersession; every update is forwarded in
//! source order. Stream failure handling stays with the source: a closed
//! channel simply ends the projection.

use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

use skycast_weather::{forecast_items, Forecast, ForecastItem};

pub(crate) struct ForecastProjection {
    updates: broadcast::Receiver<Vec<Forecast>>,
    forecasts_tx: watch::Sender<Vec<ForecastItem>>,
    cancel: CancellationToken,
}

impl ForecastProjection {
    pub(crate) fn new(
        updates: broadcast::Receiver<Vec<Forecast>>,
        forecasts_tx: watch::Sender<Vec<ForecastItem>>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            updates,
            forecasts_tx,
            cancel,
        }
    }

    pub(crate) async fn run(mut self) {
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                update = self.updates.recv() => match update {
                    Ok(batch) => {
                        let _ = self.forecasts_tx.send(forecast_items(&batch));
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("forecast stream lagged, skipped {} updates", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("forecast stream closed");
                        break;
                    }
                },
            }
        }

        tracing::debug!("forecast projection stopped");
    }
}
