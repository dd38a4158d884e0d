//! Debounce / cancel coordination for nearby lookups
//!
//! The coordinator watches a query location supplied by the consumer. On
//! each change it waits out a quiet period before dispatching a single
//! lookup for the latest location; location churn inside the window resets
//! the timer, and a new location arriving mid-flight cancels the in-flight
//! request before the new debounce window starts. Published state is
//! last-write-wins: a snapshot replaces the previous one wholesale, and a
//! cancelled request publishes nothing.

use crate::app::models::{CarPark, EvStation, Location};
use crate::config::FetchConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::client::{NearbyLookup, NearbyRequest};

/// The facility lists published by one successful lookup
///
/// Records are created fresh on every successful response and replaced,
/// never merged, by the next one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacilitySnapshot {
    /// Car parks around the query location
    pub car_parks: Vec<CarPark>,

    /// EV charging stations around the query location
    pub ev_stations: Vec<EvStation>,

    /// Location the lookup was centred on
    pub query_location: Option<Location>,

    /// When the response was received
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Handle to the task serving the current debounce window or fetch
struct FetchTask {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Debounced fetch coordinator for nearby facilities
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use carpark_finder::app::models::Location;
/// use carpark_finder::app::services::fetch_coordinator::{FetchCoordinator, HttpNearbyClient};
/// use carpark_finder::config::FetchConfig;
///
/// # fn example() -> carpark_finder::Result<()> {
/// let config = FetchConfig::from_env();
/// let client = Arc::new(HttpNearbyClient::new(&config)?);
/// let mut coordinator = FetchCoordinator::new(client, config);
///
/// let snapshots = coordinator.subscribe();
/// coordinator.update_location(Location::new(1.3521, 103.8198));
/// # Ok(())
/// # }
/// ```
pub struct FetchCoordinator<C: NearbyLookup> {
    client: Arc<C>,
    config: FetchConfig,
    snapshot_tx: watch::Sender<FacilitySnapshot>,
    snapshot_rx: watch::Receiver<FacilitySnapshot>,
    loading_tx: watch::Sender<bool>,
    loading_rx: watch::Receiver<bool>,
    current: Option<FetchTask>,
}

impl<C: NearbyLookup> FetchCoordinator<C> {
    /// Create a coordinator over the given lookup client
    pub fn new(client: Arc<C>, config: FetchConfig) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(FacilitySnapshot::default());
        let (loading_tx, loading_rx) = watch::channel(false);

        Self {
            client,
            config,
            snapshot_tx,
            snapshot_rx,
            loading_tx,
            loading_rx,
            current: None,
        }
    }

    /// Subscribe to published snapshots
    pub fn subscribe(&self) -> watch::Receiver<FacilitySnapshot> {
        self.snapshot_rx.clone()
    }

    /// Subscribe to the loading flag
    ///
    /// The flag is true strictly between a request being dispatched and
    /// its response (or cancellation) settling.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading_rx.clone()
    }

    /// The most recently published snapshot
    pub fn snapshot(&self) -> FacilitySnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        *self.loading_rx.borrow()
    }

    /// Note a new query location
    ///
    /// Cancels any pending debounce timer or in-flight request, then starts
    /// a fresh quiet period for this location. Only the latest location is
    /// ever fetched.
    pub fn update_location(&mut self, location: Location) {
        self.cancel_pending();

        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let client = Arc::clone(&self.client);
        let snapshot_tx = self.snapshot_tx.clone();
        let loading_tx = self.loading_tx.clone();
        let debounce = self.config.debounce_window();
        let radius = self.config.search_radius_km;

        debug!(
            "Location updated to ({:.4}, {:.4}), debouncing {:?}",
            location.latitude, location.longitude, debounce
        );

        let handle = tokio::spawn(async move {
            // Quiet period: a newer location cancels us before the timer fires
            tokio::select! {
                _ = task_cancel.cancelled() => return,
                _ = tokio::time::sleep(debounce) => {}
            }

            let request = NearbyRequest { location, radius };
            let _ = loading_tx.send(true);

            tokio::select! {
                // Cancelled mid-flight: publish nothing, the canceller
                // settles the loading flag
                _ = task_cancel.cancelled() => {}
                result = client.fetch_nearby(request) => {
                    match result {
                        Ok(response) => {
                            info!(
                                "Publishing snapshot: {} car parks, {} EV stations",
                                response.car_parks.len(),
                                response.ev_stations.len()
                            );
                            let _ = snapshot_tx.send(FacilitySnapshot {
                                car_parks: response.car_parks,
                                ev_stations: response.ev_stations,
                                query_location: Some(location),
                                fetched_at: Some(Utc::now()),
                            });
                        }
                        Err(err) => {
                            // Previous displayed data stays in place
                            warn!("Nearby lookup failed, keeping previous snapshot: {err}");
                        }
                    }
                    let _ = loading_tx.send(false);
                }
            }
        });

        self.current = Some(FetchTask { handle, cancel });
    }

    /// Cancel any pending debounce timer or in-flight request
    ///
    /// A cancelled request is a no-op: nothing is published, and the
    /// loading flag settles to false if a request was in flight.
    pub fn cancel_pending(&mut self) {
        if let Some(task) = self.current.take() {
            task.cancel.cancel();
            task.handle.abort();
            if *self.loading_tx.borrow() {
                let _ = self.loading_tx.send(false);
            }
        }
    }
}

impl<C: NearbyLookup> Drop for FetchCoordinator<C> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
