//! Nearby-lookup client trait and HTTP implementation
//!
//! The remote collaborator is a POST endpoint taking a location and search
//! radius and returning the car park and EV station arrays. Both arrays,
//! and every field inside them, may be absent; decoding degrades rather
//! than fails (see the lenient deserializers in the models module).

use crate::app::models::{CarPark, EvStation, Location};
use crate::config::FetchConfig;
use crate::constants::NEARBY_LOOKUP_PATH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::debug;

/// Request payload for the nearby lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyRequest {
    /// Query location the search is centred on
    pub location: Location,

    /// Search radius in kilometers
    pub radius: f64,
}

/// Response payload of the nearby lookup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NearbyResponse {
    /// Car parks around the query location
    #[serde(default, rename = "CarPark")]
    pub car_parks: Vec<CarPark>,

    /// EV charging stations around the query location
    #[serde(default, rename = "EV")]
    pub ev_stations: Vec<EvStation>,
}

/// Seam for the remote nearby lookup
///
/// The coordinator is generic over this trait so tests can substitute a
/// scripted client. Implementations must be cancellation-safe: dropping
/// the returned future aborts the request without retrying.
pub trait NearbyLookup: Send + Sync + 'static {
    /// Fetch facilities around the given location
    fn fetch_nearby(
        &self,
        request: NearbyRequest,
    ) -> impl Future<Output = Result<NearbyResponse>> + Send;
}

/// HTTP implementation of [`NearbyLookup`] against the lookup service
#[derive(Debug, Clone)]
pub struct HttpNearbyClient {
    http: reqwest::Client,
    lookup_url: String,
}

impl HttpNearbyClient {
    /// Create a client from the fetch configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| Error::nearby_lookup("Failed to build HTTP client", err))?;

        let lookup_url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            NEARBY_LOOKUP_PATH
        );

        Ok(Self { http, lookup_url })
    }

    /// Endpoint URL this client posts to
    pub fn lookup_url(&self) -> &str {
        &self.lookup_url
    }
}

impl NearbyLookup for HttpNearbyClient {
    async fn fetch_nearby(&self, request: NearbyRequest) -> Result<NearbyResponse> {
        debug!(
            "Fetching nearby facilities at ({:.4}, {:.4}), radius {:.1} km",
            request.location.latitude, request.location.longitude, request.radius
        );

        let response = self
            .http
            .post(&self.lookup_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| Error::nearby_lookup("Nearby lookup request failed", err))?
            .error_for_status()
            .map_err(|err| Error::nearby_lookup("Nearby lookup returned an error status", err))?;

        let parsed: NearbyResponse = response
            .json()
            .await
            .map_err(|err| Error::nearby_lookup("Failed to decode nearby lookup response", err))?;

        debug!(
            "Nearby lookup returned {} car parks and {} EV stations",
            parsed.car_parks.len(),
            parsed.ev_stations.len()
        );

        Ok(parsed)
    }
}
