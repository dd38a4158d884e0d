//! Entity normalization for heterogeneous facility lists
//!
//! The nearby lookup returns car parks and EV stations as two independent
//! arrays. Downstream stages want one uniform sequence with an explicit
//! discriminant, which is what [`combine_facilities`] produces.

use crate::app::models::{CarPark, EvStation, Facility};
use tracing::debug;

/// Combine the two source lists into one discriminated sequence
///
/// Car parks come first, then EV stations; each source list's internal
/// order is preserved. Either list may be empty. Pure transform, never
/// fails.
pub fn combine_facilities(car_parks: Vec<CarPark>, ev_stations: Vec<EvStation>) -> Vec<Facility> {
    let mut facilities = Vec::with_capacity(car_parks.len() + ev_stations.len());

    facilities.extend(car_parks.into_iter().map(Facility::CarPark));
    facilities.extend(ev_stations.into_iter().map(Facility::Ev));

    debug!("Combined {} facilities", facilities.len());
    facilities
}
