//! Application constants for the carpark finder
//!
//! This module contains the lot-class codes and car park type strings used by
//! the upstream nearby-lookup service, together with default values for
//! filtering, sorting and fetch coordination.

// =============================================================================
// Lot Classes and Car Park Types
// =============================================================================

/// Per-vehicle-class lot codes as used in the upstream `lotDetails` mapping
pub mod lot_classes {
    /// Car lots
    pub const CAR: &str = "C";

    /// Motorcycle lots
    pub const MOTORCYCLE: &str = "M";

    /// Motorcycle lots (alternate code used by some agencies)
    pub const MOTORCYCLE_ALT: &str = "Y";

    /// Heavy vehicle lots
    pub const HEAVY_VEHICLE: &str = "H";

    /// All known lot class codes
    pub const ALL: &[&str] = &[CAR, MOTORCYCLE, MOTORCYCLE_ALT, HEAVY_VEHICLE];
}

/// Car park structural type strings as returned by the upstream service
pub mod car_park_types {
    /// Multi-storey car park (sheltered)
    pub const MULTI_STOREY: &str = "MULTI-STOREY CAR PARK";

    /// Surface car park (unsheltered)
    pub const SURFACE: &str = "SURFACE CAR PARK";

    /// Basement car park (sheltered)
    pub const BASEMENT: &str = "BASEMENT CAR PARK";

    /// Mixed surface / multi-storey car park
    pub const SURFACE_MULTI_STOREY: &str = "SURFACE/MULTI-STOREY CAR PARK";
}

// =============================================================================
// Filter Bounds and Defaults
// =============================================================================

/// Minimum selectable distance ceiling in kilometers
pub const MIN_FILTER_DISTANCE_KM: f64 = 0.5;

/// Maximum selectable distance ceiling in kilometers
pub const MAX_FILTER_DISTANCE_KM: f64 = 5.0;

/// Distance slider step in kilometers
pub const FILTER_DISTANCE_STEP_KM: f64 = 0.5;

/// Default distance ceiling in kilometers (the filter UI reset value)
pub const DEFAULT_FILTER_DISTANCE_KM: f64 = 1.0;

// =============================================================================
// Fetch Coordination Defaults
// =============================================================================

/// Default quiet period after the last location change before a lookup fires
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 100;

/// Default search radius passed to the nearby lookup, in kilometers
///
/// Matches the radius the upstream service itself applies when trimming
/// its car park dataset around the searched location.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 2.0;

/// Default remote request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Path of the nearby lookup endpoint relative to the base URL
pub const NEARBY_LOOKUP_PATH: &str = "/api/carpark/nearby/";

/// Environment variable overriding the nearby lookup base URL
pub const SERVER_URL_ENV_VAR: &str = "CARPARK_FINDER_SERVER_URL";
