//! Carpark Finder Library
//!
//! A Rust library implementing the client-side data pipeline behind a
//! nearby-parking map screen: fetching car parks and EV charging stations
//! around a query location, combining the two result lists into one uniform
//! sequence, filtering them against user-selected criteria, and sorting them
//! by a chosen key and direction.
//!
//! This library provides tools for:
//! - Normalizing heterogeneous facility records under a single discriminated type
//! - Filtering facilities by distance, vehicle class, EV charging and shelter
//! - Pre-validating candidate filter criteria before they are committed
//! - Stable sorting by distance, availability or price with documented defaults
//! - Debounced nearby lookups with cooperative cancellation of stale requests
//! - Tolerant decoding of the upstream wire format (absent and stringly fields)

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod facility_pipeline;
        pub mod fetch_coordinator;
    }
}

// Re-export commonly used types
pub use app::models::{
    CarPark, CarParkType, EvStation, Facility, FacilityKind, FilterCriteria, Location,
    ShelterPreference, SortCriteria, SortDirection, SortKey, VehicleClass,
};
pub use app::services::facility_pipeline::FacilityPipeline;
pub use app::services::fetch_coordinator::{FacilitySnapshot, FetchCoordinator, NearbyLookup};
pub use config::FetchConfig;

/// Result type alias for carpark finder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the facility pipeline and nearby lookups
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Criteria or record validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Remote nearby lookup failed
    #[error("Nearby lookup error: {message}")]
    NearbyLookup {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a nearby lookup error with an underlying transport error
    pub fn nearby_lookup(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::NearbyLookup {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a nearby lookup error without an underlying transport error
    pub fn nearby_lookup_message(message: impl Into<String>) -> Self {
        Self::NearbyLookup {
            message: message.into(),
            source: None,
        }
    }
}
