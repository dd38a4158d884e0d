//! Debounced fetching of nearby facilities
//!
//! This module owns the only asynchronous boundary in the library: the
//! remote nearby-lookup call. It is organized into:
//!
//! - [`client`] - the [`NearbyLookup`] trait and its HTTP implementation
//! - [`coordinator`] - the [`FetchCoordinator`], which debounces location
//!   churn, cancels superseded requests, and publishes snapshots
//!
//! # Ordering Guarantee
//!
//! Results from a superseded request never overwrite results from a newer
//! one. This is enforced by cancelling the stale task (cancellation token
//! plus task abort) before a new debounce window starts; an aborted
//! request's completion is a guaranteed no-op, not a late write.

pub mod client;
pub mod coordinator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use client::{HttpNearbyClient, NearbyLookup, NearbyRequest, NearbyResponse};
pub use coordinator::{FacilitySnapshot, FetchCoordinator};
