//! Facility pipeline for nearby parking results
//!
//! This module provides the data-shaping pipeline between the fetch
//! coordinator and the rendered list. It takes the raw car park and EV
//! station lists of the most recent lookup and produces one filtered,
//! sorted sequence of facilities.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`normalizer`] - Combining the two source lists under one discriminated type
//! - [`filter`] - Predicate evaluation, plus the pre-commit "would yield results" check
//! - [`sort`] - Stable key/direction ordering with documented fallbacks
//! - [`pipeline`] - FacilityPipeline orchestration holding the session criteria
//! - [`stats`] - Per-run pipeline statistics
//!
//! # Processing Pipeline
//!
//! The standard pipeline consists of three stages, all synchronous pure
//! transforms over in-memory vectors:
//!
//! 1. **Normalize**: concatenate car parks and EV stations, car parks first
//! 2. **Filter**: drop facilities failing any active predicate
//! 3. **Sort**: stable ordering by the selected key and direction
//!
//! The filter-configuration UI additionally calls
//! [`filter::would_yield_results`] out-of-band before committing a new
//! criteria set, so a user is warned instead of filtering everything out.
//! Both entry points share one predicate definition ([`filter::passes_filters`]),
//! so the two evaluations cannot drift apart.

pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod sort;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use pipeline::{FacilityPipeline, PipelineResult};
pub use stats::PipelineStats;

// Re-export the operations that are useful on their own
pub use filter::{apply_filters, has_no_matches, passes_filters, would_yield_results};
pub use normalizer::combine_facilities;
pub use sort::apply_sort;
