//! Pipeline orchestration holding the user-session criteria
//!
//! [`FacilityPipeline`] owns the session [`FilterCriteria`] and
//! [`SortCriteria`] (created with defaults at screen mount, mutated only by
//! explicit user action) and runs the normalize → filter → sort stages over
//! the most recent fetch snapshot.

use crate::Result;
use crate::app::models::{Facility, FilterCriteria, SortCriteria};
use crate::app::services::fetch_coordinator::FacilitySnapshot;
use tracing::info;

use super::{
    filter::{apply_filters, would_yield_results},
    normalizer::combine_facilities,
    sort::apply_sort,
    stats::PipelineStats,
};

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// Facilities to render, post filter and sort
    pub facilities: Vec<Facility>,
    /// True when a non-empty snapshot was filtered down to nothing
    pub no_matches: bool,
    /// Statistics for this run
    pub stats: PipelineStats,
}

/// The facility pipeline with its session criteria
///
/// # Example
///
/// ```rust
/// use carpark_finder::app::services::facility_pipeline::FacilityPipeline;
/// use carpark_finder::app::services::fetch_coordinator::FacilitySnapshot;
///
/// let pipeline = FacilityPipeline::new();
/// let result = pipeline.process(&FacilitySnapshot::default());
/// assert!(result.facilities.is_empty());
/// assert!(!result.no_matches);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FacilityPipeline {
    /// Active filter criteria
    filter_criteria: FilterCriteria,
    /// Active sort criteria
    sort_criteria: SortCriteria,
}

impl FacilityPipeline {
    /// Create a pipeline with default criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with explicit criteria
    pub fn with_criteria(filter_criteria: FilterCriteria, sort_criteria: SortCriteria) -> Self {
        Self {
            filter_criteria,
            sort_criteria,
        }
    }

    /// Active filter criteria
    pub fn filter_criteria(&self) -> &FilterCriteria {
        &self.filter_criteria
    }

    /// Active sort criteria
    pub fn sort_criteria(&self) -> &SortCriteria {
        &self.sort_criteria
    }

    /// Replace the filter criteria after validating them
    ///
    /// Callers wanting the pre-commit "would this empty the list" warning
    /// should consult [`FacilityPipeline::would_yield_results`] with the
    /// candidate criteria first.
    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) -> Result<()> {
        criteria.validate()?;
        info!("Filter criteria updated: {:?}", criteria);
        self.filter_criteria = criteria;
        Ok(())
    }

    /// Reset the filter criteria to their defaults
    pub fn reset_filter_criteria(&mut self) {
        info!("Filter criteria reset to defaults");
        self.filter_criteria = FilterCriteria::default();
    }

    /// Replace the sort criteria
    pub fn set_sort_criteria(&mut self, criteria: SortCriteria) {
        self.sort_criteria = criteria;
    }

    /// Run normalize → filter → sort over a fetch snapshot
    pub fn process(&self, snapshot: &FacilitySnapshot) -> PipelineResult {
        let mut stats = PipelineStats {
            car_parks_input: snapshot.car_parks.len(),
            ev_stations_input: snapshot.ev_stations.len(),
            ..PipelineStats::default()
        };

        let combined = combine_facilities(snapshot.car_parks.clone(), snapshot.ev_stations.clone());
        let total = combined.len();

        let filtered = apply_filters(combined, &self.filter_criteria);
        stats.filtered_out = total - filtered.len();
        let no_matches = total > 0 && filtered.is_empty();

        let sorted = apply_sort(filtered, &self.sort_criteria);
        stats.final_output = sorted.len();

        info!("Pipeline run: {}", stats.summary());

        PipelineResult {
            facilities: sorted,
            no_matches,
            stats,
        }
    }

    /// Check whether candidate criteria would keep at least one facility
    /// from the given snapshot
    pub fn would_yield_results(
        &self,
        snapshot: &FacilitySnapshot,
        candidate: &FilterCriteria,
    ) -> bool {
        let combined = combine_facilities(snapshot.car_parks.clone(), snapshot.ev_stations.clone());
        would_yield_results(&combined, candidate)
    }
}
