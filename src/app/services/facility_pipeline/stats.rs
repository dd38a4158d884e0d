//! Pipeline statistics for a single normalize/filter/sort run

/// Statistics for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineStats {
    /// Car parks in the source snapshot
    pub car_parks_input: usize,
    /// EV stations in the source snapshot
    pub ev_stations_input: usize,
    /// Facilities dropped by the filter stage
    pub filtered_out: usize,
    /// Facilities in the final output
    pub final_output: usize,
}

impl PipelineStats {
    /// Total facilities entering the pipeline
    pub fn total_input(&self) -> usize {
        self.car_parks_input + self.ev_stations_input
    }

    /// Fraction of the input that survived filtering, as a percentage
    pub fn pass_rate(&self) -> f64 {
        if self.total_input() == 0 {
            100.0
        } else {
            (self.final_output as f64 / self.total_input() as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} car parks + {} EV stations -> {} shown ({} filtered out, {:.1}% pass rate)",
            self.car_parks_input,
            self.ev_stations_input,
            self.final_output,
            self.filtered_out,
            self.pass_rate()
        )
    }
}
