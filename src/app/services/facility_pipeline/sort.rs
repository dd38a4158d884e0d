//! Stable sorting of the filtered facility list
//!
//! Sorting is keyed on a single numeric value per facility and is always
//! stable: facilities with equal keys keep their relative input order,
//! whichever direction is selected. Absent fields degrade to a documented
//! default rather than failing:
//!
//! - *Distance*: unknown distances sort as infinitely far (last when
//!   ascending, first when descending).
//! - *Availability*: the car-class ("C") available count; 0 when the entry
//!   is absent. EV stations have no analogous field and are fixed at 0.
//! - *Price*: the published price; 0 when absent. EV stations are 0.

use crate::app::models::{Facility, SortCriteria, SortDirection, SortKey};
use crate::constants::lot_classes;
use std::cmp::Ordering;
use tracing::debug;

/// Sort a facility list by the given criteria
///
/// When `criteria.enabled` is false, the input sequence is returned
/// unchanged. Never fails.
pub fn apply_sort(facilities: Vec<Facility>, criteria: &SortCriteria) -> Vec<Facility> {
    if !criteria.enabled {
        return facilities;
    }

    debug!(
        "Sorting {} facilities by {:?} {:?}",
        facilities.len(),
        criteria.key,
        criteria.direction
    );

    let mut sorted = facilities;
    // Vec::sort_by is stable, so equal keys preserve input order
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, criteria.key);
        match criteria.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    sorted
}

/// Compare two facilities on the given sort key, ascending
fn compare_by_key(a: &Facility, b: &Facility, key: SortKey) -> Ordering {
    sort_value(a, key).total_cmp(&sort_value(b, key))
}

/// Numeric sort value of a facility for the given key
fn sort_value(facility: &Facility, key: SortKey) -> f64 {
    match key {
        SortKey::Distance => facility.distance_km().unwrap_or(f64::INFINITY),
        SortKey::Availability => match facility.as_car_park() {
            Some(car_park) => car_park.available_lots(lot_classes::CAR).unwrap_or(0) as f64,
            None => 0.0,
        },
        SortKey::Price => match facility.as_car_park() {
            Some(car_park) => car_park.pricing.unwrap_or(0.0),
            None => 0.0,
        },
    }
}
