//! Filtering of facilities against user-selected criteria
//!
//! One predicate definition, [`passes_filters`], backs every entry point in
//! this module: the list-shaping [`apply_filters`], the pre-commit
//! [`would_yield_results`] check used by the filter-configuration UI, and
//! the [`has_no_matches`] empty-state signal. Keeping them on a single
//! definition means the pre-check can never disagree with the applied
//! filter.
//!
//! Predicates never raise: a record missing the field a predicate inspects
//! simply fails that predicate (or passes, where the contract says unknown
//! values pass, as with distance).

use crate::app::models::{Facility, FilterCriteria, ShelterPreference, VehicleClass};
use crate::constants::lot_classes;
use tracing::{debug, info};

/// Check whether a facility passes all active filter predicates
///
/// Predicates are evaluated in a fixed order and short-circuit on the
/// first failure:
///
/// 1. *Distance*: a known distance above the ceiling excludes the facility;
///    an unknown distance always passes.
/// 2. *Vehicle class*: car parks must have a lot-detail entry for the
///    selected class (motorcycles accept either the "M" or "Y" code).
///    EV stations are exempt.
/// 3. *EV charging*: when required, everything that is not an EV station
///    is excluded.
/// 4. *Shelter*: car parks must match the sheltered/unsheltered preference;
///    skipped entirely for `NoPreference`. EV stations always pass.
pub fn passes_filters(facility: &Facility, criteria: &FilterCriteria) -> bool {
    passes_distance(facility, criteria)
        && passes_vehicle_class(facility, criteria)
        && passes_ev_requirement(facility, criteria)
        && passes_shelter_preference(facility, criteria)
}

/// Apply the filter criteria to a facility list, preserving input order
pub fn apply_filters(facilities: Vec<Facility>, criteria: &FilterCriteria) -> Vec<Facility> {
    let total = facilities.len();
    let filtered: Vec<Facility> = facilities
        .into_iter()
        .filter(|facility| passes_filters(facility, criteria))
        .collect();

    info!(
        "Filtering complete: {} -> {} facilities ({} filtered out)",
        total,
        filtered.len(),
        total - filtered.len()
    );

    filtered
}

/// Check whether at least one facility would pass the candidate criteria
///
/// Used by the filter-configuration UI before committing a new criteria
/// set, so the user can be warned instead of emptying the list. Shares
/// [`passes_filters`] with [`apply_filters`].
pub fn would_yield_results(facilities: &[Facility], candidate: &FilterCriteria) -> bool {
    facilities
        .iter()
        .any(|facility| passes_filters(facility, candidate))
}

/// Check whether the active criteria filtered out a non-empty source list
///
/// Distinguishes "the user filtered everything out" from "no data was
/// ever fetched".
pub fn has_no_matches(facilities: &[Facility], criteria: &FilterCriteria) -> bool {
    !facilities.is_empty() && !would_yield_results(facilities, criteria)
}

fn passes_distance(facility: &Facility, criteria: &FilterCriteria) -> bool {
    match facility.distance_km() {
        Some(distance) if distance > criteria.max_distance_km => {
            debug!(
                "Facility excluded by distance: {:.1} km > {:.1} km ceiling",
                distance, criteria.max_distance_km
            );
            false
        }
        // Unknown distance never excludes
        _ => true,
    }
}

fn passes_vehicle_class(facility: &Facility, criteria: &FilterCriteria) -> bool {
    // EV stations are exempt from the vehicle-class predicate
    let Some(car_park) = facility.as_car_park() else {
        return true;
    };

    let capable = match criteria.vehicle_class {
        VehicleClass::Car => car_park.has_lot_class(lot_classes::CAR),
        VehicleClass::Motorcycle => {
            car_park.has_lot_class(lot_classes::MOTORCYCLE)
                || car_park.has_lot_class(lot_classes::MOTORCYCLE_ALT)
        }
        VehicleClass::HeavyVehicle => car_park.has_lot_class(lot_classes::HEAVY_VEHICLE),
    };

    if !capable {
        debug!(
            "Car park {} excluded: no {:?} lots",
            car_park.car_park_id, criteria.vehicle_class
        );
    }

    capable
}

fn passes_ev_requirement(facility: &Facility, criteria: &FilterCriteria) -> bool {
    if !criteria.require_ev_charging {
        return true;
    }

    facility.as_ev_station().is_some()
}

fn passes_shelter_preference(facility: &Facility, criteria: &FilterCriteria) -> bool {
    let wants_sheltered = match criteria.shelter_preference {
        ShelterPreference::NoPreference => return true,
        ShelterPreference::Sheltered => true,
        ShelterPreference::Unsheltered => false,
    };

    // Shelter only applies to car parks
    let Some(car_park) = facility.as_car_park() else {
        return true;
    };

    car_park.structural_type().is_sheltered() == wants_sheltered
}
