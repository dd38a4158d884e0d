//! Tests for the facility pipeline
//!
//! Shared fixtures for constructing car parks, EV stations and criteria,
//! plus the per-component test modules.


use crate::app::models::{
    CarPark, EvStation, Facility, FilterCriteria, Location, LotDetail, RouteInfo,
};
use std::collections::HashMap;

/// Create a lot detail with the given counts
pub fn lot(available: u32, total: u32) -> LotDetail {
    LotDetail {
        available_lots: Some(available),
        total_lots: Some(total),
    }
}

/// Create a test car park with the given distance, type string, and
/// per-class available lots
pub fn create_test_car_park(
    id: &str,
    distance: Option<f64>,
    car_park_type: &str,
    classes: &[(&str, u32)],
) -> CarPark {
    let mut lot_details = HashMap::new();
    for (code, available) in classes {
        lot_details.insert(code.to_string(), lot(*available, 100));
    }

    CarPark {
        car_park_id: id.to_string(),
        address: format!("{id} TEST STREET"),
        car_park_type: car_park_type.to_string(),
        latitude: 1.35,
        longitude: 103.82,
        lot_details,
        pricing: None,
        route_info: distance.map(|km| RouteInfo {
            distance: Some(km),
            duration: Some(km * 3.0),
            polyline: None,
        }),
    }
}

/// Create a test EV station with the given distance
pub fn create_test_ev_station(name: &str, distance: Option<f64>) -> EvStation {
    EvStation {
        display_name: name.to_string(),
        formatted_address: format!("{name} ROAD"),
        operator: None,
        location: Location::new(1.30, 103.85),
        total_chargers: Some(4),
        chargers: Vec::new(),
        route_info: distance.map(|km| RouteInfo {
            distance: Some(km),
            duration: Some(km * 3.0),
            polyline: None,
        }),
    }
}

/// Identifier of a facility for order assertions (car park ID or EV name)
pub fn facility_id(facility: &Facility) -> String {
    match facility {
        Facility::CarPark(car_park) => car_park.car_park_id.clone(),
        Facility::Ev(station) => station.display_name.clone(),
    }
}

/// Identifiers of a facility list, in order
pub fn facility_ids(facilities: &[Facility]) -> Vec<String> {
    facilities.iter().map(facility_id).collect()
}

/// A mixed list: three car parks at varying distances and shelter, two EV
/// stations
pub fn create_mixed_facilities() -> Vec<Facility> {
    vec![
        Facility::CarPark(create_test_car_park(
            "CP1",
            Some(0.8),
            "SURFACE CAR PARK",
            &[("C", 5)],
        )),
        Facility::CarPark(create_test_car_park(
            "CP2",
            Some(1.5),
            "MULTI-STOREY CAR PARK",
            &[("C", 0), ("Y", 12)],
        )),
        Facility::CarPark(create_test_car_park(
            "CP3",
            None,
            "BASEMENT CAR PARK",
            &[("H", 2)],
        )),
        Facility::Ev(create_test_ev_station("EV1", Some(0.6))),
        Facility::Ev(create_test_ev_station("EV2", Some(3.0))),
    ]
}

/// Default criteria widened to the maximum distance ceiling
pub fn create_permissive_criteria() -> FilterCriteria {
    FilterCriteria {
        max_distance_km: 5.0,
        ..FilterCriteria::default()
    }
}
