//! Data models for nearby facility lookups
//!
//! This module contains the core data structures for representing car parks
//! and EV charging stations as returned by the nearby-lookup service, plus
//! the user-session filter and sort criteria.
//!
//! The upstream service formats most numeric fields as decimal strings and
//! omits fields freely, so every wire-facing numeric field goes through a
//! lenient deserializer that accepts a JSON number, a numeric string, or
//! nothing at all. A value that cannot be read degrades to `None` rather
//! than failing the whole response.

use crate::constants::{
    DEFAULT_FILTER_DISTANCE_KM, MAX_FILTER_DISTANCE_KM, MIN_FILTER_DISTANCE_KM, car_park_types,
};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// =============================================================================
// Lenient Field Deserializers
// =============================================================================

/// Accept a JSON number, a numeric string, or null as an optional float
///
/// The upstream formats route distances and durations with `strconv`-style
/// string conversion, and older snapshots send plain numbers. Anything
/// unparseable (including the `"N/A"` sentinel) becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
    })
}

/// Accept a JSON number, a numeric string, or null as an optional count
fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Num(n)) => Some(n),
        Some(Raw::Str(s)) => s.trim().parse().ok(),
    })
}

// =============================================================================
// Geographic Primitives
// =============================================================================

/// A geographic position in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate coordinate ranges
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.longitude
            )));
        }

        Ok(())
    }
}

/// Routing information from the query point to a facility
///
/// Populated by the upstream routing call; any field may be absent when
/// routing failed for that record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RouteInfo {
    /// Driving distance from the query point, in kilometers
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance: Option<f64>,

    /// Driving duration from the query point, in minutes
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,

    /// Encoded route polyline for map display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
}

// =============================================================================
// Car Park Structures
// =============================================================================

/// Per-vehicle-class record of available vs. total spaces at a car park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LotDetail {
    /// Currently available lots for this vehicle class
    #[serde(default, deserialize_with = "lenient_u32")]
    pub available_lots: Option<u32>,

    /// Total lots for this vehicle class
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_lots: Option<u32>,
}

/// Structural type of a car park
///
/// Parsed from the upstream's free-text `carParkType` field; unrecognized
/// strings fold to [`CarParkType::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarParkType {
    MultiStorey,
    Surface,
    Basement,
    SurfaceMultiStorey,
    Unknown,
}

impl CarParkType {
    /// Parse the upstream type string; never fails
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            car_park_types::MULTI_STOREY => Self::MultiStorey,
            car_park_types::SURFACE => Self::Surface,
            car_park_types::BASEMENT => Self::Basement,
            car_park_types::SURFACE_MULTI_STOREY => Self::SurfaceMultiStorey,
            _ => Self::Unknown,
        }
    }

    /// Whether this structural type counts as sheltered
    ///
    /// Only fully covered structures qualify; the mixed surface/multi-storey
    /// type does not.
    pub fn is_sheltered(&self) -> bool {
        matches!(self, Self::MultiStorey | Self::Basement)
    }
}

/// A car park record as returned by the nearby lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CarPark {
    /// Agency identifier for the car park
    #[serde(default, rename = "carParkID")]
    pub car_park_id: String,

    /// Street address or development name
    #[serde(default)]
    pub address: String,

    /// Raw structural type string (e.g. "MULTI-STOREY CAR PARK")
    #[serde(default)]
    pub car_park_type: String,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,

    /// Mapping from vehicle-class code ("C", "M", "Y", "H") to lot details
    #[serde(default)]
    pub lot_details: HashMap<String, LotDetail>,

    /// Hourly price, when the agency publishes one
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pricing: Option<f64>,

    /// Routing information from the query point
    #[serde(default)]
    pub route_info: Option<RouteInfo>,
}

impl CarPark {
    /// Parsed structural type
    pub fn structural_type(&self) -> CarParkType {
        CarParkType::from_raw(&self.car_park_type)
    }

    /// Whether the car park has a lot-detail entry for the given class code
    ///
    /// Presence of the key is what matters; a class with zero available
    /// lots still counts as capable.
    pub fn has_lot_class(&self, code: &str) -> bool {
        self.lot_details.contains_key(code)
    }

    /// Available lots for the given class code, when known
    pub fn available_lots(&self, code: &str) -> Option<u32> {
        self.lot_details.get(code).and_then(|lot| lot.available_lots)
    }

    /// Routing distance from the query point, in kilometers
    pub fn distance_km(&self) -> Option<f64> {
        self.route_info.as_ref().and_then(|route| route.distance)
    }
}

// =============================================================================
// EV Charging Station Structures
// =============================================================================

/// A group of chargers of one connector type at an EV station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChargerGroup {
    /// Connector type (e.g. "CCS2", "TYPE_2")
    #[serde(default, rename = "type")]
    pub connector_type: String,

    /// Number of chargers in this group
    #[serde(default, deserialize_with = "lenient_u32")]
    pub count: Option<u32>,

    /// Maximum charge rate in kilowatts
    #[serde(default, rename = "maxChargeRateKW", deserialize_with = "lenient_f64")]
    pub max_charge_rate_kw: Option<f64>,

    /// Currently available chargers; the upstream sends "N/A" when the
    /// operator does not report live availability
    #[serde(default, rename = "availableCount", deserialize_with = "lenient_u32")]
    pub available_count: Option<u32>,
}

/// An EV charging station record as returned by the nearby lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvStation {
    /// Display name of the station
    #[serde(default)]
    pub display_name: String,

    /// Full formatted address
    #[serde(default)]
    pub formatted_address: String,

    /// Operator name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(default)]
    pub location: Location,

    /// Total charger count across all groups
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total_chargers: Option<u32>,

    /// Charger groups by connector type
    #[serde(default)]
    pub chargers: Vec<ChargerGroup>,

    /// Routing information from the query point
    #[serde(default)]
    pub route_info: Option<RouteInfo>,
}

impl EvStation {
    /// Routing distance from the query point, in kilometers
    pub fn distance_km(&self) -> Option<f64> {
        self.route_info.as_ref().and_then(|route| route.distance)
    }
}

// =============================================================================
// Unified Facility Type
// =============================================================================

/// Discriminant for the two facility variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityKind {
    CarPark,
    EvStation,
}

/// A parking facility: either a car park or an EV charging station
///
/// Tagged with the upstream discriminant strings so a combined list
/// round-trips through the wire format unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Facility {
    #[serde(rename = "CarPark")]
    CarPark(CarPark),
    #[serde(rename = "EV")]
    Ev(EvStation),
}

impl Facility {
    /// Discriminant of this facility
    pub fn kind(&self) -> FacilityKind {
        match self {
            Facility::CarPark(_) => FacilityKind::CarPark,
            Facility::Ev(_) => FacilityKind::EvStation,
        }
    }

    /// Routing distance from the query point, in kilometers
    pub fn distance_km(&self) -> Option<f64> {
        match self {
            Facility::CarPark(car_park) => car_park.distance_km(),
            Facility::Ev(station) => station.distance_km(),
        }
    }

    /// Routing information, when present
    pub fn route_info(&self) -> Option<&RouteInfo> {
        match self {
            Facility::CarPark(car_park) => car_park.route_info.as_ref(),
            Facility::Ev(station) => station.route_info.as_ref(),
        }
    }

    /// The underlying car park, if this facility is one
    pub fn as_car_park(&self) -> Option<&CarPark> {
        match self {
            Facility::CarPark(car_park) => Some(car_park),
            Facility::Ev(_) => None,
        }
    }

    /// The underlying EV station, if this facility is one
    pub fn as_ev_station(&self) -> Option<&EvStation> {
        match self {
            Facility::Ev(station) => Some(station),
            Facility::CarPark(_) => None,
        }
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Vehicle class the user is parking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleClass {
    Car,
    Motorcycle,
    HeavyVehicle,
}

/// Sheltered / unsheltered preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShelterPreference {
    Sheltered,
    Unsheltered,
    /// Skip the shelter predicate entirely
    NoPreference,
}

/// User-selected filter criteria for the facility list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Distance ceiling in kilometers
    pub max_distance_km: f64,

    /// Vehicle class that must be parkable
    pub vehicle_class: VehicleClass,

    /// When true, only EV charging stations are shown
    pub require_ev_charging: bool,

    /// Sheltered / unsheltered preference for car parks
    pub shelter_preference: ShelterPreference,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_FILTER_DISTANCE_KM,
            vehicle_class: VehicleClass::Car,
            require_ev_charging: false,
            shelter_preference: ShelterPreference::NoPreference,
        }
    }
}

impl FilterCriteria {
    /// Validate the distance ceiling against the selectable range
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance_km.is_finite() {
            return Err(Error::data_validation(format!(
                "Distance ceiling must be a finite number, got {}",
                self.max_distance_km
            )));
        }

        if !(MIN_FILTER_DISTANCE_KM..=MAX_FILTER_DISTANCE_KM).contains(&self.max_distance_km) {
            return Err(Error::data_validation(format!(
                "Distance ceiling {} km outside selectable range {}-{} km",
                self.max_distance_km, MIN_FILTER_DISTANCE_KM, MAX_FILTER_DISTANCE_KM
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Sort Criteria
// =============================================================================

/// Key the facility list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Distance,
    Availability,
    Price,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// User-selected sort criteria for the facility list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortCriteria {
    /// Sort key
    pub key: SortKey,

    /// Sort direction
    pub direction: SortDirection,

    /// When false, input order is preserved unchanged
    pub enabled: bool,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            key: SortKey::Distance,
            direction: SortDirection::Ascending,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_park_type_parsing() {
        assert_eq!(
            CarParkType::from_raw("MULTI-STOREY CAR PARK"),
            CarParkType::MultiStorey
        );
        assert_eq!(
            CarParkType::from_raw("SURFACE CAR PARK"),
            CarParkType::Surface
        );
        assert_eq!(
            CarParkType::from_raw("BASEMENT CAR PARK"),
            CarParkType::Basement
        );
        assert_eq!(
            CarParkType::from_raw("SURFACE/MULTI-STOREY CAR PARK"),
            CarParkType::SurfaceMultiStorey
        );
        assert_eq!(CarParkType::from_raw("HOVERCRAFT PAD"), CarParkType::Unknown);
    }

    #[test]
    fn test_sheltered_classification() {
        assert!(CarParkType::MultiStorey.is_sheltered());
        assert!(CarParkType::Basement.is_sheltered());
        assert!(!CarParkType::Surface.is_sheltered());
        assert!(!CarParkType::SurfaceMultiStorey.is_sheltered());
        assert!(!CarParkType::Unknown.is_sheltered());
    }

    #[test]
    fn test_car_park_decodes_stringly_wire_format() {
        // The upstream formats every number as a string
        let json = r#"{
            "carParkID": "A12",
            "address": "BLK 101 YISHUN AVE 5",
            "carParkType": "MULTI-STOREY CAR PARK",
            "latitude": 1.429,
            "longitude": 103.835,
            "lotDetails": {
                "C": {"availableLots": "42", "totalLots": "200"},
                "Y": {"availableLots": "3", "totalLots": "10"}
            },
            "routeInfo": {"distance": "1.2", "duration": "5", "polyline": "abc"}
        }"#;

        let car_park: CarPark = serde_json::from_str(json).unwrap();
        assert_eq!(car_park.car_park_id, "A12");
        assert_eq!(car_park.available_lots("C"), Some(42));
        assert!(car_park.has_lot_class("Y"));
        assert!(!car_park.has_lot_class("H"));
        assert_eq!(car_park.distance_km(), Some(1.2));
        assert_eq!(car_park.structural_type(), CarParkType::MultiStorey);
        assert_eq!(car_park.pricing, None);
    }

    #[test]
    fn test_car_park_decodes_numeric_wire_format() {
        // Older snapshots send plain numbers
        let json = r#"{
            "carParkID": "B7",
            "lotDetails": {"C": {"availableLots": 5, "totalLots": 50}},
            "routeInfo": {"distance": 0.8, "duration": 3}
        }"#;

        let car_park: CarPark = serde_json::from_str(json).unwrap();
        assert_eq!(car_park.available_lots("C"), Some(5));
        assert_eq!(car_park.distance_km(), Some(0.8));
        assert_eq!(car_park.route_info.unwrap().polyline, None);
    }

    #[test]
    fn test_malformed_distance_degrades_to_none() {
        let json = r#"{"carParkID": "C3", "routeInfo": {"distance": "not a number"}}"#;
        let car_park: CarPark = serde_json::from_str(json).unwrap();
        assert_eq!(car_park.distance_km(), None);
    }

    #[test]
    fn test_ev_station_not_applicable_sentinel() {
        let json = r#"{
            "displayName": "Shell Recharge",
            "formattedAddress": "1 Orchard Rd",
            "location": {"latitude": 1.3, "longitude": 103.8},
            "totalChargers": "4",
            "chargers": [
                {"type": "CCS2", "count": "2", "maxChargeRateKW": "50.0", "availableCount": "1"},
                {"type": "TYPE_2", "count": "2", "maxChargeRateKW": "7.4", "availableCount": "N/A"}
            ]
        }"#;

        let station: EvStation = serde_json::from_str(json).unwrap();
        assert_eq!(station.total_chargers, Some(4));
        assert_eq!(station.chargers[0].available_count, Some(1));
        assert_eq!(station.chargers[1].available_count, None);
        assert_eq!(station.chargers[1].max_charge_rate_kw, Some(7.4));
    }

    #[test]
    fn test_facility_discriminant_round_trip() {
        let facility = Facility::CarPark(CarPark {
            car_park_id: "A12".to_string(),
            ..CarPark::default()
        });

        let json = serde_json::to_string(&facility).unwrap();
        assert!(json.contains(r#""type":"CarPark""#));

        let back: Facility = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), FacilityKind::CarPark);

        let ev = Facility::Ev(EvStation::default());
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains(r#""type":"EV""#));
    }

    #[test]
    fn test_filter_criteria_defaults_and_bounds() {
        let criteria = FilterCriteria::default();
        assert!(criteria.validate().is_ok());
        assert_eq!(criteria.max_distance_km, 1.0);
        assert_eq!(criteria.vehicle_class, VehicleClass::Car);
        assert!(!criteria.require_ev_charging);
        assert_eq!(criteria.shelter_preference, ShelterPreference::NoPreference);

        let too_far = FilterCriteria {
            max_distance_km: 7.5,
            ..FilterCriteria::default()
        };
        assert!(too_far.validate().is_err());

        let negative = FilterCriteria {
            max_distance_km: -1.0,
            ..FilterCriteria::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_sort_criteria_defaults() {
        let criteria = SortCriteria::default();
        assert_eq!(criteria.key, SortKey::Distance);
        assert_eq!(criteria.direction, SortDirection::Ascending);
        assert!(criteria.enabled);
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new(1.35, 103.82).validate().is_ok());
        assert!(Location::new(91.0, 0.0).validate().is_err());
        assert!(Location::new(0.0, -181.0).validate().is_err());
    }
}
