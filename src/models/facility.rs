use super::{facility_type::FacilityType, location::Address, location::Location};
use crate::models::time_range::TimeRange;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Facility {
    pub id: i64,
    pub facility_type: FacilityType, // ⇔ facilities.facility_type (display name)
    pub floor: Option<String>,
    pub description: Option<String>,
    pub location: Location,
    pub created_at: String, // ⇔ facilities.created_at (TEXT, ISO8601)
}

/// A facility that passed form validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFacility {
    pub facility_type: FacilityType,
    pub floor: Option<String>,
    pub description: Option<String>,
    pub address: Address,
    /// Canonical `HH:MM:SS` on each present side.
    pub opening_hours: TimeRange,
}
