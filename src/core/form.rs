//! Typed state of the "add facility" form.

use crate::core::hours::validator::ValidationWatch;
use crate::core::locate::PositionProvider;
use crate::errors::{AppError, AppResult};
use crate::models::facility::NewFacility;
use crate::models::facility_type::FacilityType;
use crate::models::location::{Address, Coordinates};
use crate::models::time_range::TimeRange;
use crate::models::validation::Side;
use crate::ui::messages::{Level, notify};

fn non_empty(value: impl Into<String>) -> Option<String> {
    let v = value.into().trim().to_string();
    (!v.is_empty()).then_some(v)
}

/// Every field is optional until `finish` is called; fields only change
/// through the setters.
#[derive(Debug, Clone, Default)]
pub struct FacilityForm {
    facility_type: Option<FacilityType>,
    floor: Option<String>,
    description: Option<String>,
    building: Option<String>,
    block: Option<String>,
    road: Option<String>,
    address: Option<String>,
    postal_code: Option<String>,
    coordinates: Option<Coordinates>,
    opening_hours: TimeRange,
}

impl FacilityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facility_type(&self) -> Option<FacilityType> {
        self.facility_type
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn opening_hours(&self) -> &TimeRange {
        &self.opening_hours
    }

    pub fn set_facility_type(&mut self, facility_type: FacilityType) {
        self.facility_type = Some(facility_type);
    }

    pub fn set_floor(&mut self, floor: impl Into<String>) {
        self.floor = non_empty(floor);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = non_empty(description);
    }

    pub fn set_building(&mut self, building: impl Into<String>) {
        self.building = non_empty(building);
    }

    pub fn set_block(&mut self, block: impl Into<String>) {
        self.block = non_empty(block);
    }

    pub fn set_road(&mut self, road: impl Into<String>) {
        self.road = non_empty(road);
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = non_empty(address);
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = non_empty(postal_code);
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }

    /// Replace every address field and the coordinates with a selected location.
    pub fn set_location(&mut self, location: &Address) {
        self.set_building(location.building.as_str());
        self.set_block(location.block.as_str());
        self.set_road(location.road.as_str());
        self.set_address(location.address.as_str());
        self.set_postal_code(location.postal_code.as_str());
        self.set_coordinates(location.coordinates());
    }

    pub fn set_opening_hours(&mut self, range: TimeRange) {
        self.opening_hours = range;
    }

    /// Fill the location from the device position, with placeholder address
    /// fields for the user to correct.
    pub fn use_current_location<P: PositionProvider + ?Sized>(
        &mut self,
        provider: &P,
    ) -> AppResult<()> {
        match provider.current_position() {
            Ok(pos) => {
                self.set_location(&Address {
                    building: "Your building".into(),
                    block: "Your block".into(),
                    road: "Your road".into(),
                    address: "Your address".into(),
                    postal_code: "Your postal code".into(),
                    latitude: pos.latitude,
                    longitude: pos.longitude,
                });
                notify(
                    Level::Success,
                    "Location Updated",
                    Some("Your location has been updated to your current location."),
                );
                Ok(())
            }
            Err(e) => {
                notify(
                    Level::Warning,
                    "Error",
                    Some("Unable to retrieve your location. Please try again."),
                );
                Err(e)
            }
        }
    }

    /// Missing text fields map to "", missing coordinates to 0.
    pub fn to_address(&self) -> Address {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let coords = self.coordinates.unwrap_or(Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        });

        Address {
            building: text(&self.building),
            block: text(&self.block),
            road: text(&self.road),
            address: text(&self.address),
            postal_code: text(&self.postal_code),
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }

    /// Check the form and produce a facility ready to store. Opening hours go
    /// through `watch`, whose observer sees the outcome pair.
    pub fn finish(&self, watch: &mut ValidationWatch<'_>) -> AppResult<NewFacility> {
        let facility_type = self
            .facility_type
            .ok_or_else(|| AppError::IncompleteForm("facility type is required".into()))?;

        if self.coordinates.is_none() {
            return Err(AppError::IncompleteForm(
                "location is required (use --lat/--lon, --here or --from-search)".into(),
            ));
        }

        if self.building.is_none() && self.block.is_none() && self.address.is_none() {
            return Err(AppError::IncompleteForm(
                "a building, block or address is required".into(),
            ));
        }

        let (start, end) = watch.observe(&self.opening_hours);
        if !start.is_none() || !end.is_none() {
            let details: Vec<String> = [(Side::Start, start), (Side::End, end)]
                .into_iter()
                .filter_map(|(side, outcome)| {
                    outcome
                        .message()
                        .map(|m| format!("{}: {}", side.as_str(), m.to_lowercase()))
                })
                .collect();
            return Err(AppError::InvalidOpeningHours(details.join(", ")));
        }

        Ok(NewFacility {
            facility_type,
            floor: self.floor.clone(),
            description: self.description.clone(),
            address: self.to_address(),
            opening_hours: self.opening_hours.canonicalized(),
        })
    }
}
