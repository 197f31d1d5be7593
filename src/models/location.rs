use crate::errors::{AppError, AppResult};
use crate::models::time_range::TimeRange;
use serde::{Deserialize, Serialize};

/// A point on earth, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse `"LAT,LON"` as given to `--near`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| AppError::InvalidCoordinate(format!("expected LAT,LON, got '{}'", s)))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| AppError::InvalidCoordinate(format!("'{}' is not a number", v)))
        };

        Self::new(parse(lat)?, parse(lon)?)
    }
}

/// Address as returned by a location search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub building: String,
    pub block: String,
    pub road: String,
    pub address: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Address {
    /// Building name, else "<block> <road>", else the street address.
    pub fn title(&self) -> String {
        if !self.building.is_empty() {
            self.building.clone()
        } else if !self.block.is_empty() {
            format!("{} {}", self.block, self.road)
        } else {
            self.address.clone()
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A stored location: address, coordinates and opening hours.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub id: i64,
    pub building: String,
    pub block: String,
    pub road: String,
    pub address: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub opens_at: Option<String>, // ⇔ locations.opens_at (TEXT "HH:MM:SS")
    pub closes_at: Option<String>, // ⇔ locations.closes_at (TEXT "HH:MM:SS")
}

impl Location {
    pub fn title(&self) -> String {
        self.to_address().title()
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn opening_hours(&self) -> TimeRange {
        TimeRange::new(self.opens_at.clone(), self.closes_at.clone())
    }

    pub fn to_address(&self) -> Address {
        Address {
            building: self.building.clone(),
            block: self.block.clone(),
            road: self.road.clone(),
            address: self.address.clone(),
            postal_code: self.postal_code.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
