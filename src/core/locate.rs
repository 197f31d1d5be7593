//! Collaborators that supply a location: the device position and an
//! address search.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::search_locations;
use crate::errors::{AppError, AppResult};
use crate::models::location::{Address, Coordinates};

/// Yields the user's current position, or an error when it cannot be determined.
pub trait PositionProvider {
    fn current_position(&self) -> AppResult<Coordinates>;
}

/// Position taken from `current_latitude` / `current_longitude` in the configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredPosition {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl ConfiguredPosition {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            latitude: cfg.current_latitude,
            longitude: cfg.current_longitude,
        }
    }
}

impl PositionProvider for ConfiguredPosition {
    fn current_position(&self) -> AppResult<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
            _ => Err(AppError::PositionUnavailable(
                "set current_latitude and current_longitude in the configuration".into(),
            )),
        }
    }
}

/// Returns addresses matching a free-text query, best match first.
pub trait AddressSearch {
    fn search(&mut self, query: &str) -> AppResult<Vec<Address>>;
}

/// Searches the addresses already known to the local catalog.
pub struct CatalogSearch<'a> {
    pool: &'a mut DbPool,
}

impl<'a> CatalogSearch<'a> {
    pub fn new(pool: &'a mut DbPool) -> Self {
        Self { pool }
    }
}

impl AddressSearch for CatalogSearch<'_> {
    fn search(&mut self, query: &str) -> AppResult<Vec<Address>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        search_locations(self.pool, query)
    }
}
