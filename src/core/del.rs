use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_facility, load_facility};
use crate::errors::{AppError, AppResult};
use crate::models::facility::Facility;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a facility by id, returning what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Facility> {
        let facility = load_facility(pool, id)?.ok_or(AppError::FacilityNotFound(id))?;

        if !delete_facility(pool, id)? {
            return Err(AppError::FacilityNotFound(id));
        }

        // the delete is committed; a failed log line only warns
        if let Err(e) = ttlog(
            &pool.conn,
            "del",
            &format!("facility #{}", id),
            &format!(
                "{} at {}",
                facility.facility_type.name(),
                facility.location.title()
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(facility)
    }
}
