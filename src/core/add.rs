use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_facility;
use crate::errors::AppResult;
use crate::models::facility::NewFacility;
use crate::ui::messages::warning;

pub struct AddLogic;

impl AddLogic {
    /// Store the facility and record it in the internal log. Returns the new id.
    pub fn apply(pool: &mut DbPool, facility: &NewFacility) -> AppResult<i64> {
        let id = insert_facility(pool, facility)?;

        // log failures never undo the insert
        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &format!("facility #{}", id),
            &format!("{} at {}", facility.facility_type.name(), facility.address.title()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(id)
    }
}
