use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::facility::{Facility, NewFacility};
use crate::models::facility_type::FacilityType;
use crate::models::location::{Address, Location};
use chrono::Local;
use rusqlite::{OptionalExtension, Result, Row, params};

const SELECT_FACILITY: &str = "
    SELECT f.id, f.facility_type, f.floor, f.description, f.created_at,
           l.id AS location_id, l.building, l.block, l.road, l.address, l.postal_code,
           l.latitude, l.longitude, l.opens_at, l.closes_at
    FROM facilities f
    JOIN locations l ON l.id = f.location_id";

pub fn map_row(row: &Row) -> Result<Facility> {
    let type_str: String = row.get("facility_type")?;
    let facility_type = FacilityType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidFacilityType(type_str.clone())),
        )
    })?;

    Ok(Facility {
        id: row.get("id")?,
        facility_type,
        floor: row.get("floor")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
        location: Location {
            id: row.get("location_id")?,
            building: row.get("building")?,
            block: row.get("block")?,
            road: row.get("road")?,
            address: row.get("address")?,
            postal_code: row.get("postal_code")?,
            latitude: row.get("latitude")?,
            longitude: row.get("longitude")?,
            opens_at: row.get("opens_at")?,
            closes_at: row.get("closes_at")?,
        },
    })
}

/// Store a validated facility together with its location. Returns the facility id.
pub fn insert_facility(pool: &mut DbPool, facility: &NewFacility) -> AppResult<i64> {
    let tx = pool.conn.transaction()?;

    let a = &facility.address;
    tx.execute(
        "INSERT INTO locations (building, block, road, address, postal_code, latitude, longitude, opens_at, closes_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            a.building,
            a.block,
            a.road,
            a.address,
            a.postal_code,
            a.latitude,
            a.longitude,
            facility.opening_hours.start(),
            facility.opening_hours.end(),
        ],
    )?;
    let location_id = tx.last_insert_rowid();

    tx.execute(
        "INSERT INTO facilities (location_id, facility_type, floor, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            location_id,
            facility.facility_type.name(),
            facility.floor,
            facility.description,
            Local::now().to_rfc3339(),
        ],
    )?;
    let id = tx.last_insert_rowid();

    tx.commit()?;
    Ok(id)
}

pub fn load_facilities(
    pool: &mut DbPool,
    facility_type: Option<FacilityType>,
) -> AppResult<Vec<Facility>> {
    let sql = format!(
        "{} WHERE (?1 IS NULL OR f.facility_type = ?1) ORDER BY f.id ASC",
        SELECT_FACILITY
    );
    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map([facility_type.map(|t| t.name())], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_facility(pool: &mut DbPool, id: i64) -> AppResult<Option<Facility>> {
    let sql = format!("{} WHERE f.id = ?1", SELECT_FACILITY);
    let facility = pool.conn.query_row(&sql, [id], map_row).optional()?;
    Ok(facility)
}

/// Delete a facility; its location goes too when no other facility uses it.
pub fn delete_facility(pool: &mut DbPool, id: i64) -> AppResult<bool> {
    let tx = pool.conn.transaction()?;

    let location_id: Option<i64> = tx
        .query_row(
            "SELECT location_id FROM facilities WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()?;

    let Some(location_id) = location_id else {
        return Ok(false);
    };

    tx.execute("DELETE FROM facilities WHERE id = ?1", [id])?;
    tx.execute(
        "DELETE FROM locations
         WHERE id = ?1 AND NOT EXISTS (SELECT 1 FROM facilities WHERE location_id = ?1)",
        [location_id],
    )?;

    tx.commit()?;
    Ok(true)
}

/// Known addresses matching `query` (case-insensitive substring on any address field).
pub fn search_locations(pool: &mut DbPool, query: &str) -> AppResult<Vec<Address>> {
    let mut stmt = pool.conn.prepare(
        "SELECT building, block, road, address, postal_code, latitude, longitude
         FROM locations
         WHERE instr(lower(building), lower(?1)) > 0
            OR instr(lower(block), lower(?1)) > 0
            OR instr(lower(road), lower(?1)) > 0
            OR instr(lower(address), lower(?1)) > 0
            OR instr(lower(postal_code), lower(?1)) > 0
         GROUP BY building, block, road, address, postal_code, latitude, longitude
         ORDER BY MIN(id) ASC",
    )?;

    let rows = stmt.query_map([query.trim()], |row| {
        Ok(Address {
            building: row.get(0)?,
            block: row.get(1)?,
            road: row.get(2)?,
            address: row.get(3)?,
            postal_code: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
