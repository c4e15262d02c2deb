//! Route-leg cache queries.
//!
//! The cache is keyed by the directed (from, to, mode) triple. Inserts use
//! ON CONFLICT DO NOTHING so concurrent writers race harmlessly: the first
//! writer wins and later writers re-read the stored row.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{EngineError, Result},
    models::{RouteLeg, TravelMode},
};

const SELECT_LEG_SQL: &str = "SELECT from_id, to_id, mode, distance_meters, duration_seconds, distance_text, duration_text FROM route_legs WHERE from_id = ?1 AND to_id = ?2 AND mode = ?3";
const INSERT_LEG_SQL: &str = "INSERT INTO route_legs (from_id, to_id, mode, distance_meters, duration_seconds, distance_text, duration_text, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) ON CONFLICT (from_id, to_id, mode) DO NOTHING";

impl super::Database {
    /// Looks up a cached route leg by its directed key.
    pub fn get_route_leg(
        &self,
        from_id: u64,
        to_id: u64,
        mode: TravelMode,
    ) -> Result<Option<RouteLeg>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LEG_SQL)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let leg = stmt
            .query_row(
                params![from_id as i64, to_id as i64, mode.as_str()],
                |row| {
                    let mode_str: String = row.get(2)?;
                    let mode = mode_str.parse::<TravelMode>().map_err(|_| {
                        rusqlite::Error::FromSqlConversionFailure(
                            2,
                            Type::Text,
                            format!("Invalid travel mode: {mode_str}").into(),
                        )
                    })?;

                    Ok(RouteLeg {
                        from_id: row.get::<_, i64>(0)? as u64,
                        to_id: row.get::<_, i64>(1)? as u64,
                        mode,
                        distance_meters: row.get(3)?,
                        duration_seconds: row.get(4)?,
                        distance_text: row.get(5)?,
                        duration_text: row.get(6)?,
                    })
                },
            )
            .optional()
            .map_err(|e| EngineError::database_error("Failed to query route leg", e))?;

        Ok(leg)
    }

    /// Persists a route leg if its key is not already present. Returns true
    /// if this call inserted the row, false if another writer got there
    /// first.
    pub fn insert_route_leg(&mut self, leg: &RouteLeg) -> Result<bool> {
        let now_str = Timestamp::now().to_string();
        let inserted = self
            .connection
            .execute(
                INSERT_LEG_SQL,
                params![
                    leg.from_id as i64,
                    leg.to_id as i64,
                    leg.mode.as_str(),
                    leg.distance_meters,
                    leg.duration_seconds,
                    &leg.distance_text,
                    &leg.duration_text,
                    &now_str
                ],
            )
            .map_err(|e| EngineError::database_error("Failed to insert route leg", e))?;

        Ok(inserted > 0)
    }
}
