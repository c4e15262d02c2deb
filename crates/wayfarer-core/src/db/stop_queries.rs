//! Stop CRUD operations and queries.

use jiff::civil::{Date, Time};
use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{NewStop, PlanStop, StopStatus, TravelMode},
};

const INSERT_STOP_SQL: &str = "INSERT INTO stops (plan_id, destination_id, destination_name, date, from_time, to_time, distance_from_prev, duration_from_prev, travel_mode, is_planned, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const SELECT_STOPS_BY_PLAN_SQL: &str = "SELECT id, plan_id, destination_id, destination_name, date, from_time, to_time, distance_from_prev, duration_from_prev, travel_mode, is_planned, status, created_at, updated_at FROM stops WHERE plan_id = ?1 ORDER BY date, is_planned DESC, from_time, id";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const DELETE_ACTUAL_STOPS_FOR_DATE_SQL: &str =
    "DELETE FROM stops WHERE plan_id = ?1 AND date = ?2 AND is_planned = 0";
const UPDATE_PLAN_TIMESTAMP_SQL: &str = "UPDATE plans SET updated_at = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a PlanStop from a database row
    fn build_stop_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlanStop> {
        let mode_str: String = row.get(9)?;
        let travel_mode = mode_str.parse::<TravelMode>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                9,
                Type::Text,
                format!("Invalid travel mode: {mode_str}").into(),
            )
        })?;

        let status_str: String = row.get(11)?;
        let status = status_str.parse::<StopStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                11,
                Type::Text,
                format!("Invalid stop status: {status_str}").into(),
            )
        })?;

        Ok(PlanStop {
            id: row.get::<_, i64>(0)? as u64,
            plan_id: row.get::<_, i64>(1)? as u64,
            destination_id: row.get::<_, i64>(2)? as u64,
            destination_name: row.get(3)?,
            date: row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            from_time: row.get::<_, String>(5)?.parse::<Time>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            to_time: row.get::<_, String>(6)?.parse::<Time>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            distance_from_prev: row.get(7)?,
            duration_from_prev: row.get(8)?,
            travel_mode,
            is_planned: row.get(10)?,
            status,
            created_at: row.get::<_, String>(12)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(13)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(13, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Inserts a stop row inside an open transaction.
    pub(super) fn insert_stop_in_tx(
        tx: &rusqlite::Transaction,
        plan_id: u64,
        stop: &NewStop,
        now_str: &str,
    ) -> Result<u64> {
        tx.execute(
            INSERT_STOP_SQL,
            params![
                plan_id as i64,
                stop.destination_id as i64,
                &stop.destination_name,
                stop.date.to_string(),
                stop.from_time.to_string(),
                stop.to_time.to_string(),
                stop.distance_from_prev,
                stop.duration_from_prev,
                stop.travel_mode.as_str(),
                stop.is_planned,
                stop.status.as_str(),
                now_str,
                now_str
            ],
        )
        .map_err(|e| EngineError::database_error("Failed to insert stop", e))?;

        Ok(tx.last_insert_rowid() as u64)
    }

    /// Adds a single stop to an existing plan.
    pub fn add_stop(&mut self, plan_id: u64, stop: &NewStop) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan_exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| EngineError::database_error("Failed to check plan existence", e))?;

        if !plan_exists {
            return Err(EngineError::PlanNotFound { id: plan_id });
        }

        let now_str = Timestamp::now().to_string();
        let id = Self::insert_stop_in_tx(&tx, plan_id, stop, &now_str)?;

        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .map_err(|e| EngineError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(id)
    }

    /// Retrieves all stops for a given plan, ordered by date and start time
    /// with planned stops ahead of actual-visit records per day.
    pub fn get_stops(&self, plan_id: u64) -> Result<Vec<PlanStop>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STOPS_BY_PLAN_SQL)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let stops = stmt
            .query_map(params![plan_id as i64], Self::build_stop_from_row)
            .map_err(|e| EngineError::database_error("Failed to query stops", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| EngineError::database_error("Failed to fetch stops", e))?;

        Ok(stops)
    }

    /// Replaces the actual-visit records for one trip day: deletes any
    /// previously recorded actual stops for the date and inserts the new
    /// batch, all in one transaction. Re-running a check-in for the same day
    /// is therefore idempotent.
    pub fn replace_actual_stops(
        &mut self,
        plan_id: u64,
        date: Date,
        stops: &[NewStop],
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            DELETE_ACTUAL_STOPS_FOR_DATE_SQL,
            params![plan_id as i64, date.to_string()],
        )
        .map_err(|e| EngineError::database_error("Failed to delete stale actual stops", e))?;

        let now_str = Timestamp::now().to_string();
        for stop in stops {
            Self::insert_stop_in_tx(&tx, plan_id, stop, &now_str)?;
        }

        tx.execute(UPDATE_PLAN_TIMESTAMP_SQL, params![&now_str, plan_id as i64])
            .map_err(|e| EngineError::database_error("Failed to update plan timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
